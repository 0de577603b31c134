// Adapters layer: concrete storage backends and the cart codec that sits on top of them.

pub mod cart_store;
pub mod local;
pub mod memory;
pub mod queued;

pub use cart_store::{StorageCartStore, DEFAULT_CART_KEY};
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use queued::QueuedStorage;
