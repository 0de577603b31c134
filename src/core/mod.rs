pub mod cart;
pub mod comments;
pub mod intent;
pub mod likes;
pub mod selection;
pub mod session;
pub mod state;

pub use crate::domain::model::{CartLine, Item, ItemId};
pub use crate::domain::ports::{CartStore, ConfigProvider, Storage};
pub use crate::utils::error::Result;
