pub mod adapters;
pub mod config;
pub mod console;
pub mod core;
pub mod domain;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalStorage, MemoryStorage, QueuedStorage, StorageCartStore};
pub use crate::config::{toml_config::ShopConfig, ShopSettings};
pub use crate::core::{
    intent::Intent,
    session::{IntentOutcome, SessionOptions, ShopSession},
};
pub use crate::domain::{
    catalog::Catalog,
    model::{CartLine, Item, ItemId},
    ports::{CartStore, Storage},
};
pub use crate::utils::error::{Result, ShopError};
