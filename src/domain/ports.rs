use crate::domain::model::CartLine;
use crate::utils::error::Result;

/// String key-value storage, the local-storage boundary of the shop.
pub trait Storage: Send + Sync {
    fn read_value(&self, key: &str) -> Result<Option<String>>;
    fn write_value(&self, key: &str, value: &str) -> Result<()>;
}

/// Cart durability as seen by the interaction core.
pub trait CartStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load_cart(&self) -> Result<Option<CartLine>>;
    fn save_cart(&self, cart: &CartLine) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn storage_dir(&self) -> &str;
    fn cart_key(&self) -> &str;
    fn strict_catalog(&self) -> bool;
}
