use crate::domain::model::{CartLine, ItemId};
use crate::domain::ports::{CartStore, Storage};
use crate::utils::error::{Result, ShopError};
use std::collections::BTreeMap;

pub const DEFAULT_CART_KEY: &str = "cart";

/// Stores the cart under one key as a flat JSON object: `{"2":3,"5":1}`.
#[derive(Debug, Clone)]
pub struct StorageCartStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> StorageCartStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_CART_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn corrupted(&self, message: impl Into<String>) -> ShopError {
        ShopError::PersistenceError {
            key: self.key.clone(),
            message: message.into(),
        }
    }

    /// `null` decodes as "nothing stored". Zero quantities are skipped; any
    /// other malformed entry rejects the whole payload.
    pub fn decode(&self, raw: &str) -> Result<Option<CartLine>> {
        let value: serde_json::Value = serde_json::from_str(raw)?;

        let entries = match value {
            serde_json::Value::Null => return Ok(None),
            serde_json::Value::Object(entries) => entries,
            other => {
                return Err(self.corrupted(format!(
                    "expected an object of item quantities, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut pairs = Vec::with_capacity(entries.len());
        for (raw_id, raw_quantity) in entries {
            let id = parse_stored_id(&raw_id).ok_or_else(|| {
                self.corrupted(format!("item id '{}' is not a canonical integer", raw_id))
            })?;

            let quantity = raw_quantity
                .as_u64()
                .and_then(|q| u32::try_from(q).ok())
                .ok_or_else(|| {
                    self.corrupted(format!(
                        "quantity for item {} is not a non-negative integer: {}",
                        id, raw_quantity
                    ))
                })?;

            if quantity == 0 {
                tracing::debug!("Skipping stored zero quantity for item {}", id);
                continue;
            }
            pairs.push((id, quantity));
        }

        Ok(Some(CartLine::from_pairs(pairs)))
    }

    pub fn encode(cart: &CartLine) -> Result<String> {
        let snapshot: BTreeMap<ItemId, u32> = cart.iter().collect();
        Ok(serde_json::to_string(&snapshot)?)
    }
}

/// Stored keys are written by `encode`, so only the canonical decimal form is
/// accepted: no sign, padding or leading zeros.
fn parse_stored_id(raw: &str) -> Option<ItemId> {
    let canonical = raw.bytes().all(|b| b.is_ascii_digit())
        && !raw.is_empty()
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return None;
    }
    raw.parse().ok().map(ItemId)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<S: Storage> CartStore for StorageCartStore<S> {
    fn load_cart(&self) -> Result<Option<CartLine>> {
        match self.storage.read_value(&self.key)? {
            Some(raw) => self.decode(&raw),
            None => Ok(None),
        }
    }

    fn save_cart(&self, cart: &CartLine) -> Result<()> {
        let encoded = Self::encode(cart)?;
        self.storage.write_value(&self.key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStorage;

    fn store() -> StorageCartStore<MemoryStorage> {
        StorageCartStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_encode_is_flat_and_numeric_ordered() {
        let cart = CartLine::from_pairs([(ItemId(10), 1), (ItemId(2), 3)]);
        let encoded = StorageCartStore::<MemoryStorage>::encode(&cart).unwrap();
        assert_eq!(encoded, r#"{"2":3,"10":1}"#);
    }

    #[test]
    fn test_empty_cart_encodes_as_empty_object() {
        let encoded = StorageCartStore::<MemoryStorage>::encode(&CartLine::new()).unwrap();
        assert_eq!(encoded, "{}");
    }

    #[test]
    fn test_decode_accepts_stored_cart() {
        let cart = store().decode(r#"{"2": 3, "5": 1}"#).unwrap().unwrap();
        assert_eq!(cart.quantity(ItemId(2)), 3);
        assert_eq!(cart.quantity(ItemId(5)), 1);
        assert_eq!(cart.total_count(), 4);
    }

    #[test]
    fn test_decode_null_is_absent() {
        assert!(store().decode("null").unwrap().is_none());
    }

    #[test]
    fn test_decode_skips_zero_quantities() {
        let cart = store().decode(r#"{"1": 0, "3": 2}"#).unwrap().unwrap();
        assert!(!cart.contains(ItemId(1)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        let store = store();
        for raw in [
            "[1, 2]",
            "42",
            r#"{"tesla": 1}"#,
            r#"{" 2": 1}"#,
            r#"{"+2": 1}"#,
            r#"{"02": 1}"#,
            r#"{"2": 1, "02": 4}"#,
            r#"{"1": "two"}"#,
            r#"{"1": -1}"#,
            r#"{"1": 1.5}"#,
            "{not json",
        ] {
            assert!(store.decode(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_decode_accepts_id_zero_and_large_ids() {
        let cart = store().decode(r#"{"0": 1, "4294967295": 2}"#).unwrap().unwrap();
        assert_eq!(cart.quantity(ItemId(0)), 1);
        assert_eq!(cart.quantity(ItemId(u32::MAX)), 2);
        assert!(store().decode(r#"{"4294967296": 1}"#).is_err());
    }

    #[test]
    fn test_missing_key_loads_as_none() {
        assert!(store().load_cart().unwrap().is_none());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let store = StorageCartStore::with_key(storage.clone(), "garage");
        store
            .save_cart(&CartLine::from_pairs([(ItemId(7), 2)]))
            .unwrap();
        assert_eq!(storage.get("garage").as_deref(), Some(r#"{"7":2}"#));
        assert!(storage.get("cart").is_none());
    }
}
