use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        ItemId(value)
    }
}

/// A catalog entry. Prices are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: u64,
    pub color: String,
    pub image: String,
}

/// Item id to held quantity. Every stored quantity is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLine {
    quantities: BTreeMap<ItemId, u32>,
}

impl CartLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw pairs, skipping zero quantities and summing
    /// repeated ids.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, u32)>,
    {
        let mut cart = Self::new();
        for (id, quantity) in pairs {
            if quantity == 0 {
                continue;
            }
            let entry = cart.quantities.entry(id).or_insert(0);
            *entry = entry.saturating_add(quantity);
        }
        cart
    }

    pub fn quantity(&self, id: ItemId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.quantities.contains_key(&id)
    }

    pub fn total_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.quantities.iter().map(|(&id, &q)| (id, q))
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.quantities.keys().copied()
    }

    pub(crate) fn increment(&mut self, id: ItemId) -> u32 {
        let entry = self.quantities.entry(id).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }

    /// Returns the remaining quantity; an entry that reaches zero is removed.
    pub(crate) fn decrement(&mut self, id: ItemId) -> Option<u32> {
        let current = *self.quantities.get(&id)?;
        let remaining = current.saturating_sub(1);
        if remaining == 0 {
            self.quantities.remove(&id);
        } else {
            self.quantities.insert(id, remaining);
        }
        Some(remaining)
    }

    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(ItemId) -> bool,
    {
        self.quantities.retain(|&id, _| keep(id));
    }
}
