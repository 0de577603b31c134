use crate::domain::catalog::Catalog;
use crate::domain::model::{CartLine, ItemId};

/// What a single cart intent did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// Quantity after the increment.
    Added { id: ItemId, quantity: u32 },
    /// Quantity after the decrement, still at least 1.
    Decremented { id: ItemId, quantity: u32 },
    /// The last unit left and the entry is gone.
    Removed { id: ItemId },
    /// Removal of an id that was not in the cart.
    Unchanged { id: ItemId },
}

impl CartChange {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CartChange::Unchanged { .. })
    }
}

pub fn add(cart: &mut CartLine, id: ItemId) -> CartChange {
    let quantity = cart.increment(id);
    CartChange::Added { id, quantity }
}

pub fn remove(cart: &mut CartLine, id: ItemId) -> CartChange {
    match cart.decrement(id) {
        None => CartChange::Unchanged { id },
        Some(0) => CartChange::Removed { id },
        Some(quantity) => CartChange::Decremented { id, quantity },
    }
}

/// Sum of price times quantity. Ids missing from the catalog count as zero.
pub fn cart_value(cart: &CartLine, catalog: &Catalog) -> u64 {
    cart.iter()
        .filter_map(|(id, quantity)| {
            catalog
                .find(id)
                .map(|item| item.price.saturating_mul(u64::from(quantity)))
        })
        .fold(0u64, |acc, line| acc.saturating_add(line))
}

/// Drops lines whose id is not in the catalog and returns the dropped ids.
pub fn retain_known(cart: &mut CartLine, catalog: &Catalog) -> Vec<ItemId> {
    let dropped: Vec<ItemId> = cart.ids().filter(|&id| !catalog.contains(id)).collect();
    if !dropped.is_empty() {
        cart.retain(|id| catalog.contains(id));
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_lines(cart: &CartLine) -> u64 {
        cart.iter().map(|(_, q)| u64::from(q)).sum()
    }

    #[test]
    fn test_add_then_remove_twice_floors_at_absent() {
        let mut cart = CartLine::new();
        assert_eq!(add(&mut cart, ItemId(3)), CartChange::Added { id: ItemId(3), quantity: 1 });
        assert_eq!(remove(&mut cart, ItemId(3)), CartChange::Removed { id: ItemId(3) });
        assert_eq!(remove(&mut cart, ItemId(3)), CartChange::Unchanged { id: ItemId(3) });
        assert!(!cart.contains(ItemId(3)));
        assert_eq!(cart.quantity(ItemId(3)), 0);
    }

    #[test]
    fn test_total_matches_sum_after_mixed_sequence() {
        let mut cart = CartLine::new();
        let ops: [(u32, bool); 10] = [
            (1, true),
            (1, true),
            (2, true),
            (2, true),
            (2, true),
            (4, false),
            (2, false),
            (5, true),
            (5, false),
            (5, false),
        ];

        for (id, is_add) in ops {
            if is_add {
                add(&mut cart, ItemId(id));
            } else {
                remove(&mut cart, ItemId(id));
            }
            assert_eq!(cart.total_count(), sum_of_lines(&cart));
            assert!(cart.iter().all(|(_, q)| q >= 1));
        }

        assert_eq!(cart.quantity(ItemId(1)), 2);
        assert_eq!(cart.quantity(ItemId(2)), 2);
        assert_eq!(cart.total_count(), 4);
    }

    #[test]
    fn test_decrement_keeps_positive_quantity() {
        let mut cart = CartLine::new();
        add(&mut cart, ItemId(2));
        add(&mut cart, ItemId(2));
        let change = remove(&mut cart, ItemId(2));
        assert_eq!(change, CartChange::Decremented { id: ItemId(2), quantity: 1 });
        assert!(change.is_mutation());
    }

    #[test]
    fn test_cart_value_ignores_unknown_ids() {
        let catalog = Catalog::showroom();
        let cart = CartLine::from_pairs([(ItemId(1), 2), (ItemId(42), 5)]);
        assert_eq!(cart_value(&cart, &catalog), 2_400_000);
    }

    #[test]
    fn test_retain_known_reports_dropped_ids() {
        let catalog = Catalog::showroom();
        let mut cart = CartLine::from_pairs([(ItemId(2), 3), (ItemId(77), 1)]);
        assert_eq!(retain_known(&mut cart, &catalog), vec![ItemId(77)]);
        assert_eq!(cart.total_count(), 3);
    }
}
