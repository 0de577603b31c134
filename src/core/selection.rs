use crate::domain::model::Item;

/// The item shown in the detail popup, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Item>,
}

impl Selection {
    /// Replaces any previous selection.
    pub fn select(&mut self, item: Item) -> &Item {
        self.current.insert(item)
    }

    /// Returns whether something was selected.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::model::ItemId;

    #[test]
    fn test_select_replaces_previous() {
        let catalog = Catalog::showroom();
        let a = catalog.find(ItemId(1)).cloned().unwrap();
        let b = catalog.find(ItemId(2)).cloned().unwrap();

        let mut selection = Selection::default();
        assert_eq!(selection.select(a).id, ItemId(1));
        assert_eq!(selection.select(b.clone()).id, ItemId(2));
        assert_eq!(selection.current(), Some(&b));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut selection = Selection::default();
        selection.select(Catalog::showroom().items()[0].clone());
        assert!(selection.clear());
        assert!(!selection.clear());
        assert!(!selection.is_open());
    }
}
