use crate::domain::model::ItemId;
use std::collections::BTreeSet;

/// Liked item ids. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Likes {
    ids: BTreeSet<ItemId>,
}

impl Likes {
    /// Flips membership and returns the new liked state.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_liked(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut likes = Likes::default();
        assert!(likes.toggle(ItemId(4)));
        assert!(likes.is_liked(ItemId(4)));
        assert!(!likes.toggle(ItemId(4)));
        assert!(!likes.is_liked(ItemId(4)));
        assert!(likes.is_empty());
    }

    #[test]
    fn test_toggle_is_per_item() {
        let mut likes = Likes::default();
        likes.toggle(ItemId(1));
        likes.toggle(ItemId(2));
        likes.toggle(ItemId(1));
        assert_eq!(likes.iter().collect::<Vec<_>>(), vec![ItemId(2)]);
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        let mut likes = Likes::default();
        assert!(likes.toggle(ItemId(9_999)));
        assert_eq!(likes.len(), 1);
    }
}
