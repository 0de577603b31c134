use crate::core::comments::CommentBoard;
use crate::core::likes::Likes;
use crate::core::selection::Selection;
use crate::domain::model::CartLine;

/// All interaction state owned by a session. Every slice starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub likes: Likes,
    pub cart: CartLine,
    pub selection: Selection,
    pub comments: CommentBoard,
}

impl InteractionState {
    pub fn with_cart(cart: CartLine) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    /// Derived on every call, never cached.
    pub fn total_cart_count(&self) -> u64 {
        self.cart.total_count()
    }
}
