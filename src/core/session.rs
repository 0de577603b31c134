use crate::core::cart::{self, CartChange};
use crate::core::comments::SubmitOutcome;
use crate::core::intent::Intent;
use crate::core::state::InteractionState;
use crate::domain::catalog::Catalog;
use crate::domain::model::{CartLine, Item, ItemId};
use crate::domain::ports::{CartStore, ConfigProvider};
use crate::utils::error::{Result, ShopError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Reject cart and view intents for ids missing from the catalog.
    pub strict_catalog: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            strict_catalog: true,
        }
    }
}

impl SessionOptions {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            strict_catalog: config.strict_catalog(),
        }
    }
}

/// What `dispatch` did, for the presentation layer to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Liked { id: ItemId, liked: bool },
    Cart(CartChange),
    Selected(ItemId),
    SelectionCleared,
    CommentEditorOpened(ItemId),
    DraftUpdated,
    Comment(SubmitOutcome),
    CommentEditorClosed,
}

/// The interaction core: owns the state slices, reads the cart store once on
/// open and writes it after every cart mutation.
pub struct ShopSession<S: CartStore> {
    catalog: Catalog,
    state: InteractionState,
    store: S,
    options: SessionOptions,
    /// The last cart write failed and storage is behind memory.
    unsaved: bool,
}

impl<S: CartStore> ShopSession<S> {
    /// Rehydrates the cart from `store`. A missing or unreadable cart starts
    /// the session empty.
    pub fn open(catalog: Catalog, store: S, options: SessionOptions) -> Self {
        let mut cart = match store.load_cart() {
            Ok(Some(cart)) => {
                tracing::debug!("Restored cart with {} lines", cart.len());
                cart
            }
            Ok(None) => {
                tracing::debug!("No stored cart, starting empty");
                CartLine::new()
            }
            Err(e) => {
                tracing::warn!("Ignoring stored cart: {}", e);
                tracing::warn!("💡 {}", e.recovery_suggestion());
                CartLine::new()
            }
        };

        if options.strict_catalog {
            let dropped = cart::retain_known(&mut cart, &catalog);
            if !dropped.is_empty() {
                tracing::warn!("Dropped stored cart lines for unknown items: {:?}", dropped);
            }
        }

        tracing::info!(
            "Session ready: {} catalog items, {} items in cart",
            catalog.len(),
            cart.total_count()
        );

        Self {
            catalog,
            state: InteractionState::with_cart(cart),
            store,
            options,
            unsaved: false,
        }
    }

    fn lookup(&self, id: ItemId) -> Result<Item> {
        self.catalog.require(id).cloned()
    }

    fn persist_cart(&mut self) {
        match self.store.save_cart(&self.state.cart) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                self.unsaved = true;
                tracing::warn!(
                    "Failed to save cart ({} items): {}",
                    self.state.cart.total_count(),
                    e
                );
            }
        }
    }

    fn apply_cart_change(&mut self, change: CartChange) -> CartChange {
        if change.is_mutation() {
            tracing::debug!("Cart changed: {:?}", change);
            self.persist_cart();
        }
        change
    }

    // Likes

    /// Returns the new liked state. Any id is accepted.
    pub fn toggle_like(&mut self, id: ItemId) -> bool {
        let liked = self.state.likes.toggle(id);
        tracing::debug!("Item {} liked: {}", id, liked);
        liked
    }

    // Cart

    pub fn add_to_cart(&mut self, id: ItemId) -> Result<CartChange> {
        if self.options.strict_catalog && !self.catalog.contains(id) {
            return Err(ShopError::ItemNotFound { id });
        }
        let change = cart::add(&mut self.state.cart, id);
        Ok(self.apply_cart_change(change))
    }

    /// Removing an id that is not in the cart changes nothing and writes nothing.
    pub fn remove_from_cart(&mut self, id: ItemId) -> CartChange {
        let change = cart::remove(&mut self.state.cart, id);
        self.apply_cart_change(change)
    }

    // Selection

    pub fn select_item(&mut self, id: ItemId) -> Result<&Item> {
        let item = self.lookup(id)?;
        Ok(self.state.selection.select(item))
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    // Comments

    pub fn open_comment_editor(&mut self, id: ItemId) -> Result<()> {
        let item = self.lookup(id)?;
        self.state.comments.open(item);
        Ok(())
    }

    pub fn update_comment_draft(&mut self, text: &str) -> bool {
        self.state.comments.update_draft(text)
    }

    pub fn submit_comment(&mut self, text: &str) -> SubmitOutcome {
        let outcome = self.state.comments.submit(text);
        self.log_submit(&outcome);
        outcome
    }

    pub fn submit_comment_draft(&mut self) -> SubmitOutcome {
        let outcome = self.state.comments.submit_draft();
        self.log_submit(&outcome);
        outcome
    }

    fn log_submit(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Posted { id, position } => {
                tracing::debug!("Comment #{} posted on item {}", position + 1, id)
            }
            SubmitOutcome::EmptyText => tracing::debug!("Empty comment ignored, editor stays open"),
            SubmitOutcome::NoTarget => tracing::debug!("Comment submitted with no editor open"),
        }
    }

    pub fn close_comment_editor(&mut self) {
        self.state.comments.close();
    }

    /// Message-passing entry point for the presentation layer.
    pub fn dispatch(&mut self, intent: Intent) -> Result<IntentOutcome> {
        tracing::debug!("Dispatching {}", intent.name());

        let outcome = match intent {
            Intent::ToggleLike(id) => IntentOutcome::Liked {
                id,
                liked: self.toggle_like(id),
            },
            Intent::AddToCart(id) => IntentOutcome::Cart(self.add_to_cart(id)?),
            Intent::RemoveFromCart(id) => IntentOutcome::Cart(self.remove_from_cart(id)),
            Intent::SelectItem(id) => {
                self.select_item(id)?;
                IntentOutcome::Selected(id)
            }
            Intent::ClearSelection => {
                self.clear_selection();
                IntentOutcome::SelectionCleared
            }
            Intent::OpenComment(id) => {
                self.open_comment_editor(id)?;
                IntentOutcome::CommentEditorOpened(id)
            }
            Intent::UpdateCommentDraft(text) => {
                if !self.update_comment_draft(&text) {
                    tracing::debug!("Draft ignored, no comment editor open");
                }
                IntentOutcome::DraftUpdated
            }
            Intent::SubmitComment => IntentOutcome::Comment(self.submit_comment_draft()),
            Intent::CloseComment => {
                self.close_comment_editor();
                IntentOutcome::CommentEditorClosed
            }
        };
        Ok(outcome)
    }

    // Queries

    pub fn is_liked(&self, id: ItemId) -> bool {
        self.state.likes.is_liked(id)
    }

    pub fn liked_items(&self) -> Vec<ItemId> {
        self.state.likes.iter().collect()
    }

    pub fn cart_quantity(&self, id: ItemId) -> u32 {
        self.state.cart.quantity(id)
    }

    pub fn total_cart_count(&self) -> u64 {
        self.state.total_cart_count()
    }

    pub fn cart_lines(&self) -> Vec<(ItemId, u32)> {
        self.state.cart.iter().collect()
    }

    pub fn cart_value(&self) -> u64 {
        cart::cart_value(&self.state.cart, &self.catalog)
    }

    pub fn current_selection(&self) -> Option<&Item> {
        self.state.selection.current()
    }

    pub fn comments_for(&self, id: ItemId) -> &[String] {
        self.state.comments.thread(id)
    }

    pub fn latest_comment(&self, id: ItemId) -> Option<&str> {
        self.state.comments.latest(id)
    }

    pub fn active_comment_target(&self) -> Option<&Item> {
        self.state.comments.active_target()
    }

    pub fn comment_draft(&self) -> &str {
        self.state.comments.draft()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Hands back the store, retrying the cart write first if the last one
    /// failed. A session whose cart never changed writes nothing.
    pub fn close(mut self) -> S {
        if self.unsaved {
            tracing::debug!("Retrying unsaved cart before close");
            self.persist_cart();
        }
        self.store
    }
}
