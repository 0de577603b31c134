//! Plain-text rendering of session state for the console driver.

use crate::core::cart::CartChange;
use crate::core::comments::SubmitOutcome;
use crate::core::session::{IntentOutcome, ShopSession};
use crate::domain::model::Item;
use crate::domain::ports::CartStore;
use crate::utils::format::{format_price, model_code, PriceFormat};
use std::fmt::Write;

pub fn cart_badge<S: CartStore>(session: &ShopSession<S>) -> String {
    match session.total_cart_count() {
        0 => "🛒".to_string(),
        n => format!("🛒 {}", n),
    }
}

pub fn catalog_listing<S: CartStore>(session: &ShopSession<S>, format: &PriceFormat) -> String {
    let mut out = String::new();
    for item in session.catalog().items() {
        let heart = if session.is_liked(item.id) { "♥" } else { "♡" };
        let _ = write!(
            out,
            "{:>3} {} {:<22} {:>16}  {:<10}",
            item.id,
            heart,
            item.name,
            format_price(item.price, format),
            item.color
        );
        match session.cart_quantity(item.id) {
            0 => {}
            q => {
                let _ = write!(out, "  [in cart: {}]", q);
            }
        }
        out.push('\n');
        if let Some(latest) = session.latest_comment(item.id) {
            let _ = writeln!(out, "      Latest comment: \"{}\"", latest);
        }
    }
    out
}

pub fn item_detail(item: &Item, comments: &[String], format: &PriceFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.name);
    let _ = writeln!(out, "  Price:    {}", format_price(item.price, format));
    let _ = writeln!(out, "  Color:    {}", item.color);
    let _ = writeln!(out, "  Model ID: {}", model_code(item.id));
    let _ = writeln!(out, "  Image:    {}", item.image);
    if !comments.is_empty() {
        let _ = writeln!(out, "  Comments:");
        for comment in comments {
            let _ = writeln!(out, "    \"{}\"", comment);
        }
    }
    out
}

pub fn cart_summary<S: CartStore>(session: &ShopSession<S>, format: &PriceFormat) -> String {
    if session.total_cart_count() == 0 {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for (id, quantity) in session.cart_lines() {
        let name = session
            .catalog()
            .find(id)
            .map(|item| item.name.as_str())
            .unwrap_or("(unknown item)");
        let _ = writeln!(out, "{:>3} x{:<3} {}", id, quantity, name);
    }
    let _ = writeln!(
        out,
        "Total: {} items, {}",
        session.total_cart_count(),
        format_price(session.cart_value(), format)
    );
    out
}

/// One-line feedback for an applied intent.
pub fn outcome_line<S: CartStore>(
    session: &ShopSession<S>,
    outcome: &IntentOutcome,
    format: &PriceFormat,
) -> String {
    match outcome {
        IntentOutcome::Liked { id, liked: true } => format!("♥ liked item {}", id),
        IntentOutcome::Liked { id, liked: false } => format!("♡ unliked item {}", id),
        IntentOutcome::Cart(change) => {
            let detail = match change {
                CartChange::Added { id, quantity } | CartChange::Decremented { id, quantity } => {
                    format!("item {} x{}", id, quantity)
                }
                CartChange::Removed { id } => format!("item {} removed", id),
                CartChange::Unchanged { id } => format!("item {} was not in the cart", id),
            };
            format!("{} ({})", cart_badge(session), detail)
        }
        IntentOutcome::Selected(_) | IntentOutcome::SelectionCleared => {
            match session.current_selection() {
                Some(item) => item_detail(item, session.comments_for(item.id), format),
                None => "Detail view closed".to_string(),
            }
        }
        IntentOutcome::CommentEditorOpened(_) => match session.active_comment_target() {
            Some(item) => format!("Comment on: {} (use 'draft <text>' then 'submit')", item.name),
            None => "No comment editor open".to_string(),
        },
        IntentOutcome::DraftUpdated => match session.active_comment_target() {
            Some(_) => format!("Draft: \"{}\"", session.comment_draft()),
            None => "Open a comment editor first".to_string(),
        },
        IntentOutcome::Comment(SubmitOutcome::Posted { id, .. }) => {
            format!("Comment posted on item {}", id)
        }
        IntentOutcome::Comment(SubmitOutcome::EmptyText) => {
            "Comment is empty, editor still open".to_string()
        }
        IntentOutcome::Comment(SubmitOutcome::NoTarget) => "No comment editor open".to_string(),
        IntentOutcome::CommentEditorClosed => "Comment editor closed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStorage, StorageCartStore};
    use crate::core::intent::Intent;
    use crate::core::session::SessionOptions;
    use crate::domain::catalog::Catalog;
    use crate::domain::model::ItemId;

    fn session() -> ShopSession<StorageCartStore<MemoryStorage>> {
        ShopSession::open(
            Catalog::showroom(),
            StorageCartStore::new(MemoryStorage::new()),
            SessionOptions::default(),
        )
    }

    #[test]
    fn test_badge_hides_zero() {
        let mut session = session();
        assert_eq!(cart_badge(&session), "🛒");
        session.add_to_cart(ItemId(1)).unwrap();
        assert_eq!(cart_badge(&session), "🛒 1");
    }

    #[test]
    fn test_detail_lists_comments() {
        let mut session = session();
        session.open_comment_editor(ItemId(3)).unwrap();
        session.submit_comment("Classic");
        let outcome = session.dispatch(Intent::SelectItem(ItemId(3))).unwrap();
        let text = outcome_line(&session, &outcome, &PriceFormat::default());
        assert!(text.contains("Ford Mustang GT"));
        assert!(text.contains("#003"));
        assert!(text.contains("\"Classic\""));
    }

    #[test]
    fn test_cart_summary_totals() {
        let mut session = session();
        session.add_to_cart(ItemId(1)).unwrap();
        session.add_to_cart(ItemId(1)).unwrap();
        let text = cart_summary(&session, &PriceFormat::default());
        assert!(text.contains("Tesla Model S"));
        assert!(text.contains("Total: 2 items, Rp 2.400.000"));
    }

    #[test]
    fn test_listing_shows_likes_and_latest_comment() {
        let mut session = session();
        session.toggle_like(ItemId(10));
        session.open_comment_editor(ItemId(10)).unwrap();
        session.submit_comment("Prancing horse");
        let text = catalog_listing(&session, &PriceFormat::default());
        assert!(text.contains("♥ Ferrari F8 Tributo"));
        assert!(text.contains("Latest comment: \"Prancing horse\""));
    }
}
