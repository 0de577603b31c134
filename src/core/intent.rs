use crate::domain::model::ItemId;
use crate::utils::error::ShopError;
use std::str::FromStr;

/// Everything the presentation layer may ask the core to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ToggleLike(ItemId),
    AddToCart(ItemId),
    RemoveFromCart(ItemId),
    SelectItem(ItemId),
    ClearSelection,
    OpenComment(ItemId),
    UpdateCommentDraft(String),
    SubmitComment,
    CloseComment,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ToggleLike(_) => "like-toggle",
            Intent::AddToCart(_) => "add-to-cart",
            Intent::RemoveFromCart(_) => "remove-from-cart",
            Intent::SelectItem(_) => "select-item",
            Intent::ClearSelection => "clear-selection",
            Intent::OpenComment(_) => "open-comment",
            Intent::UpdateCommentDraft(_) => "update-comment-draft",
            Intent::SubmitComment => "submit-comment",
            Intent::CloseComment => "close-comment",
        }
    }
}

fn parse_id(input: &str, arg: Option<&str>) -> Result<ItemId, ShopError> {
    let arg = arg.ok_or_else(|| ShopError::IntentParseError {
        input: input.to_string(),
        reason: "missing item id".to_string(),
    })?;
    arg.parse().map_err(|e| ShopError::IntentParseError {
        input: input.to_string(),
        reason: format!("invalid item id '{}': {}", arg, e),
    })
}

/// Console syntax: `like 3`, `add 3`, `remove 3`, `select 3`, `clear`,
/// `comment 3`, `draft <text>`, `submit`, `close`. The dashed intent names
/// are accepted too.
impl FromStr for Intent {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim_start())),
            None => (input, None),
        };
        let arg = rest.filter(|r| !r.is_empty());

        let intent = match verb.to_ascii_lowercase().as_str() {
            "like" | "like-toggle" => Intent::ToggleLike(parse_id(input, arg)?),
            "add" | "add-to-cart" => Intent::AddToCart(parse_id(input, arg)?),
            "remove" | "remove-from-cart" => Intent::RemoveFromCart(parse_id(input, arg)?),
            "select" | "info" | "select-item" => Intent::SelectItem(parse_id(input, arg)?),
            "clear" | "clear-selection" => Intent::ClearSelection,
            "comment" | "open-comment" => Intent::OpenComment(parse_id(input, arg)?),
            "draft" | "update-comment-draft" => {
                Intent::UpdateCommentDraft(rest.unwrap_or("").to_string())
            }
            "submit" | "submit-comment" => Intent::SubmitComment,
            "close" | "close-comment" => Intent::CloseComment,
            _ => {
                return Err(ShopError::IntentParseError {
                    input: input.to_string(),
                    reason: "unknown command".to_string(),
                })
            }
        };
        Ok(intent)
    }
}
