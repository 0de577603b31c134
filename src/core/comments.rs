use crate::domain::model::{Item, ItemId};
use std::collections::BTreeMap;

/// Result of a comment submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Appended; `position` is the comment's index in the thread.
    Posted { id: ItemId, position: usize },
    /// Whitespace-only text. The editor stays open.
    EmptyText,
    /// No editor is open.
    NoTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CommentEditor {
    target: Item,
    draft: String,
}

/// Append-only comment threads plus the single open comment editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBoard {
    threads: BTreeMap<ItemId, Vec<String>>,
    editor: Option<CommentEditor>,
}

impl CommentBoard {
    /// Opens the editor on `item`. Re-opening the same item keeps the draft;
    /// switching items starts from an empty one.
    pub fn open(&mut self, item: Item) {
        let draft = match self.editor.take() {
            Some(editor) if editor.target.id == item.id => editor.draft,
            _ => String::new(),
        };
        self.editor = Some(CommentEditor { target: item, draft });
    }

    /// Returns false when no editor is open to receive the text.
    pub fn update_draft(&mut self, text: &str) -> bool {
        match &mut self.editor {
            Some(editor) => {
                editor.draft.clear();
                editor.draft.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let Some(editor) = &mut self.editor else {
            return SubmitOutcome::NoTarget;
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::EmptyText;
        }

        let id = editor.target.id;
        let thread = self.threads.entry(id).or_default();
        thread.push(trimmed.to_string());
        let position = thread.len() - 1;
        self.editor = None;

        SubmitOutcome::Posted { id, position }
    }

    pub fn submit_draft(&mut self) -> SubmitOutcome {
        let draft = match &self.editor {
            Some(editor) => editor.draft.clone(),
            None => return SubmitOutcome::NoTarget,
        };
        self.submit(&draft)
    }

    /// Closes the editor and discards the draft. Returns whether one was open.
    pub fn close(&mut self) -> bool {
        self.editor.take().is_some()
    }

    pub fn thread(&self, id: ItemId) -> &[String] {
        self.threads.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn latest(&self, id: ItemId) -> Option<&str> {
        self.thread(id).last().map(String::as_str)
    }

    pub fn active_target(&self) -> Option<&Item> {
        self.editor.as_ref().map(|editor| &editor.target)
    }

    pub fn draft(&self) -> &str {
        self.editor.as_ref().map(|e| e.draft.as_str()).unwrap_or("")
    }

    pub fn total_comments(&self) -> usize {
        self.threads.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn item(id: u32) -> Item {
        Catalog::showroom().find(ItemId(id)).cloned().unwrap()
    }

    #[test]
    fn test_comments_append_in_order() {
        let mut board = CommentBoard::default();
        board.open(item(5));
        assert_eq!(
            board.submit("Great car"),
            SubmitOutcome::Posted { id: ItemId(5), position: 0 }
        );
        assert!(board.active_target().is_none());

        board.open(item(5));
        board.submit("Fast too");
        assert_eq!(board.thread(ItemId(5)), ["Great car", "Fast too"]);
        assert_eq!(board.latest(ItemId(5)), Some("Fast too"));
    }

    #[test]
    fn test_blank_submission_keeps_editor_open() {
        let mut board = CommentBoard::default();
        board.open(item(7));
        board.update_draft("half written");
        assert_eq!(board.submit("   "), SubmitOutcome::EmptyText);
        assert!(board.thread(ItemId(7)).is_empty());
        assert_eq!(board.active_target().map(|i| i.id), Some(ItemId(7)));
        assert_eq!(board.draft(), "half written");
    }

    #[test]
    fn test_submit_without_target_is_noop() {
        let mut board = CommentBoard::default();
        assert_eq!(board.submit("hello"), SubmitOutcome::NoTarget);
        assert!(!board.update_draft("hello"));
        assert_eq!(board.total_comments(), 0);
    }

    #[test]
    fn test_submitted_text_is_trimmed() {
        let mut board = CommentBoard::default();
        board.open(item(1));
        board.submit("  nice paint \n");
        assert_eq!(board.thread(ItemId(1)), ["nice paint"]);
    }

    #[test]
    fn test_draft_lifecycle() {
        let mut board = CommentBoard::default();
        board.open(item(2));
        assert!(board.update_draft("half a thought"));
        board.open(item(2));
        assert_eq!(board.draft(), "half a thought");

        board.open(item(3));
        assert_eq!(board.draft(), "");

        board.update_draft("discard me");
        assert!(board.close());
        assert_eq!(board.draft(), "");
        assert!(board.active_target().is_none());
    }

    #[test]
    fn test_submit_draft_posts_and_clears() {
        let mut board = CommentBoard::default();
        board.open(item(9));
        board.update_draft("Godzilla");
        assert_eq!(
            board.submit_draft(),
            SubmitOutcome::Posted { id: ItemId(9), position: 0 }
        );
        assert_eq!(board.draft(), "");
        assert_eq!(board.submit_draft(), SubmitOutcome::NoTarget);
    }
}
