//! TUI state algebra: the two screens, their actions, and transitions.
//!
//! These types define the entire state space of the wizard. The transition
//! functions (`update`) and the rendering layer (`view`) both program
//! against them; only `run` touches the terminal.
//!
//! Design principle: screen states carry only transient interaction state
//! (cursors, text, focus). The catalog is static input data and the
//! filesystem is reached through a collaborator, so neither lives here.

use crate::catalog::{Category, Variant};
use crate::completion::{suggest, Filesystem};

use super::text_field::{Edit, TextField};

// ============================================================================
// OUTCOMES
// ============================================================================

/// How a screen ended.
///
/// Cancelling is a normal result, not an error: the caller just skips
/// whatever would have come next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Confirmed(T),
    Cancelled,
}

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition<S, T> {
    /// Keep running with this state (may be unchanged).
    Screen(S),
    /// The screen is finished.
    Exit(Outcome<T>),
}

// ============================================================================
// TEMPLATE SELECTOR
// ============================================================================

/// Position in the two-level template menu.
///
/// `active_category == None` is the top level (browsing categories);
/// `Some(i)` is the sub-menu of category `i` (browsing its variants).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorState {
    pub active_category: Option<usize>,
    /// Index into whichever list is visible.
    pub cursor: usize,
}

/// The user's confirmed choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub category: usize,
    pub variant: usize,
}

/// Semantic selector action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    MoveUp,
    MoveDown,
    /// Enter a category / pick a variant.
    Confirm,
    /// Leave the sub-menu, or leave the wizard from the top level.
    Back,
    /// Leave the wizard from anywhere.
    Quit,
}

impl SelectorState {
    /// Top level, cursor on the first category.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_sub_menu(&self) -> bool {
        self.active_category.is_some()
    }

    /// Length of the currently visible list.
    pub fn visible_len(&self, catalog: &[Category]) -> usize {
        match self.active_category {
            Some(category) => catalog.get(category).map_or(0, |c| c.variants.len()),
            None => catalog.len(),
        }
    }

    /// Category whose description is shown: the active one inside a
    /// sub-menu, the one under the cursor at the top level.
    pub fn indicated_category(&self) -> usize {
        self.active_category.unwrap_or(self.cursor)
    }
}

impl Selection {
    /// Look up the chosen variant. None if the indices don't fit `catalog`.
    pub fn variant<'a>(&self, catalog: &'a [Category]) -> Option<&'a Variant> {
        catalog.get(self.category)?.variants.get(self.variant)
    }
}

// ============================================================================
// PATH INPUT
// ============================================================================

/// Which part of the path screen receives keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Keys edit the text; suggestions are shown but not navigable.
    #[default]
    Editing,
    /// Keys move through the suggestion list.
    BrowsingSuggestions,
}

/// Semantic path-screen action. Mapping from keys depends on [`Focus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAction {
    /// Move focus from the text to the suggestion list.
    Blur,
    MoveUp,
    MoveDown,
    /// Editing: finish with the text. Browsing: take the suggestion.
    Confirm,
    /// Editing: leave the wizard. Browsing: back to editing.
    Cancel,
    Edit(Edit),
}

/// State of the path screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathInput {
    pub field: TextField,
    pub focus: Focus,
    /// Completion candidates for the current text.
    pub suggestions: Vec<String>,
    /// Highlighted suggestion. In bounds whenever `suggestions` is non-empty.
    pub suggestion_cursor: usize,
}

impl PathInput {
    /// Empty field in editing mode, with suggestions for the empty text.
    pub fn new(fs: &impl Filesystem) -> Self {
        let mut input = PathInput::default();
        input.refresh_suggestions(fs);
        input
    }

    /// Recompute suggestions for the current text.
    pub fn refresh_suggestions(&mut self, fs: &impl Filesystem) {
        let suggestions = suggest(fs, self.field.value());
        self.set_suggestions(suggestions);
    }

    /// Install a new suggestion list, keeping the cursor valid.
    ///
    /// Empty → non-empty resets the cursor to the top; otherwise it stays
    /// where it was, clamped to the new length.
    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        let was_empty = self.suggestions.is_empty();
        self.suggestions = suggestions;

        if self.suggestions.is_empty() || was_empty {
            self.suggestion_cursor = 0;
        } else {
            self.suggestion_cursor = self.suggestion_cursor.min(self.suggestions.len() - 1);
        }
    }

    /// Suggestion under the cursor, if any.
    pub fn selected_suggestion(&self) -> Option<&str> {
        self.suggestions.get(self.suggestion_cursor).map(String::as_str)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VITE_TEMPLATES;
    use crate::test_support::MemoryFilesystem;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn selector_starts_at_top_level() {
        let state = SelectorState::new();
        assert_eq!(state.active_category, None);
        assert_eq!(state.cursor, 0);
        assert!(!state.in_sub_menu());
    }

    #[test]
    fn visible_len_follows_level() {
        let top = SelectorState::new();
        assert_eq!(top.visible_len(VITE_TEMPLATES), VITE_TEMPLATES.len());

        let sub = SelectorState { active_category: Some(1), cursor: 0 };
        assert_eq!(sub.visible_len(VITE_TEMPLATES), 2);
    }

    #[test]
    fn indicated_category_tracks_cursor_only_at_top() {
        let top = SelectorState { active_category: None, cursor: 4 };
        assert_eq!(top.indicated_category(), 4);

        let sub = SelectorState { active_category: Some(2), cursor: 1 };
        assert_eq!(sub.indicated_category(), 2);
    }

    #[test]
    fn selection_resolves_variant() {
        let selection = Selection { category: 1, variant: 1 };
        assert_eq!(selection.variant(VITE_TEMPLATES).unwrap().identifier, "react-ts");
        assert!(Selection { category: 99, variant: 0 }.variant(VITE_TEMPLATES).is_none());
    }

    #[test]
    fn path_input_starts_editing_with_suggestions_for_cwd() {
        let fs = MemoryFilesystem::new().with_dir(".", &["src", "docs"]);
        let input = PathInput::new(&fs);
        assert_eq!(input.focus, Focus::Editing);
        assert_eq!(input.field.value(), "");
        assert_eq!(input.suggestions, names(&["src", "docs"]));
    }

    #[test]
    fn suggestions_reset_cursor_when_they_appear() {
        let mut input = PathInput::default();
        input.suggestion_cursor = 3;
        input.set_suggestions(names(&["a", "b", "c", "d", "e"]));
        assert_eq!(input.suggestion_cursor, 0);
    }

    #[test]
    fn suggestions_keep_cursor_when_still_in_bounds() {
        let mut input = PathInput::default();
        input.set_suggestions(names(&["a", "b", "c"]));
        input.suggestion_cursor = 1;
        input.set_suggestions(names(&["x", "y", "z"]));
        assert_eq!(input.suggestion_cursor, 1);
    }

    #[test]
    fn shrinking_suggestions_clamp_cursor() {
        let mut input = PathInput::default();
        input.set_suggestions(names(&["a", "b", "c", "d"]));
        input.suggestion_cursor = 3;
        input.set_suggestions(names(&["a", "b"]));
        assert_eq!(input.suggestion_cursor, 1);
        assert_eq!(input.selected_suggestion(), Some("b"));
    }

    #[test]
    fn emptied_suggestions_zero_cursor() {
        let mut input = PathInput::default();
        input.set_suggestions(names(&["a", "b"]));
        input.suggestion_cursor = 1;
        input.set_suggestions(Vec::new());
        assert_eq!(input.suggestion_cursor, 0);
        assert_eq!(input.selected_suggestion(), None);
    }
}
