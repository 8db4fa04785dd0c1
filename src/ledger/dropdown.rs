// Copyright (c) 2025 Ledger Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyboard state of the description suggestion dropdown.
//!
//! Input is modelled as plain values: the current field text is a `&str` and
//! key presses are [`DropdownKey`]s.

use super::session::DescriptionSuggester;

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKey {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Enter
    Enter,
    /// Tab
    Tab,
    /// Any other key
    Other,
}

impl DropdownKey {
    /// Whether releasing this key should recompute the suggestion list.
    ///
    /// Arrow keys only move the highlight.
    pub fn refreshes(self) -> bool {
        !matches!(self, DropdownKey::Up | DropdownKey::Down)
    }
}

/// Result of handling a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The highlight moved to the given row, or stayed unset on an empty list
    Moved(Option<usize>),

    /// Input was confirmed. Carries the highlighted suggestion, or `None` to
    /// keep the typed text. The dropdown is closed afterwards.
    Accepted(Option<String>),

    /// The key has no effect on the dropdown
    Ignored,
}

/// Suggestion list plus highlighted row.
#[derive(Debug, Default, Clone)]
pub struct SuggestionDropdown {
    suggestions: Vec<String>,
    highlighted: Option<usize>,
    visible: bool,
}

impl SuggestionDropdown {
    /// Creates a hidden, empty dropdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the list for the current field text and clears the highlight.
    pub fn refresh(&mut self, suggester: &DescriptionSuggester, input: &str) {
        self.suggestions = suggester.suggestions(input);
        self.highlighted = None;
        self.visible = !self.suggestions.is_empty();
    }

    /// Applies a key press.
    ///
    /// `Up` and `Down` wrap around at either end of the list. `Enter` and
    /// `Tab` accept the highlighted row, if any, and close the dropdown.
    pub fn handle_key(&mut self, key: DropdownKey) -> KeyOutcome {
        let len = self.suggestions.len();
        match key {
            DropdownKey::Up => {
                self.highlighted = match self.highlighted {
                    _ if len == 0 => None,
                    None | Some(0) => Some(len - 1),
                    Some(i) => Some(i - 1),
                };
                KeyOutcome::Moved(self.highlighted)
            }
            DropdownKey::Down => {
                self.highlighted = match self.highlighted {
                    _ if len == 0 => None,
                    Some(i) if i + 1 >= len => Some(0),
                    Some(i) => Some(i + 1),
                    None => Some(0),
                };
                KeyOutcome::Moved(self.highlighted)
            }
            DropdownKey::Enter | DropdownKey::Tab => {
                let accepted = self.highlighted.and_then(|i| self.suggestions.get(i).cloned());
                self.dismiss();
                KeyOutcome::Accepted(accepted)
            }
            DropdownKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Picks a row directly, as a mouse click would, and closes the dropdown.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let selected = self.suggestions.get(index).cloned();
        self.dismiss();
        selected
    }

    /// Hides the dropdown and clears the highlight.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    /// Current suggestion rows.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the dropdown is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
