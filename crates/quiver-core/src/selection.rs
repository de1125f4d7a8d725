//! Suggestion list state: visibility, highlighted item and keyboard handling.

use crate::suggest::Suggestion;

/// Whether the suggestion list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
    Other,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowUp" => NavKey::Up,
            "ArrowDown" => NavKey::Down,
            "Enter" => NavKey::Enter,
            "Escape" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State changed; suppress the browser default.
    Handled,
    /// Navigate straight to a suggestion URL.
    Navigate(String),
    /// Run full query routing on the input text.
    Submit,
    /// The list was cleared and hidden.
    Dismissed,
    /// Nothing to do.
    Ignored,
}

/// Step `current` by `delta` within `0..len`, wrapping at both ends.
///
/// `None` as the starting point behaves like one step before the first item,
/// so stepping down selects index 0 and stepping up selects the last.
pub fn cycle_index(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let start = match current {
        Some(i) => i as isize,
        None if delta >= 0 => -1,
        None => len,
    };
    Some((start + delta).rem_euclid(len) as usize)
}

/// Rendered suggestions plus keyboard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    highlighted: Option<usize>,
    visibility: Visibility,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the items. Empty input hides the list.
    pub fn show(&mut self, items: Vec<Suggestion>) {
        self.visibility = if items.is_empty() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        self.items = items;
        self.highlighted = None;
    }

    /// Re-show the current items, e.g. when the input regains focus.
    pub fn reveal(&mut self) {
        if !self.items.is_empty() {
            self.visibility = Visibility::Visible;
        }
    }

    /// Hide the list and drop the highlight, keeping the items.
    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.highlighted = None;
    }

    /// Hide the list and drop the items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.hide();
    }

    /// Highlight an item, e.g. on hover. Out-of-range indices are ignored.
    pub fn highlight(&mut self, index: usize) {
        if index < self.items.len() {
            self.highlighted = Some(index);
        }
    }

    /// Move the highlight by `delta`, wrapping around.
    pub fn step(&mut self, delta: isize) {
        self.highlighted = cycle_index(self.highlighted, delta, self.items.len());
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        match key {
            NavKey::Enter => match self.highlighted_item() {
                Some(item) => {
                    let url = item.url.clone();
                    self.hide();
                    KeyOutcome::Navigate(url)
                }
                None => KeyOutcome::Submit,
            },
            _ if self.items.is_empty() => KeyOutcome::Ignored,
            NavKey::Down => {
                self.step(1);
                KeyOutcome::Handled
            }
            NavKey::Up => {
                self.step(-1);
                KeyOutcome::Handled
            }
            NavKey::Escape => {
                self.clear();
                KeyOutcome::Dismissed
            }
            NavKey::Other => KeyOutcome::Ignored,
        }
    }

    /// URL of the item at `index`, for click selection.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let url = self.items.get(index)?.url.clone();
        self.hide();
        Some(url)
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_item(&self) -> Option<&Suggestion> {
        self.highlighted.and_then(|i| self.items.get(i))
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::SuggestionKind;

    fn items(n: usize) -> Vec<Suggestion> {
        (0..n)
            .map(|i| Suggestion {
                kind: SuggestionKind::Page,
                text: format!("item {i}"),
                value: format!("item {i}"),
                url: format!("page-{i}.html"),
            })
            .collect()
    }

    #[test]
    fn test_cycle_index() {
        assert_eq!(cycle_index(None, 1, 3), Some(0));
        assert_eq!(cycle_index(None, -1, 3), Some(2));
        assert_eq!(cycle_index(Some(2), 1, 3), Some(0));
        assert_eq!(cycle_index(Some(0), -1, 3), Some(2));
        assert_eq!(cycle_index(Some(1), 1, 3), Some(2));
        assert_eq!(cycle_index(Some(0), 1, 0), None);
    }

    #[test]
    fn test_down_from_last_wraps_to_first() {
        let mut list = SuggestionList::new();
        list.show(items(3));
        list.highlight(2);
        assert_eq!(list.handle_key(NavKey::Down), KeyOutcome::Handled);
        assert_eq!(list.highlighted(), Some(0));
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        let mut list = SuggestionList::new();
        list.show(items(4));
        list.highlight(0);
        list.handle_key(NavKey::Up);
        assert_eq!(list.highlighted(), Some(3));
    }

    #[test]
    fn test_enter_with_highlight_navigates() {
        let mut list = SuggestionList::new();
        list.show(items(3));
        list.handle_key(NavKey::Down);
        list.handle_key(NavKey::Down);
        assert_eq!(
            list.handle_key(NavKey::Enter),
            KeyOutcome::Navigate("page-1.html".to_string())
        );
        assert!(!list.is_visible());
    }

    #[test]
    fn test_enter_without_highlight_submits() {
        let mut list = SuggestionList::new();
        assert_eq!(list.handle_key(NavKey::Enter), KeyOutcome::Submit);

        list.show(items(2));
        assert_eq!(list.handle_key(NavKey::Enter), KeyOutcome::Submit);
    }

    #[test]
    fn test_escape_clears_and_hides() {
        let mut list = SuggestionList::new();
        list.show(items(2));
        list.highlight(1);
        assert_eq!(list.handle_key(NavKey::Escape), KeyOutcome::Dismissed);
        assert!(list.items().is_empty());
        assert_eq!(list.visibility(), Visibility::Hidden);
        assert_eq!(list.highlighted(), None);
    }

    #[test]
    fn test_arrows_ignored_without_items() {
        let mut list = SuggestionList::new();
        assert_eq!(list.handle_key(NavKey::Down), KeyOutcome::Ignored);
        assert_eq!(list.highlighted(), None);
    }

    #[test]
    fn test_show_empty_hides() {
        let mut list = SuggestionList::new();
        list.show(items(2));
        assert!(list.is_visible());
        list.show(Vec::new());
        assert!(!list.is_visible());
    }

    #[test]
    fn test_hide_then_reveal() {
        let mut list = SuggestionList::new();
        list.show(items(2));
        list.hide();
        assert!(!list.is_visible());
        list.reveal();
        assert!(list.is_visible());
    }

    #[test]
    fn test_select_by_click() {
        let mut list = SuggestionList::new();
        list.show(items(2));
        assert_eq!(list.select(1).as_deref(), Some("page-1.html"));
        assert_eq!(list.select(5), None);
    }

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowDown"), NavKey::Down);
        assert_eq!(NavKey::from_key("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_key("a"), NavKey::Other);
    }
}
