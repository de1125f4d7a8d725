//! Navigation state: menu items, mobile menu, dropdowns, sidenav and the
//! sticky header.

use serde::{Deserialize, Serialize};

use crate::selection::cycle_index;

/// Viewport width at or below which the mobile layout applies.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Scroll offset past which scrolling down hides the header.
const HIDE_HEADER_AFTER: f64 = 100.0;

/// Scroll offset past which the header is drawn in its scrolled style.
const SCROLLED_AFTER: f64 = 50.0;

/// Scroll offset past which the back-to-top button shows.
const BACK_TO_TOP_AFTER: f64 = 300.0;

/// A navigation item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,

    /// Page identifier matched against the current page.
    #[serde(default)]
    pub page: Option<String>,

    /// Dropdown entries.
    #[serde(default)]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            page: None,
            children: Vec::new(),
        }
    }

    /// Set the page identifier.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Add child items.
    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    /// Whether this item points at the page being viewed.
    ///
    /// `path` is the location pathname. An item matches on its `page` id, on
    /// its URL naming `current_page`, or when `path` equals or lies under the
    /// item URL.
    pub fn is_active(&self, current_page: &str, path: &str) -> bool {
        if self.page.as_deref() == Some(current_page) {
            return true;
        }

        let url = self.url.trim_start_matches('/');
        if url.is_empty() || url.starts_with('#') {
            return false;
        }
        if url.trim_end_matches(".html") == current_page {
            return true;
        }

        let path = path.trim_start_matches('/');
        let stem = url.trim_end_matches(".html").trim_end_matches('/');
        path == url || path.starts_with(&format!("{stem}/"))
    }

    /// Whether this item or one of its children is active.
    pub fn contains_active(&self, current_page: &str, path: &str) -> bool {
        self.is_active(current_page, path)
            || self.children.iter().any(|c| c.is_active(current_page, path))
    }
}

/// Links in injected fragments that should be marked active for a page.
///
/// Besides `[data-page="{page}"]`, top-level pages and the home page are
/// matched by their `href`.
pub fn active_link_selectors(current_page: &str) -> Vec<String> {
    let mut selectors = vec![format!(r#"[data-page="{current_page}"]"#)];
    match current_page {
        "index" => selectors.push(
            r#"a[href="index.html"], a[href="pages/home/index.html"]"#.to_string(),
        ),
        "patent-search" | "insider-trading" | "government-contracts" | "corporate-lobbying" => {
            selectors.push(format!(r#"a[href="{current_page}.html"]"#))
        }
        _ => {}
    }
    selectors
}

/// Whether the mobile menu is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

/// Sticky header appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    /// Slid out of view while scrolling down.
    pub hidden: bool,
    /// Drawn with the compact scrolled style.
    pub scrolled: bool,
}

/// Global shortcuts handled by the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + K.
    FocusSearch,
    /// Ctrl/Cmd + M.
    ToggleMenu,
    /// Escape.
    CloseAll,
}

impl Shortcut {
    /// Map a key press to a shortcut.
    pub fn from_key(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        match (key, ctrl_or_meta) {
            ("k", true) => Some(Shortcut::FocusSearch),
            ("m", true) => Some(Shortcut::ToggleMenu),
            ("Escape", _) => Some(Shortcut::CloseAll),
            _ => None,
        }
    }
}

/// Navigation controller state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    menu: MenuState,
    open_dropdown: Option<usize>,
    sidenav_open: bool,
    header: HeaderState,
    last_scroll_y: f64,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn open_dropdown(&self) -> Option<usize> {
        self.open_dropdown
    }

    /// Open dropdown `index`, closing any other.
    pub fn show_dropdown(&mut self, index: usize) {
        self.open_dropdown = Some(index);
    }

    pub fn hide_dropdown(&mut self, index: usize) {
        if self.open_dropdown == Some(index) {
            self.open_dropdown = None;
        }
    }

    pub fn toggle_dropdown(&mut self, index: usize) {
        if self.open_dropdown == Some(index) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(index);
        }
    }

    pub fn hide_all_dropdowns(&mut self) {
        self.open_dropdown = None;
    }

    pub fn sidenav_open(&self) -> bool {
        self.sidenav_open
    }

    pub fn open_sidenav(&mut self) {
        self.sidenav_open = true;
    }

    pub fn close_sidenav(&mut self) {
        self.sidenav_open = false;
    }

    /// Close the menu, all dropdowns and the sidenav.
    pub fn close_all(&mut self) {
        self.close_menu();
        self.hide_all_dropdowns();
        self.close_sidenav();
    }

    pub fn header(&self) -> HeaderState {
        self.header
    }

    /// Update the header for a new scroll offset.
    pub fn on_scroll(&mut self, y: f64) -> HeaderState {
        self.header = HeaderState {
            hidden: y > self.last_scroll_y && y > HIDE_HEADER_AFTER,
            scrolled: y > SCROLLED_AFTER,
        };
        self.last_scroll_y = y;
        self.header
    }

    /// Adjust menus after the viewport width changed.
    pub fn on_resize(&mut self, width: f64) {
        if width > MOBILE_BREAKPOINT {
            self.close_menu();
        } else {
            self.hide_all_dropdowns();
        }
    }

    /// Apply a global shortcut. Returns `true` when the search input should
    /// take focus.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::FocusSearch => return true,
            Shortcut::ToggleMenu => self.toggle_menu(),
            Shortcut::CloseAll => self.close_all(),
        }
        false
    }
}

/// Whether the back-to-top button shows at scroll offset `y`.
pub fn back_to_top_visible(y: f64) -> bool {
    y > BACK_TO_TOP_AFTER
}

/// Next focused dropdown item after a key press, wrapping around. `None`
/// means the key closes the dropdown.
pub fn dropdown_item_step(key: &str, current: usize, len: usize) -> Option<Option<usize>> {
    match key {
        "ArrowDown" => Some(cycle_index(Some(current), 1, len)),
        "ArrowUp" => Some(cycle_index(Some(current), -1, len)),
        "Escape" | "Tab" => None,
        _ => Some(Some(current)),
    }
}
