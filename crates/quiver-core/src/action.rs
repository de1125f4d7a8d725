//! Page-wide `data-action` handlers, notifications and the colour theme.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    recent::KeyValueStore,
};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// How long a notification stays on screen.
pub const NOTIFICATION_MS: u64 = 3000;

/// Value of a `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Copy `data-copy-text`, or the element text, to the clipboard.
    Copy,
    /// Share `data-share-url`, or the page URL. Falls back to copying.
    Share,
    Print,
    /// Smooth-scroll to the selector in `data-target`.
    ScrollTo,
}

impl FromStr for GlobalAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "copy" => Ok(GlobalAction::Copy),
            "share" => Ok(GlobalAction::Share),
            "print" => Ok(GlobalAction::Print),
            "scroll-to" => Ok(GlobalAction::ScrollTo),
            other => Err(CoreError::parse(format!("unknown global action: {other}"))),
        }
    }
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class applied to the notification element.
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification notification-info",
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }
}

/// A transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Result of a clipboard write.
    pub fn copied(success: bool) -> Self {
        if success {
            Self {
                kind: NotificationKind::Success,
                message: "Copied to clipboard!".to_string(),
            }
        } else {
            Self {
                kind: NotificationKind::Error,
                message: "Failed to copy to clipboard".to_string(),
            }
        }
    }
}

/// How text is written to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// `navigator.clipboard.writeText`.
    ClipboardApi,
    /// Hidden textarea and `execCommand("copy")`.
    Textarea,
}

impl CopyMethod {
    /// The Clipboard API needs both the API object and a secure context.
    pub fn choose(has_clipboard: bool, secure_context: bool) -> Self {
        if has_clipboard && secure_context {
            CopyMethod::ClipboardApi
        } else {
            CopyMethod::Textarea
        }
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the toggle button, showing the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Theme matching a `prefers-color-scheme` media query.
    pub fn for_color_scheme(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Stored preference, `None` when absent or unrecognised.
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        store.get_item(THEME_KEY)?.parse().ok()
    }

    pub fn save(self, store: &dyn KeyValueStore) -> Result<()> {
        store.set_item(THEME_KEY, self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(CoreError::parse(format!("unknown theme: {other}"))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recent::MemoryStore;

    #[test]
    fn test_parse_actions() {
        assert_eq!("copy".parse::<GlobalAction>().unwrap(), GlobalAction::Copy);
        assert_eq!(
            "scroll-to".parse::<GlobalAction>().unwrap(),
            GlobalAction::ScrollTo
        );
        assert!("launch".parse::<GlobalAction>().is_err());
    }

    #[test]
    fn test_copied_notification() {
        let ok = Notification::copied(true);
        assert_eq!(ok.kind, NotificationKind::Success);
        assert_eq!(ok.message, "Copied to clipboard!");
        assert_eq!(Notification::copied(false).kind, NotificationKind::Error);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_theme_persistence() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), None);
        Theme::Light.save(&store).unwrap();
        assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Some(Theme::Light));

        store.set_item(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), None);
    }

    #[test]
    fn test_copy_method_needs_api_and_secure_context() {
        assert_eq!(CopyMethod::choose(true, true), CopyMethod::ClipboardApi);
        assert_eq!(CopyMethod::choose(false, true), CopyMethod::Textarea);
        assert_eq!(CopyMethod::choose(true, false), CopyMethod::Textarea);
        assert_eq!(CopyMethod::choose(false, false), CopyMethod::Textarea);
    }

    #[test]
    fn test_theme_for_color_scheme() {
        assert_eq!(Theme::for_color_scheme(true), Theme::Dark);
        assert_eq!(Theme::for_color_scheme(false), Theme::Light);
        assert_eq!(Theme::for_color_scheme(false).toggle_icon(), "🌙");
    }
}
