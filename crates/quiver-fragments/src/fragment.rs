//! Fragment names, load state and the failure fallback.

use std::{fmt, str::FromStr};

use quiver_core::text::escape_html;

use crate::loader::FragmentError;

/// A fragment every page includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentName {
    Header,
    Footer,
}

impl FragmentName {
    pub const ALL: [FragmentName; 2] = [FragmentName::Header, FragmentName::Footer];

    pub fn as_str(self) -> &'static str {
        match self {
            FragmentName::Header => "header",
            FragmentName::Footer => "footer",
        }
    }

    /// Id of the element the fragment is injected into.
    pub fn placeholder_id(self) -> &'static str {
        match self {
            FragmentName::Header => "header-placeholder",
            FragmentName::Footer => "footer-placeholder",
        }
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragmentName {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(FragmentName::Header),
            "footer" => Ok(FragmentName::Footer),
            other => Err(FragmentError::UnknownFragment(other.to_string())),
        }
    }
}

/// Lifecycle of a fragment slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FragmentState {
    #[default]
    Loading,
    Loaded(String),
    Failed(String),
}

impl FragmentState {
    /// Markup to inject for this state. `None` while loading.
    pub fn markup(&self, name: &str) -> Option<String> {
        match self {
            FragmentState::Loading => None,
            FragmentState::Loaded(html) => Some(html.clone()),
            FragmentState::Failed(_) => Some(fallback_markup(name)),
        }
    }
}

/// Block shown in place of a fragment that failed to load.
pub fn fallback_markup(name: &str) -> String {
    format!(
        r#"<div class="component-error"><p>Failed to load {} component</p><button type="button" onclick="location.reload()">Reload Page</button></div>"#,
        escape_html(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_names() {
        assert_eq!("header".parse::<FragmentName>().unwrap(), FragmentName::Header);
        assert_eq!(FragmentName::Footer.placeholder_id(), "footer-placeholder");
        assert!(matches!(
            "sidebar".parse::<FragmentName>(),
            Err(FragmentError::UnknownFragment(name)) if name == "sidebar"
        ));
    }

    #[test]
    fn test_fallback_markup() {
        let html = fallback_markup("header");
        assert!(html.contains("Failed to load header component"));
        assert!(html.contains("Reload Page"));
        assert!(html.contains("location.reload()"));
    }

    #[test]
    fn test_state_markup() {
        assert_eq!(FragmentState::Loading.markup("footer"), None);
        assert_eq!(
            FragmentState::Loaded("<footer></footer>".into()).markup("footer"),
            Some("<footer></footer>".to_string())
        );
        let failed = FragmentState::Failed("HTTP 404".into()).markup("footer");
        assert!(failed.unwrap().contains("Failed to load footer component"));
    }
}
