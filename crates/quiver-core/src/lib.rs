//! Quiver Core Library
//!
//! Host-testable logic for the Quiver site runtime: query routing, search
//! suggestions, recent-search history, navigation and widget state,
//! animation timelines, formatting and configuration.

pub mod action;
pub mod animation;
pub mod config;
pub mod error;
pub mod faq;
pub mod format;
pub mod nav;
pub mod pricing;
pub mod recent;
pub mod route;
pub mod selection;
pub mod session;
pub mod suggest;
pub mod text;

pub use action::{CopyMethod, GlobalAction, Notification, NotificationKind, Theme};
pub use config::Config;
pub use error::{CoreError, Result};
pub use nav::{NavItem, NavState};
pub use pricing::BillingPeriod;
pub use recent::{KeyValueStore, MemoryStore, RecentSearchLog};
pub use route::{Destination, QueryRouter};
pub use selection::{SuggestionList, Visibility};
pub use session::SearchSession;
pub use suggest::{Suggestion, SuggestionGenerator, SuggestionKind};
