//! Quiver UI Components
//!
//! Leptos components and browser glue for the Quiver site.
//!
//! # Components
//!
//! ## Search
//! - [`SearchBox`] - Input with debounced suggestions and keyboard navigation
//! - [`SearchShortcut`] - Global Cmd/Ctrl+K handler
//!
//! ## Navigation
//! - [`Navigation`] - Main menu with dropdowns, mobile menu and sticky header
//! - [`BackToTop`] - Scroll-to-top button
//!
//! ## Content
//! - [`PricingToggle`] - Monthly/yearly price switch
//! - [`FaqAccordion`] - Collapsible questions
//!
//! ## Page-wide
//! - [`AnimationDirector`] - Entrance, scroll and hover animations
//! - [`GlobalActions`] - `data-action` buttons, notifications and theme

pub mod actions;
pub mod animation;
pub mod dom;
pub mod faq;
pub mod navigation;
pub mod pricing;
pub mod search;
pub mod storage;

pub use actions::{GlobalActions, notify, refresh_theme_toggle};
pub use animation::AnimationDirector;
pub use faq::FaqAccordion;
pub use navigation::{BackToTop, Navigation};
pub use pricing::PricingToggle;
pub use search::{SearchBox, SearchShortcut, SharedSession, shared_session};
pub use storage::LocalStorageStore;
