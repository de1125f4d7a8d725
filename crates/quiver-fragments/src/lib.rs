//! Quiver Fragments
//!
//! Fetches the HTML fragments shared by every page (header and footer) and
//! keeps them in an in-memory cache.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { ComponentLoader } from 'quiver-fragments';
//!
//! const loader = new ComponentLoader('components');
//! const header = await loader.load('header');
//! document.querySelector('#header-placeholder').innerHTML = header;
//! ```

pub mod bindings;
pub mod fragment;
pub mod loader;

pub use bindings::ComponentLoader;
pub use fragment::{FragmentName, FragmentState, fallback_markup};
pub use loader::{FragmentError, FragmentLoader};
