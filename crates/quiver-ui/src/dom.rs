//! DOM helpers shared by the widgets.

use leptos::prelude::{document, window};
use quiver_core::nav::active_link_selectors;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Links whose active state follows the current page.
const NAV_LINKS: &str = ".nav-link, .dropdown-item";

/// Every element matching `selector`, in document order.
pub fn elements(selector: &str) -> Vec<HtmlElement> {
    elements_in(&document().into(), selector)
}

/// Elements matching `selector` below `root`.
pub fn elements_in(root: &web_sys::Node, selector: &str) -> Vec<HtmlElement> {
    let list = if let Some(element) = root.dyn_ref::<Element>() {
        element.query_selector_all(selector)
    } else if let Some(doc) = root.dyn_ref::<web_sys::Document>() {
        doc.query_selector_all(selector)
    } else {
        return Vec::new();
    };

    let Ok(list) = list else {
        log::warn!("Invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// First element matching `selector`.
pub fn element(selector: &str) -> Option<HtmlElement> {
    document()
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if result.is_err() {
        log::warn!("Could not update class {class}");
    }
}

/// Mark navigation links for `current_page` as active, clearing the rest.
pub fn mark_active_links(current_page: &str) {
    for link in elements(NAV_LINKS) {
        set_class(&link, "active", false);
    }
    for selector in active_link_selectors(current_page) {
        for link in elements(&selector) {
            set_class(&link, "active", true);
        }
    }
}

/// Load `url` in the current tab.
pub fn navigate(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        log::error!("Navigation to {url} failed: {e:?}");
    }
}

/// Focus the first search input on the page.
pub fn focus_search() {
    if let Some(input) = element(".search-input") {
        let _ = input.focus();
    }
}

/// Whether the user asked the system to minimise motion.
pub fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Current pathname, `/` when unavailable.
pub fn pathname() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll the element matching `selector` into view.
pub fn scroll_to(selector: &str) {
    let Some(target) = element(selector) else {
        log::warn!("Scroll target not found: {selector}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scroll to the top of the page.
pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
