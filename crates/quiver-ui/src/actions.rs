//! Page-wide `data-action` buttons, notifications and the theme toggle.

use std::time::Duration;

use leptos::{ev, prelude::*, task::spawn_local};
use quiver_core::{
    CopyMethod, GlobalAction, KeyValueStore, Notification, Theme,
    action::NOTIFICATION_MS,
};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, HtmlDocument, HtmlElement, HtmlTextAreaElement, MediaQueryList,
    MediaQueryListEvent,
};

use crate::{dom, storage::LocalStorageStore};

/// Click handling for `[data-action]` and `[data-theme-toggle]` elements.
pub struct GlobalActions {
    click: Option<WindowListenerHandle>,
    scheme: Option<ColorSchemeListener>,
}

impl GlobalActions {
    /// Apply the stored theme and start listening for clicks.
    pub fn install(store: LocalStorageStore) -> Self {
        let theme = Theme::load(&store).unwrap_or_default();
        apply_theme(theme);

        let scheme = ColorSchemeListener::attach(store.clone());

        let click = window_event_listener(ev::click, move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };

            if let Ok(Some(_)) = target.closest("[data-theme-toggle]") {
                toggle_theme(&store);
                return;
            }

            if let Ok(Some(element)) = target.closest("[data-action]") {
                let Some(name) = element.get_attribute("data-action") else {
                    return;
                };
                match name.parse::<GlobalAction>() {
                    Ok(action) => run(action, &element),
                    Err(e) => log::warn!("{e}"),
                }
            }
        });

        Self {
            click: Some(click),
            scheme,
        }
    }

    pub fn uninstall(mut self) {
        if let Some(handle) = self.click.take() {
            handle.remove();
        }
        self.scheme = None;
    }
}

/// Follows `prefers-color-scheme` changes. Detaches on drop.
struct ColorSchemeListener {
    query: MediaQueryList,
    on_change: Closure<dyn Fn(MediaQueryListEvent)>,
}

impl ColorSchemeListener {
    fn attach(store: LocalStorageStore) -> Option<Self> {
        let query = window()
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;

        let on_change =
            Closure::<dyn Fn(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
                set_theme(Theme::for_color_scheme(ev.matches()), &store);
            });
        if let Err(e) =
            query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            log::warn!("Could not follow the system colour scheme: {e:?}");
            return None;
        }

        Some(Self { query, on_change })
    }
}

impl Drop for ColorSchemeListener {
    fn drop(&mut self) {
        let _ = self.query.remove_event_listener_with_callback(
            "change",
            self.on_change.as_ref().unchecked_ref(),
        );
    }
}

fn run(action: GlobalAction, element: &Element) {
    match action {
        GlobalAction::Copy => {
            let text = element
                .get_attribute("data-copy-text")
                .or_else(|| element.text_content())
                .unwrap_or_default();
            spawn_local(async move { copy_and_notify(&text).await });
        }
        GlobalAction::Share => {
            let url = element
                .get_attribute("data-share-url")
                .unwrap_or_else(current_url);
            spawn_local(async move { share(&url).await });
        }
        GlobalAction::Print => {
            if let Err(e) = window().print() {
                log::error!("Print failed: {e:?}");
            }
        }
        GlobalAction::ScrollTo => match element.get_attribute("data-target") {
            Some(target) => dom::scroll_to(&target),
            None => log::warn!("scroll-to action without data-target"),
        },
    }
}

fn current_url() -> String {
    window().location().href().unwrap_or_default()
}

async fn copy_and_notify(text: &str) {
    let copied = copy_to_clipboard(text).await;
    notify(&Notification::copied(copied));
}

/// Write `text` to the clipboard, falling back to `execCommand("copy")`.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let window = window();
    let navigator = window.navigator();
    let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .is_ok_and(|c| !c.is_undefined() && !c.is_null());

    if CopyMethod::choose(has_clipboard, window.is_secure_context()) == CopyMethod::Textarea {
        return copy_with_textarea(text);
    }

    let promise = navigator.clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Clipboard API failed, using fallback: {e:?}");
            copy_with_textarea(text)
        }
    }
}

fn copy_with_textarea(text: &str) -> bool {
    let doc = document();
    let Some(body) = doc.body() else {
        return false;
    };
    let Some(area) = doc
        .create_element("textarea")
        .ok()
        .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    area.set_value(text);
    let _ = HtmlElement::style(&area).set_property("position", "fixed");
    let _ = HtmlElement::style(&area).set_property("opacity", "0");
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = doc
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    area.remove();
    copied
}

/// Share `url` with the Web Share API, or copy it when sharing is unsupported.
async fn share(url: &str) {
    let navigator = window().navigator();
    let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    let Some(share) = share else {
        copy_and_notify(url).await;
        return;
    };

    let data = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&data, &"title".into(), &document().title().into());
    let _ = js_sys::Reflect::set(&data, &"url".into(), &url.into());

    let result = share
        .call1(&navigator, &data)
        .and_then(|p| p.dyn_into::<js_sys::Promise>());
    let outcome = match result {
        Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
        Err(e) => Err(e),
    };
    if let Err(e) = outcome {
        let aborted = js_sys::Reflect::get(&e, &"name".into())
            .ok()
            .and_then(|n| n.as_string())
            .is_some_and(|n| n == "AbortError");
        if !aborted {
            log::error!("Share failed: {e:?}");
        }
    }
}

/// Show a toast in the top-right corner for a few seconds.
pub fn notify(notification: &Notification) {
    let doc = document();
    let (Some(body), Ok(el)) = (doc.body(), doc.create_element("div")) else {
        return;
    };
    let Ok(el) = el.dyn_into::<HtmlElement>() else {
        return;
    };

    el.set_class_name(notification.kind.class());
    el.set_text_content(Some(&notification.message));
    el.set_attribute("role", "status").ok();
    let _ = el.style().set_property("transform", "translateX(100%)");
    if body.append_child(&el).is_err() {
        return;
    }

    let shown = el.clone();
    set_timeout(
        move || {
            let _ = shown.style().set_property("transform", "translateX(0)");
        },
        Duration::from_millis(10),
    );
    set_timeout(
        move || {
            let _ = el.style().set_property("transform", "translateX(100%)");
            set_timeout(move || el.remove(), Duration::from_millis(300));
        },
        Duration::from_millis(NOTIFICATION_MS),
    );
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    refresh_theme_toggle();
}

/// Show the current theme's icon on every `[data-theme-toggle]`, e.g. after
/// the header markup has been injected.
pub fn refresh_theme_toggle() {
    let icon = current_theme().toggle_icon();
    for toggle in dom::elements("[data-theme-toggle]") {
        toggle.set_text_content(Some(icon));
    }
}

fn set_theme(theme: Theme, store: &dyn KeyValueStore) {
    apply_theme(theme);
    if let Err(e) = theme.save(store) {
        log::warn!("Could not save theme: {e}");
    }
}

fn current_theme() -> Theme {
    document()
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn toggle_theme(store: &dyn KeyValueStore) {
    set_theme(current_theme().toggled(), store);
}
