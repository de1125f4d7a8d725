//! Search-as-you-type box for the Quiver frontend.
//!
//! Suggestions are regenerated after a quiet period, rendered with the query
//! highlighted, and driven by the keyboard contract of
//! [`SuggestionList::handle_key`].

use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::{ev, prelude::*};
use quiver_core::{
    SearchSession, SuggestionList,
    config::SearchConfig,
    nav::Shortcut,
    selection::{KeyOutcome, NavKey},
    text::highlight_query,
};

use crate::{dom, storage::LocalStorageStore};

/// Search session shared by every search box on a page.
pub type SharedSession = Rc<RefCell<SearchSession<LocalStorageStore>>>;

/// Create the page's search session backed by `localStorage`.
pub fn shared_session(config: &SearchConfig) -> SharedSession {
    Rc::new(RefCell::new(SearchSession::new(
        config,
        LocalStorageStore::new(),
    )))
}

/// Submit `raw` through the router and follow the result.
fn submit(session: &SharedSession, raw: &str) {
    let destination = session.borrow_mut().submit(raw);
    if let Some(destination) = destination {
        dom::navigate(&destination.url());
    }
}

/// Search box input component.
///
/// Provides a text input with a debounced suggestion list.
#[component]
pub fn SearchBox(
    /// Shared search session.
    session: SharedSession,
    /// Search settings.
    config: SearchConfig,
    /// Placeholder text for the input.
    #[prop(default = "Search stocks, politicians, patents...".to_string())]
    placeholder: String,
) -> impl IntoView {
    let session = StoredValue::new_local(session);
    let query = RwSignal::new(String::new());
    let list = RwSignal::new(SuggestionList::new());

    let refresh = debounce(
        Duration::from_millis(config.debounce_ms),
        move |partial: String| {
            let items = session.with_value(|s| {
                let s = s.borrow();
                if s.accepts(&partial) {
                    s.suggestions(&partial)
                } else {
                    Vec::new()
                }
            });
            list.update(|l| l.show(items));
        },
    );
    let refresh = StoredValue::new_local(refresh);

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        refresh.update_value(|refresh| refresh(value));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let key = NavKey::from_key(&ev.key());
        match list.try_update(|l| l.handle_key(key)) {
            Some(KeyOutcome::Navigate(url)) => {
                ev.prevent_default();
                dom::navigate(&url);
            }
            Some(KeyOutcome::Submit) => {
                ev.prevent_default();
                session.with_value(|s| submit(s, &query.get_untracked()));
            }
            Some(KeyOutcome::Handled) => ev.prevent_default(),
            Some(KeyOutcome::Dismissed) | Some(KeyOutcome::Ignored) | None => {}
        }
    };

    let blur_delay = Duration::from_millis(config.blur_hide_ms);
    let on_blur = move |_| {
        set_timeout(move || list.update(|l| l.hide()), blur_delay);
    };

    let on_focus = move |_| {
        if !query.get_untracked().trim().is_empty() {
            list.update(|l| l.reveal());
        }
    };

    let on_button = move |_| {
        session.with_value(|s| submit(s, &query.get_untracked()));
    };

    view! {
      <div class="search-container">
        <input
          type="text"
          class="search-input"
          placeholder=placeholder
          autocomplete="off"
          aria-autocomplete="list"
          aria-expanded=move || list.with(|l| l.is_visible()).to_string()
          prop:value=move || query.get()
          on:input=on_input
          on:keydown=on_keydown
          on:blur=on_blur
          on:focus=on_focus
        />
        <button type="button" class="search-button" aria-label="Search" on:click=on_button>
          "🔍"
        </button>
        <SuggestionDropdown list=list query=query.into() />
      </div>
    }
}

/// Rendered suggestion list.
#[component]
fn SuggestionDropdown(list: RwSignal<SuggestionList>, query: Signal<String>) -> impl IntoView {
    view! {
      <div
        class="search-suggestions"
        class:visible=move || list.with(|l| l.is_visible())
        role="listbox"
      >
        <For
          each=move || list.with(|l| l.items().iter().cloned().enumerate().collect::<Vec<_>>())
          key=|(i, item)| (*i, item.url.clone())
          children=move |(i, item)| {
            let icon = item.kind.icon();
            let label = item.kind.label();
            let text = item.text.clone();
            let highlighted = move || list.with(|l| l.highlighted() == Some(i));
            view! {
              <div
                class="suggestion-item"
                class:highlighted=highlighted
                role="option"
                aria-selected=move || highlighted().to_string()
                on:mouseenter=move |_| list.update(|l| l.highlight(i))
                on:mousedown=move |ev: ev::MouseEvent| {
                  ev.prevent_default();
                  if let Some(url) = list.try_update(|l| l.select(i)).flatten() {
                    dom::navigate(&url);
                  }
                }
              >
                <span class="suggestion-icon">{icon}</span>
                <span
                  class="suggestion-text"
                  inner_html=move || highlight_query(&text, &query.get())
                ></span>
                <span class="suggestion-type">{label}</span>
              </div>
            }
          }
        />
      </div>
    }
}

/// Global keyboard shortcut for search.
///
/// Focuses the first search input when Cmd/Ctrl + K is pressed.
#[component]
#[allow(clippy::unused_unit)]
pub fn SearchShortcut() -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        let shortcut = Shortcut::from_key(&ev.key(), ev.meta_key() || ev.ctrl_key());
        if shortcut == Some(Shortcut::FocusSearch) {
            ev.prevent_default();
            dom::focus_search();
        }
    });
    on_cleanup(move || handle.remove());
}
