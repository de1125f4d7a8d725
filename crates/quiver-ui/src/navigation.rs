//! Site navigation: main menu with dropdowns, mobile menu, side navigation,
//! sticky header and back-to-top button.

use leptos::{ev, prelude::*};
use quiver_core::nav::{NavItem, NavState, Shortcut, back_to_top_visible, dropdown_item_step};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// Main navigation component.
#[component]
pub fn Navigation(
    /// Navigation items.
    items: Vec<NavItem>,
    /// Page id for active highlighting.
    current_page: String,
    /// Location pathname for active highlighting.
    #[prop(default = "/".to_string())]
    path: String,
) -> impl IntoView {
    let state = RwSignal::new(NavState::new());

    let handles = [
        window_event_listener(ev::scroll, move |_| {
            state.update(|s| {
                s.on_scroll(dom::scroll_y());
            });
        }),
        window_event_listener(ev::resize, move |_| {
            state.update(|s| s.on_resize(dom::viewport_width()));
        }),
        window_event_listener(ev::keydown, move |ev| {
            let ctrl = ev.ctrl_key() || ev.meta_key();
            match Shortcut::from_key(&ev.key(), ctrl) {
                Some(Shortcut::ToggleMenu) => {
                    ev.prevent_default();
                    state.update(|s| {
                        s.apply_shortcut(Shortcut::ToggleMenu);
                    });
                }
                Some(Shortcut::CloseAll) => state.update(|s| {
                    s.apply_shortcut(Shortcut::CloseAll);
                }),
                // Search focus is owned by SearchShortcut.
                Some(Shortcut::FocusSearch) | None => {}
            }
        }),
        // Side navigation controls live in page markup.
        window_event_listener(ev::click, move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Ok(Some(control)) = target.closest("[data-sidenav]") {
                match control.get_attribute("data-sidenav").as_deref() {
                    Some("open") => state.update(|s| s.open_sidenav()),
                    Some("close") => state.update(|s| s.close_sidenav()),
                    _ => {}
                }
            } else if target.closest(".nav-overlay").ok().flatten().is_some() {
                state.update(|s| s.close_sidenav());
            }
        }),
    ];
    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
    });

    // The header element lives in the injected fragment, outside this view.
    Effect::new(move |_| {
        let header = state.with(|s| s.header());
        if let Some(el) = dom::element(".header") {
            dom::set_class(&el, "header-hidden", header.hidden);
            dom::set_class(&el, "scrolled", header.scrolled);
        }
    });

    Effect::new(move |_| {
        let open = state.with(|s| s.menu().is_open());
        if let Some(body) = document().body() {
            dom::set_class(&body, "menu-open", open);
        }
    });

    Effect::new(move |_| {
        let open = state.with(|s| s.sidenav_open());
        let Some(sidenav) = dom::element(".sidenav") else {
            return;
        };
        dom::set_class(&sidenav, "open", open);
        if let Some(overlay) = dom::element(".nav-overlay") {
            dom::set_class(&overlay, "visible", open);
        }
        if let Some(body) = document().body() {
            dom::set_class(&body, "sidenav-open", open);
        }
        if open && let Some(link) = dom::elements_in(&sidenav.into(), ".sidenav-link").first() {
            let _ = link.focus();
        }
    });

    let entries: Vec<_> = items.into_iter().enumerate().collect();

    view! {
      <nav class="main-nav" aria-label="Main navigation">
        <button
          type="button"
          class="mobile-menu-toggle"
          class:active=move || state.with(|s| s.menu().is_open())
          aria-label="Toggle navigation"
          aria-expanded=move || state.with(|s| s.menu().is_open()).to_string()
          on:click=move |_| state.update(|s| s.toggle_menu())
        >
          <span class="hamburger-line"></span>
          <span class="hamburger-line"></span>
          <span class="hamburger-line"></span>
        </button>
        <ul class="nav-menu" class:active=move || state.with(|s| s.menu().is_open())>
          {entries
            .into_iter()
            .map(|(index, item)| {
              view! {
                <NavEntry item=item index=index state=state current_page=current_page.clone() path=path.clone() />
              }
            })
            .collect_view()}
        </ul>
      </nav>
    }
}

/// Top-level navigation entry, with an optional dropdown.
#[component]
fn NavEntry(
    item: NavItem,
    index: usize,
    state: RwSignal<NavState>,
    current_page: String,
    path: String,
) -> impl IntoView {
    let has_children = !item.children.is_empty();
    let is_active = item.contains_active(&current_page, &path);
    let is_open = move || state.with(|s| s.open_dropdown() == Some(index));

    let children = item
        .children
        .iter()
        .map(|child| {
            let active = child.is_active(&current_page, &path);
            view! {
              <li>
                <a
                  href=child.url.clone()
                  class="dropdown-item"
                  class:active=active
                  data-page=child.page.clone()
                  aria-current=active.then_some("page")
                >
                  {child.label.clone()}
                </a>
              </li>
            }
        })
        .collect_view();

    let on_menu_keydown = move |ev: ev::KeyboardEvent| {
        let Some(menu) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let links = dom::elements_in(&menu.clone().into(), ".dropdown-item");
        let focused = document().active_element();
        let current = links
            .iter()
            .position(|l| focused.as_ref().is_some_and(|f| f == &**l))
            .unwrap_or(0);

        match dropdown_item_step(&ev.key(), current, links.len()) {
            None => state.update(|s| s.hide_all_dropdowns()),
            Some(Some(next)) if next != current => {
                ev.prevent_default();
                if let Some(link) = links.get(next) {
                    let _ = link.focus();
                }
            }
            Some(_) => {}
        }
    };

    view! {
      <li
        class="nav-item"
        class:dropdown=has_children
        class:active=move || is_open()
        on:mouseenter=move |_| {
          if has_children && dom::viewport_width() > quiver_core::nav::MOBILE_BREAKPOINT {
            state.update(|s| s.show_dropdown(index));
          }
        }
        on:mouseleave=move |_| {
          if has_children {
            state.update(|s| s.hide_dropdown(index));
          }
        }
      >
        <a
          href=item.url.clone()
          class="nav-link"
          class:active=is_active
          data-page=item.page.clone()
          aria-current=is_active.then_some("page")
          aria-haspopup=has_children.then_some("true")
          aria-expanded=move || has_children.then(|| is_open().to_string())
          on:click=move |ev: ev::MouseEvent| {
            if has_children {
              ev.prevent_default();
              state.update(|s| s.toggle_dropdown(index));
            }
          }
        >
          {item.label.clone()}
        </a>
        {has_children
          .then(|| {
            view! {
              <ul class="dropdown-menu" class:show=move || is_open() on:keydown=on_menu_keydown>
                {children}
              </ul>
            }
          })}
      </li>
    }
}

/// Button that scrolls back to the top, shown once the page is scrolled.
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(back_to_top_visible(dom::scroll_y()));
    let handle = window_event_listener(ev::scroll, move |_| {
        visible.set(back_to_top_visible(dom::scroll_y()));
    });
    on_cleanup(move || handle.remove());

    view! {
      <button
        type="button"
        class="back-to-top"
        class:visible=move || visible.get()
        aria-label="Back to top"
        on:click=move |_| dom::scroll_to_top()
      >
        "↑"
      </button>
    }
}
