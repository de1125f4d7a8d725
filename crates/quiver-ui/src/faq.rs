//! FAQ accordion.

use leptos::prelude::*;
use quiver_core::faq::{Accordion, FaqEntry};

/// Questions with collapsible answers; at most one answer is open.
#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());

    view! {
      <div class="faq-list">
        {entries
          .into_iter()
          .enumerate()
          .map(|(i, entry)| {
            let open = move || accordion.with(|a| a.is_open(i));
            view! {
              <div class="faq-item" class:open=open>
                <button
                  type="button"
                  class="faq-question"
                  aria-expanded=move || open().to_string()
                  on:click=move |_| accordion.update(|a| a.toggle(i))
                >
                  {entry.question}
                </button>
                <div class="faq-answer" style:display=move || if open() { "block" } else { "none" }>
                  <p>{entry.answer}</p>
                </div>
              </div>
            }
          })
          .collect_view()}
      </div>
    }
}
