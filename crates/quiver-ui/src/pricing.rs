//! Monthly/yearly pricing toggle.

use leptos::prelude::*;
use quiver_core::{
    BillingPeriod,
    config::PricingConfig,
    pricing::featured_price,
};

use crate::dom;

/// Toggle buttons that switch the featured plan's price.
///
/// The featured card is static page markup; its `.price` and `.period`
/// elements are rewritten when the period changes.
#[component]
pub fn PricingToggle(
    /// Plan prices.
    config: PricingConfig,
    #[prop(default = BillingPeriod::Monthly)] initial: BillingPeriod,
) -> impl IntoView {
    let period = RwSignal::new(initial);

    Effect::new(move |_| {
        let price = featured_price(&config, period.get());
        if let Some(el) = dom::element(".pricing-card.featured .price") {
            el.set_text_content(Some(&price.price));
        }
        if let Some(el) = dom::element(".pricing-card.featured .period") {
            el.set_text_content(Some(price.period));
        }
    });

    view! {
      <div class="pricing-toggle" role="group" aria-label="Billing period">
        {BillingPeriod::ALL
          .into_iter()
          .map(|option| {
            view! {
              <button
                type="button"
                class="toggle-btn"
                class:active=move || period.get() == option
                aria-pressed=move || (period.get() == option).to_string()
                on:click=move |_| period.set(option)
              >
                {option.label()}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}
