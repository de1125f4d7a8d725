//! Plays [`AnimationPlan`]s with CSS transitions.
//!
//! Each tween first puts its elements in the `from` state, forces a style
//! flush, then transitions them back to rest with the scheduled delay.

use std::{cell::RefCell, rc::Rc};

use leptos::{ev, prelude::*};
use quiver_core::animation::{
    AnimationPlan, HoverEffect, SCROLL_START, ScheduledTween, Trigger,
};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::HtmlElement;

use crate::dom;

const SHADOW_REST: &str = "0 0 0 rgba(76, 175, 80, 0)";

/// Scroll-triggered tweens waiting for their target to come into view.
type Pending = Rc<RefCell<Vec<(String, Vec<ScheduledTween>)>>>;

/// Running animations for one page.
pub struct AnimationDirector {
    scroll: Option<WindowListenerHandle>,
    hovers: Vec<HoverBinding>,
}

impl AnimationDirector {
    /// Start every animation in `plan`, played `time_scale` times faster.
    pub fn start(plan: &AnimationPlan, time_scale: f64) -> Self {
        let pending: Pending = Rc::default();

        for animation in &plan.animations {
            let tweens: Vec<_> = animation
                .timeline
                .schedule()
                .into_iter()
                .map(|t| t.scaled(time_scale))
                .collect();

            match &animation.trigger {
                Trigger::Load => tweens.iter().for_each(play),
                Trigger::Scroll { target } => {
                    tweens.iter().for_each(prepare);
                    pending.borrow_mut().push((target.clone(), tweens));
                }
            }
        }

        release_visible(&pending);
        let scroll = (!pending.borrow().is_empty()).then(|| {
            let pending = pending.clone();
            window_event_listener(ev::scroll, move |_| release_visible(&pending))
        });

        let hovers = plan
            .hovers
            .iter()
            .flat_map(|effect| {
                dom::elements(effect.selector)
                    .into_iter()
                    .map(|el| HoverBinding::attach(el, effect, time_scale))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Started {} animations, {} hover targets",
            plan.animations.len(),
            hovers.len()
        );
        Self { scroll, hovers }
    }

    /// Detach scroll and hover listeners. Running transitions finish.
    pub fn stop(mut self) {
        if let Some(handle) = self.scroll.take() {
            handle.remove();
        }
        self.hovers.clear();
    }
}

fn release_visible(pending: &Pending) {
    let limit = dom::viewport_height() * SCROLL_START;
    pending.borrow_mut().retain(|(target, tweens)| {
        let in_view = dom::element(target)
            .is_some_and(|el| el.get_bounding_client_rect().top() <= limit);
        if in_view {
            tweens.iter().for_each(release);
        }
        !in_view
    });
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        log::warn!("Could not set {property} on animated element");
    }
}

/// Put the tween's elements in their starting state.
fn prepare(tween: &ScheduledTween) {
    let from = tween.tween.from;
    for el in dom::elements(&tween.tween.selector) {
        set_style(&el, "transition", "none");
        set_style(&el, "transform", &from.transform());
        set_style(&el, "opacity", &from.opacity.to_string());
    }
}

/// Transition prepared elements back to rest.
fn release(tween: &ScheduledTween) {
    for (i, el) in dom::elements(&tween.tween.selector).into_iter().enumerate() {
        // Reading layout flushes the starting styles.
        let _ = el.offset_width();
        set_style(&el, "transition", &tween.transition(i));
        set_style(&el, "transform", "none");
        set_style(&el, "opacity", "1");
    }
}

fn play(tween: &ScheduledTween) {
    prepare(tween);
    release(tween);
}

/// Enter/leave listeners on one element.
struct HoverBinding {
    element: HtmlElement,
    enter: Closure<dyn Fn()>,
    leave: Closure<dyn Fn()>,
}

impl HoverBinding {
    fn attach(element: HtmlElement, effect: &HoverEffect, time_scale: f64) -> Self {
        let duration = effect.duration / time_scale;
        let transition = format!("transform {duration}s ease-out, box-shadow {duration}s ease-out");
        let to = effect.to.transform();
        let shadow = effect.shadow;

        let el = element.clone();
        let hover_transition = transition.clone();
        let enter = Closure::<dyn Fn()>::new(move || {
            set_style(&el, "transition", &hover_transition);
            set_style(&el, "transform", &to);
            if let Some(shadow) = shadow {
                set_style(&el, "box-shadow", shadow);
            }
        });

        let el = element.clone();
        let leave = Closure::<dyn Fn()>::new(move || {
            set_style(&el, "transition", &transition);
            set_style(&el, "transform", "none");
            if shadow.is_some() {
                set_style(&el, "box-shadow", SHADOW_REST);
            }
        });

        let _ = element
            .add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        let _ = element
            .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());

        Self {
            element,
            enter,
            leave,
        }
    }
}

impl Drop for HoverBinding {
    fn drop(&mut self) {
        let _ = self.element.remove_event_listener_with_callback(
            "mouseenter",
            self.enter.as_ref().unchecked_ref(),
        );
        let _ = self.element.remove_event_listener_with_callback(
            "mouseleave",
            self.leave.as_ref().unchecked_ref(),
        );
    }
}
