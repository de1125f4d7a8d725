//! Declarative entrance and hover animations.
//!
//! A [`Timeline`] is a list of [`Tween`]s with positions relative to the
//! timeline end, in the style of `"-=0.6"` offsets. [`Timeline::schedule`]
//! resolves it into absolute start times that the browser layer turns into
//! CSS transitions. Times are in seconds.

use std::str::FromStr;

use crate::{
    config::AnimationConfig,
    error::{CoreError, Result},
};

/// Easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power1InOut,
    #[default]
    Power2Out,
    Power2In,
    BackOut,
}

impl Ease {
    /// CSS `transition-timing-function` value.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power1InOut => "cubic-bezier(0.45, 0, 0.55, 1)",
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::Power2In => "cubic-bezier(0.32, 0, 0.67, 0)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Offset from an element's resting state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self::rest()
    }
}

impl Motion {
    /// No offset.
    pub const fn rest() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    /// Fully transparent, otherwise at rest.
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::rest()
        }
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// CSS `transform` value.
    pub fn transform(&self) -> String {
        if self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 {
            return "none".to_string();
        }
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        parts.join(" ")
    }
}

/// Animation of every element matching `selector` from `from` to rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub selector: String,
    pub duration: f64,
    pub from: Motion,
    pub ease: Ease,
    /// Extra delay added per matched element.
    pub stagger: f64,
    pub delay: f64,
}

impl Tween {
    pub fn from(selector: impl Into<String>, duration: f64, from: Motion) -> Self {
        Self {
            selector: selector.into(),
            duration,
            from,
            ease: Ease::default(),
            stagger: 0.0,
            delay: 0.0,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

/// Where a tween starts within a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    End,
    /// `"-=d"`: `d` seconds before the current end.
    Overlap(f64),
    /// `"+=d"`: `d` seconds after the current end.
    Gap(f64),
    /// An absolute time.
    At(f64),
}

impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let number = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| CoreError::parse(format!("invalid timeline position: {s}")))
        };
        if s.is_empty() {
            Ok(Position::End)
        } else if let Some(rest) = s.strip_prefix("-=") {
            Ok(Position::Overlap(number(rest)?))
        } else if let Some(rest) = s.strip_prefix("+=") {
            Ok(Position::Gap(number(rest)?))
        } else {
            Ok(Position::At(number(s)?))
        }
    }
}

/// A tween with its resolved start time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTween {
    pub tween: Tween,
    pub start: f64,
}

impl ScheduledTween {
    /// Start time for the `index`-th matched element.
    pub fn element_start(&self, index: usize) -> f64 {
        self.start + self.tween.stagger * index as f64
    }

    /// Stretch or compress every time value by `1 / time_scale`.
    pub fn scaled(mut self, time_scale: f64) -> Self {
        self.start /= time_scale;
        self.tween.duration /= time_scale;
        self.tween.stagger /= time_scale;
        self
    }

    /// CSS `transition` value for one element.
    pub fn transition(&self, index: usize) -> String {
        let delay = self.element_start(index);
        let duration = self.tween.duration;
        let ease = self.tween.ease.css();
        format!("transform {duration}s {ease} {delay}s, opacity {duration}s {ease} {delay}s")
    }
}

/// Ordered tweens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<(Tween, Position)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the end of the timeline.
    pub fn then(self, tween: Tween) -> Self {
        self.at(tween, Position::End)
    }

    pub fn at(mut self, tween: Tween, position: Position) -> Self {
        self.steps.push((tween, position));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resolve positions to absolute start times.
    ///
    /// The timeline end is the latest finish of any tween placed so far;
    /// stagger is not counted towards it. Starts never go below zero.
    pub fn schedule(&self) -> Vec<ScheduledTween> {
        let mut end: f64 = 0.0;
        let mut scheduled = Vec::with_capacity(self.steps.len());

        for (tween, position) in &self.steps {
            let anchor = match *position {
                Position::End => end,
                Position::Overlap(d) => (end - d).max(0.0),
                Position::Gap(d) => end + d,
                Position::At(t) => t.max(0.0),
            };
            let start = anchor + tween.delay;
            end = end.max(start + tween.duration);
            scheduled.push(ScheduledTween {
                tween: tween.clone(),
                start,
            });
        }
        scheduled
    }

    /// Total running time, ignoring stagger.
    pub fn duration(&self) -> f64 {
        self.schedule()
            .iter()
            .map(|s| s.start + s.tween.duration)
            .fold(0.0, f64::max)
    }
}

/// What starts an animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Page load.
    Load,
    /// The element matching `target` scrolls to 80% of the viewport height.
    Scroll { target: String },
}

/// Viewport fraction at which scroll-triggered animations start.
pub const SCROLL_START: f64 = 0.8;

/// A triggered timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub trigger: Trigger,
    pub timeline: Timeline,
}

/// Transform applied while the pointer is over an element.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEffect {
    pub selector: &'static str,
    pub duration: f64,
    pub to: Motion,
    pub shadow: Option<&'static str>,
}

/// Everything animated on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationPlan {
    pub animations: Vec<Animation>,
    pub hovers: Vec<HoverEffect>,
}

impl AnimationPlan {
    /// Plan for the page identified by `page`.
    pub fn for_page(page: &str) -> Self {
        let mut animations = vec![load_animation()];
        animations.extend(scroll_animations());
        if let Some(timeline) = page_timeline(page) {
            animations.push(Animation {
                trigger: Trigger::Load,
                timeline,
            });
        }
        Self {
            animations,
            hovers: hover_effects(),
        }
    }
}

/// Time scale for playback, `None` when animations are disabled.
pub fn time_scale(config: &AnimationConfig, reduced_motion: bool) -> Option<f64> {
    if !config.enabled {
        None
    } else if reduced_motion {
        Some(config.reduced_motion_time_scale)
    } else {
        Some(1.0)
    }
}

fn rise(selector: &str, duration: f64, y: f64) -> Tween {
    Tween::from(selector, duration, Motion::hidden().y(y))
}

fn load_animation() -> Animation {
    let timeline = Timeline::new()
        .then(rise(".hero-title", 1.0, 50.0))
        .at(rise(".hero-subtitle", 0.8, 30.0), Position::Overlap(0.6))
        .at(rise(".hero-search", 0.8, 30.0), Position::Overlap(0.4))
        .at(rise(".trending-section", 0.8, 30.0), Position::Overlap(0.4))
        .at(
            Tween::from(".hero-visual", 1.2, Motion::hidden().x(100.0)),
            Position::Overlap(1.0),
        )
        .at(rise(".nav-container", 0.8, -20.0).delay(0.2), Position::At(0.0))
        .at(rise(".trending-bar", 0.8, 20.0).delay(1.5), Position::At(0.0));

    Animation {
        trigger: Trigger::Load,
        timeline,
    }
}

fn scroll_animations() -> Vec<Animation> {
    let on = |target: &str, timeline: Timeline| Animation {
        trigger: Trigger::Scroll {
            target: target.to_string(),
        },
        timeline,
    };

    vec![
        on(
            ".alternative-data",
            Timeline::new()
                .at(rise(".alternative-data .section-title", 1.0, 50.0), Position::At(0.0))
                .at(
                    rise(".alternative-data .section-subtitle", 0.8, 30.0).delay(0.2),
                    Position::At(0.0),
                )
                .at(
                    rise(".alternative-data .btn", 0.8, 30.0).delay(0.4),
                    Position::At(0.0),
                ),
        ),
        on(
            ".pricing",
            Timeline::new().then(rise(".pricing-card", 0.8, 50.0).stagger(0.2)),
        ),
        on(
            ".trusted-by",
            Timeline::new().then(rise(".logo-grid img", 0.6, 30.0).stagger(0.1)),
        ),
        on(
            ".faq",
            Timeline::new().then(
                Tween::from(".faq-item", 0.6, Motion::hidden().x(-30.0)).stagger(0.1),
            ),
        ),
    ]
}

fn table_rows(table: &str) -> Tween {
    rise(&format!("{table} tbody tr"), 0.6, 20.0).stagger(0.05)
}

fn chart(selector: &str) -> Tween {
    Tween::from(selector, 1.0, Motion::hidden().scale(0.8)).ease(Ease::BackOut)
}

fn page_timeline(page: &str) -> Option<Timeline> {
    let both = |first: Tween, second: Tween| {
        Timeline::new()
            .at(first, Position::At(0.0))
            .at(second, Position::At(0.0))
    };

    match page {
        "insider-trading" => Some(both(
            table_rows(".insider-trading-table"),
            chart(".insider-chart"),
        )),
        "government-contracts" => Some(both(
            chart(".contracts-chart"),
            table_rows(".contracts-table"),
        )),
        "corporate-lobbying" => Some(both(
            table_rows(".lobbying-table"),
            chart(".lobbying-chart"),
        )),
        "patent-search" => Some(Timeline::new().then(chart(".patent-chart"))),
        _ if page.contains("stocks") => Some(Timeline::new().then(chart(".stock-chart"))),
        _ => None,
    }
}

fn hover_effects() -> Vec<HoverEffect> {
    vec![
        HoverEffect {
            selector: ".btn",
            duration: 0.3,
            to: Motion::rest().scale(1.05),
            shadow: None,
        },
        HoverEffect {
            selector: ".stock-item",
            duration: 0.3,
            to: Motion::rest().y(-2.0),
            shadow: Some("0 4px 20px rgba(76, 175, 80, 0.3)"),
        },
        HoverEffect {
            selector: ".pricing-card",
            duration: 0.3,
            to: Motion::rest().y(-5.0),
            shadow: Some("0 10px 30px rgba(76, 175, 80, 0.2)"),
        },
        HoverEffect {
            selector: ".trending-person .avatar",
            duration: 0.3,
            to: Motion::rest().scale(1.1),
            shadow: None,
        },
    ]
}
