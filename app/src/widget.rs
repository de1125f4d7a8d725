//! Widget registration and mounting.

use std::any::Any;

use leptos::{mount::mount_to, prelude::*};
use quiver_ui::dom;
use web_sys::HtmlElement;

/// Where a widget attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPoint {
    /// Element with this id.
    Id(&'static str),
    /// The document body, for page-wide behaviour.
    Body,
}

impl MountPoint {
    /// The element, if present on this page.
    pub fn resolve(self) -> Option<HtmlElement> {
        match self {
            MountPoint::Id(id) => dom::element_by_id(id),
            MountPoint::Body => document().body(),
        }
    }
}

/// A self-contained piece of page behaviour.
pub trait Widget {
    fn name(&self) -> &'static str;

    fn mount_point(&self) -> MountPoint;

    /// Attach to `root`.
    fn mount(&mut self, root: HtmlElement);

    /// Detach, removing listeners and rendered content.
    fn unmount(&mut self);
}

/// Handle of a Leptos view mounted into an element. Dropping it unmounts.
#[derive(Default)]
pub struct Mounted(Option<Box<dyn Any>>);

impl Mounted {
    pub fn mount<F, N>(&mut self, root: HtmlElement, view: F)
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
        N::State: 'static,
    {
        self.0 = Some(Box::new(mount_to(root, view)));
    }

    pub fn unmount(&mut self) {
        self.0 = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.0.is_some()
    }
}

/// Ordered widgets; a widget mounts only when its mount point exists.
#[derive(Default)]
pub struct WidgetList {
    widgets: Vec<Box<dyn Widget>>,
    mounted: Vec<bool>,
}

impl WidgetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, widget: impl Widget + 'static) -> Self {
        self.widgets.push(Box::new(widget));
        self.mounted.push(false);
        self
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Mount every widget whose mount point is on the page.
    pub fn mount_all(&mut self) {
        for (widget, mounted) in self.widgets.iter_mut().zip(self.mounted.iter_mut()) {
            if *mounted {
                continue;
            }
            match widget.mount_point().resolve() {
                Some(root) => {
                    widget.mount(root);
                    *mounted = true;
                    log::debug!("Mounted {}", widget.name());
                }
                None => log::debug!("Skipped {}: mount point absent", widget.name()),
            }
        }
    }

    /// Unmount in reverse order.
    pub fn unmount_all(&mut self) {
        for (widget, mounted) in self
            .widgets
            .iter_mut()
            .zip(self.mounted.iter_mut())
            .rev()
        {
            if *mounted {
                widget.unmount();
                *mounted = false;
            }
        }
    }
}
