//! The site's widgets.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::{prelude::*, task::spawn_local};
use quiver_core::{
    animation::{AnimationPlan, time_scale},
    config::{PricingConfig, SearchConfig},
    faq::FaqEntry,
    nav::NavItem,
};
use quiver_fragments::{FragmentLoader, FragmentName, FragmentState};
use quiver_ui::{
    AnimationDirector, BackToTop, FaqAccordion, GlobalActions, LocalStorageStore, Navigation,
    PricingToggle, SearchBox, SearchShortcut, SharedSession, dom, refresh_theme_toggle,
};
use web_sys::HtmlElement;

use crate::widget::{MountPoint, Mounted, Widget, WidgetList};

/// Header or footer fragment, plus the widgets that live inside it.
pub struct FragmentWidget {
    name: FragmentName,
    loader: FragmentLoader,
    current_page: String,
    dependents: Rc<RefCell<WidgetList>>,
    root: Option<HtmlElement>,
    live: Rc<Cell<bool>>,
}

impl FragmentWidget {
    pub fn new(name: FragmentName, loader: FragmentLoader, current_page: String) -> Self {
        Self {
            name,
            loader,
            current_page,
            dependents: Rc::default(),
            root: None,
            live: Rc::new(Cell::new(false)),
        }
    }

    /// Widgets mounted once the fragment markup is in place.
    pub fn with_dependents(mut self, dependents: WidgetList) -> Self {
        self.dependents = Rc::new(RefCell::new(dependents));
        self
    }
}

impl Widget for FragmentWidget {
    fn name(&self) -> &'static str {
        self.name.as_str()
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Id(self.name.placeholder_id())
    }

    fn mount(&mut self, root: HtmlElement) {
        self.root = Some(root.clone());
        self.live.set(true);

        let name = self.name;
        let loader = self.loader.clone();
        let current_page = self.current_page.clone();
        let dependents = self.dependents.clone();
        let live = self.live.clone();

        spawn_local(async move {
            let state = match loader.load(name.as_str()).await {
                Ok(html) => FragmentState::Loaded(html),
                Err(e) => {
                    log::error!("Error loading {name}: {e}");
                    FragmentState::Failed(e.to_string())
                }
            };
            if !live.get() {
                return;
            }

            if let Some(markup) = state.markup(name.as_str()) {
                root.set_inner_html(&markup);
            }
            if matches!(state, FragmentState::Loaded(_)) {
                if name == FragmentName::Header {
                    dom::mark_active_links(&current_page);
                }
                dependents.borrow_mut().mount_all();
            }
        });
    }

    fn unmount(&mut self) {
        self.live.set(false);
        self.dependents.borrow_mut().unmount_all();
        if let Some(root) = self.root.take() {
            root.set_inner_html("");
        }
    }
}

/// Search box rendered into an element id.
pub struct SearchWidget {
    id: &'static str,
    session: SharedSession,
    config: SearchConfig,
    view: Mounted,
}

impl SearchWidget {
    pub fn new(id: &'static str, session: SharedSession, config: SearchConfig) -> Self {
        Self {
            id,
            session,
            config,
            view: Mounted::default(),
        }
    }
}

impl Widget for SearchWidget {
    fn name(&self) -> &'static str {
        self.id
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Id(self.id)
    }

    fn mount(&mut self, root: HtmlElement) {
        let session = self.session.clone();
        let config = self.config.clone();
        self.view
            .mount(root, move || view! { <SearchBox session=session config=config /> });
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }
}

/// Main navigation inside the header.
pub struct NavigationWidget {
    items: Vec<NavItem>,
    current_page: String,
    path: String,
    view: Mounted,
}

impl NavigationWidget {
    pub fn new(items: Vec<NavItem>, current_page: String, path: String) -> Self {
        Self {
            items,
            current_page,
            path,
            view: Mounted::default(),
        }
    }
}

impl Widget for NavigationWidget {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Id("main-nav")
    }

    fn mount(&mut self, root: HtmlElement) {
        let items = self.items.clone();
        let current_page = self.current_page.clone();
        let path = self.path.clone();
        self.view.mount(root, move || {
            view! { <Navigation items=items current_page=current_page path=path /> }
        });
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }
}

/// Billing period switch on the pricing section.
pub struct PricingWidget {
    config: PricingConfig,
    view: Mounted,
}

impl PricingWidget {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            view: Mounted::default(),
        }
    }
}

impl Widget for PricingWidget {
    fn name(&self) -> &'static str {
        "pricing"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Id("pricing-toggle")
    }

    fn mount(&mut self, root: HtmlElement) {
        let config = self.config.clone();
        self.view
            .mount(root, move || view! { <PricingToggle config=config /> });
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }
}

/// FAQ accordion built from the configured entries.
pub struct FaqWidget {
    entries: Vec<FaqEntry>,
    view: Mounted,
}

impl FaqWidget {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries,
            view: Mounted::default(),
        }
    }
}

impl Widget for FaqWidget {
    fn name(&self) -> &'static str {
        "faq"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Id("faq-list")
    }

    fn mount(&mut self, root: HtmlElement) {
        let entries = self.entries.clone();
        self.view
            .mount(root, move || view! { <FaqAccordion entries=entries /> });
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }
}

/// Page-wide keyboard shortcuts and the back-to-top button.
#[derive(Default)]
pub struct ChromeWidget {
    view: Mounted,
}

impl Widget for ChromeWidget {
    fn name(&self) -> &'static str {
        "chrome"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Body
    }

    fn mount(&mut self, root: HtmlElement) {
        self.view.mount(root, || {
            view! {
              <SearchShortcut />
              <BackToTop />
            }
        });
    }

    fn unmount(&mut self) {
        self.view.unmount();
    }
}

/// Entrance, scroll and hover animations.
pub struct AnimationWidget {
    plan: AnimationPlan,
    time_scale: Option<f64>,
    director: Option<AnimationDirector>,
}

impl AnimationWidget {
    pub fn new(plan: AnimationPlan, time_scale: Option<f64>) -> Self {
        Self {
            plan,
            time_scale,
            director: None,
        }
    }

    /// Plan for `current_page`, honouring the reduced-motion preference.
    pub fn for_page(current_page: &str, config: &quiver_core::config::AnimationConfig) -> Self {
        let reduced = dom::prefers_reduced_motion();
        if reduced {
            log::info!("Reduced motion preference detected, limiting animations");
        }
        Self::new(
            AnimationPlan::for_page(current_page),
            time_scale(config, reduced),
        )
    }
}

impl Widget for AnimationWidget {
    fn name(&self) -> &'static str {
        "animations"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Body
    }

    fn mount(&mut self, _root: HtmlElement) {
        match self.time_scale {
            Some(scale) => self.director = Some(AnimationDirector::start(&self.plan, scale)),
            None => log::info!("Animations disabled"),
        }
    }

    fn unmount(&mut self) {
        if let Some(director) = self.director.take() {
            director.stop();
        }
    }
}

/// `data-action` buttons and the theme toggle.
pub struct ActionsWidget {
    store: LocalStorageStore,
    actions: Option<GlobalActions>,
}

impl ActionsWidget {
    pub fn new(store: LocalStorageStore) -> Self {
        Self {
            store,
            actions: None,
        }
    }
}

impl Widget for ActionsWidget {
    fn name(&self) -> &'static str {
        "actions"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Body
    }

    fn mount(&mut self, _root: HtmlElement) {
        self.actions = Some(GlobalActions::install(self.store.clone()));
    }

    fn unmount(&mut self) {
        if let Some(actions) = self.actions.take() {
            actions.uninstall();
        }
    }
}

/// Theme icon on the toggle injected with the header.
#[derive(Default)]
pub struct ThemeToggleWidget;

impl Widget for ThemeToggleWidget {
    fn name(&self) -> &'static str {
        "theme-toggle"
    }

    fn mount_point(&self) -> MountPoint {
        MountPoint::Body
    }

    fn mount(&mut self, _root: HtmlElement) {
        refresh_theme_toggle();
    }

    fn unmount(&mut self) {}
}
