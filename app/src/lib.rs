//! Quiver site runtime.
//!
//! Builds the page's widgets from an explicit [`AppContext`] and mounts the
//! ones whose mount points exist on the current page.

pub mod context;
pub mod widget;
pub mod widgets;

pub use context::AppContext;
use quiver_core::Config;
use quiver_fragments::FragmentName;
pub use widget::{MountPoint, Mounted, Widget, WidgetList};
use widgets::{
    ActionsWidget, AnimationWidget, ChromeWidget, FaqWidget, FragmentWidget, NavigationWidget,
    PricingWidget, SearchWidget, ThemeToggleWidget,
};

/// Id of the search box inside the header fragment.
pub const GLOBAL_SEARCH_ID: &str = "global-search";
/// Id of the search box in a page's hero section.
pub const HERO_SEARCH_ID: &str = "hero-search";

/// The running site.
pub struct App {
    widgets: WidgetList,
}

impl App {
    pub fn new(ctx: &AppContext) -> Self {
        let header_widgets = WidgetList::new()
            .with(NavigationWidget::new(
                ctx.config.nav.clone(),
                ctx.current_page.clone(),
                ctx.path.clone(),
            ))
            .with(SearchWidget::new(
                GLOBAL_SEARCH_ID,
                ctx.session.clone(),
                ctx.config.search.clone(),
            ))
            .with(ThemeToggleWidget);

        let widgets = WidgetList::new()
            .with(
                FragmentWidget::new(
                    FragmentName::Header,
                    ctx.loader.clone(),
                    ctx.current_page.clone(),
                )
                .with_dependents(header_widgets),
            )
            .with(FragmentWidget::new(
                FragmentName::Footer,
                ctx.loader.clone(),
                ctx.current_page.clone(),
            ))
            .with(SearchWidget::new(
                HERO_SEARCH_ID,
                ctx.session.clone(),
                ctx.config.search.clone(),
            ))
            .with(PricingWidget::new(ctx.config.pricing.clone()))
            .with(FaqWidget::new(ctx.config.faq.clone()))
            .with(ChromeWidget::default())
            .with(AnimationWidget::for_page(
                &ctx.current_page,
                &ctx.config.animation,
            ))
            .with(ActionsWidget::new(ctx.store.clone()));

        Self { widgets }
    }

    pub fn mount(&mut self) {
        self.widgets.mount_all();
    }

    pub fn unmount(&mut self) {
        self.widgets.unmount_all();
    }
}

/// Build the context for the current page and mount every widget.
pub fn start(config: Config) -> App {
    let ctx = AppContext::from_location(config);
    log::info!("Starting Quiver on page '{}'", ctx.current_page);

    let mut app = App::new(&ctx);
    app.mount();
    app
}
