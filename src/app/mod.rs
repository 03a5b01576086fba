// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the overlays,
//! and the host clock.
//!
//! The `App` struct owns every stateful piece of the presentation surface and
//! translates host events (scroll, pointer, frames, ticks, keys) into calls on
//! those pieces. Only this module knows about iced tasks and subscriptions;
//! the state types it drives are plain data that can be tested headless.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, ItemId};
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::notifier::{ExternalNotifier, OrderLink};
use crate::ui::disclosure::DisclosureController;
use crate::ui::overlays::{self, ContactForms};
use crate::ui::page_layout::{PageLayout, RevealTarget};
use crate::ui::state::{
    CardHover, Damping, PageViewport, PointerFollowAnimator, RevealGroup, ScrollBoundaryWatcher,
    SmoothScroll, TimedTrigger,
};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// Id of the page scrollable, targeted by programmatic scrolling.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    layout: PageLayout,
    viewport: PageViewport,
    animator: PointerFollowAnimator,
    reveals: RevealGroup<RevealTarget>,
    hovers: HashMap<ItemId, CardHover>,
    /// Opens the consultation overlay once, some time after launch.
    trigger: TimedTrigger<Message>,
    watcher: ScrollBoundaryWatcher,
    smooth_scroll: SmoothScroll,
    /// Last offset requested by the smooth scroll, to tell it apart from
    /// user scrolling.
    scroll_target: Option<f32>,
    disclosure: DisclosureController,
    forms: ContactForms,
    /// `None` when the configured endpoint is unusable.
    notifier: Option<ExternalNotifier>,
    order_link: OrderLink,
    /// Translated text of the notice strip.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("offset", &self.viewport.offset)
            .field("disclosure", self.disclosure.state())
            .field("trigger", &self.trigger)
            .finish()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        // Close requests go through `update` so everything is torn down first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(Config::default(), I18n::default(), Instant::now())
    }
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::from_parts(config, i18n, Instant::now());
        if let Some(key) = config_warning {
            app.notice = Some(app.i18n.tr(&key));
        }
        (app, Task::none())
    }

    /// Builds the state as it is right after mount, with the consultation
    /// trigger armed relative to `now`.
    fn from_parts(config: Config, i18n: I18n, now: Instant) -> Self {
        let size = default_window_size();
        let catalog = Catalog::builtin();
        let layout = PageLayout::compute(size, &catalog);

        let mut viewport = PageViewport::new(size);
        viewport.update(0.0, size, layout.content_height());

        let mut animator = PointerFollowAnimator::new(size, Damping::new(config.motion.damping()));
        animator.activate(size);

        let reveals = RevealGroup::new(layout.reveal_targets(), config.motion.reveal_threshold());

        let mut watcher = ScrollBoundaryWatcher::new(config.scroll.boundary_anchor.clone());
        watcher.attach(&layout.anchors(0.0));

        let mut trigger = TimedTrigger::new();
        if let Err(err) = trigger.start(now, config.disclosure.consultation_delay(), || {
            Message::Overlay(overlays::Message::OpenConsultation)
        }) {
            tracing::warn!(error = %err, "consultation trigger not armed");
        }

        let notifier = match ExternalNotifier::from_config(&config.notifier) {
            Ok(notifier) => Some(notifier),
            Err(err) => {
                tracing::warn!(error = %err, "contact delivery disabled");
                None
            }
        };
        let order_link = OrderLink::from_config(&config.notifier);

        let mut app = Self {
            i18n,
            catalog,
            layout,
            viewport,
            animator,
            reveals,
            hovers: HashMap::new(),
            trigger,
            watcher,
            smooth_scroll: SmoothScroll::default(),
            scroll_target: None,
            disclosure: DisclosureController::new(),
            forms: ContactForms::default(),
            notifier,
            order_link,
            notice: None,
        };
        app.refresh_scroll_state();
        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(
                self.animator.is_active() || self.smooth_scroll.is_animating(),
            ),
            subscription::create_tick_subscription(self.trigger.is_armed()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(page_message) => self.handle_page_message(page_message),
            Message::Overlay(overlay_message) => self.handle_overlay_message(overlay_message),
            Message::Scrolled(viewport) => {
                self.handle_scrolled(
                    viewport.absolute_offset().y,
                    viewport.bounds().size(),
                    viewport.content_bounds().height,
                );
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.animator.on_pointer_move(position);
                Task::none()
            }
            Message::Escape => {
                self.disclosure.on_escape();
                Task::none()
            }
            Message::Resized(size) => {
                self.handle_resized(size);
                Task::none()
            }
            Message::Frame(_instant) => self.handle_frame(),
            Message::Tick(now) => match self.trigger.poll(now) {
                Some(fired) => self.update(fired),
                None => Task::none(),
            },
            Message::CloseRequested(window_id) => {
                tracing::info!(?window_id, "close requested");
                self.teardown();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            layout: &self.layout,
            reveals: &self.reveals,
            hovers: &self.hovers,
            disclosure: &self.disclosure,
            forms: &self.forms,
            past_boundary: self.watcher.is_past_boundary(),
            notice: self.notice.as_deref(),
            pointer: self.animator.is_active().then(|| self.animator.sample()),
        })
    }

    /// Stops every clock and listener and releases the scroll lock.
    fn teardown(&mut self) {
        self.disclosure.teardown();
        self.trigger.cancel();
        self.watcher.detach();
        self.reveals.detach_all();
        self.animator.deactivate();
        self.smooth_scroll.cancel();
        self.scroll_target = None;
    }
}
