// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the info bubble demo.
//!
//! The `App` struct wires together the two demo screens, the shared
//! [`Stage`] host and [`EventLog`] delegate, and the user's settings.
//! Policy decisions (window settings, bubble wiring) stay close to the main
//! update loop so user-facing behavior is easy to audit.

pub mod event_log;
pub mod markup;
mod message;
pub mod paths;
mod screen;
pub mod stage;
mod subscription;
mod view;

pub use event_log::EventLog;
pub use markup::{MarkupAction, MarkupDocument};
pub use message::{Flags, Message};
pub use screen::Screen;
pub use stage::Stage;

use crate::config;
use crate::ui::bubble::{Configuration, InfoBubble};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::sync::Arc;

/// Default window width.
const WINDOW_DEFAULT_WIDTH: f32 = 480.0;

/// Default window height.
const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Minimum window width; wide enough for a one-line default bubble.
const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    /// Bubble configuration from `settings.toml`.
    base_config: Configuration,
    stage: Arc<Stage>,
    event_log: Arc<EventLog>,
    programmatic: InfoBubble,
    markup: MarkupDocument,
    markup_bubble: InfoBubble,
    /// Startup problem shown above the screen content.
    warning: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("programmatic", &self.programmatic.phase())
            .field("markup_bubble", &self.markup_bubble.phase())
            .field("stage", &self.stage.children())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings for the demo.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
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
        Self::with_settings(
            Screen::default(),
            &config::Config::default(),
            MarkupDocument::builtin(),
        )
    }
}

impl App {
    /// Initializes application state from the CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (markup, markup_warning) = markup::load_or_builtin(flags.markup_path.as_deref());

        let mut app = Self::with_settings(flags.screen.unwrap_or_default(), &config, markup);
        app.warning = app
            .warning
            .take()
            .or(config_warning)
            .or(markup_warning);

        (app, Task::none())
    }

    fn with_settings(screen: Screen, config: &config::Config, markup: MarkupDocument) -> Self {
        let mut warning = None;
        let base_config = config.bubble_configuration().unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring [bubble] settings");
            warning = Some(err.to_string());
            Configuration::default()
        });

        let stage = Arc::new(Stage::new());

        let mut programmatic = InfoBubble::with_config(Configuration {
            auto_remove_from_host: true,
            ..base_config
        });
        programmatic.attach_to(&stage);

        let mut markup_bubble = InfoBubble::with_config(base_config);
        markup_bubble.attach_to(&stage);

        Self {
            screen,
            theme_mode: config.general.theme_mode,
            base_config,
            stage,
            event_log: Arc::new(EventLog::new()),
            programmatic,
            markup,
            markup_bubble,
            warning,
        }
    }

    fn title(&self) -> String {
        format!("Info Bubble - {}", self.screen)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating())
    }

    /// Whether any bubble still needs ticks.
    fn is_animating(&self) -> bool {
        self.programmatic.is_animating() || self.markup_bubble.is_animating()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchScreen(screen) => {
                self.screen = screen;
            }
            Message::ShowProgrammatic => self.show_programmatic(),
            Message::RunAction(index) => self.run_action(index),
            Message::Tick(now) => {
                self.programmatic.tick(now);
                self.markup_bubble.tick(now);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            warning: self.warning.as_deref(),
            programmatic: &self.programmatic,
            markup_bubble: &self.markup_bubble,
            markup: &self.markup,
            stage: &self.stage,
            events: self.event_log.lines(),
        })
    }

    fn show_programmatic(&mut self) {
        // The bubble detaches itself after each auto-hide.
        if !self.programmatic.is_attached() {
            self.programmatic.attach_to(&self.stage);
        }

        self.programmatic.set_label_text("Hello World");
        let log = Arc::clone(&self.event_log);
        self.programmatic
            .set_completion_handler(move || log.record("The bubble completion handler"));
        self.programmatic.show();
    }

    fn run_action(&mut self, index: usize) {
        let Some(action) = self.markup.action(index) else {
            tracing::warn!(index, "no markup action at index");
            return;
        };

        match action.configuration(self.base_config) {
            Ok(Some(config)) => self.markup_bubble.set_config(config),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(action = %action.name, %err, "keeping current bubble style");
            }
        }

        if action.delegate {
            self.markup_bubble.set_delegate(&self.event_log);
        }
        self.markup_bubble.set_label_text(action.text.as_str());
        self.markup_bubble.show();
    }
}
