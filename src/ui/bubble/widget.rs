// SPDX-License-Identifier: MPL-2.0
//! Bubble state and its show/hide lifecycle.
//!
//! ```text
//!            show()                 fade done
//!   Hidden ──────────▶ Showing ──────────────▶ Visible
//!     ▲                                          │
//!     │  fade done                 hide() or     │
//!     └──────────── Hiding ◀──── auto-hide ──────┘
//! ```
//!
//! Starting a fade while another one runs interrupts the running fade: it
//! completes as unfinished and none of its completion effects happen.

use super::animation::{Easing, Fade, FadeKind, Timing};
use super::configuration::Configuration;
use super::label::Label;
use super::observer::{BubbleId, CompletionHandler, Delegate, Host};
use crate::config::defaults::AUTO_HIDE_FADE_MS;
use crate::ui::design_tokens::opacity;
use iced::Color;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

/// Visibility phase of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Transparent and not rendered.
    #[default]
    Hidden,
    /// Fading in.
    Showing,
    /// Fully opaque.
    Visible,
    /// Fading out.
    Hiding,
}

/// Transient overlay that shows a short message.
pub struct InfoBubble {
    id: BubbleId,
    config: Configuration,
    label: Label,
    label_text: String,
    delegate: Option<Weak<dyn Delegate>>,
    completion_handler: Option<CompletionHandler>,
    host: Option<Weak<dyn Host>>,
    corner_radius: f32,
    background_color: Color,
    alpha: f32,
    is_hidden: bool,
    phase: Phase,
    fade: Option<Fade>,
}

impl fmt::Debug for InfoBubble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoBubble")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("alpha", &self.alpha)
            .field("label_text", &self.label_text)
            .field("has_delegate", &self.delegate.is_some())
            .field("has_completion_handler", &self.completion_handler.is_some())
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Default for InfoBubble {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoBubble {
    /// Creates a hidden bubble with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Configuration::default())
    }

    /// Creates a hidden bubble with the given configuration.
    #[must_use]
    pub fn with_config(config: Configuration) -> Self {
        let mut bubble = Self {
            id: BubbleId::new(),
            label: Label::new(&config),
            config,
            label_text: String::new(),
            delegate: None,
            completion_handler: None,
            host: None,
            corner_radius: config.corner_radius,
            background_color: config.background_color,
            alpha: opacity::TRANSPARENT,
            is_hidden: true,
            phase: Phase::Hidden,
            fade: None,
        };
        bubble.configure_view();
        bubble.configure_label_view();
        bubble
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> BubbleId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[must_use]
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Current opacity in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the bubble is excluded from rendering.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a fade is scheduled or running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Direction and timing of the scheduled fade, if any.
    #[must_use]
    pub fn animation_target(&self) -> Option<(FadeKind, Timing)> {
        self.fade.as_ref().map(|fade| (fade.kind(), fade.timing()))
    }

    /// Whether the bubble is attached to a live host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.host
            .as_ref()
            .is_some_and(|host| host.strong_count() > 0)
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Replaces the configuration and restyles the bubble and its label.
    ///
    /// Restyling resets the bubble to hidden and transparent. A running fade
    /// is interrupted.
    pub fn set_config(&mut self, config: Configuration) {
        self.interrupt();
        self.config = config;
        self.configure_view();
        self.configure_label_view();
    }

    /// Updates the label text without touching visibility.
    pub fn set_label_text(&mut self, text: impl Into<String>) {
        self.label_text = text.into();
        self.label.set_text(&self.label_text);
    }

    /// Registers the delegate notified on shown/hidden.
    pub fn set_delegate<D: Delegate + 'static>(&mut self, delegate: &Arc<D>) {
        let delegate: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Registers the callback run after each completed hide.
    ///
    /// The callback stays installed after it runs.
    pub fn set_completion_handler(&mut self, handler: impl FnMut() + Send + 'static) {
        self.completion_handler = Some(Box::new(handler));
    }

    pub fn clear_completion_handler(&mut self) {
        self.completion_handler = None;
    }

    /// Attaches the bubble to a host, replacing any previous host.
    pub fn attach_to<H: Host + 'static>(&mut self, host: &Arc<H>) {
        self.remove_from_host();
        host.add_child(self.id);
        let host: Weak<H> = Arc::downgrade(host);
        self.host = Some(host);
        tracing::debug!(bubble = %self.id, "attached to host");
    }

    /// Detaches the bubble from its host, if any.
    pub fn remove_from_host(&mut self) {
        if let Some(host) = self.host.take().and_then(|host| host.upgrade()) {
            host.remove_child(self.id);
            tracing::debug!(bubble = %self.id, "removed from host");
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Shows the bubble with the default 0.3s ease-in-out fade.
    pub fn show(&mut self) {
        self.show_with_timing(Timing::default());
    }

    /// Shows the bubble with a custom fade duration.
    pub fn show_for(&mut self, duration: Duration) {
        self.show_with_timing(Timing {
            duration,
            ..Timing::default()
        });
    }

    /// Shows the bubble with a custom fade duration after a delay.
    pub fn show_after(&mut self, duration: Duration, delay: Duration) {
        self.show_with_timing(Timing {
            duration,
            delay,
            ..Timing::default()
        });
    }

    /// Shows the bubble with full control over the fade.
    pub fn show_with(&mut self, duration: Duration, delay: Duration, easing: Easing) {
        self.show_with_timing(Timing::new(duration, delay, easing));
    }

    /// Hides the bubble with the default 0.3s ease-in-out fade.
    pub fn hide(&mut self) {
        self.hide_with_timing(Timing::default());
    }

    /// Hides the bubble with a custom fade duration after a delay.
    pub fn hide_after(&mut self, duration: Duration, delay: Duration) {
        self.hide_with_timing(Timing {
            duration,
            delay,
            ..Timing::default()
        });
    }

    /// Hides the bubble with full control over the fade.
    pub fn hide_with(&mut self, duration: Duration, delay: Duration, easing: Easing) {
        self.hide_with_timing(Timing::new(duration, delay, easing));
    }

    /// Advances the running fade to `now`, running completion effects when it ends.
    pub fn tick(&mut self, now: Instant) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };

        let sample = fade.sample(now);
        self.alpha = sample.alpha;

        if fade.kind() == FadeKind::Out && self.phase != Phase::Hiding && !fade.in_delay(now) {
            self.phase = Phase::Hiding;
        }

        if sample.finished {
            let kind = fade.kind();
            self.fade = None;
            self.complete(kind, true);
        }
    }

    fn show_with_timing(&mut self, timing: Timing) {
        self.interrupt();
        // Must be renderable before the first frame of the fade.
        self.is_hidden = false;
        self.phase = Phase::Showing;
        self.fade = Some(Fade::new(FadeKind::In, self.alpha, timing));
        tracing::debug!(bubble = %self.id, ?timing, "show scheduled");
    }

    fn hide_with_timing(&mut self, timing: Timing) {
        self.interrupt();
        // A delayed hide keeps the current phase until its fade starts in `tick`.
        if timing.delay.is_zero() {
            self.phase = Phase::Hiding;
        }
        self.fade = Some(Fade::new(FadeKind::Out, self.alpha, timing));
        tracing::debug!(bubble = %self.id, ?timing, "hide scheduled");
    }

    fn interrupt(&mut self) {
        if let Some(fade) = self.fade.take() {
            self.complete(fade.kind(), false);
        }
    }

    fn complete(&mut self, kind: FadeKind, finished: bool) {
        if !finished {
            tracing::debug!(bubble = %self.id, ?kind, "fade interrupted");
            return;
        }

        match kind {
            FadeKind::In => self.did_finish_show(),
            FadeKind::Out => self.did_finish_hide(),
        }
    }

    fn did_finish_show(&mut self) {
        self.phase = Phase::Visible;
        self.alpha = opacity::OPAQUE;
        tracing::debug!(bubble = %self.id, "shown");

        if !self.config.auto_hide {
            return;
        }

        // Notify before the auto-hide is scheduled: "shown" marks the appearance.
        if let Some(delegate) = self.delegate() {
            delegate.did_show(self);
        }

        self.hide_with(
            Duration::from_millis(AUTO_HIDE_FADE_MS),
            self.config.number_of_seconds_to_auto_hide,
            Easing::EaseInOut,
        );
    }

    fn did_finish_hide(&mut self) {
        self.phase = Phase::Hidden;
        self.alpha = opacity::TRANSPARENT;
        self.is_hidden = true;
        tracing::debug!(bubble = %self.id, "hidden");

        if let Some(delegate) = self.delegate() {
            delegate.did_hide(self);
        }

        if let Some(handler) = self.completion_handler.as_mut() {
            handler();
        }

        if self.config.auto_remove_from_host {
            self.remove_from_host();
        }
    }

    fn delegate(&self) -> Option<Arc<dyn Delegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn configure_view(&mut self) {
        self.is_hidden = true;
        self.alpha = opacity::TRANSPARENT;
        self.phase = Phase::Hidden;

        self.corner_radius = self.config.corner_radius;
        self.background_color = self.config.background_color;
    }

    fn configure_label_view(&mut self) {
        self.label.apply_style(&self.config);
        self.label.set_text(&self.label_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::bubble::configuration::{LabelFont, LineBreakMode, TextAlignment};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        shown: AtomicUsize,
        hidden: AtomicUsize,
    }

    impl Delegate for Recorder {
        fn did_show(&self, _bubble: &InfoBubble) {
            self.shown.fetch_add(1, Ordering::SeqCst);
        }

        fn did_hide(&self, _bubble: &InfoBubble) {
            self.hidden.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct Stage {
        children: Mutex<Vec<BubbleId>>,
    }

    impl Host for Stage {
        fn add_child(&self, bubble: BubbleId) {
            self.children.lock().expect("stage lock").push(bubble);
        }

        fn remove_child(&self, bubble: BubbleId) {
            self.children
                .lock()
                .expect("stage lock")
                .retain(|id| *id != bubble);
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Ticks once to start the clock, then once past the end of the fade.
    fn run_fade(bubble: &mut InfoBubble, now: &mut Instant) {
        let (_, timing) = bubble.animation_target().expect("a fade should be scheduled");
        bubble.tick(*now);
        *now += timing.delay + timing.duration;
        bubble.tick(*now);
    }

    #[test]
    fn new_bubble_is_hidden_and_transparent() {
        let bubble = InfoBubble::new();
        assert!(bubble.is_hidden());
        assert_eq!(bubble.alpha(), 0.0);
        assert_eq!(bubble.phase(), Phase::Hidden);
        assert_eq!(bubble.label_text(), "");
        assert!(!bubble.is_animating());
    }

    #[test]
    fn set_config_restyles_view_and_label() {
        let mut bubble = InfoBubble::new();
        let config = Configuration {
            background_color: Color::from_rgb8(92, 184, 92),
            corner_radius: 10.0,
            label_font: LabelFont::bold_system(18.0),
            label_text_color: Color::BLACK,
            label_text_alignment: TextAlignment::Left,
            label_line_break_mode: LineBreakMode::Clipping,
            label_number_of_lines: 2,
            ..Configuration::default()
        };

        bubble.set_config(config);

        assert_eq!(bubble.corner_radius(), 10.0);
        assert_eq!(bubble.background_color(), config.background_color);
        assert_eq!(bubble.label().font(), config.label_font);
        assert_eq!(bubble.label().text_color(), Color::BLACK);
        assert_eq!(bubble.label().alignment(), TextAlignment::Left);
        assert_eq!(bubble.label().line_break_mode(), LineBreakMode::Clipping);
        assert_eq!(bubble.label().number_of_lines(), 2);
    }

    #[test]
    fn set_config_resets_visibility() {
        let mut bubble = InfoBubble::new();
        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);
        assert_eq!(bubble.phase(), Phase::Visible);
        assert!(bubble.is_animating());

        bubble.set_config(Configuration::default());
        assert!(bubble.is_hidden());
        assert_eq!(bubble.alpha(), 0.0);
        assert!(!bubble.is_animating());
    }

    #[test]
    fn show_defaults_to_short_ease_in_out_fade() {
        let mut bubble = InfoBubble::new();
        bubble.show();
        assert_eq!(
            bubble.animation_target(),
            Some((FadeKind::In, Timing::new(ms(300), Duration::ZERO, Easing::EaseInOut)))
        );

        bubble.hide();
        assert_eq!(
            bubble.animation_target(),
            Some((FadeKind::Out, Timing::new(ms(300), Duration::ZERO, Easing::EaseInOut)))
        );
    }

    #[test]
    fn overloads_fill_in_defaults() {
        let mut bubble = InfoBubble::new();

        bubble.show_for(ms(500));
        assert_eq!(
            bubble.animation_target().map(|(_, t)| t),
            Some(Timing::new(ms(500), Duration::ZERO, Easing::EaseInOut))
        );

        bubble.show_after(ms(500), ms(200));
        assert_eq!(
            bubble.animation_target().map(|(_, t)| t),
            Some(Timing::new(ms(500), ms(200), Easing::EaseInOut))
        );

        bubble.hide_after(ms(100), ms(50));
        assert_eq!(
            bubble.animation_target(),
            Some((FadeKind::Out, Timing::new(ms(100), ms(50), Easing::EaseInOut)))
        );
    }

    #[test]
    fn show_makes_bubble_renderable_immediately() {
        let mut bubble = InfoBubble::new();
        bubble.show();
        assert!(!bubble.is_hidden());
        assert_eq!(bubble.phase(), Phase::Showing);
        assert_eq!(bubble.alpha(), 0.0);
    }

    #[test]
    fn auto_hide_cycle_notifies_in_order() {
        let recorder = Arc::new(Recorder::default());
        let handled = Arc::new(AtomicUsize::new(0));
        let mut bubble = InfoBubble::new();
        bubble.set_delegate(&recorder);
        let counter = Arc::clone(&handled);
        bubble.set_completion_handler(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);

        assert_eq!(recorder.shown.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.hidden.load(Ordering::SeqCst), 0);
        assert_eq!(
            bubble.animation_target(),
            Some((FadeKind::Out, Timing::new(ms(300), ms(3000), Easing::EaseInOut)))
        );
        assert_eq!(bubble.alpha(), 1.0);

        run_fade(&mut bubble, &mut now);

        assert_eq!(recorder.shown.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.hidden.load(Ordering::SeqCst), 1);
        assert_eq!(handled.load(Ordering::SeqCst), 1);
        assert!(bubble.is_hidden());
        assert_eq!(bubble.phase(), Phase::Hidden);
        assert!(!bubble.is_animating());
    }

    #[test]
    fn phase_stays_visible_during_auto_hide_delay() {
        let mut bubble = InfoBubble::new();
        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);

        bubble.tick(now);
        now += ms(1300);
        bubble.tick(now);
        assert_eq!(bubble.alpha(), 1.0);
        assert_eq!(bubble.phase(), Phase::Visible);

        now += ms(1850);
        bubble.tick(now);
        assert_eq!(bubble.phase(), Phase::Hiding);
        assert!(bubble.alpha() < 1.0);
    }

    #[test]
    fn undelayed_hide_is_hiding_immediately() {
        let mut bubble = InfoBubble::with_config(Configuration {
            auto_hide: false,
            ..Configuration::default()
        });
        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);

        bubble.hide();
        assert_eq!(bubble.phase(), Phase::Hiding);
    }

    #[test]
    fn auto_hide_fade_ignores_show_duration() {
        let mut bubble = InfoBubble::new();
        let mut now = Instant::now();
        bubble.show_for(ms(2000));
        run_fade(&mut bubble, &mut now);

        let (_, timing) = bubble.animation_target().expect("auto-hide scheduled");
        assert_eq!(timing.duration, ms(300));
    }

    #[test]
    fn without_auto_hide_bubble_stays_visible_silently() {
        let recorder = Arc::new(Recorder::default());
        let mut bubble = InfoBubble::with_config(Configuration {
            auto_hide: false,
            ..Configuration::default()
        });
        bubble.set_delegate(&recorder);

        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);

        assert_eq!(bubble.phase(), Phase::Visible);
        assert!(!bubble.is_animating());
        assert_eq!(recorder.shown.load(Ordering::SeqCst), 0);

        bubble.hide();
        run_fade(&mut bubble, &mut now);
        assert_eq!(recorder.shown.load(Ordering::SeqCst), 0);
        assert_eq!(recorder.hidden.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn interrupted_show_fires_nothing() {
        let recorder = Arc::new(Recorder::default());
        let mut bubble = InfoBubble::new();
        bubble.set_delegate(&recorder);

        let mut now = Instant::now();
        bubble.show();
        bubble.tick(now);
        now += ms(100);
        bubble.tick(now);

        // Second show restarts from the current opacity.
        bubble.show();
        assert_eq!(recorder.shown.load(Ordering::SeqCst), 0);

        run_fade(&mut bubble, &mut now);
        assert_eq!(recorder.shown.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn show_during_auto_hide_delay_cancels_the_hide() {
        let recorder = Arc::new(Recorder::default());
        let mut bubble = InfoBubble::new();
        bubble.set_delegate(&recorder);

        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);
        bubble.tick(now);
        now += ms(1000);
        bubble.tick(now);

        bubble.show();
        assert_eq!(recorder.hidden.load(Ordering::SeqCst), 0);
        assert_eq!(bubble.phase(), Phase::Showing);
    }

    #[test]
    fn completion_handler_fires_every_cycle() {
        let handled = Arc::new(AtomicUsize::new(0));
        let mut bubble = InfoBubble::new();
        let counter = Arc::clone(&handled);
        bubble.set_completion_handler(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut now = Instant::now();
        for _ in 0..2 {
            bubble.show();
            run_fade(&mut bubble, &mut now);
            run_fade(&mut bubble, &mut now);
        }

        assert_eq!(handled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn hide_on_hidden_bubble_still_completes() {
        let recorder = Arc::new(Recorder::default());
        let mut bubble = InfoBubble::new();
        bubble.set_delegate(&recorder);

        let mut now = Instant::now();
        bubble.hide();
        run_fade(&mut bubble, &mut now);

        assert_eq!(recorder.hidden.load(Ordering::SeqCst), 1);
        assert!(bubble.is_hidden());
    }

    #[test]
    fn auto_remove_detaches_from_host() {
        let stage = Arc::new(Stage::default());
        let mut bubble = InfoBubble::with_config(Configuration {
            auto_remove_from_host: true,
            ..Configuration::default()
        });
        bubble.attach_to(&stage);
        assert!(bubble.is_attached());
        assert_eq!(stage.children.lock().expect("stage lock").len(), 1);

        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);
        assert!(bubble.is_attached());
        run_fade(&mut bubble, &mut now);

        assert!(!bubble.is_attached());
        assert!(stage.children.lock().expect("stage lock").is_empty());
    }

    #[test]
    fn hide_keeps_host_without_auto_remove() {
        let stage = Arc::new(Stage::default());
        let mut bubble = InfoBubble::new();
        bubble.attach_to(&stage);

        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);
        run_fade(&mut bubble, &mut now);

        assert!(bubble.is_attached());
    }

    #[test]
    fn dropped_delegate_and_host_are_ignored() {
        let mut bubble = InfoBubble::with_config(Configuration {
            auto_remove_from_host: true,
            ..Configuration::default()
        });
        {
            let recorder = Arc::new(Recorder::default());
            let stage = Arc::new(Stage::default());
            bubble.set_delegate(&recorder);
            bubble.attach_to(&stage);
        }
        assert!(!bubble.is_attached());

        let mut now = Instant::now();
        bubble.show();
        run_fade(&mut bubble, &mut now);
        run_fade(&mut bubble, &mut now);
        assert!(bubble.is_hidden());
    }

    #[test]
    fn label_text_updates_in_every_phase() {
        let mut bubble = InfoBubble::new();
        bubble.set_label_text("Hidden");
        assert_eq!(bubble.label().text(), "Hidden");
        assert!(bubble.is_hidden());

        let mut now = Instant::now();
        bubble.show();
        bubble.tick(now);
        now += ms(100);
        bubble.tick(now);
        let alpha = bubble.alpha();

        bubble.set_label_text("Showing");
        assert_eq!(bubble.label().text(), "Showing");
        assert_eq!(bubble.phase(), Phase::Showing);
        assert_eq!(bubble.alpha(), alpha);
    }

    #[test]
    fn label_text_survives_restyle() {
        let mut bubble = InfoBubble::new();
        bubble.set_label_text("Hello World");
        bubble.set_config(Configuration {
            label_number_of_lines: 1,
            ..Configuration::default()
        });
        assert_eq!(bubble.label().text(), "Hello World");
    }
}
