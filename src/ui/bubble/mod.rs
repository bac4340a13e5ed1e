// SPDX-License-Identifier: MPL-2.0
//! Info bubble: a transient overlay showing a short message.
//!
//! The bubble fades in, optionally hides itself after a delay, and reports
//! both transitions to an optional [`Delegate`] and an optional completion
//! handler.
//!
//! # Components
//!
//! - [`configuration`] - `Configuration` value with appearance and auto-hide options
//! - [`widget`] - `InfoBubble` state and show/hide lifecycle
//! - [`animation`] - Tick-driven opacity fades and easing curves
//! - [`observer`] - Delegate, completion handler and host seams
//! - [`view`] - Rendering into an `iced` element
//!
//! # Usage
//!
//! ```
//! use info_bubble::ui::bubble::{Configuration, InfoBubble, Phase};
//! use std::time::{Duration, Instant};
//!
//! let mut bubble = InfoBubble::with_config(Configuration {
//!     auto_hide: false,
//!     ..Configuration::default()
//! });
//! bubble.set_label_text("Hello World");
//! bubble.show();
//!
//! // The host loop drives the fade.
//! let start = Instant::now();
//! bubble.tick(start);
//! bubble.tick(start + Duration::from_millis(300));
//! assert_eq!(bubble.phase(), Phase::Visible);
//! ```

pub mod animation;
pub mod configuration;
mod label;
pub mod observer;
pub mod view;
pub mod widget;

pub use animation::{Easing, FadeKind, Timing};
pub use configuration::{Configuration, FontFamily, FontWeight, LabelFont, LineBreakMode, TextAlignment};
pub use label::Label;
pub use observer::{BubbleId, CompletionHandler, Delegate, Host};
pub use widget::{InfoBubble, Phase};
