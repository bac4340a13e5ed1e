// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription while any bubble is fading.
///
/// Idle bubbles need no ticks, so the timer is dropped between fades.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
