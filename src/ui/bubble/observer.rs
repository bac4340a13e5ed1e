// SPDX-License-Identifier: MPL-2.0
//! Observer seams of a bubble: delegate, completion handler and host.
//!
//! The bubble never owns the objects behind these seams. Delegates and
//! hosts are held through [`Weak`](std::sync::Weak) references, so dropping
//! them elsewhere silently disables the corresponding notifications.

use super::InfoBubble;
use std::fmt;

/// Unique identifier for a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BubbleId(u64);

impl BubbleId {
    /// Creates a new unique bubble ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BubbleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BubbleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bubble-{}", self.0)
    }
}

/// Receives shown/hidden notifications from a bubble.
///
/// Implementations use interior mutability; the bubble only hands out
/// shared references while it is mid-transition.
pub trait Delegate: Send + Sync {
    /// The bubble finished fading in and is about to schedule its auto-hide.
    fn did_show(&self, bubble: &InfoBubble);

    /// The bubble finished fading out.
    fn did_hide(&self, bubble: &InfoBubble);
}

/// Callback run every time a hide cycle completes.
pub type CompletionHandler = Box<dyn FnMut() + Send>;

/// Container a bubble can be attached to and remove itself from.
pub trait Host: Send + Sync {
    /// Called when a bubble attaches itself.
    fn add_child(&self, bubble: BubbleId);

    /// Called when a bubble detaches itself.
    fn remove_child(&self, bubble: BubbleId);
}
