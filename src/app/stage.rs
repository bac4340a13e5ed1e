// SPDX-License-Identifier: MPL-2.0
//! Host container for the demo bubbles.
//!
//! The stage only tracks which bubbles are attached; the view asks it
//! whether a bubble should be layered over the screen content.

use crate::ui::bubble::{BubbleId, Host};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct Stage {
    children: Mutex<Vec<BubbleId>>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `bubble` is currently attached.
    #[must_use]
    pub fn contains(&self, bubble: BubbleId) -> bool {
        self.lock().contains(&bubble)
    }

    /// Attached bubbles in attachment order.
    #[must_use]
    pub fn children(&self) -> Vec<BubbleId> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<BubbleId>> {
        self.children.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Host for Stage {
    fn add_child(&self, bubble: BubbleId) {
        let mut children = self.lock();
        if !children.contains(&bubble) {
            children.push(bubble);
        }
    }

    fn remove_child(&self, bubble: BubbleId) {
        self.lock().retain(|child| *child != bubble);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::bubble::InfoBubble;
    use std::sync::Arc;

    #[test]
    fn attach_and_remove_update_children() {
        let stage = Arc::new(Stage::new());
        let mut bubble = InfoBubble::new();

        bubble.attach_to(&stage);
        assert!(stage.contains(bubble.id()));
        assert_eq!(stage.children(), vec![bubble.id()]);

        bubble.remove_from_host();
        assert!(!stage.contains(bubble.id()));
        assert!(stage.children().is_empty());
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let stage = Stage::new();
        let id = BubbleId::new();
        stage.add_child(id);
        stage.add_child(id);
        assert_eq!(stage.children().len(), 1);
    }
}
