// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered toast sequence: pushes append, display
//! order is insertion order, and a periodic tick expires toasts whose
//! ttl has elapsed. Dismissal is idempotent.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the ordered sequence of visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Visible notifications, oldest first (insertion order).
    toasts: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the display sequence.
    pub fn push(&mut self, notification: Notification) {
        self.toasts.push_back(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    /// Dismissing an id that is already gone is a no-op, not an error.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|n| n.id() == id) {
            self.toasts.remove(pos);
            return true;
        }
        false
    }

    /// Processes a tick event, dismissing any notifications whose ttl
    /// has elapsed.
    ///
    /// Should be called periodically (e.g., every 100-500ms) while any
    /// notifications are showing.
    pub fn tick(&mut self) {
        self.toasts.retain(|n| !n.is_expired());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the visible notifications in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns whether there are any notifications to drive ticks for.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
