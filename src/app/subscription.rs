// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only periodic work is notification auto-dismiss; the tick runs
//! solely while there is something to expire.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
