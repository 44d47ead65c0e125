// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about action outcomes (purchase success, API errors, etc.)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for the ordered sequence and lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Design Considerations
//!
//! - Every toast auto-dismisses after its ttl (4s unless overridden)
//! - Display order is insertion order
//! - Position: top-right corner
//! - Server-provided error messages are shown verbatim; everything else
//!   goes through the i18n layer

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Content, Notification, NotificationId, Severity, DEFAULT_TTL};
pub use toast::Toast;
