// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//! Components own their transient form state, translate raw widget
//! messages into semantic `Event`s for the application, and never talk
//! to the network themselves.
//!
//! # Screens
//!
//! - [`login`] - Sign-in form
//! - [`register`] - Account creation form (auto-login on success)
//! - [`catalog_screen`] - Sweet listing with search and the edit dialog
//! - [`sweet_form`] - Admin add-sweet form
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with session info and logout
//! - [`notifications`] - Toast notification system for user feedback

pub mod catalog_screen;
pub mod design_tokens;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod register;
pub mod sweet_form;
pub mod theming;
