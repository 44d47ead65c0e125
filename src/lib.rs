// SPDX-License-Identifier: MPL-2.0
//! `sweetstall` is a desktop storefront client for a sweet-shop
//! inventory API, built with the Iced GUI framework.
//!
//! All business logic — inventory truth, pricing, stock decrement on
//! purchase, session validation — lives in the remote API; this client
//! renders the catalog, debounces search, and reconciles after every
//! mutation by refetching the full snapshot.

#![doc(html_root_url = "https://docs.rs/sweetstall/0.2.0")]

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod session;
pub mod ui;
