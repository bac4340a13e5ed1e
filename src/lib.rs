// SPDX-License-Identifier: MPL-2.0
//! `info_bubble` is a transient overlay widget for the Iced GUI framework.
//!
//! A bubble fades in, optionally hides itself after a delay, and notifies an
//! optional delegate and completion handler. The crate also ships a small
//! demo application with a programmatic screen and a markup-driven screen.

#![doc(html_root_url = "https://docs.rs/info_bubble/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
