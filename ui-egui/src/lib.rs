// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Scrabble board UI library

pub mod app;
pub mod components;
pub mod design_system;
pub mod ui_config;

pub use app::App;
pub use ui_config::UiConfig;
