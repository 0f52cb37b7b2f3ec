// SPDX-License-Identifier: MPL-2.0
//! `iced_outline` is a nested list editor built with the Iced GUI framework.
//!
//! It renders a tree of labeled items as indented rows and restructures the
//! tree through pointer drag gestures: dragging a row onto another row nests
//! it there. It demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod outline;
pub mod ui;
