// SPDX-License-Identifier: MPL-2.0
//! UI components and visual primitives.

pub mod design_tokens;
pub mod outline;
pub mod settings;
pub mod theming;
