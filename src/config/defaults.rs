// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

/// Pointer travel (px) before a press becomes a drag. Small enough that
/// drags feel immediate, large enough that plain clicks never move nodes.
pub const DEFAULT_ACTIVATION_DISTANCE: f32 = 5.0;
pub const MIN_ACTIVATION_DISTANCE: f32 = 1.0;
pub const MAX_ACTIVATION_DISTANCE: f32 = 32.0;

/// Horizontal indentation (px) per nesting level.
pub const DEFAULT_INDENT_WIDTH: f32 = 24.0;
pub const MIN_INDENT_WIDTH: f32 = 8.0;
pub const MAX_INDENT_WIDTH: f32 = 64.0;
