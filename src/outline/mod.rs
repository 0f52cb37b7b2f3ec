// SPDX-License-Identifier: MPL-2.0
//! Outline domain: the node tree and the operations drag gestures invoke.
//!
//! Everything in this module is framework-free. The UI layer owns one
//! [`Outline`] value and mutates it through [`Outline::reparent`] while a
//! drag gesture is in flight; the [`drag`] module tracks the gesture itself.

pub mod drag;
pub mod node;
pub mod tree;

pub use drag::DragState;
pub use node::{Node, NodeId};
pub use tree::{MoveOutcome, Outline};
