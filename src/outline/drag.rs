// SPDX-License-Identifier: MPL-2.0
//! Pointer drag lifecycle for outline rows.
//!
//! A press arms the gesture but does not start it; the drag is only
//! recognized once the cursor has traveled the activation distance from the
//! press origin, so plain clicks never move nodes. Releasing the button
//! always returns to `Idle` without touching the tree.

use super::node::NodeId;
use iced::Point;

/// State of the current pointer gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Button down on a row, cursor still within the activation distance.
    Pending { id: NodeId, origin: Point },
    /// An active drag; `id` is the node being dragged.
    Dragging { id: NodeId },
}

impl DragState {
    /// Arms the gesture for the pressed row, recording the press origin.
    pub fn press(&mut self, id: NodeId, origin: Point) {
        *self = DragState::Pending { id, origin };
    }

    /// Feeds a cursor position into the gesture. Promotes `Pending` to
    /// `Dragging` once the cursor is at least `activation_distance` away
    /// from the press origin; returns whether a promotion happened.
    pub fn cursor_moved(&mut self, position: Point, activation_distance: f32) -> bool {
        if let DragState::Pending { id, origin } = self {
            if origin.distance(position) >= activation_distance {
                *self = DragState::Dragging { id: id.clone() };
                return true;
            }
        }
        false
    }

    /// Ends the gesture. Never mutates the tree; a pending press that never
    /// became a drag is simply abandoned.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    /// The node currently being dragged, if the gesture is active.
    #[must_use]
    pub fn active(&self) -> Option<&NodeId> {
        match self {
            DragState::Dragging { id } => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVATION: f32 = 5.0;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn press_arms_but_does_not_drag() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(10.0, 10.0));
        assert!(!drag.is_dragging());
        assert!(drag.active().is_none());
    }

    #[test]
    fn small_movement_stays_pending() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(10.0, 10.0));
        assert!(!drag.cursor_moved(Point::new(12.0, 11.0), ACTIVATION));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn movement_past_threshold_starts_drag() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(10.0, 10.0));
        assert!(drag.cursor_moved(Point::new(10.0, 16.0), ACTIVATION));
        assert_eq!(drag.active(), Some(&id("1")));
    }

    #[test]
    fn movement_exactly_at_threshold_starts_drag() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(0.0, 0.0));
        assert!(drag.cursor_moved(Point::new(ACTIVATION, 0.0), ACTIVATION));
    }

    #[test]
    fn release_from_pending_abandons_gesture() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(10.0, 10.0));
        drag.release();
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn release_clears_active_drag() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(0.0, 0.0));
        drag.cursor_moved(Point::new(20.0, 0.0), ACTIVATION);
        assert!(drag.is_dragging());
        drag.release();
        assert!(drag.active().is_none());
    }

    #[test]
    fn cursor_moves_while_dragging_keep_dragging() {
        let mut drag = DragState::default();
        drag.press(id("1"), Point::new(0.0, 0.0));
        drag.cursor_moved(Point::new(20.0, 0.0), ACTIVATION);
        assert!(!drag.cursor_moved(Point::new(40.0, 0.0), ACTIVATION));
        assert!(drag.is_dragging());
    }

    #[test]
    fn cursor_moves_while_idle_are_ignored() {
        let mut drag = DragState::default();
        assert!(!drag.cursor_moved(Point::new(100.0, 100.0), ACTIVATION));
        assert_eq!(drag, DragState::Idle);
    }
}
