// SPDX-License-Identifier: MPL-2.0
//! Integration tests driving full drag gestures through the outline
//! component, exercising the tree invariants end to end.

use iced::mouse::{self, Button};
use iced::{window, Point};
use iced_outline::outline::{DragState, Node, NodeId, Outline};
use iced_outline::ui::outline::{self, Message, State};

const ACTIVATION: f32 = 5.0;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

/// The fixed startup snapshot: two roots, the first with two children.
fn seeded() -> State {
    State::new(ACTIVATION)
}

fn raw(state: &mut State, event: iced::Event) {
    outline::update(
        state,
        Message::RawEvent {
            window: window::Id::unique(),
            event,
        },
    );
}

fn move_cursor(state: &mut State, x: f32, y: f32) {
    raw(
        state,
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        }),
    );
}

fn release(state: &mut State) {
    raw(
        state,
        iced::Event::Mouse(mouse::Event::ButtonReleased(Button::Left)),
    );
}

/// Press `active`, travel past the activation distance, hover `over`,
/// release.
fn drag(state: &mut State, active: &str, over: &str) {
    move_cursor(state, 0.0, 0.0);
    outline::update(state, Message::RowPressed(id(active)));
    move_cursor(state, 0.0, 3.0 * ACTIVATION);
    outline::update(state, Message::RowEntered(id(over)));
    release(state);
}

fn assert_unique_ids(outline: &Outline) {
    let mut ids: Vec<String> = outline.ids().iter().map(|i| i.to_string()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total, "duplicate node id in tree");
}

#[test]
fn seeded_tree_matches_initial_snapshot() {
    let state = seeded();
    let outline = state.outline();
    assert_eq!(outline.len(), 4);
    assert_eq!(outline.roots().len(), 2);
    assert_eq!(outline.find(&id("1")).unwrap().title, "Item 1");
    assert_eq!(outline.find(&id("1-1")).unwrap().title, "Item 1.1");
    assert_eq!(outline.find(&id("2")).unwrap().title, "Item 2");
}

#[test]
fn reparent_scenario_moves_child_between_roots() {
    let mut state = seeded();
    drag(&mut state, "1-1", "2");

    let outline = state.outline();
    let first = outline.find(&id("1")).unwrap();
    let child_ids: Vec<_> = first.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(child_ids, vec!["1-2"], "sibling order must be preserved");

    let second = outline.find(&id("2")).unwrap();
    let child_ids: Vec<_> = second.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(child_ids, vec!["1-1"], "moved node appended as last child");
}

#[test]
fn cycle_rejection_scenario_leaves_tree_unchanged() {
    // Root A with child A-1: dragging A onto A-1 must be rejected since
    // A-1 is a descendant of A.
    let tree = Outline::new(vec![Node::with_children(
        "A",
        "Root A",
        vec![Node::new("A-1", "Child A-1")],
    )]);
    let mut state = State::with_outline(tree.clone(), ACTIVATION);

    drag(&mut state, "A", "A-1");

    assert_eq!(state.outline(), &tree);
}

#[test]
fn dragging_a_node_onto_itself_is_a_no_op() {
    let mut state = seeded();
    let before = state.outline().clone();

    drag(&mut state, "1", "1");

    assert_eq!(state.outline(), &before);
}

#[test]
fn node_count_is_conserved_across_arbitrary_gestures() {
    let mut state = seeded();
    let gestures = [
        ("1-1", "2"),
        ("1", "1-1"), // valid mid-sequence: 1-1 is no longer under 1
        ("1-2", "1-1"),
        ("2", "ghost"), // unknown target, silently absorbed
    ];

    for (active, over) in gestures {
        drag(&mut state, active, over);
        assert_eq!(state.outline().len(), 4, "move must relocate, not copy");
        assert_unique_ids(state.outline());
    }
}

#[test]
fn no_node_ends_up_inside_its_own_subtree() {
    let mut state = seeded();
    for (active, over) in [("1-1", "2"), ("2", "1"), ("1-2", "1-1"), ("1", "1-2")] {
        drag(&mut state, active, over);
        let outline = state.outline();
        for node_id in outline.ids() {
            let node = outline.find(&node_id).unwrap();
            assert!(
                !node.children.iter().any(|child| child.contains(&node_id)),
                "{node_id} became its own descendant"
            );
        }
    }
}

#[test]
fn gesture_without_activation_travel_never_moves_nodes() {
    let mut state = seeded();
    let before = state.outline().clone();

    move_cursor(&mut state, 100.0, 100.0);
    outline::update(&mut state, Message::RowPressed(id("1-1")));
    move_cursor(&mut state, 101.0, 101.0);
    outline::update(&mut state, Message::RowEntered(id("2")));
    release(&mut state);

    assert_eq!(state.outline(), &before);
}

#[test]
fn drag_state_is_idle_after_every_gesture() {
    let mut state = seeded();
    drag(&mut state, "1-1", "2");
    assert_eq!(state.drag(), &DragState::Idle);

    drag(&mut state, "1", "1-2");
    assert_eq!(state.drag(), &DragState::Idle);
}

#[test]
fn repeated_drag_over_same_target_is_structurally_stable() {
    let mut state = seeded();
    move_cursor(&mut state, 0.0, 0.0);
    outline::update(&mut state, Message::RowPressed(id("1-1")));
    move_cursor(&mut state, 0.0, 3.0 * ACTIVATION);

    // The pointer can wander back and forth over the same target while
    // the button is held; the result must not depend on how often.
    outline::update(&mut state, Message::RowEntered(id("2")));
    let after_first = state.outline().clone();
    outline::update(&mut state, Message::RowExited(id("2")));
    outline::update(&mut state, Message::RowEntered(id("2")));
    release(&mut state);

    assert_eq!(state.outline(), &after_first);
    assert_eq!(state.outline().len(), 4);
}

#[test]
fn moved_subtree_stays_intact() {
    let mut state = seeded();
    drag(&mut state, "2", "1-1"); // "2" under "1-1"
    drag(&mut state, "1-1", "1-2"); // move "1-1" with "2" inside it

    let outline = state.outline();
    let carrier = outline.find(&id("1-2")).unwrap();
    assert_eq!(carrier.children.len(), 1);
    assert_eq!(carrier.children[0].id, id("1-1"));
    assert_eq!(carrier.children[0].children[0].id, id("2"));
    assert_eq!(outline.len(), 4);
}
