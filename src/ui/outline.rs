// SPDX-License-Identifier: MPL-2.0
//! The outline editor component: indented rows with drag-to-nest.
//!
//! Each row is registered as an independent drag source and drop target
//! through a `mouse_area`; the Iced runtime owns hit testing, so the row
//! under the pointer is the resolved drag-over target. Cursor motion and
//! button releases arrive from the application subscription as raw events,
//! which lets the gesture survive the pointer leaving the row it started on.

use crate::i18n::fluent::I18n;
use crate::outline::{DragState, MoveOutcome, Node, NodeId, Outline};
use crate::ui::design_tokens::{border, opacity, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Space, Text};
use iced::{
    alignment::Vertical, mouse, window, Background, Border, Color, Element, Length, Point, Theme,
};

/// State of the outline editor: the tree plus the transient drag gesture.
#[derive(Debug)]
pub struct State {
    outline: Outline,
    drag: DragState,
    /// Last known cursor position in window coordinates.
    cursor: Point,
    /// Row currently under the pointer.
    hovered: Option<NodeId>,
    /// Pointer travel (px) before a press becomes a drag.
    activation_distance: f32,
}

/// The fixed snapshot the widget is seeded with at startup.
fn initial_outline() -> Outline {
    Outline::new(vec![
        Node::with_children(
            "1",
            "Item 1",
            vec![Node::new("1-1", "Item 1.1"), Node::new("1-2", "Item 1.2")],
        ),
        Node::new("2", "Item 2"),
    ])
}

impl State {
    #[must_use]
    pub fn new(activation_distance: f32) -> Self {
        Self::with_outline(initial_outline(), activation_distance)
    }

    #[must_use]
    pub fn with_outline(outline: Outline, activation_distance: f32) -> Self {
        Self {
            outline,
            drag: DragState::default(),
            cursor: Point::ORIGIN,
            hovered: None,
            activation_distance,
        }
    }

    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    pub fn set_activation_distance(&mut self, distance: f32) {
        self.activation_distance = distance;
    }
}

/// Messages produced by outline rows and routed raw events.
#[derive(Debug, Clone)]
pub enum Message {
    RowPressed(NodeId),
    RowEntered(NodeId),
    RowExited(NodeId),
    OpenSettings,
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenSettings,
}

/// Processes one outline message.
///
/// A row-enter during an active drag is a drag-over: the tree is re-parented
/// in place before the next message is processed. Invalid targets (the
/// dragged node itself or one of its descendants, or a vanished id) are
/// silently absorbed; the gesture continues and nothing changes.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::RowPressed(id) => {
            state.drag.press(id, state.cursor);
            Event::None
        }
        Message::RowEntered(id) => {
            state.hovered = Some(id.clone());
            if let Some(active) = state.drag.active().cloned() {
                // All non-Moved outcomes leave the tree untouched.
                let _outcome: MoveOutcome = state.outline.reparent(&active, &id);
            }
            Event::None
        }
        Message::RowExited(id) => {
            if state.hovered.as_ref() == Some(&id) {
                state.hovered = None;
            }
            Event::None
        }
        Message::OpenSettings => Event::OpenSettings,
        Message::RawEvent { window: _, event } => {
            match event {
                iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    state.cursor = position;
                    state.drag.cursor_moved(position, state.activation_distance);
                }
                iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                    state.drag.release();
                }
                _ => {}
            }
            Event::None
        }
    }
}

/// Contextual data needed to render the outline.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub indent_width: f32,
}

/// Renders the outline as indented rows below a header with the hint text
/// and the settings button.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("outline-hint"))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);

    let settings_button = button(
        Text::new(ctx.i18n.tr("outline-settings-button")).size(typography::BODY),
    )
    .style(button::secondary)
    .on_press(Message::OpenSettings);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Container::new(hint).width(Length::Fill))
        .push(settings_button);

    let row_ctx = RowContext {
        colors: ctx.colors,
        indent_width: ctx.indent_width,
        dragging: state.drag.is_dragging(),
        active_subtree: state
            .drag
            .active()
            .and_then(|active| state.outline.find(active)),
        hovered: state.hovered.as_ref(),
    };

    let mut rows = Column::new().spacing(spacing::XXS).width(Length::Fill);
    rows = push_rows(rows, state.outline.roots(), 0, &row_ctx);

    let list = scrollable(Container::new(rows).padding(spacing::XXS)).height(Length::Fill);

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct RowContext<'a> {
    colors: &'a ColorScheme,
    indent_width: f32,
    dragging: bool,
    /// The dragged node, used to reject drops inside its own subtree.
    active_subtree: Option<&'a Node>,
    hovered: Option<&'a NodeId>,
}

fn push_rows<'a>(
    mut column: Column<'a, Message>,
    nodes: &'a [Node],
    depth: u16,
    ctx: &RowContext<'a>,
) -> Column<'a, Message> {
    for node in nodes {
        column = column.push(row(node, depth, ctx));
        column = push_rows(column, &node.children, depth + 1, ctx);
    }
    column
}

fn row<'a>(node: &'a Node, depth: u16, ctx: &RowContext<'a>) -> Element<'a, Message> {
    let is_active = ctx
        .active_subtree
        .is_some_and(|active| active.id == node.id);
    let in_active_subtree = ctx
        .active_subtree
        .is_some_and(|active| active.contains(&node.id));
    let is_hovered = ctx.hovered == Some(&node.id);

    let (border_color, border_width) = if ctx.dragging && is_hovered && !in_active_subtree {
        (ctx.colors.success, border::WIDTH_MD)
    } else if ctx.dragging && is_hovered {
        // Dropping here would make the node its own ancestor.
        (ctx.colors.error, border::WIDTH_MD)
    } else if is_active {
        (ctx.colors.brand_primary, border::WIDTH_MD)
    } else {
        (ctx.colors.text_secondary, border::WIDTH_SM)
    };

    let background = if is_active {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..ctx.colors.brand_primary
        }
    } else {
        ctx.colors.surface_secondary
    };
    let text_color = ctx.colors.text_primary;

    let content = Container::new(Text::new(node.title.as_str()).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ROW_HEIGHT))
        .align_y(Vertical::Center)
        .padding([spacing::XXS, spacing::SM])
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::SM.into(),
            },
            text_color: Some(text_color),
            ..Default::default()
        });

    let interaction = if ctx.dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let area = mouse_area(content)
        .on_press(Message::RowPressed(node.id.clone()))
        .on_enter(Message::RowEntered(node.id.clone()))
        .on_exit(Message::RowExited(node.id.clone()))
        .interaction(interaction);

    Row::new()
        .push(Space::new().width(Length::Fixed(
            f32::from(depth) * ctx.indent_width,
        )))
        .push(area)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::mouse::Button;

    const ACTIVATION: f32 = 5.0;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn raw(event: iced::Event) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event,
        }
    }

    fn cursor_moved(state: &mut State, x: f32, y: f32) {
        update(
            state,
            raw(iced::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(x, y),
            })),
        );
    }

    fn released(state: &mut State) {
        update(
            state,
            raw(iced::Event::Mouse(mouse::Event::ButtonReleased(
                Button::Left,
            ))),
        );
    }

    /// Runs a full gesture: press on `active`, drag past the activation
    /// distance, hover `over`.
    fn drag_onto(state: &mut State, active: &str, over: &str) {
        cursor_moved(state, 10.0, 10.0);
        update(state, Message::RowPressed(id(active)));
        cursor_moved(state, 10.0, 40.0);
        update(state, Message::RowEntered(id(over)));
    }

    #[test]
    fn press_then_release_without_motion_changes_nothing() {
        let mut state = State::new(ACTIVATION);
        let before = state.outline().clone();

        cursor_moved(&mut state, 10.0, 10.0);
        update(&mut state, Message::RowPressed(id("1-1")));
        update(&mut state, Message::RowEntered(id("2")));
        released(&mut state);

        assert_eq!(state.outline(), &before);
        assert_eq!(state.drag(), &DragState::Idle);
    }

    #[test]
    fn motion_below_activation_distance_does_not_start_drag() {
        let mut state = State::new(ACTIVATION);
        let before = state.outline().clone();

        cursor_moved(&mut state, 10.0, 10.0);
        update(&mut state, Message::RowPressed(id("1-1")));
        cursor_moved(&mut state, 11.0, 12.0);
        update(&mut state, Message::RowEntered(id("2")));

        assert_eq!(state.outline(), &before);
        assert!(!state.drag().is_dragging());
    }

    #[test]
    fn drag_over_reparents_onto_hovered_row() {
        let mut state = State::new(ACTIVATION);
        drag_onto(&mut state, "1-1", "2");

        let second = state.outline().find(&id("2")).unwrap();
        assert_eq!(second.children.len(), 1);
        assert_eq!(second.children[0].id, id("1-1"));

        let first = state.outline().find(&id("1")).unwrap();
        assert_eq!(first.children.len(), 1);
        assert_eq!(first.children[0].id, id("1-2"));
    }

    #[test]
    fn drag_over_descendant_is_ignored_and_gesture_continues() {
        let mut state = State::new(ACTIVATION);
        let before = state.outline().clone();

        drag_onto(&mut state, "1", "1-1");

        assert_eq!(state.outline(), &before);
        assert!(state.drag().is_dragging(), "gesture should continue");
    }

    #[test]
    fn drag_over_self_is_ignored() {
        let mut state = State::new(ACTIVATION);
        let before = state.outline().clone();

        drag_onto(&mut state, "1", "1");

        assert_eq!(state.outline(), &before);
    }

    #[test]
    fn release_ends_drag_without_mutation() {
        let mut state = State::new(ACTIVATION);
        drag_onto(&mut state, "1-1", "2");
        let after_move = state.outline().clone();

        released(&mut state);

        assert_eq!(state.outline(), &after_move);
        assert_eq!(state.drag(), &DragState::Idle);
    }

    #[test]
    fn rejected_target_then_valid_target_moves_once() {
        let mut state = State::new(ACTIVATION);
        drag_onto(&mut state, "1", "1-1"); // rejected: descendant
        update(&mut state, Message::RowEntered(id("2"))); // valid

        let second = state.outline().find(&id("2")).unwrap();
        assert_eq!(second.children.len(), 1);
        assert_eq!(second.children[0].id, id("1"));
        assert_eq!(state.outline().len(), 4);
    }

    #[test]
    fn node_count_is_conserved_across_gestures() {
        let mut state = State::new(ACTIVATION);
        let before = state.outline().len();

        drag_onto(&mut state, "1-1", "2");
        released(&mut state);
        drag_onto(&mut state, "2", "1");
        released(&mut state);

        assert_eq!(state.outline().len(), before);
    }

    #[test]
    fn row_exit_clears_hover_only_for_matching_row() {
        let mut state = State::new(ACTIVATION);
        update(&mut state, Message::RowEntered(id("2")));
        update(&mut state, Message::RowExited(id("1")));
        assert_eq!(state.hovered(), Some(&id("2")));
        update(&mut state, Message::RowExited(id("2")));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn open_settings_is_propagated_to_parent() {
        let mut state = State::new(ACTIVATION);
        assert_eq!(update(&mut state, Message::OpenSettings), Event::OpenSettings);
    }
}
