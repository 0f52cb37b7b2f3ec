// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes raw mouse events to the outline component so the drag gesture can
//! track cursor travel and button releases anywhere in the window, not only
//! over the row it started on.

use super::{Message, Screen};
use crate::ui::outline;
use iced::{event, mouse, Subscription};

/// Creates the event subscription for the current screen.
///
/// Only the outline screen needs raw events; the settings screen uses plain
/// widget interactions.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Outline => event::listen_with(|event, _status, window_id| {
            // Cursor motion and left-button releases are routed regardless
            // of capture status: a mouse_area consuming the event must not
            // stall the gesture tracking.
            if matches!(
                event,
                iced::Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                        | mouse::Event::ButtonReleased(mouse::Button::Left)
                )
            ) {
                return Some(Message::Outline(outline::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }));
            }
            None
        }),
        Screen::Settings => Subscription::none(),
    }
}
