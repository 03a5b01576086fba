// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed whether or not a widget captured them; the frame
//! and tick clocks only run while something needs them.

use super::Message;
use crate::config::TIMER_TICK_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Pointer, Escape, resize, and close-request routing.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// Escape still closes the detail view when a focused phone field has
/// already consumed the key.
fn route_event(event: event::Event, _status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::CloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Escape),
        _ => None,
    }
}

/// Per-frame clock for the pointer follower and smooth scrolling.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Coarse clock polling the consultation trigger while it is armed.
pub fn create_tick_subscription(trigger_armed: bool) -> Subscription<Message> {
    if trigger_armed {
        time::every(Duration::from_millis(TIMER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Physical};
    use iced::keyboard::{Location, Modifiers};

    fn key_pressed(named: Named, code: Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: Physical::Code(code),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_captured_by_a_text_input_still_routes() {
        let escape = key_pressed(Named::Escape, Code::Escape);
        assert!(matches!(
            route_event(escape.clone(), event::Status::Captured, window::Id::unique()),
            Some(Message::Escape)
        ));
        assert!(matches!(
            route_event(escape, event::Status::Ignored, window::Id::unique()),
            Some(Message::Escape)
        ));
    }

    #[test]
    fn other_keys_are_not_routed() {
        let enter = key_pressed(Named::Enter, Code::Enter);
        assert!(route_event(enter, event::Status::Ignored, window::Id::unique()).is_none());
    }
}
