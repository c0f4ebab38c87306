// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is always routed; the frame tick only runs while a timer
//! is pending or a toast is waiting to expire, so an idle app stays idle.

use super::Message;
use crate::app::config::defaults::FRAME_TICK_MS;
use crate::lightbox::LightboxKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Builds the subscription set for the current state.
pub fn create(timers_pending: bool, toasts_pending: bool) -> Subscription<Message> {
    let keys = event::listen_with(|event, status, _window| match status {
        event::Status::Ignored => key_message(&event),
        event::Status::Captured => None,
    });

    if timers_pending || toasts_pending {
        Subscription::batch([
            keys,
            time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::Tick),
        ])
    } else {
        keys
    }
}

fn key_message(event: &Event) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    map_key(key).map(Message::Key)
}

/// Maps a pressed key to the navigation key it stands for.
pub fn map_key(key: &Key) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::Left),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::Right),
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::Space) => Some(LightboxKey::Slideshow),
        Key::Character(c) if c.eq_ignore_ascii_case("f") => Some(LightboxKey::Fullscreen),
        _ => None,
    }
}
