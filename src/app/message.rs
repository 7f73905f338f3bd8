// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Crop widget messages: input events and image lifecycle signals.

use crate::domain::Point;

/// Keys the crop widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// `-`: shrink.
    Minus,
    /// `=`: grow.
    Equal,
    Escape,
}

impl Key {
    /// Parse a DOM-style key name (`ArrowLeft`, `-`, `=`, `Escape`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "-" => Some(Key::Minus),
            "=" => Some(Key::Equal),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Everything a host feeds into a [`CropWidget`](crate::app::CropWidget).
///
/// Pointer and touch positions are in page space; the widget subtracts the
/// origin set with [`CropMessage::Origin`].
#[derive(Debug, Clone, PartialEq)]
pub enum CropMessage {
    // Image lifecycle.
    SourceChanged(Option<String>),
    ImageReady {
        display: (u32, u32),
        natural: (u32, u32),
    },

    // Host layout / focus.
    Origin(Point),
    Focus(bool),

    // Pointer.
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,

    // Touch. Only the first changed contact is used.
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd,
    TouchCancel,

    // Keyboard.
    Key(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_name("-"), Some(Key::Minus));
        assert_eq!(Key::from_name("="), Some(Key::Equal));
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("Enter"), None);
    }
}
