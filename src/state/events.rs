//! Events Module - One-shot records of what happened this frame
//!
//! Each record holds the payload of the most recent event of its kind and a
//! `happened` flag. Callbacks set the flag, `InputState::advance` clears all
//! five of them. Reading a record never changes it.

use crate::types::{KeyCode, MouseButton};

// =============================================================================
// RECORDS
// =============================================================================

/// Most recent key event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    pub happened: bool,
    /// Press or repeat.
    pub pressed: bool,
    /// Raw key code as reported, possibly outside the tracked range.
    pub key: i32,
}

impl KeyEvent {
    /// The key as a validated code, if it is one the table tracks.
    pub fn key_code(&self) -> Option<KeyCode> {
        KeyCode::new(self.key).ok()
    }
}

/// Most recent mouse button event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MouseButtonEvent {
    pub happened: bool,
    pub pressed: bool,
    pub button: i32,
}

impl MouseButtonEvent {
    pub fn button_code(&self) -> Option<MouseButton> {
        MouseButton::new(self.button).ok()
    }
}

/// Most recent cursor position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorMoveEvent {
    pub happened: bool,
    pub x: f64,
    pub y: f64,
}

/// Most recent scroll offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub happened: bool,
    pub x_offset: f64,
    pub y_offset: f64,
}

/// Most recent text input codepoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharEvent {
    pub happened: bool,
    pub codepoint: u32,
}

impl CharEvent {
    /// `None` if the codepoint is not a valid `char`.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

// =============================================================================
// FRAME EVENTS
// =============================================================================

/// The five one-shot records, cleared together once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub key: KeyEvent,
    pub mouse_button: MouseButtonEvent,
    pub cursor: CursorMoveEvent,
    pub scroll: ScrollEvent,
    pub character: CharEvent,
}

impl FrameEvents {
    /// Clear every `happened` flag. Payloads keep their last values.
    pub fn clear(&mut self) {
        self.key.happened = false;
        self.mouse_button.happened = false;
        self.cursor.happened = false;
        self.scroll.happened = false;
        self.character.happened = false;
    }

    /// Did anything happen this frame?
    pub fn any(&self) -> bool {
        self.key.happened
            || self.mouse_button.happened
            || self.cursor.happened
            || self.scroll.happened
            || self.character.happened
    }
}

// =============================================================================
// TESTS
// =============================================================================
