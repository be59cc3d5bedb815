//! Core Types - Codes, actions and modifiers shared by every module
//!
//! Raw codes arrive from the windowing library as plain integers. The typed
//! wrappers here are the single place where they are range-checked, so the
//! state tables behind them can be indexed without further checks.
//!
//! Numbering follows the GLFW key and mouse-button tables.

use crate::error::{InputError, Result};

// =============================================================================
// KEY CODES
// =============================================================================

/// A key code that is known to fit the keyboard state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct KeyCode(u16);

/// Raw code the windowing library uses for keys it cannot identify.
pub const KEY_UNKNOWN: i32 = -1;

impl KeyCode {
    /// Highest tracked key code.
    pub const LAST: KeyCode = KeyCode(348);

    /// Number of slots in the keyboard state table.
    pub const COUNT: usize = Self::LAST.0 as usize + 1;

    // Printable keys
    pub const SPACE: KeyCode = KeyCode(32);
    pub const APOSTROPHE: KeyCode = KeyCode(39);
    pub const COMMA: KeyCode = KeyCode(44);
    pub const MINUS: KeyCode = KeyCode(45);
    pub const PERIOD: KeyCode = KeyCode(46);
    pub const SLASH: KeyCode = KeyCode(47);
    pub const NUM_0: KeyCode = KeyCode(48);
    pub const NUM_1: KeyCode = KeyCode(49);
    pub const NUM_2: KeyCode = KeyCode(50);
    pub const NUM_3: KeyCode = KeyCode(51);
    pub const NUM_4: KeyCode = KeyCode(52);
    pub const NUM_5: KeyCode = KeyCode(53);
    pub const NUM_6: KeyCode = KeyCode(54);
    pub const NUM_7: KeyCode = KeyCode(55);
    pub const NUM_8: KeyCode = KeyCode(56);
    pub const NUM_9: KeyCode = KeyCode(57);
    pub const SEMICOLON: KeyCode = KeyCode(59);
    pub const EQUAL: KeyCode = KeyCode(61);
    pub const A: KeyCode = KeyCode(65);
    pub const B: KeyCode = KeyCode(66);
    pub const C: KeyCode = KeyCode(67);
    pub const D: KeyCode = KeyCode(68);
    pub const E: KeyCode = KeyCode(69);
    pub const F: KeyCode = KeyCode(70);
    pub const G: KeyCode = KeyCode(71);
    pub const H: KeyCode = KeyCode(72);
    pub const I: KeyCode = KeyCode(73);
    pub const J: KeyCode = KeyCode(74);
    pub const K: KeyCode = KeyCode(75);
    pub const L: KeyCode = KeyCode(76);
    pub const M: KeyCode = KeyCode(77);
    pub const N: KeyCode = KeyCode(78);
    pub const O: KeyCode = KeyCode(79);
    pub const P: KeyCode = KeyCode(80);
    pub const Q: KeyCode = KeyCode(81);
    pub const R: KeyCode = KeyCode(82);
    pub const S: KeyCode = KeyCode(83);
    pub const T: KeyCode = KeyCode(84);
    pub const U: KeyCode = KeyCode(85);
    pub const V: KeyCode = KeyCode(86);
    pub const W: KeyCode = KeyCode(87);
    pub const X: KeyCode = KeyCode(88);
    pub const Y: KeyCode = KeyCode(89);
    pub const Z: KeyCode = KeyCode(90);
    pub const LEFT_BRACKET: KeyCode = KeyCode(91);
    pub const BACKSLASH: KeyCode = KeyCode(92);
    pub const RIGHT_BRACKET: KeyCode = KeyCode(93);
    pub const GRAVE_ACCENT: KeyCode = KeyCode(96);

    // Function and navigation keys
    pub const ESCAPE: KeyCode = KeyCode(256);
    pub const ENTER: KeyCode = KeyCode(257);
    pub const TAB: KeyCode = KeyCode(258);
    pub const BACKSPACE: KeyCode = KeyCode(259);
    pub const INSERT: KeyCode = KeyCode(260);
    pub const DELETE: KeyCode = KeyCode(261);
    pub const RIGHT: KeyCode = KeyCode(262);
    pub const LEFT: KeyCode = KeyCode(263);
    pub const DOWN: KeyCode = KeyCode(264);
    pub const UP: KeyCode = KeyCode(265);
    pub const PAGE_UP: KeyCode = KeyCode(266);
    pub const PAGE_DOWN: KeyCode = KeyCode(267);
    pub const HOME: KeyCode = KeyCode(268);
    pub const END: KeyCode = KeyCode(269);
    pub const CAPS_LOCK: KeyCode = KeyCode(280);
    pub const SCROLL_LOCK: KeyCode = KeyCode(281);
    pub const NUM_LOCK: KeyCode = KeyCode(282);
    pub const PRINT_SCREEN: KeyCode = KeyCode(283);
    pub const PAUSE: KeyCode = KeyCode(284);
    pub const F1: KeyCode = KeyCode(290);
    pub const F12: KeyCode = KeyCode(301);
    pub const F25: KeyCode = KeyCode(314);
    pub const KP_ENTER: KeyCode = KeyCode(335);
    pub const LEFT_SHIFT: KeyCode = KeyCode(340);
    pub const LEFT_CONTROL: KeyCode = KeyCode(341);
    pub const LEFT_ALT: KeyCode = KeyCode(342);
    pub const LEFT_SUPER: KeyCode = KeyCode(343);
    pub const RIGHT_SHIFT: KeyCode = KeyCode(344);
    pub const RIGHT_CONTROL: KeyCode = KeyCode(345);
    pub const RIGHT_ALT: KeyCode = KeyCode(346);
    pub const RIGHT_SUPER: KeyCode = KeyCode(347);
    pub const MENU: KeyCode = KeyCode(348);

    /// Validate a raw key code.
    pub fn new(raw: i32) -> Result<Self> {
        if (0..=Self::LAST.raw()).contains(&raw) {
            Ok(Self(raw as u16))
        } else {
            Err(InputError::OutOfRange {
                device: "key",
                code: raw,
                max: Self::LAST.raw(),
            })
        }
    }

    /// The raw code, as the windowing library reports it.
    pub const fn raw(self) -> i32 {
        self.0 as i32
    }

    /// Slot in the keyboard state table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Function key `F<n>` for `n` in `1..=25`.
    pub fn function(n: u8) -> Option<Self> {
        match n {
            1..=25 => Some(Self(Self::F1.0 + u16::from(n) - 1)),
            _ => None,
        }
    }

    /// The key that produces `c` on a US layout, if it has its own key code.
    ///
    /// Letters map to their uppercase code regardless of case. Shifted
    /// symbols (`!`, `@`, ...) have no dedicated code and return `None`.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        match c {
            ' ' | '\'' | ',' | '-' | '.' | '/' | ';' | '=' | '[' | '\\' | ']' | '`' => {
                Some(Self(c as u16))
            }
            '0'..='9' | 'A'..='Z' => Some(Self(c as u16)),
            _ => None,
        }
    }
}

impl TryFrom<i32> for KeyCode {
    type Error = InputError;

    fn try_from(raw: i32) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<KeyCode> for i32 {
    fn from(key: KeyCode) -> Self {
        key.raw()
    }
}

// =============================================================================
// MOUSE BUTTONS
// =============================================================================

/// A mouse button code that is known to fit the button state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct MouseButton(u8);

impl MouseButton {
    pub const LEFT: MouseButton = MouseButton(0);
    pub const RIGHT: MouseButton = MouseButton(1);
    pub const MIDDLE: MouseButton = MouseButton(2);

    /// Highest tracked button code.
    pub const LAST: MouseButton = MouseButton(7);

    /// Number of slots in the button state table.
    pub const COUNT: usize = Self::LAST.0 as usize + 1;

    /// Validate a raw button code.
    pub fn new(raw: i32) -> Result<Self> {
        if (0..=Self::LAST.raw()).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(InputError::OutOfRange {
                device: "mouse button",
                code: raw,
                max: Self::LAST.raw(),
            })
        }
    }

    pub const fn raw(self) -> i32 {
        self.0 as i32
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i32> for MouseButton {
    type Error = InputError;

    fn try_from(raw: i32) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<MouseButton> for i32 {
    fn from(button: MouseButton) -> Self {
        button.raw()
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// What happened to a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Release,
    Press,
    /// Held long enough for the OS to auto-repeat. Not a state transition.
    Repeat,
}

impl Action {
    /// Press and repeat both mean "down".
    pub fn is_down(self) -> bool {
        self != Action::Release
    }
}

impl TryFrom<i32> for Action {
    type Error = InputError;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(Action::Release),
            1 => Ok(Action::Press),
            2 => Ok(Action::Repeat),
            other => Err(InputError::UnknownAction(other)),
        }
    }
}

// =============================================================================
// MODIFIERS (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Modifier keys held during a key or button event.
    ///
    /// Bit values match the windowing library's modifier mask, so a raw mask
    /// converts with `Modifiers::from_bits_truncate`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        const SHIFT = 0x01;
        const CONTROL = 0x02;
        const ALT = 0x04;
        const SUPER = 0x08;
        const CAPS_LOCK = 0x10;
        const NUM_LOCK = 0x20;
    }
}

// =============================================================================
// TESTS
// =============================================================================
