//! Mouse Module - Button snapshots, cursor position and scroll
//!
//! Buttons keep two tables: `current`, updated by callbacks, and `last`, a
//! copy of `current` taken at the start of the poll cycle. A button "changed"
//! when the two differ. There is no per-button latch.
//!
//! The cursor delta is computed per callback against the previous callback's
//! position. The very first cursor event primes the previous position so it
//! reports a zero delta instead of a jump from the origin.

use crate::types::{Action, MouseButton};

// =============================================================================
// STATE
// =============================================================================

/// Mouse buttons, cursor and scroll state.
#[derive(Debug, Clone)]
pub struct MouseState {
    current: [bool; MouseButton::COUNT],
    last: [bool; MouseButton::COUNT],

    x: f64,
    y: f64,
    last_x: f64,
    last_y: f64,
    delta_x: f64,
    delta_y: f64,
    first_move: bool,

    scroll_x: f64,
    scroll_y: f64,
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseState {
    pub fn new() -> Self {
        Self {
            current: [false; MouseButton::COUNT],
            last: [false; MouseButton::COUNT],
            x: 0.0,
            y: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            delta_x: 0.0,
            delta_y: 0.0,
            first_move: true,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    /// Apply a button action to the current table.
    pub fn apply_button(&mut self, button: MouseButton, action: Action) {
        let i = button.index();
        if action.is_down() {
            if !self.current[i] {
                self.current[i] = true;
            }
        } else {
            self.current[i] = false;
        }
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        self.current[button.index()]
    }

    /// Was the button's state different at the start of this poll cycle?
    pub fn changed(&self, button: MouseButton) -> bool {
        self.current[button.index()] != self.last[button.index()]
    }

    /// Copy the current button table into the last-poll table.
    pub fn snapshot_buttons(&mut self) {
        self.last = self.current;
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Record a new absolute cursor position.
    pub fn move_cursor(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;

        if self.first_move {
            self.last_x = x;
            self.last_y = y;
            self.first_move = false;
        }

        self.delta_x = self.x - self.last_x;
        self.delta_y = self.y - self.last_y;
        self.last_x = x;
        self.last_y = y;
    }

    /// Make the next cursor event report a zero delta.
    pub fn prime_first_move(&mut self) {
        self.first_move = true;
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn delta(&self) -> (f64, f64) {
        (self.delta_x, self.delta_y)
    }

    // -------------------------------------------------------------------------
    // Scroll
    // -------------------------------------------------------------------------

    /// Overwrite the scroll delta. Not additive: the last event in a frame wins.
    pub fn set_scroll(&mut self, dx: f64, dy: f64) {
        self.scroll_x = dx;
        self.scroll_y = dy;
    }

    pub fn scroll(&self) -> (f64, f64) {
        (self.scroll_x, self.scroll_y)
    }

    /// Zero cursor and scroll deltas. Position is kept.
    pub fn clear_deltas(&mut self) {
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        self.scroll_x = 0.0;
        self.scroll_y = 0.0;
    }
}

// =============================================================================
// TESTS
// =============================================================================
