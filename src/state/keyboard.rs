//! Keyboard Module - Down state and changed latches per key
//!
//! One fixed table indexed by [`KeyCode`]. Keys are never added or removed,
//! only toggled by press/release.
//!
//! Each key also carries a "changed" latch. A press or release sets it, a
//! repeat leaves it alone, and reading it through [`KeyboardState::take_changed`]
//! clears it. The latch is independent of the down/up state and survives
//! frame advances until someone reads it.

use crate::types::{Action, KeyCode};

// =============================================================================
// STATE
// =============================================================================

/// Per-key down state and changed latches.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    down: [bool; KeyCode::COUNT],
    changed: [bool; KeyCode::COUNT],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            down: [false; KeyCode::COUNT],
            changed: [false; KeyCode::COUNT],
        }
    }

    /// Apply a key action to the table.
    pub fn apply(&mut self, key: KeyCode, action: Action) {
        let i = key.index();
        match action {
            Action::Press => {
                if !self.down[i] {
                    self.down[i] = true;
                }
                self.changed[i] = true;
            }
            Action::Release => {
                self.down[i] = false;
                self.changed[i] = true;
            }
            // Auto-repeat is not a transition.
            Action::Repeat => {}
        }
    }

    /// Is the key currently held?
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down[key.index()]
    }

    /// Read and clear the changed latch.
    pub fn take_changed(&mut self, key: KeyCode) -> bool {
        std::mem::take(&mut self.changed[key.index()])
    }

    /// Look at the changed latch without clearing it.
    pub fn peek_changed(&self, key: KeyCode) -> bool {
        self.changed[key.index()]
    }
}

// =============================================================================
// TESTS
// =============================================================================
