//! Configuration for an [`InputState`](crate::InputState).
//!
//! The only tunables are the callback registry bounds. Registries are
//! allocated once at construction and never grow.

/// Callback registry capacity used when nothing else is configured.
pub const DEFAULT_CALLBACK_CAPACITY: usize = 4;

/// Construction-time settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Maximum number of key callbacks.
    pub key_callbacks: usize,
    /// Maximum number of mouse-button callbacks.
    pub mouse_button_callbacks: usize,
    /// Maximum number of scroll callbacks.
    pub scroll_callbacks: usize,
    /// Maximum number of cursor-position callbacks.
    pub cursor_callbacks: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_callbacks: DEFAULT_CALLBACK_CAPACITY,
            mouse_button_callbacks: DEFAULT_CALLBACK_CAPACITY,
            scroll_callbacks: DEFAULT_CALLBACK_CAPACITY,
            cursor_callbacks: DEFAULT_CALLBACK_CAPACITY,
        }
    }
}

impl InputConfig {
    /// Set every registry to the same capacity.
    pub fn with_callback_capacity(mut self, capacity: usize) -> Self {
        self.key_callbacks = capacity;
        self.mouse_button_callbacks = capacity;
        self.scroll_callbacks = capacity;
        self.cursor_callbacks = capacity;
        self
    }
}
