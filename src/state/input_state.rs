//! Input State - The tracker that raw callbacks feed and frame logic reads
//!
//! `InputState` owns the keyboard and mouse tables, the one-shot event
//! records and the user callback registries. It is an explicit context
//! object: the backend forwards raw events into the `handle_*` methods, the
//! application calls [`InputState::advance`] once per frame and queries in
//! between.
//!
//! # Frame cycle
//!
//! ```text
//! backend events ──► handle_key / handle_mouse_button / handle_scroll
//!                    handle_cursor_pos / handle_char
//!                          │
//!                          ▼
//!             tables + one-shot events updated, user callbacks run
//!                          │
//!                          ▼
//!        frame logic: key_pressed, mouse_button_down, key_event, ...
//!                          │
//!                          ▼
//!     advance(): buttons last := current, events cleared, deltas zeroed
//! ```
//!
//! Everything runs on the thread that pumps the windowing library. Nothing
//! here is synchronized.
//!
//! # Example
//!
//! ```
//! use frame_input::{Action, InputState, KeyCode, Modifiers};
//!
//! let mut input = InputState::default();
//!
//! input.handle_key(KeyCode::SPACE.raw(), 0, Action::Press, Modifiers::empty());
//! assert!(input.key_down(KeyCode::SPACE));
//! assert!(input.key_pressed(KeyCode::SPACE));
//! // The latch was consumed by the first read
//! assert!(!input.key_pressed(KeyCode::SPACE));
//!
//! input.advance();
//! assert!(!input.key_event().happened);
//! ```

use crate::backend::InputBackend;
use crate::config::InputConfig;
use crate::error::Result;
use crate::types::{Action, KeyCode, Modifiers, MouseButton};

use super::callbacks::{
    CallbackKind, CallbackRegistry, CursorCallback, KeyCallback, MouseButtonCallback,
    ScrollCallback,
};
use super::events::{
    CharEvent, CursorMoveEvent, FrameEvents, KeyEvent, MouseButtonEvent, ScrollEvent,
};
use super::keyboard::KeyboardState;
use super::mouse::MouseState;

// =============================================================================
// INPUT STATE
// =============================================================================

/// Keyboard and mouse state mirrored from raw callbacks.
#[derive(Debug)]
pub struct InputState {
    config: InputConfig,
    keyboard: KeyboardState,
    mouse: MouseState,
    events: FrameEvents,

    key_callbacks: CallbackRegistry<KeyCallback>,
    mouse_button_callbacks: CallbackRegistry<MouseButtonCallback>,
    scroll_callbacks: CallbackRegistry<ScrollCallback>,
    cursor_callbacks: CallbackRegistry<CursorCallback>,

    initialized: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputState {
    /// Create a tracker with registries sized from `config`.
    pub fn new(config: InputConfig) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            events: FrameEvents::default(),
            key_callbacks: CallbackRegistry::new(CallbackKind::Key, config.key_callbacks),
            mouse_button_callbacks: CallbackRegistry::new(
                CallbackKind::MouseButton,
                config.mouse_button_callbacks,
            ),
            scroll_callbacks: CallbackRegistry::new(CallbackKind::Scroll, config.scroll_callbacks),
            cursor_callbacks: CallbackRegistry::new(
                CallbackKind::CursorPos,
                config.cursor_callbacks,
            ),
            config,
            initialized: false,
        }
    }

    /// Ask the backend to start delivering the five raw event kinds and prime
    /// first-move suppression.
    ///
    /// Call once, after the window exists and before the first frame.
    pub fn init<B: InputBackend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        if self.initialized {
            log::warn!("input state initialized twice; re-registering handlers");
        }
        backend.register_handlers()?;
        self.mouse.prime_first_move();
        self.initialized = true;
        log::debug!("input handlers registered");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    // =========================================================================
    // RAW HANDLERS
    // =========================================================================

    /// Key callback from the windowing library.
    ///
    /// Updates the key table (when `key` is in range), runs the registered
    /// key callbacks with the raw arguments, then records the key event.
    pub fn handle_key(&mut self, key: i32, scancode: i32, action: Action, mods: Modifiers) {
        log::trace!("key {key} scancode {scancode} {action:?} {mods:?}");

        match KeyCode::new(key) {
            Ok(code) => self.keyboard.apply(code, action),
            Err(err) => log::debug!("not tracking key event: {err}"),
        }

        for callback in self.key_callbacks.iter_mut() {
            callback(key, scancode, action, mods);
        }

        self.events.key = KeyEvent {
            happened: true,
            pressed: action.is_down(),
            key,
        };
    }

    /// Mouse button callback from the windowing library.
    pub fn handle_mouse_button(&mut self, button: i32, action: Action, mods: Modifiers) {
        log::trace!("mouse button {button} {action:?} {mods:?}");

        match MouseButton::new(button) {
            Ok(code) => self.mouse.apply_button(code, action),
            Err(err) => log::debug!("not tracking mouse button event: {err}"),
        }

        for callback in self.mouse_button_callbacks.iter_mut() {
            callback(button, action, mods);
        }

        self.events.mouse_button = MouseButtonEvent {
            happened: true,
            pressed: action.is_down(),
            button,
        };
    }

    /// Scroll callback from the windowing library.
    pub fn handle_scroll(&mut self, x_offset: f64, y_offset: f64) {
        log::trace!("scroll ({x_offset}, {y_offset})");

        self.mouse.set_scroll(x_offset, y_offset);

        for callback in self.scroll_callbacks.iter_mut() {
            callback(x_offset, y_offset);
        }

        self.events.scroll = ScrollEvent {
            happened: true,
            x_offset,
            y_offset,
        };
    }

    /// Cursor position callback from the windowing library.
    pub fn handle_cursor_pos(&mut self, x: f64, y: f64) {
        log::trace!("cursor ({x}, {y})");

        self.mouse.move_cursor(x, y);

        for callback in self.cursor_callbacks.iter_mut() {
            callback(x, y);
        }

        self.events.cursor = CursorMoveEvent {
            happened: true,
            x,
            y,
        };
    }

    /// Character callback from the windowing library. Event record only.
    pub fn handle_char(&mut self, codepoint: u32) {
        log::trace!("char U+{codepoint:04X}");

        self.events.character = CharEvent {
            happened: true,
            codepoint,
        };
    }

    // =========================================================================
    // FRAME ADVANCE
    // =========================================================================

    /// Close the current poll cycle.
    ///
    /// Snapshots the mouse buttons for next frame's edge detection, then
    /// clears every one-shot event and zeroes cursor and scroll deltas.
    /// Call exactly once per frame, after frame logic has read this frame's
    /// input and before the backend delivers the next batch.
    pub fn advance(&mut self) {
        self.mouse.snapshot_buttons();
        self.events.clear();
        self.mouse.clear_deltas();
    }

    // =========================================================================
    // KEY QUERIES
    // =========================================================================

    /// Did the key go down since its latch was last read?
    ///
    /// Consumes the key's changed latch whether or not the key is down.
    pub fn key_pressed(&mut self, key: KeyCode) -> bool {
        self.keyboard.take_changed(key) && self.keyboard.is_down(key)
    }

    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_down(key)
    }

    /// Did the key go up since its latch was last read?
    ///
    /// Consumes the key's changed latch whether or not the key is up.
    pub fn key_released(&mut self, key: KeyCode) -> bool {
        self.keyboard.take_changed(key) && !self.keyboard.is_down(key)
    }

    /// Read and clear the key's changed latch.
    ///
    /// A second call returns `false` until the next press or release of
    /// this key.
    pub fn key_changed(&mut self, key: KeyCode) -> bool {
        self.keyboard.take_changed(key)
    }

    // =========================================================================
    // MOUSE QUERIES
    // =========================================================================

    /// Button is down now and was up at the start of this poll cycle.
    pub fn mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse.changed(button) && self.mouse.is_down(button)
    }

    pub fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse.is_down(button)
    }

    /// Button is up now and was down at the start of this poll cycle.
    pub fn mouse_button_released(&self, button: MouseButton) -> bool {
        self.mouse.changed(button) && !self.mouse.is_down(button)
    }

    /// Button state differs from the start of this poll cycle. Non-consuming.
    pub fn mouse_button_changed(&self, button: MouseButton) -> bool {
        self.mouse.changed(button)
    }

    pub fn cursor_position(&self) -> (f64, f64) {
        self.mouse.position()
    }

    /// Movement reported by the latest cursor event this frame, `(0, 0)` if
    /// none arrived.
    pub fn cursor_delta(&self) -> (f64, f64) {
        self.mouse.delta()
    }

    /// Offsets of the latest scroll event this frame, `(0, 0)` if none.
    pub fn scroll_delta(&self) -> (f64, f64) {
        self.mouse.scroll()
    }

    // =========================================================================
    // EVENT GETTERS
    // =========================================================================

    pub fn mouse_move_event(&self) -> CursorMoveEvent {
        self.events.cursor
    }

    pub fn mouse_button_event(&self) -> MouseButtonEvent {
        self.events.mouse_button
    }

    pub fn scroll_event(&self) -> ScrollEvent {
        self.events.scroll
    }

    pub fn key_event(&self) -> KeyEvent {
        self.events.key
    }

    pub fn char_event(&self) -> CharEvent {
        self.events.character
    }

    /// All five records at once.
    pub fn frame_events(&self) -> &FrameEvents {
        &self.events
    }

    // =========================================================================
    // CALLBACK REGISTRATION
    // =========================================================================

    /// Run `callback` on every key event, after the key table is updated.
    pub fn add_key_callback<F>(&mut self, callback: F) -> Result<()>
    where
        F: FnMut(i32, i32, Action, Modifiers) + 'static,
    {
        self.key_callbacks.register(Box::new(callback)).map(|_| ())
    }

    pub fn add_mouse_button_callback<F>(&mut self, callback: F) -> Result<()>
    where
        F: FnMut(i32, Action, Modifiers) + 'static,
    {
        self.mouse_button_callbacks
            .register(Box::new(callback))
            .map(|_| ())
    }

    pub fn add_scroll_callback<F>(&mut self, callback: F) -> Result<()>
    where
        F: FnMut(f64, f64) + 'static,
    {
        self.scroll_callbacks.register(Box::new(callback)).map(|_| ())
    }

    pub fn add_cursor_pos_callback<F>(&mut self, callback: F) -> Result<()>
    where
        F: FnMut(f64, f64) + 'static,
    {
        self.cursor_callbacks.register(Box::new(callback)).map(|_| ())
    }

    /// Number of handlers registered of one kind.
    pub fn callback_count(&self, kind: CallbackKind) -> usize {
        match kind {
            CallbackKind::Key => self.key_callbacks.len(),
            CallbackKind::MouseButton => self.mouse_button_callbacks.len(),
            CallbackKind::Scroll => self.scroll_callbacks.len(),
            CallbackKind::CursorPos => self.cursor_callbacks.len(),
        }
    }

    /// Maximum number of handlers of one kind.
    pub fn callback_capacity(&self, kind: CallbackKind) -> usize {
        match kind {
            CallbackKind::Key => self.key_callbacks.capacity(),
            CallbackKind::MouseButton => self.mouse_button_callbacks.capacity(),
            CallbackKind::Scroll => self.scroll_callbacks.capacity(),
            CallbackKind::CursorPos => self.cursor_callbacks.capacity(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
