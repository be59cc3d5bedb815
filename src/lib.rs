//! # frame-input
//!
//! Per-frame keyboard and mouse state on top of a windowing library's input
//! callbacks.
//!
//! The windowing library delivers raw key, mouse button, scroll, cursor and
//! character events. [`InputState`] mirrors them into a flat state table and
//! a set of one-shot "this frame" records, runs any user callbacks, and
//! answers polling queries from frame logic.
//!
//! ## Architecture
//!
//! ```text
//! window/terminal events → backend dispatch → InputState::handle_*
//!                                                   │
//!                          key table, button tables, cursor/scroll, events
//!                                                   │
//!              frame logic queries ──────► InputState::advance (once per frame)
//! ```
//!
//! Single-threaded: events, queries and `advance` all happen on the thread
//! that pumps the window.
//!
//! ## Modules
//!
//! - [`types`] - Key codes, mouse buttons, actions, modifier flags
//! - [`state`] - Keyboard/mouse tables, one-shot events, callback registries
//! - [`backend`] - Seam to the windowing library (terminal, glfw, manual)
//! - [`config`] - Registry capacities
//! - [`error`] - Error type

pub mod backend;
pub mod config;
pub mod error;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use backend::{InputBackend, ManualBackend};
pub use config::{InputConfig, DEFAULT_CALLBACK_CAPACITY};
pub use error::{InputError, Result};

pub use state::{
    // Tracker
    InputState,
    // One-shot events
    CharEvent, CursorMoveEvent, FrameEvents, KeyEvent, MouseButtonEvent, ScrollEvent,
    // Callbacks
    CallbackKind, CallbackRegistry, CursorCallback, KeyCallback, MouseButtonCallback,
    ScrollCallback,
    // Tables
    KeyboardState, MouseState,
};
