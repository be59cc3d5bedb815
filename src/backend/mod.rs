//! Backend Module - The seam to the windowing library
//!
//! A backend owns the window (or terminal) and knows how to make it deliver
//! key, mouse button, scroll, cursor position and character events.
//! [`InputState::init`](crate::InputState::init) asks it to do so once.
//! After that the backend's own `dispatch` function forwards each delivered
//! event into the tracker's `handle_*` methods.
//!
//! - [`ManualBackend`] - events are fed by hand (embedding, tests)
//! - [`terminal`] - crossterm (feature `terminal`)
//! - [`glfw`] - glfw-rs windows (feature `glfw`)

#[cfg(feature = "glfw")]
pub mod glfw;
#[cfg(feature = "terminal")]
pub mod terminal;

use crate::error::Result;

/// Something that can be told to start delivering raw input events.
pub trait InputBackend {
    /// Enable delivery of the five raw event kinds.
    fn register_handlers(&mut self) -> Result<()>;
}

/// A backend with nothing to enable.
///
/// The caller forwards events into the tracker's `handle_*` methods
/// directly.
#[derive(Debug, Default, Clone)]
pub struct ManualBackend {
    registrations: u32,
}

impl ManualBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `register_handlers` has been called.
    pub fn registrations(&self) -> u32 {
        self.registrations
    }
}

impl InputBackend for ManualBackend {
    fn register_handlers(&mut self) -> Result<()> {
        self.registrations += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_backend_counts_registrations() {
        let mut backend = ManualBackend::new();
        backend.register_handlers().unwrap();
        backend.register_handlers().unwrap();
        assert_eq!(backend.registrations(), 2);
    }

    #[test]
    fn test_backend_as_trait_object() {
        let mut backend = ManualBackend::new();
        let dyn_backend: &mut dyn InputBackend = &mut backend;
        dyn_backend.register_handlers().unwrap();
        assert_eq!(backend.registrations(), 1);
    }
}
