//! Error types for input tracking.
//!
//! Tracking itself never fails. Errors only surface at the edges: converting
//! raw codes into typed ones, registering callbacks, and asking the backend
//! to start delivering events.

use thiserror::Error;

use crate::state::CallbackKind;

/// Errors produced by the input layer.
#[derive(Error, Debug)]
pub enum InputError {
    /// A raw key or button code does not fit the state table.
    #[error("{device} code {code} is outside the tracked range 0..={max}")]
    OutOfRange {
        device: &'static str,
        code: i32,
        max: i32,
    },

    /// A raw action value is not release (0), press (1) or repeat (2).
    #[error("unknown action value {0}")]
    UnknownAction(i32),

    /// A callback registry is already at capacity.
    #[error("{kind} callback registry is full (capacity {capacity})")]
    CapacityExceeded { kind: CallbackKind, capacity: usize },

    /// The backend could not enable event delivery.
    #[error("input backend failed: {0}")]
    Backend(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InputError::OutOfRange {
            device: "key",
            code: 400,
            max: 348,
        };
        assert_eq!(err.to_string(), "key code 400 is outside the tracked range 0..=348");

        let err = InputError::CapacityExceeded {
            kind: CallbackKind::Scroll,
            capacity: 4,
        };
        assert_eq!(err.to_string(), "scroll callback registry is full (capacity 4)");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::other("no tty");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::Backend(_)));
    }
}
