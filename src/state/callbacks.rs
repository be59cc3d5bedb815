//! Callbacks Module - Bounded, ordered handler registries
//!
//! User handlers run synchronously, in registration order, every time the
//! matching raw event arrives. There is no removal. Each registry has a fixed
//! capacity chosen at construction; registering past it is rejected.

use std::fmt;

use crate::error::{InputError, Result};
use crate::types::{Action, Modifiers};

// =============================================================================
// HANDLER TYPES
// =============================================================================

/// Key handler: `(key, scancode, action, mods)` exactly as reported.
pub type KeyCallback = dyn FnMut(i32, i32, Action, Modifiers);

/// Mouse button handler: `(button, action, mods)`.
pub type MouseButtonCallback = dyn FnMut(i32, Action, Modifiers);

/// Scroll handler: `(x_offset, y_offset)`.
pub type ScrollCallback = dyn FnMut(f64, f64);

/// Cursor handler: `(x, y)` absolute position.
pub type CursorCallback = dyn FnMut(f64, f64);

/// Which registry a handler belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    Key,
    MouseButton,
    Scroll,
    CursorPos,
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallbackKind::Key => "key",
            CallbackKind::MouseButton => "mouse button",
            CallbackKind::Scroll => "scroll",
            CallbackKind::CursorPos => "cursor position",
        };
        f.write_str(name)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Fixed-capacity list of handlers of one kind.
pub struct CallbackRegistry<F: ?Sized> {
    kind: CallbackKind,
    capacity: usize,
    handlers: Vec<Box<F>>,
}

impl<F: ?Sized> CallbackRegistry<F> {
    pub fn new(kind: CallbackKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            handlers: Vec::with_capacity(capacity),
        }
    }

    /// Append a handler. Returns its position in call order.
    pub fn register(&mut self, handler: Box<F>) -> Result<usize> {
        if self.handlers.len() >= self.capacity {
            log::warn!(
                "rejecting {} callback: registry full ({} of {})",
                self.kind,
                self.handlers.len(),
                self.capacity
            );
            return Err(InputError::CapacityExceeded {
                kind: self.kind,
                capacity: self.capacity,
            });
        }
        self.handlers.push(handler);
        Ok(self.handlers.len() - 1)
    }

    /// Handlers in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<F>> {
        self.handlers.iter_mut()
    }

    pub fn kind(&self) -> CallbackKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<F: ?Sized> fmt::Debug for CallbackRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("kind", &self.kind)
            .field("len", &self.handlers.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_register_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry: CallbackRegistry<ScrollCallback> =
            CallbackRegistry::new(CallbackKind::Scroll, 4);

        for id in 0..3 {
            let calls = calls.clone();
            let slot = registry
                .register(Box::new(move |_, _| calls.borrow_mut().push(id)))
                .unwrap();
            assert_eq!(slot, id);
        }

        for handler in registry.iter_mut() {
            handler(0.0, 1.0);
        }
        assert_eq!(*calls.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut registry: CallbackRegistry<CursorCallback> =
            CallbackRegistry::new(CallbackKind::CursorPos, 2);

        registry.register(Box::new(|_, _| {})).unwrap();
        registry.register(Box::new(|_, _| {})).unwrap();

        let err = registry.register(Box::new(|_, _| {})).unwrap_err();
        assert!(matches!(
            err,
            InputError::CapacityExceeded { kind: CallbackKind::CursorPos, capacity: 2 }
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut registry: CallbackRegistry<KeyCallback> =
            CallbackRegistry::new(CallbackKind::Key, 0);
        assert!(registry.register(Box::new(|_, _, _, _| {})).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CallbackKind::Key.to_string(), "key");
        assert_eq!(CallbackKind::MouseButton.to_string(), "mouse button");
        assert_eq!(CallbackKind::CursorPos.to_string(), "cursor position");
    }
}
