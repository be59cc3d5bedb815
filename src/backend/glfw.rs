//! GLFW Backend - glfw-rs window events into the input tracker
//!
//! `init` turns on event polling for keys, mouse buttons, scroll, cursor
//! position and characters. Each frame, forward the window's flushed events
//! through [`dispatch`]:
//!
//! ```ignore
//! let (mut window, events) = glfw.create_window(1280, 720, "demo", glfw::WindowMode::Windowed)?;
//! let mut input = frame_input::InputState::default();
//! input.init(&mut *window)?;
//!
//! while !window.should_close() {
//!     glfw.poll_events();
//!     for (_, event) in glfw::flush_messages(&events) {
//!         frame_input::backend::glfw::dispatch(&mut input, &event);
//!     }
//!     update(&mut input);
//!     input.advance();
//! }
//! ```

use ::glfw::{Action as GlfwAction, Modifiers as GlfwModifiers, WindowEvent};

use super::InputBackend;
use crate::error::Result;
use crate::state::InputState;
use crate::types::{Action, Modifiers};

impl InputBackend for ::glfw::Window {
    fn register_handlers(&mut self) -> Result<()> {
        self.set_key_polling(true);
        self.set_mouse_button_polling(true);
        self.set_scroll_polling(true);
        self.set_cursor_pos_polling(true);
        self.set_char_polling(true);
        Ok(())
    }
}

/// Forward one window event into the tracker.
///
/// Returns `false` for events that are not one of the five input kinds.
pub fn dispatch(input: &mut InputState, event: &WindowEvent) -> bool {
    match *event {
        WindowEvent::Key(key, scancode, action, mods) => {
            let (action, mods) = (convert_action(action), convert_modifiers(mods));
            input.handle_key(key as i32, scancode, action, mods);
        }
        WindowEvent::MouseButton(button, action, mods) => {
            let (action, mods) = (convert_action(action), convert_modifiers(mods));
            input.handle_mouse_button(button as i32, action, mods);
        }
        WindowEvent::Scroll(x, y) => input.handle_scroll(x, y),
        WindowEvent::CursorPos(x, y) => input.handle_cursor_pos(x, y),
        WindowEvent::Char(c) => input.handle_char(c as u32),
        _ => return false,
    }
    true
}

fn convert_action(action: GlfwAction) -> Action {
    match action {
        GlfwAction::Release => Action::Release,
        GlfwAction::Press => Action::Press,
        GlfwAction::Repeat => Action::Repeat,
    }
}

fn convert_modifiers(mods: GlfwModifiers) -> Modifiers {
    // Same bit layout
    Modifiers::from_bits_truncate(mods.bits() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KeyCode, MouseButton};

    #[test]
    fn test_key_events() {
        let mut input = InputState::default();
        let press = WindowEvent::Key(::glfw::Key::A, 30, GlfwAction::Press, GlfwModifiers::empty());
        assert!(dispatch(&mut input, &press));
        assert!(input.key_down(KeyCode::A));
        assert_eq!(input.key_event().key, 65);

        let release =
            WindowEvent::Key(::glfw::Key::A, 30, GlfwAction::Release, GlfwModifiers::empty());
        dispatch(&mut input, &release);
        assert!(input.key_released(KeyCode::A));
    }

    #[test]
    fn test_unknown_key_is_untracked() {
        let mut input = InputState::default();
        let event =
            WindowEvent::Key(::glfw::Key::Unknown, 0, GlfwAction::Press, GlfwModifiers::empty());
        dispatch(&mut input, &event);
        assert_eq!(input.key_event().key, -1);
        assert!(input.key_event().happened);
    }

    #[test]
    fn test_mouse_and_cursor_events() {
        let mut input = InputState::default();
        let click = WindowEvent::MouseButton(
            ::glfw::MouseButton::Button1,
            GlfwAction::Press,
            GlfwModifiers::empty(),
        );
        dispatch(&mut input, &click);
        assert!(input.mouse_button_pressed(MouseButton::LEFT));

        dispatch(&mut input, &WindowEvent::CursorPos(100.0, 100.0));
        dispatch(&mut input, &WindowEvent::CursorPos(105.0, 95.0));
        assert_eq!(input.cursor_delta(), (5.0, -5.0));

        dispatch(&mut input, &WindowEvent::Scroll(0.0, 2.5));
        assert_eq!(input.scroll_delta(), (0.0, 2.5));

        dispatch(&mut input, &WindowEvent::Char('z'));
        assert_eq!(input.char_event().as_char(), Some('z'));
    }

    #[test]
    fn test_modifier_bits() {
        let mods = convert_modifiers(GlfwModifiers::from_bits_truncate(0x1 | 0x2));
        assert_eq!(mods, Modifiers::SHIFT | Modifiers::CONTROL);
    }

    #[test]
    fn test_other_events_ignored() {
        let mut input = InputState::default();
        assert!(!dispatch(&mut input, &WindowEvent::Close));
        assert!(!input.frame_events().any());
    }
}
