//! Terminal Backend - crossterm events into the input tracker
//!
//! Treats the terminal as the window. [`TerminalBackend`] switches on mouse
//! capture and, where the terminal supports it, key release/repeat
//! reporting. [`dispatch`] translates one crossterm event into the raw
//! handler calls the tracker expects.
//!
//! # Translation
//!
//! - `Key` → key handler, then the character handler for a printable
//!   press/repeat without Ctrl or Alt
//! - `Mouse` `Down`/`Up` → mouse button handler (cursor handler first if the
//!   click is somewhere the cursor was not)
//! - `Mouse` `Moved`/`Drag` → cursor handler with `(column, row)`
//! - `Mouse` `Scroll*` → scroll handler, one unit per notch, positive y up
//!
//! Keys without a code of their own are forwarded as [`KEY_UNKNOWN`].
//! Terminals do not report scancodes; they are always `0`.
//!
//! # Example
//!
//! ```ignore
//! use frame_input::backend::terminal::{dispatch, TerminalBackend};
//! use frame_input::InputState;
//! use std::time::Duration;
//!
//! let mut backend = TerminalBackend::new();
//! let mut input = InputState::default();
//! input.init(&mut backend)?;
//!
//! loop {
//!     while crossterm::event::poll(Duration::ZERO)? {
//!         dispatch(&mut input, &crossterm::event::read()?);
//!     }
//!     update(&mut input);
//!     input.advance();
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyEventState,
    KeyModifiers, KeyboardEnhancementFlags, ModifierKeyCode,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use std::io::stdout;

use super::InputBackend;
use crate::error::Result;
use crate::state::InputState;
use crate::types::{Action, KEY_UNKNOWN, KeyCode, Modifiers, MouseButton};

// =============================================================================
// BACKEND
// =============================================================================

/// The controlling terminal as an input source.
///
/// Modes turned on by `register_handlers` are undone by `restore`, or on
/// drop if `restore` was never called.
#[derive(Debug, Default)]
pub struct TerminalBackend {
    mouse_captured: bool,
    key_events_enhanced: bool,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the terminal report key releases and repeats?
    ///
    /// Without this, a key reads as down from its first press onward.
    pub fn reports_key_releases(&self) -> bool {
        self.key_events_enhanced
    }

    /// Undo the terminal modes turned on by `register_handlers`.
    pub fn restore(&mut self) -> Result<()> {
        if self.key_events_enhanced {
            execute!(stdout(), PopKeyboardEnhancementFlags)?;
            self.key_events_enhanced = false;
        }
        if self.mouse_captured {
            execute!(stdout(), DisableMouseCapture)?;
            self.mouse_captured = false;
        }
        Ok(())
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::debug!("failed to restore terminal input modes: {err}");
        }
    }
}

impl InputBackend for TerminalBackend {
    fn register_handlers(&mut self) -> Result<()> {
        execute!(stdout(), EnableMouseCapture)?;
        self.mouse_captured = true;

        if !self.key_events_enhanced && crossterm::terminal::supports_keyboard_enhancement()? {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            self.key_events_enhanced = true;
        }

        if !self.key_events_enhanced {
            log::warn!("terminal does not report key releases; keys will read as held");
        }
        Ok(())
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Forward one crossterm event into the tracker.
///
/// Returns `false` for events that are not input (resize, focus, paste).
pub fn dispatch(input: &mut InputState, event: &CrosstermEvent) -> bool {
    match event {
        CrosstermEvent::Key(key) => {
            dispatch_key(input, key);
            true
        }
        CrosstermEvent::Mouse(mouse) => {
            dispatch_mouse(input, mouse);
            true
        }
        _ => false,
    }
}

fn dispatch_key(input: &mut InputState, event: &CrosstermKeyEvent) {
    let action = convert_action(event.kind);
    let mods = convert_modifiers(event.modifiers, event.state);
    input.handle_key(key_code(event.code), 0, action, mods);

    if let CrosstermKeyCode::Char(c) = event.code {
        let text_entry = !event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if action.is_down() && text_entry {
            input.handle_char(c as u32);
        }
    }
}

fn dispatch_mouse(input: &mut InputState, event: &CrosstermMouseEvent) {
    let x = f64::from(event.column);
    let y = f64::from(event.row);
    let mods = convert_modifiers(event.modifiers, KeyEventState::NONE);

    match event.kind {
        MouseEventKind::Down(button) | MouseEventKind::Up(button) => {
            if input.cursor_position() != (x, y) {
                input.handle_cursor_pos(x, y);
            }
            let action = if matches!(event.kind, MouseEventKind::Down(_)) {
                Action::Press
            } else {
                Action::Release
            };
            input.handle_mouse_button(convert_mouse_button(button).raw(), action, mods);
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => input.handle_cursor_pos(x, y),
        MouseEventKind::ScrollUp => input.handle_scroll(0.0, 1.0),
        MouseEventKind::ScrollDown => input.handle_scroll(0.0, -1.0),
        MouseEventKind::ScrollLeft => input.handle_scroll(-1.0, 0.0),
        MouseEventKind::ScrollRight => input.handle_scroll(1.0, 0.0),
    }
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Raw key code for a crossterm key.
pub fn key_code(code: CrosstermKeyCode) -> i32 {
    let key = match code {
        CrosstermKeyCode::Char(c) => KeyCode::from_char(c),
        CrosstermKeyCode::Esc => Some(KeyCode::ESCAPE),
        CrosstermKeyCode::Enter => Some(KeyCode::ENTER),
        CrosstermKeyCode::Tab | CrosstermKeyCode::BackTab => Some(KeyCode::TAB),
        CrosstermKeyCode::Backspace => Some(KeyCode::BACKSPACE),
        CrosstermKeyCode::Insert => Some(KeyCode::INSERT),
        CrosstermKeyCode::Delete => Some(KeyCode::DELETE),
        CrosstermKeyCode::Right => Some(KeyCode::RIGHT),
        CrosstermKeyCode::Left => Some(KeyCode::LEFT),
        CrosstermKeyCode::Down => Some(KeyCode::DOWN),
        CrosstermKeyCode::Up => Some(KeyCode::UP),
        CrosstermKeyCode::PageUp => Some(KeyCode::PAGE_UP),
        CrosstermKeyCode::PageDown => Some(KeyCode::PAGE_DOWN),
        CrosstermKeyCode::Home => Some(KeyCode::HOME),
        CrosstermKeyCode::End => Some(KeyCode::END),
        CrosstermKeyCode::CapsLock => Some(KeyCode::CAPS_LOCK),
        CrosstermKeyCode::ScrollLock => Some(KeyCode::SCROLL_LOCK),
        CrosstermKeyCode::NumLock => Some(KeyCode::NUM_LOCK),
        CrosstermKeyCode::PrintScreen => Some(KeyCode::PRINT_SCREEN),
        CrosstermKeyCode::Pause => Some(KeyCode::PAUSE),
        CrosstermKeyCode::Menu => Some(KeyCode::MENU),
        CrosstermKeyCode::F(n) => KeyCode::function(n),
        CrosstermKeyCode::Modifier(modifier) => modifier_key_code(modifier),
        _ => None,
    };
    key.map(KeyCode::raw).unwrap_or(KEY_UNKNOWN)
}

fn modifier_key_code(modifier: ModifierKeyCode) -> Option<KeyCode> {
    match modifier {
        ModifierKeyCode::LeftShift => Some(KeyCode::LEFT_SHIFT),
        ModifierKeyCode::LeftControl => Some(KeyCode::LEFT_CONTROL),
        ModifierKeyCode::LeftAlt => Some(KeyCode::LEFT_ALT),
        ModifierKeyCode::LeftSuper => Some(KeyCode::LEFT_SUPER),
        ModifierKeyCode::RightShift => Some(KeyCode::RIGHT_SHIFT),
        ModifierKeyCode::RightControl => Some(KeyCode::RIGHT_CONTROL),
        ModifierKeyCode::RightAlt => Some(KeyCode::RIGHT_ALT),
        ModifierKeyCode::RightSuper => Some(KeyCode::RIGHT_SUPER),
        _ => None,
    }
}

fn convert_action(kind: KeyEventKind) -> Action {
    match kind {
        KeyEventKind::Press => Action::Press,
        KeyEventKind::Repeat => Action::Repeat,
        KeyEventKind::Release => Action::Release,
    }
}

fn convert_mouse_button(button: CrosstermMouseButton) -> MouseButton {
    match button {
        CrosstermMouseButton::Left => MouseButton::LEFT,
        CrosstermMouseButton::Right => MouseButton::RIGHT,
        CrosstermMouseButton::Middle => MouseButton::MIDDLE,
    }
}

fn convert_modifiers(mods: KeyModifiers, state: KeyEventState) -> Modifiers {
    let mut out = Modifiers::empty();
    out.set(Modifiers::SHIFT, mods.contains(KeyModifiers::SHIFT));
    out.set(Modifiers::CONTROL, mods.contains(KeyModifiers::CONTROL));
    out.set(Modifiers::ALT, mods.contains(KeyModifiers::ALT));
    out.set(Modifiers::SUPER, mods.contains(KeyModifiers::SUPER));
    out.set(Modifiers::CAPS_LOCK, state.contains(KeyEventState::CAPS_LOCK));
    out.set(Modifiers::NUM_LOCK, state.contains(KeyEventState::NUM_LOCK));
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: CrosstermKeyCode, kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(CrosstermKeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(CrosstermMouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_restore_without_modes_is_noop() {
        let mut backend = TerminalBackend::new();
        assert!(!backend.reports_key_releases());
        assert!(backend.restore().is_ok());
        assert!(backend.restore().is_ok());
        drop(backend);
    }

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputState::default();

        assert!(dispatch(&mut input, &key(CrosstermKeyCode::Char('a'), KeyEventKind::Press)));
        assert!(input.key_down(KeyCode::A));
        assert!(input.key_pressed(KeyCode::A));

        dispatch(&mut input, &key(CrosstermKeyCode::Char('a'), KeyEventKind::Release));
        assert!(!input.key_down(KeyCode::A));
        assert!(input.key_released(KeyCode::A));
    }

    #[test]
    fn test_printable_press_emits_char() {
        let mut input = InputState::default();
        dispatch(&mut input, &key(CrosstermKeyCode::Char('Q'), KeyEventKind::Press));

        assert_eq!(input.key_event().key, KeyCode::Q.raw());
        assert_eq!(input.char_event().as_char(), Some('Q'));
    }

    #[test]
    fn test_release_and_ctrl_do_not_emit_char() {
        let mut input = InputState::default();
        dispatch(&mut input, &key(CrosstermKeyCode::Char('a'), KeyEventKind::Release));
        assert!(!input.char_event().happened);

        let ctrl_c = CrosstermEvent::Key(CrosstermKeyEvent {
            code: CrosstermKeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        dispatch(&mut input, &ctrl_c);
        assert!(input.key_down(KeyCode::C));
        assert!(!input.char_event().happened);
    }

    #[test]
    fn test_key_mapping() {
        let cases = [
            (CrosstermKeyCode::Esc, KeyCode::ESCAPE.raw()),
            (CrosstermKeyCode::Enter, KeyCode::ENTER.raw()),
            (CrosstermKeyCode::BackTab, KeyCode::TAB.raw()),
            (CrosstermKeyCode::Up, KeyCode::UP.raw()),
            (CrosstermKeyCode::PageDown, KeyCode::PAGE_DOWN.raw()),
            (CrosstermKeyCode::F(1), KeyCode::F1.raw()),
            (CrosstermKeyCode::F(12), KeyCode::F12.raw()),
            (CrosstermKeyCode::Char(' '), KeyCode::SPACE.raw()),
            (CrosstermKeyCode::Char('!'), KEY_UNKNOWN),
            (CrosstermKeyCode::Null, KEY_UNKNOWN),
            (
                CrosstermKeyCode::Modifier(ModifierKeyCode::LeftShift),
                KeyCode::LEFT_SHIFT.raw(),
            ),
        ];

        for (code, expected) in cases {
            assert_eq!(key_code(code), expected, "{code:?}");
        }
    }

    #[test]
    fn test_unknown_key_reaches_callbacks() {
        let mut input = InputState::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        input
            .add_key_callback(move |key, scancode, action, _| {
                seen_clone.borrow_mut().push((key, scancode, action));
            })
            .unwrap();

        dispatch(&mut input, &key(CrosstermKeyCode::Char('%'), KeyEventKind::Press));
        assert_eq!(*seen.borrow(), vec![(KEY_UNKNOWN, 0, Action::Press)]);
        assert_eq!(input.char_event().as_char(), Some('%'));
    }

    #[test]
    fn test_repeat_kind() {
        let mut input = InputState::default();
        dispatch(&mut input, &key(CrosstermKeyCode::Left, KeyEventKind::Press));
        input.key_changed(KeyCode::LEFT);

        dispatch(&mut input, &key(CrosstermKeyCode::Left, KeyEventKind::Repeat));
        assert!(input.key_down(KeyCode::LEFT));
        assert!(!input.key_changed(KeyCode::LEFT));
    }

    #[test]
    fn test_modifiers() {
        let mods = convert_modifiers(
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            KeyEventState::CAPS_LOCK,
        );
        assert_eq!(mods, Modifiers::CONTROL | Modifiers::SHIFT | Modifiers::CAPS_LOCK);
        assert_eq!(
            convert_modifiers(KeyModifiers::empty(), KeyEventState::NONE),
            Modifiers::empty()
        );
    }

    #[test]
    fn test_mouse_buttons() {
        let mut input = InputState::default();

        dispatch(&mut input, &mouse(MouseEventKind::Down(CrosstermMouseButton::Right), 0, 0));
        assert!(input.mouse_button_down(MouseButton::RIGHT));
        assert!(input.mouse_button_pressed(MouseButton::RIGHT));
        assert!(input.mouse_button_event().pressed);

        input.advance();
        dispatch(&mut input, &mouse(MouseEventKind::Up(CrosstermMouseButton::Right), 0, 0));
        assert!(input.mouse_button_released(MouseButton::RIGHT));
        assert!(!input.mouse_button_event().pressed);
    }

    #[test]
    fn test_click_elsewhere_moves_cursor_first() {
        let mut input = InputState::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = order.clone();
        input.add_cursor_pos_callback(move |_, _| o.borrow_mut().push("cursor")).unwrap();
        let o = order.clone();
        input.add_mouse_button_callback(move |_, _, _| o.borrow_mut().push("button")).unwrap();

        dispatch(&mut input, &mouse(MouseEventKind::Down(CrosstermMouseButton::Left), 12, 3));
        dispatch(&mut input, &mouse(MouseEventKind::Up(CrosstermMouseButton::Left), 12, 3));

        assert_eq!(*order.borrow(), vec!["cursor", "button", "button"]);
        assert_eq!(input.cursor_position(), (12.0, 3.0));
    }

    #[test]
    fn test_mouse_motion() {
        let mut input = InputState::default();

        dispatch(&mut input, &mouse(MouseEventKind::Moved, 10, 10));
        assert_eq!(input.cursor_delta(), (0.0, 0.0));

        dispatch(&mut input, &mouse(MouseEventKind::Drag(CrosstermMouseButton::Left), 13, 8));
        assert_eq!(input.cursor_delta(), (3.0, -2.0));
        assert_eq!(input.mouse_move_event().x, 13.0);
    }

    #[test]
    fn test_scroll_directions() {
        let directions = [
            (MouseEventKind::ScrollUp, (0.0, 1.0)),
            (MouseEventKind::ScrollDown, (0.0, -1.0)),
            (MouseEventKind::ScrollLeft, (-1.0, 0.0)),
            (MouseEventKind::ScrollRight, (1.0, 0.0)),
        ];

        for (kind, expected) in directions {
            let mut input = InputState::default();
            dispatch(&mut input, &mouse(kind, 0, 0));
            assert_eq!(input.scroll_delta(), expected);
            assert!(input.scroll_event().happened);
        }
    }

    #[test]
    fn test_non_input_events_ignored() {
        let mut input = InputState::default();
        assert!(!dispatch(&mut input, &CrosstermEvent::Resize(120, 40)));
        assert!(!dispatch(&mut input, &CrosstermEvent::FocusGained));
        assert!(!input.frame_events().any());
    }
}
