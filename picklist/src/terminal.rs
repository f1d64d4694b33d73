//! Conversion from crossterm events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::keybinds::{Key, KeyCombo, Modifiers};

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            shift: mods.contains(KeyModifiers::SHIFT),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Map a crossterm key code, `None` for keys lists don't use.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(n) => Key::F(n),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Menu => Key::Menu,
        _ => return None,
    };
    Some(key)
}

/// Convert a key press. Releases and unsupported keys give `None`.
pub fn key_combo(event: &KeyEvent) -> Option<KeyCombo> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = key_from_code(event.code)?;
    Some(KeyCombo::new(key, event.modifiers.into()))
}

/// Modifiers of a left-button press, `None` for any other mouse event.
pub fn click_modifiers(event: &MouseEvent) -> Option<Modifiers> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(event.modifiers.into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_space_maps_to_space_key() {
        let combo = key_combo(&press(KeyCode::Char(' '), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(combo, KeyCombo::key(Key::Space).shift());
    }

    #[test]
    fn test_ctrl_shift_home() {
        let combo = key_combo(&press(
            KeyCode::Home,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ))
        .unwrap();
        assert_eq!(combo, KeyCombo::new(Key::Home, Modifiers::CTRL_SHIFT));
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(KeyCode::Down, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(key_combo(&event), None);
    }

    #[test]
    fn test_left_click_modifiers() {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 2,
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(click_modifiers(&event), Some(Modifiers::CTRL));

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..event
        };
        assert_eq!(click_modifiers(&moved), None);
    }
}
