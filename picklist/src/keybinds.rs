//! Keys, modifiers and the key → action dispatch table.

use std::collections::HashMap;

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        alt: false,
    };

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    Enter,
    Escape,
    Backspace,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    /// Context menu key
    Menu,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

/// What a bound key does to the list.
///
/// "Focus" below is the focused index at the time the key is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    /// Move focus to focus + 1.
    FocusNext,
    /// Move focus to focus - 1.
    FocusPrevious,
    /// Toggle selection of focus + 1, then move focus there.
    ToggleNext,
    /// Toggle selection of focus - 1, then move focus there.
    TogglePrevious,
    /// Extend the selection from the anchor to the first item.
    ExtendToFirst,
    /// Extend the selection from the anchor to the last item.
    ExtendToLast,
    /// Extend the selection from the anchor to the focused item.
    ExtendToFocus,
    /// Toggle selection of the focused item.
    ToggleFocused,
    /// Select every item. The host should suppress its default handling.
    SelectAll,
    /// Clear the selection.
    DeselectAll,
    /// Activate the focused item (open, run, ...).
    Activate,
    /// Open the context menu for the focused item.
    ContextMenu,
}

/// Key → action lookup.
///
/// Combos match exactly: Shift+Down and Ctrl+Shift+Down are different keys.
#[derive(Debug, Clone)]
pub struct Keymap {
    binds: HashMap<KeyCombo, ListAction>,
}

impl Keymap {
    /// A keymap with nothing bound.
    pub fn empty() -> Self {
        Self {
            binds: HashMap::new(),
        }
    }

    /// Bind a key, returning the action it replaced.
    pub fn bind(&mut self, key: KeyCombo, action: ListAction) -> Option<ListAction> {
        self.binds.insert(key, action)
    }

    /// Remove a binding, returning the action it had.
    pub fn unbind(&mut self, key: &KeyCombo) -> Option<ListAction> {
        self.binds.remove(key)
    }

    /// Look up the action bound to a key.
    pub fn get(&self, key: &KeyCombo) -> Option<ListAction> {
        self.binds.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    /// Merge another keymap into this one; its bindings win.
    pub fn merge(&mut self, other: Keymap) {
        self.binds.extend(other.binds);
    }
}

impl Default for Keymap {
    /// The standard list keyboard policy.
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCombo::key(Key::Down), ListAction::FocusNext);
        keymap.bind(KeyCombo::key(Key::Down).shift(), ListAction::ToggleNext);
        keymap.bind(KeyCombo::key(Key::Up), ListAction::FocusPrevious);
        keymap.bind(KeyCombo::key(Key::Up).shift(), ListAction::TogglePrevious);
        keymap.bind(KeyCombo::key(Key::Home).ctrl().shift(), ListAction::ExtendToFirst);
        keymap.bind(KeyCombo::key(Key::End).ctrl().shift(), ListAction::ExtendToLast);
        keymap.bind(KeyCombo::key(Key::Space), ListAction::ToggleFocused);
        keymap.bind(KeyCombo::key(Key::Space).shift(), ListAction::ExtendToFocus);
        keymap.bind(KeyCombo::key(Key::Char('a')).ctrl(), ListAction::SelectAll);
        keymap.bind(KeyCombo::key(Key::Char('A')).ctrl(), ListAction::SelectAll);
        // Terminals report Ctrl+Shift+A as an uppercase char with shift held
        keymap.bind(KeyCombo::key(Key::Char('A')).ctrl().shift(), ListAction::SelectAll);
        keymap.bind(KeyCombo::key(Key::Enter), ListAction::Activate);
        keymap.bind(KeyCombo::key(Key::Right), ListAction::ContextMenu);
        keymap.bind(KeyCombo::key(Key::Menu), ListAction::ContextMenu);
        keymap
    }
}
