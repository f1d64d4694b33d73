//! Keyboard and pointer handling for an [`ItemCollection`].
//!
//! The host forwards raw input here; the collection applies the list policy
//! and returns [`ListEvents`] describing what the host has to react to.

use crate::collection::ItemCollection;
use crate::keybinds::{KeyCombo, ListAction, Modifiers};

/// Outcome of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not bound, or the list is empty. Let the host handle it.
    Ignored,
    /// Handled by the list.
    Handled,
    /// Handled, and the host must suppress its own default behaviour
    /// (e.g. Ctrl+A selecting the whole page).
    Consumed,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self != Self::Ignored
    }

    pub fn prevents_default(self) -> bool {
        self == Self::Consumed
    }
}

/// Event fired when an item is activated (Enter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateEvent {
    pub index: usize,
    pub id: String,
}

/// Event fired when the context menu is requested for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuEvent {
    pub index: usize,
    pub id: String,
}

/// Event fired when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChangeEvent {
    /// All currently selected indices.
    pub selected: Vec<usize>,
    /// Indices that were added to the selection.
    pub added: Vec<usize>,
    /// Indices that were removed from the selection.
    pub removed: Vec<usize>,
}

/// Event fired when focus moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMoveEvent {
    pub previous: usize,
    pub current: usize,
}

/// Pending events to be dispatched after input handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEvents {
    pub activate: Option<ActivateEvent>,
    pub context_menu: Option<ContextMenuEvent>,
    pub selection_change: Option<SelectionChangeEvent>,
    pub focus_move: Option<FocusMoveEvent>,
    /// A shift-click extended the selection; the host should clear any
    /// text selection the gesture produced.
    pub clear_text_selection: bool,
}

impl ListEvents {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Focus and selection before an operation, for diffing afterwards.
struct Snapshot {
    focus: usize,
    selected: Vec<usize>,
}

impl Snapshot {
    fn take<T>(list: &ItemCollection<T>) -> Self {
        Self {
            focus: list.focus_index(),
            selected: list.selected_indices(),
        }
    }

    fn diff<T>(self, list: &ItemCollection<T>, events: &mut ListEvents) {
        let focus = list.focus_index();
        if focus != self.focus {
            events.focus_move = Some(FocusMoveEvent {
                previous: self.focus,
                current: focus,
            });
        }

        let selected = list.selected_indices();
        // selected_indices() is ascending
        let added: Vec<usize> = selected
            .iter()
            .copied()
            .filter(|index| self.selected.binary_search(index).is_err())
            .collect();
        let removed: Vec<usize> = self
            .selected
            .iter()
            .copied()
            .filter(|index| selected.binary_search(index).is_err())
            .collect();
        if !added.is_empty() || !removed.is_empty() {
            events.selection_change = Some(SelectionChangeEvent {
                selected,
                added,
                removed,
            });
        }
    }
}

impl<T> ItemCollection<T> {
    /// Handle a key press using the collection's keymap.
    pub fn handle_key(&mut self, key: &KeyCombo) -> (EventResult, ListEvents) {
        match self.keymap.get(key) {
            Some(action) => self.apply_action(action),
            None => (EventResult::Ignored, ListEvents::default()),
        }
    }

    /// Apply a list action relative to the focused item.
    pub fn apply_action(&mut self, action: ListAction) -> (EventResult, ListEvents) {
        let mut events = ListEvents::default();
        if self.is_empty() {
            return (EventResult::Ignored, events);
        }

        let before = Snapshot::take(self);
        let focus = self.focus_index() as isize;
        let mut result = EventResult::Handled;

        match action {
            ListAction::FocusNext => self.set_focus_on(focus + 1),
            ListAction::FocusPrevious => self.set_focus_on(focus - 1),
            ListAction::ToggleNext => {
                self.toggle_selection(focus + 1);
                self.set_focus_on(focus + 1);
            }
            ListAction::TogglePrevious => {
                self.toggle_selection(focus - 1);
                self.set_focus_on(focus - 1);
            }
            ListAction::ExtendToFirst => self.extend_selection_to(0),
            ListAction::ExtendToLast => {
                if let Some(last) = self.last_index() {
                    self.extend_selection_to(last as isize);
                }
            }
            ListAction::ExtendToFocus => self.extend_selection_to(focus),
            ListAction::ToggleFocused => self.toggle_selection(focus),
            ListAction::SelectAll => {
                self.select_all();
                result = EventResult::Consumed;
            }
            ListAction::DeselectAll => self.deselect_all(),
            ListAction::Activate => {
                if let Some(item) = self.focused_item() {
                    events.activate = Some(ActivateEvent {
                        index: before.focus,
                        id: item.id().to_string(),
                    });
                }
            }
            ListAction::ContextMenu => {
                if let Some(item) = self.focused_item() {
                    events.context_menu = Some(ContextMenuEvent {
                        index: before.focus,
                        id: item.id().to_string(),
                    });
                }
            }
        }

        before.diff(self, &mut events);
        (result, events)
    }

    /// Handle a pointer click on the item at `index`.
    ///
    /// Plain click selects only that item, Ctrl+click toggles it and
    /// Shift+click extends the selection to it. Every click then anchors and
    /// focuses the clicked item.
    pub fn handle_click(&mut self, index: isize, modifiers: Modifiers) -> ListEvents {
        let mut events = ListEvents::default();
        let Some(index) = self.clamp_index(index) else {
            return events;
        };
        let index = index as isize;

        let before = Snapshot::take(self);
        if modifiers.ctrl {
            self.toggle_selection(index);
        } else if modifiers.shift {
            self.extend_selection_to(index);
            events.clear_text_selection = true;
        } else {
            self.select_one(index);
        }
        self.set_anchor(index);
        self.set_focus_on(index);

        before.diff(self, &mut events);
        events
    }
}
