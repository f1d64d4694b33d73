//! The item collection: identity, focus and selection state for one list.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::ListConfig;
use crate::error::{ListError, Result};
use crate::focus::{FocusHandoff, FocusTarget};
use crate::item::{Item, Record};
use crate::keybinds::Keymap;
use crate::selection::SelectionMode;

/// Prefix for generated ids (`wal-id-1`, `wal-id-2`, ...).
pub const DEFAULT_ID_PREFIX: &str = "wal-id";

/// Ordered items plus the focus and selection state machine over them.
///
/// Index-taking operations accept any `isize` and clamp it into the list:
/// negative indices land on the first item, indices past the end on the
/// last. On an empty list every index operation is a no-op and reads return
/// `false`/`None`.
#[derive(Debug, Clone)]
pub struct ItemCollection<T> {
    items: Vec<Item<T>>,
    focus_index: usize,
    /// Anchor for range extension. `None` until something is selected.
    last_selected_index: Option<usize>,
    /// Never reset, so generated ids are not reused across loads.
    id_counter: u64,
    id_prefix: String,
    selection_mode: SelectionMode,
    pub(crate) keymap: Keymap,
    focus: FocusHandoff,
    needs_render: bool,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            focus_index: 0,
            last_selected_index: None,
            id_counter: 0,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            selection_mode: SelectionMode::default(),
            keymap: Keymap::default(),
            focus: FocusHandoff::new(),
            needs_render: false,
        }
    }
}

impl<T> ItemCollection<T> {
    /// Create an empty collection in `Multiple` mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with the given selection mode.
    pub fn with_selection_mode(mode: SelectionMode) -> Self {
        Self {
            selection_mode: mode,
            ..Default::default()
        }
    }

    /// Create an empty collection from configuration.
    pub fn from_config(config: &ListConfig) -> Self {
        Self {
            selection_mode: config.selection_mode,
            id_prefix: config.id_prefix.clone(),
            ..Default::default()
        }
    }

    /// Set the prefix used for generated ids.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Replace the key → action table.
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the last item, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// All items in display order.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Get an item by exact position (no clamping).
    pub fn get(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(index)
    }

    /// Iterate over the items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item<T>> {
        self.items.iter()
    }

    /// The id of the item at `index` (clamped).
    pub fn id_for_index(&self, index: isize) -> Option<&str> {
        let index = self.clamp_index(index)?;
        Some(self.items[index].id())
    }

    /// Position of the item with the given id.
    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Clamp an index into the list.
    ///
    /// Negative values clamp to 0 and values past the end to the last index.
    /// Returns `None` for an empty list.
    pub fn clamp_index(&self, index: isize) -> Option<usize> {
        let last = self.last_index()?;
        if index < 0 {
            Some(0)
        } else {
            Some((index as usize).min(last))
        }
    }

    // -------------------------------------------------------------------------
    // Observable state
    // -------------------------------------------------------------------------

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// The focused item, `None` when empty.
    pub fn focused_item(&self) -> Option<&Item<T>> {
        self.items.get(self.focus_index)
    }

    /// The range anchor, `None` when nothing has been anchored since load.
    pub fn last_selected_index(&self) -> Option<usize> {
        self.last_selected_index
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub fn generated_id_prefix(&self) -> &str {
        &self.id_prefix
    }

    pub fn keybinds(&self) -> &Keymap {
        &self.keymap
    }

    pub fn keybinds_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Whether state changed since the last [`render_complete`](Self::render_complete).
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// The id waiting to receive input focus after the next render.
    pub fn pending_focus(&self) -> Option<&str> {
        self.focus.pending()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Change the selection mode, trimming the selection to fit it.
    ///
    /// `None` clears the selection. `Single` keeps the anchor if it is
    /// selected, otherwise the first selected item.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if mode == self.selection_mode {
            return;
        }
        log::debug!(
            "[picklist] selection mode {} -> {}",
            self.selection_mode,
            mode
        );
        self.selection_mode = mode;
        match mode {
            SelectionMode::None => self.deselect_all(),
            SelectionMode::Single => {
                let keep = self
                    .last_selected_index
                    .filter(|&anchor| self.items.get(anchor).is_some_and(Item::is_selected))
                    .or_else(|| self.items.iter().position(Item::is_selected));
                if let Some(keep) = keep {
                    self.clear_selection_except(Some(keep));
                }
            }
            SelectionMode::Multiple => {}
        }
    }

    /// Whether the item at `index` (clamped) is selected.
    pub fn is_selected(&self, index: isize) -> bool {
        self.clamp_index(index)
            .is_some_and(|index| self.items[index].is_selected())
    }

    /// Positions of all selected items, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selected())
            .map(|(index, _)| index)
            .collect()
    }

    /// Ids of all selected items, in display order.
    pub fn selected_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.is_selected())
            .map(Item::id)
            .collect()
    }

    /// Records of all selected items, in display order.
    pub fn selected_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.is_selected())
            .map(Item::data)
            .collect()
    }

    /// Set the selected flag of the item at `index` (clamped).
    ///
    /// Does not move the anchor. In `Single` mode selecting an item
    /// deselects every other one.
    pub fn select(&mut self, index: isize, selected: bool) {
        if !self.selection_mode.allows_selection() {
            return;
        }
        let Some(index) = self.clamp_index(index) else {
            return;
        };
        if selected && !self.selection_mode.allows_multiple() {
            self.clear_selection_except(Some(index));
        }
        if self.items[index].set_selected(selected) {
            log::trace!("[picklist] item {} selected={}", index, selected);
            self.needs_render = true;
        }
    }

    /// Flip the selection of the item at `index`. Selecting it makes it the
    /// range anchor.
    pub fn toggle_selection(&mut self, index: isize) {
        if !self.selection_mode.allows_selection() {
            return;
        }
        let Some(index) = self.clamp_index(index) else {
            return;
        };
        let selected = !self.items[index].is_selected();
        self.select(index as isize, selected);
        if selected {
            self.last_selected_index = Some(index);
        }
    }

    /// Select only the item at `index` and make it the range anchor.
    pub fn select_one(&mut self, index: isize) {
        if !self.selection_mode.allows_selection() {
            return;
        }
        let Some(index) = self.clamp_index(index) else {
            return;
        };
        self.clear_selection_except(Some(index));
        if self.items[index].set_selected(true) {
            self.needs_render = true;
        }
        self.last_selected_index = Some(index);
        log::trace!("[picklist] selected only item {}", index);
    }

    /// Select every item. Only permitted in `Multiple` mode.
    pub fn select_all(&mut self) {
        if !self.selection_mode.allows_select_all() {
            return;
        }
        for item in &mut self.items {
            if item.set_selected(true) {
                self.needs_render = true;
            }
        }
    }

    /// Clear the selection. The anchor is kept.
    pub fn deselect_all(&mut self) {
        self.clear_selection_except(None);
    }

    /// Grow the selection from the anchor to `index`.
    ///
    /// Extending backwards marks `[index, anchor]`; extending forwards marks
    /// `(anchor, index]`, since the anchor was selected when it became the
    /// anchor. Items are only ever added, never removed. The target becomes
    /// the new anchor. In `Single` mode this moves the one selection instead.
    pub fn extend_selection_to(&mut self, index: isize) {
        match self.selection_mode {
            SelectionMode::None => {}
            SelectionMode::Single => self.select_one(index),
            SelectionMode::Multiple => {
                let Some(target) = self.clamp_index(index) else {
                    return;
                };
                let range = match self.last_selected_index {
                    Some(anchor) if target < anchor => target..=anchor,
                    Some(anchor) => anchor + 1..=target,
                    None => 0..=target,
                };
                log::trace!(
                    "[picklist] extend selection {:?} -> {}: marking {:?}",
                    self.last_selected_index,
                    target,
                    range
                );
                for item in &mut self.items[range] {
                    if item.set_selected(true) {
                        self.needs_render = true;
                    }
                }
                self.last_selected_index = Some(target);
            }
        }
    }

    /// Move the range anchor to `index` (clamped) without selecting anything.
    pub fn set_anchor(&mut self, index: isize) {
        if let Some(index) = self.clamp_index(index) {
            self.last_selected_index = Some(index);
        }
    }

    fn clear_selection_except(&mut self, keep: Option<usize>) {
        for (index, item) in self.items.iter_mut().enumerate() {
            if Some(index) != keep && item.set_selected(false) {
                self.needs_render = true;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Move focus to the item at `index` (clamped).
    ///
    /// Focusing the already focused index does nothing at all. Otherwise the
    /// item's id is queued so [`render_complete`](Self::render_complete) can
    /// move input focus to its rendered element.
    pub fn set_focus_on(&mut self, index: isize) {
        let Some(target) = self.clamp_index(index) else {
            return;
        };
        if target == self.focus_index {
            return;
        }
        if let Some(previous) = self.items.get_mut(self.focus_index) {
            previous.set_focused(false);
        }
        self.items[target].set_focused(true);
        log::debug!("[picklist] focus {} -> {}", self.focus_index, target);
        self.focus_index = target;
        self.needs_render = true;
        self.focus.request(self.items[target].id());
    }

    /// Signal that the host's render pass has committed.
    ///
    /// Hands any pending focus request to `target` and clears the render
    /// flag. Returns the id that received focus.
    pub fn render_complete<F: FocusTarget + ?Sized>(&mut self, target: &mut F) -> Option<String> {
        self.needs_render = false;
        self.focus.complete(target)
    }
}

impl<T: Record> ItemCollection<T> {
    /// Replace every item with the given records.
    ///
    /// Records carrying an id keep it; the rest get `<prefix>-<n>` from the
    /// collection's counter. Focus returns to the first item and the anchor
    /// is cleared. Fails with [`ListError::DuplicateIdentity`] if two records
    /// carry the same id, leaving the collection untouched.
    pub fn load<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let records: Vec<T> = records.into_iter().collect();
        let explicit: Vec<Option<String>> = records.iter().map(|record| record.id()).collect();

        let mut claimed: HashMap<&str, usize> = HashMap::new();
        for (position, id) in explicit.iter().enumerate() {
            let Some(id) = id else { continue };
            if let Some(&first) = claimed.get(id.as_str()) {
                log::warn!(
                    "[picklist] rejected load: id '{}' used by records {} and {}",
                    id,
                    first,
                    position
                );
                return Err(ListError::DuplicateIdentity {
                    id: id.clone(),
                    first,
                    second: position,
                });
            }
            claimed.insert(id.as_str(), position);
        }

        let mut counter = self.id_counter;
        let mut items = Vec::with_capacity(records.len());
        for (data, id) in records.into_iter().zip(&explicit) {
            let id = match id {
                Some(id) => id.clone(),
                None => loop {
                    counter += 1;
                    let candidate = format!("{}-{}", self.id_prefix, counter);
                    if !claimed.contains_key(candidate.as_str()) {
                        break candidate;
                    }
                },
            };
            items.push(Item::new(data, id));
        }

        log::debug!(
            "[picklist] loaded {} items ({} generated ids)",
            items.len(),
            counter - self.id_counter
        );
        self.id_counter = counter;
        self.items = items;
        self.focus_index = 0;
        self.last_selected_index = None;
        if let Some(first) = self.items.first_mut() {
            first.set_focused(true);
        }
        self.focus.cancel();
        self.needs_render = true;
        Ok(())
    }
}

impl ItemCollection<Value> {
    /// Load a JSON array of records.
    ///
    /// Fails with [`ListError::InvalidInput`] if `value` is not an array.
    pub fn load_json(&mut self, value: &Value) -> Result<()> {
        let Value::Array(records) = value else {
            log::warn!("[picklist] rejected load: expected array");
            return Err(ListError::InvalidInput {
                expected: "array of records",
                found: json_kind(value),
            });
        };
        self.load(records.iter().cloned())
    }

    /// Parse and load a JSON array of records.
    pub fn load_json_str(&mut self, json: &str) -> Result<()> {
        let value: Value = serde_json::from_str(json)?;
        self.load_json(&value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a Item<T>;
    type IntoIter = std::slice::Iter<'a, Item<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!({ "a": 1 })), "object");
        assert_eq!(json_kind(&json!("s")), "string");
    }

    #[test]
    fn test_generated_id_skips_explicit_collision() {
        let mut list = ItemCollection::new();
        list.load(vec![json!({ "id": "wal-id-1" }), json!({ "label": "b" })])
            .unwrap();
        assert_eq!(list.id_for_index(0), Some("wal-id-1"));
        assert_eq!(list.id_for_index(1), Some("wal-id-2"));
    }
}
