//! List items and the `Record` trait for the data they wrap.

use serde_json::Value;

/// Data that can be loaded into an [`ItemCollection`](crate::ItemCollection).
///
/// A record may carry its own identity. Records without one get an id
/// generated by the collection when they are loaded.
pub trait Record {
    /// The explicit id carried by this record, if any.
    fn id(&self) -> Option<String> {
        None
    }
}

/// JSON records use their `id` field. Strings are used verbatim, other
/// scalars are stringified, `null` counts as absent.
impl Record for Value {
    fn id(&self) -> Option<String> {
        match self.get("id")? {
            Value::Null => None,
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Record for String {}

impl Record for &str {}

/// One record in a list, with its identity and transient UI state.
///
/// `data` and `id` never change once the item exists. The `selected` and
/// `focused` flags are owned by the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    data: T,
    id: String,
    selected: bool,
    focused: bool,
}

impl<T> Item<T> {
    pub(crate) fn new(data: T, id: String) -> Self {
        Self {
            data,
            id,
            selected: false,
            focused: false,
        }
    }

    /// The wrapped record.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Stable identity, unique within the owning collection.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns true if the flag changed.
    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
