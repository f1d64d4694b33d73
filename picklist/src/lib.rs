//! Selection and focus engine for keyboard- and pointer-driven lists.
//!
//! `picklist` owns the state behind a navigable list widget: which records
//! are loaded, which one has keyboard focus, which are selected, and where a
//! shift-range grows from. Rendering is left to the host; it forwards key and
//! click events, re-renders from the observable state and reports back when
//! its render pass has committed so input focus can follow.
//!
//! # Example
//!
//! ```
//! use picklist::prelude::*;
//! use serde_json::{Value, json};
//!
//! let mut list: ItemCollection<Value> =
//!     ItemCollection::with_selection_mode(SelectionMode::Multiple);
//! list.load_json(&json!([{ "id": "readme" }, { "label": "notes" }]))
//!     .unwrap();
//!
//! list.handle_key(&KeyCombo::key(Key::Down).shift());
//! assert_eq!(list.focus_index(), 1);
//! assert!(list.is_selected(1));
//!
//! let mut focused = Vec::new();
//! list.render_complete(&mut |id: &str| {
//!     focused.push(id.to_string());
//!     true
//! });
//! assert_eq!(focused, ["wal-id-1"]);
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod events;
pub mod focus;
pub mod item;
pub mod keybinds;
pub mod selection;
#[cfg(feature = "crossterm")]
pub mod terminal;

pub use collection::{DEFAULT_ID_PREFIX, ItemCollection};
pub use config::ListConfig;
pub use error::{ListError, Result};
pub use events::{
    ActivateEvent, ContextMenuEvent, EventResult, FocusMoveEvent, ListEvents, SelectionChangeEvent,
};
pub use focus::{FocusHandoff, FocusTarget};
pub use item::{Item, Record};
pub use keybinds::{Key, KeyCombo, Keymap, ListAction, Modifiers};
pub use selection::SelectionMode;

pub mod prelude {
    pub use crate::collection::ItemCollection;
    pub use crate::config::ListConfig;
    pub use crate::error::ListError;
    pub use crate::events::{EventResult, ListEvents};
    pub use crate::focus::FocusTarget;
    pub use crate::item::{Item, Record};
    pub use crate::keybinds::{Key, KeyCombo, Keymap, ListAction, Modifiers};
    pub use crate::selection::SelectionMode;
}
