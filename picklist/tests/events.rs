use picklist::{
    EventResult, FocusMoveEvent, ItemCollection, Key, KeyCombo, Keymap, ListAction, Modifiers,
    SelectionMode,
};
use serde_json::{Value, json};

fn list_of(n: usize, mode: SelectionMode) -> ItemCollection<Value> {
    let mut list = ItemCollection::with_selection_mode(mode);
    list.load((0..n).map(|i| json!({ "id": format!("row-{}", i) })))
        .unwrap();
    list
}

fn press(list: &mut ItemCollection<Value>, key: KeyCombo) -> EventResult {
    list.handle_key(&key).0
}

// ============================================================================
// Keyboard policy
// ============================================================================

#[test]
fn test_shift_down_then_ctrl_shift_home_scenario() {
    let mut list = list_of(5, SelectionMode::Multiple);
    assert_eq!(list.focus_index(), 0);

    for _ in 0..3 {
        press(&mut list, KeyCombo::key(Key::Down).shift());
    }
    assert_eq!(list.selected_indices(), [1, 2, 3]);
    assert_eq!(list.focus_index(), 3);
    assert_eq!(list.last_selected_index(), Some(3));

    let (result, events) = list.handle_key(&KeyCombo::key(Key::Home).ctrl().shift());
    assert_eq!(result, EventResult::Handled);
    assert_eq!(list.selected_indices(), [0, 1, 2, 3]);
    assert_eq!(list.last_selected_index(), Some(0));

    let change = events.selection_change.unwrap();
    assert_eq!(change.added, [0]);
    assert!(change.removed.is_empty());
    assert_eq!(change.selected, [0, 1, 2, 3]);
}

#[test]
fn test_arrows_move_focus_and_clamp() {
    let mut list = list_of(3, SelectionMode::Multiple);

    let (result, events) = list.handle_key(&KeyCombo::key(Key::Down));
    assert_eq!(result, EventResult::Handled);
    assert_eq!(
        events.focus_move,
        Some(FocusMoveEvent {
            previous: 0,
            current: 1
        })
    );
    assert!(events.selection_change.is_none());

    press(&mut list, KeyCombo::key(Key::Down));
    let (_, events) = list.handle_key(&KeyCombo::key(Key::Down));
    assert_eq!(list.focus_index(), 2);
    assert!(events.focus_move.is_none());

    press(&mut list, KeyCombo::key(Key::Up));
    assert_eq!(list.focus_index(), 1);
    assert!(list.selected_indices().is_empty());
}

#[test]
fn test_shift_up_toggles_previous() {
    let mut list = list_of(4, SelectionMode::Multiple);
    list.set_focus_on(3);
    press(&mut list, KeyCombo::key(Key::Up).shift());
    press(&mut list, KeyCombo::key(Key::Up).shift());
    assert_eq!(list.selected_indices(), [1, 2]);
    assert_eq!(list.focus_index(), 1);
}

#[test]
fn test_ctrl_shift_end_extends_to_last() {
    let mut list = list_of(6, SelectionMode::Multiple);
    list.handle_click(2, Modifiers::NONE);
    press(&mut list, KeyCombo::new(Key::End, Modifiers::CTRL_SHIFT));
    assert_eq!(list.selected_indices(), [2, 3, 4, 5]);
    assert_eq!(list.last_selected_index(), Some(5));
}

#[test]
fn test_home_without_modifiers_is_ignored() {
    let mut list = list_of(3, SelectionMode::Multiple);
    list.set_focus_on(2);
    let (result, events) = list.handle_key(&KeyCombo::key(Key::Home));
    assert_eq!(result, EventResult::Ignored);
    assert!(events.is_empty());
    assert_eq!(list.focus_index(), 2);
}

#[test]
fn test_space_toggles_and_shift_space_extends() {
    let mut list = list_of(5, SelectionMode::Multiple);
    press(&mut list, KeyCombo::key(Key::Space));
    assert_eq!(list.selected_indices(), [0]);

    list.set_focus_on(3);
    press(&mut list, KeyCombo::key(Key::Space).shift());
    assert_eq!(list.selected_indices(), [0, 1, 2, 3]);

    press(&mut list, KeyCombo::key(Key::Space));
    assert_eq!(list.selected_indices(), [0, 1, 2]);
}

#[test]
fn test_ctrl_a_selects_all_and_prevents_default() {
    let mut list = list_of(4, SelectionMode::Multiple);
    let (result, events) = list.handle_key(&KeyCombo::key(Key::Char('a')).ctrl());
    assert_eq!(result, EventResult::Consumed);
    assert!(result.prevents_default());
    assert_eq!(list.selected_indices(), [0, 1, 2, 3]);
    assert_eq!(events.selection_change.unwrap().added, [0, 1, 2, 3]);

    let mut single = list_of(4, SelectionMode::Single);
    press(&mut single, KeyCombo::key(Key::Char('A')).ctrl());
    assert!(single.selected_indices().is_empty());
}

#[test]
fn test_enter_activates_focused_item() {
    let mut list = list_of(3, SelectionMode::None);
    list.set_focus_on(1);
    let (result, events) = list.handle_key(&KeyCombo::key(Key::Enter));
    assert_eq!(result, EventResult::Handled);
    let activate = events.activate.unwrap();
    assert_eq!(activate.index, 1);
    assert_eq!(activate.id, "row-1");
}

#[test]
fn test_right_and_menu_open_context_menu() {
    let mut list = list_of(3, SelectionMode::Multiple);
    for key in [Key::Right, Key::Menu] {
        let (_, events) = list.handle_key(&KeyCombo::key(key));
        assert_eq!(events.context_menu.unwrap().id, "row-0");
    }
}

#[test]
fn test_keys_on_empty_list_are_ignored() {
    let mut list: ItemCollection<Value> = ItemCollection::new();
    let (result, events) = list.handle_key(&KeyCombo::key(Key::Down).shift());
    assert_eq!(result, EventResult::Ignored);
    assert!(events.is_empty());
}

#[test]
fn test_none_mode_keys_move_focus_only() {
    let mut list = list_of(3, SelectionMode::None);
    press(&mut list, KeyCombo::key(Key::Down).shift());
    press(&mut list, KeyCombo::key(Key::Space));
    assert_eq!(list.focus_index(), 1);
    assert!(list.selected_indices().is_empty());
}

#[test]
fn test_custom_keymap() {
    let mut keymap = Keymap::default();
    keymap.bind(KeyCombo::key(Key::Char('j')), ListAction::FocusNext);
    keymap.bind(KeyCombo::key(Key::Escape), ListAction::DeselectAll);
    let mut list = ItemCollection::with_selection_mode(SelectionMode::Multiple).keymap(keymap);
    list.load(vec!["a", "b", "c"]).unwrap();

    list.handle_key(&KeyCombo::key(Key::Char('j')));
    assert_eq!(list.focus_index(), 1);

    list.select_all();
    let (_, events) = list.handle_key(&KeyCombo::key(Key::Escape));
    assert!(list.selected_indices().is_empty());
    assert_eq!(events.selection_change.unwrap().removed, [0, 1, 2]);
}

// ============================================================================
// Pointer policy
// ============================================================================

#[test]
fn test_plain_click_selects_one_and_focuses() {
    let mut list = list_of(5, SelectionMode::Multiple);
    list.handle_click(1, Modifiers::NONE);
    let events = list.handle_click(3, Modifiers::NONE);

    assert_eq!(list.selected_indices(), [3]);
    assert_eq!(list.focus_index(), 3);
    assert_eq!(list.last_selected_index(), Some(3));
    assert_eq!(list.pending_focus(), Some("row-3"));

    let change = events.selection_change.unwrap();
    assert_eq!(change.added, [3]);
    assert_eq!(change.removed, [1]);
    assert!(!events.clear_text_selection);
}

#[test]
fn test_ctrl_click_toggles() {
    let mut list = list_of(5, SelectionMode::Multiple);
    list.handle_click(1, Modifiers::NONE);
    list.handle_click(3, Modifiers::CTRL);
    assert_eq!(list.selected_indices(), [1, 3]);

    list.handle_click(1, Modifiers::CTRL);
    assert_eq!(list.selected_indices(), [3]);
    // Every click anchors, even one that deselects
    assert_eq!(list.last_selected_index(), Some(1));
    assert_eq!(list.focus_index(), 1);
}

#[test]
fn test_shift_click_extends_and_clears_text_selection() {
    let mut list = list_of(6, SelectionMode::Multiple);
    list.handle_click(1, Modifiers::NONE);
    let events = list.handle_click(4, Modifiers::SHIFT);

    assert_eq!(list.selected_indices(), [1, 2, 3, 4]);
    assert!(events.clear_text_selection);
    assert_eq!(list.last_selected_index(), Some(4));

    list.handle_click(0, Modifiers::SHIFT);
    assert_eq!(list.selected_indices(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_shift_click_in_single_moves_selection() {
    let mut list = list_of(4, SelectionMode::Single);
    list.handle_click(0, Modifiers::NONE);
    list.handle_click(2, Modifiers::SHIFT);
    assert_eq!(list.selected_indices(), [2]);
}

#[test]
fn test_click_out_of_range_clamps() {
    let mut list = list_of(3, SelectionMode::Multiple);
    list.handle_click(40, Modifiers::NONE);
    assert_eq!(list.selected_indices(), [2]);
    assert_eq!(list.focus_index(), 2);
}

#[test]
fn test_click_in_none_mode_focuses_without_selecting() {
    let mut list = list_of(3, SelectionMode::None);
    let events = list.handle_click(2, Modifiers::NONE);
    assert!(events.selection_change.is_none());
    assert_eq!(list.focus_index(), 2);
    assert!(events.focus_move.is_some());
}
