//! Tests for groups of two-way checkable text items.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{CheckMarkPosition, CheckedText, Handle, Node, RelativeRadioGroup, Selectable};

fn item(id: u32) -> CheckedText {
    CheckedText::new(format!("row {}", id))
        .with_handle(id)
        .with_position(CheckMarkPosition::Right)
        .with_check_mark(16, 16)
}

fn group_of(ids: &[u32]) -> RelativeRadioGroup<CheckedText> {
    let mut group = RelativeRadioGroup::new();
    for &id in ids {
        group.add_child(Node::Item(item(id)));
    }
    group
}

fn checked_items(group: &RelativeRadioGroup<CheckedText>) -> Vec<Handle> {
    group
        .items()
        .filter(|item| item.is_checked())
        .filter_map(|item| item.handle())
        .collect()
}

#[test]
fn test_toggle_moves_selection_between_text_items() {
    let mut group = group_of(&[1, 2, 3]);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    group.on_checked_change(move |change| sink.borrow_mut().push(change.checked));

    group.toggle(Handle(1));
    group.toggle(Handle(3));

    assert_eq!(group.checked(), Some(Handle(3)));
    assert_eq!(checked_items(&group), vec![Handle(3)]);
    assert_eq!(*changes.borrow(), vec![Some(Handle(1)), Some(Handle(3))]);
}

#[test]
fn test_toggling_checked_text_item_turns_it_off() {
    let mut group = group_of(&[1, 2]);
    group.toggle(Handle(2));

    group.toggle(Handle(2));
    assert!(checked_items(&group).is_empty());
    // A toggle to off never rewrites the record.
    assert_eq!(group.checked(), Some(Handle(2)));

    group.toggle(Handle(1));
    assert_eq!(group.checked(), Some(Handle(1)));
    assert_eq!(checked_items(&group), vec![Handle(1)]);
}

#[test]
fn test_check_keeps_mark_layout() {
    let mut group = group_of(&[1]);
    group.check(Some(Handle(1)));

    let text = group.item(Handle(1)).map(|item| item.content_padding().right);
    assert_eq!(text, Some(16));
}
