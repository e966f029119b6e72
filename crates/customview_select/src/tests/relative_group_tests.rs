//! Tests for groups whose items are direct children.

use super::{button, checked_items, record};
use crate::{Handle, HierarchyEvent, Node, RadioButton, RelativeRadioGroup};

const A: Handle = Handle(1);
const B: Handle = Handle(2);
const C: Handle = Handle(3);

fn group_of(buttons: Vec<RadioButton>) -> RelativeRadioGroup {
    let mut group = RelativeRadioGroup::new();
    for b in buttons {
        group.add_child(Node::Item(b));
    }
    group
}

#[test]
fn test_end_to_end_selection() {
    let mut group = RelativeRadioGroup::new();
    let recorded = record(&mut group);

    group.add_child(Node::Item(button(1)));
    group.add_child(Node::Item(button(2).checked(true)));
    assert_eq!(group.checked(), Some(B));

    group.toggle(A);
    assert_eq!(group.checked(), Some(A));
    assert!(group.is_item_checked(A));
    assert!(!group.is_item_checked(B));

    group.check(None);
    assert_eq!(group.checked(), None);
    assert!(checked_items(&group).is_empty());

    assert_eq!(
        recorded.borrow().checked_sequence(),
        vec![Some(B), Some(A), None]
    );
}

#[test]
fn test_check_moves_selection() {
    let mut group = group_of(vec![button(1), button(2), button(3)]);
    let recorded = record(&mut group);

    group.check(Some(A));
    group.check(Some(C));

    assert_eq!(group.checked(), Some(C));
    assert_eq!(checked_items(&group), vec![C]);
    assert_eq!(recorded.borrow().checked_sequence(), vec![Some(A), Some(C)]);
}

#[test]
fn test_check_same_twice_emits_once() {
    let mut group = group_of(vec![button(1), button(2)]);
    let recorded = record(&mut group);

    group.check(Some(B));
    group.check(Some(B));
    group.clear_check();
    group.clear_check();

    assert_eq!(recorded.borrow().checked_sequence(), vec![Some(B), None]);
}

#[test]
fn test_toggling_checked_radio_is_silent() {
    let mut group = group_of(vec![button(1), button(2)]);
    group.toggle(A);
    let recorded = record(&mut group);

    // Already on: the item does not change, so nothing is reported.
    group.toggle(A);
    assert!(recorded.borrow().changes.is_empty());
    assert_eq!(group.checked(), Some(A));
}

#[test]
fn test_unchecking_item_directly_keeps_record() {
    let mut group = group_of(vec![button(1), button(2)]);
    group.check(Some(A));

    group.set_item_checked(A, false);
    assert!(!group.is_item_checked(A));
    assert_eq!(group.checked(), Some(A));
}

#[test]
fn test_pre_checked_items_last_one_wins() {
    let mut group = RelativeRadioGroup::new();
    let recorded = record(&mut group);

    group.add_child(Node::Item(button(1).checked(true)));
    group.add_child(Node::Item(button(2).checked(true)));

    assert_eq!(group.checked(), Some(B));
    assert_eq!(checked_items(&group), vec![B]);
    assert_eq!(recorded.borrow().checked_sequence(), vec![Some(A), Some(B)]);
}

#[test]
fn test_items_without_handle_get_one() {
    let mut group: RelativeRadioGroup = RelativeRadioGroup::new();
    group.add_child(Node::Item(RadioButton::new("first")));
    group.add_child(Node::Item(RadioButton::new("second")));

    let handles: Vec<Option<Handle>> = group
        .items()
        .map(crate::Selectable::handle)
        .collect();
    assert_eq!(
        handles,
        vec![
            Some(Handle(Handle::AUTO_BASE)),
            Some(Handle(Handle::AUTO_BASE + 1)),
        ]
    );

    group.toggle(Handle(Handle::AUTO_BASE + 1));
    assert_eq!(group.checked(), Some(Handle(Handle::AUTO_BASE + 1)));
}

#[test]
fn test_non_items_are_carried_but_ignored() {
    let mut group = RelativeRadioGroup::new();
    let recorded = record(&mut group);

    group.add_child(Node::Other("title".into()));
    group.add_child(Node::Item(button(1)));

    assert_eq!(group.len(), 2);
    assert_eq!(group.items().count(), 1);
    assert_eq!(
        recorded.borrow().hierarchy,
        vec![
            HierarchyEvent::ChildAdded {
                index: 0,
                handles: vec![],
            },
            HierarchyEvent::ChildAdded {
                index: 1,
                handles: vec![A],
            },
        ]
    );
}

#[test]
fn test_removing_checked_item_keeps_selection() {
    // Known quirk: the record still points at the removed item.
    let mut group = group_of(vec![button(1), button(2)]);
    group.check(Some(A));

    let removed = group.remove_child(0);
    assert!(matches!(removed, Some(Node::Item(ref b)) if b.label() == "option 1"));
    assert_eq!(group.checked(), Some(A));
    assert!(group.item(A).is_none());

    // The next selection proceeds normally; unchecking the gone item is a no-op.
    group.toggle(B);
    assert_eq!(group.checked(), Some(B));
    assert_eq!(checked_items(&group), vec![B]);
}

#[test]
fn test_remove_out_of_range() {
    let mut group = group_of(vec![button(1)]);
    assert!(group.remove_child(5).is_none());
    assert_eq!(group.len(), 1);
}

#[test]
fn test_remove_reports_hierarchy_change() {
    let mut group = group_of(vec![button(1), button(2)]);
    let recorded = record(&mut group);

    group.remove_child(1);
    assert_eq!(
        recorded.borrow().hierarchy,
        vec![HierarchyEvent::ChildRemoved {
            index: 1,
            handles: vec![B],
        }]
    );
}

#[test]
fn test_check_unknown_handle_still_recorded() {
    let mut group = group_of(vec![button(1)]);
    group.check(Some(Handle(99)));
    assert_eq!(group.checked(), Some(Handle(99)));
    assert!(checked_items(&group).is_empty());
}

#[test]
fn test_finish_population_applies_preset() {
    let mut group: RelativeRadioGroup = RelativeRadioGroup::with_initial_checked(B);
    let recorded = record(&mut group);
    group.add_child(Node::Item(button(1)));
    group.add_child(Node::Item(button(2)));

    assert!(!group.is_item_checked(B));
    group.finish_population();

    assert!(group.is_item_checked(B));
    assert_eq!(group.checked(), Some(B));
    assert_eq!(recorded.borrow().checked_sequence(), vec![Some(B)]);
}

#[test]
fn test_named_group_in_change() {
    let mut group = group_of(vec![button(1)]).with_name("size");
    let recorded = record(&mut group);
    group.check(Some(A));
    assert_eq!(recorded.borrow().changes[0].group, "size");
}

#[test]
fn test_default_name_comes_from_layout() {
    let group: RelativeRadioGroup = RelativeRadioGroup::new();
    assert_eq!(group.name(), "RelativeRadioGroup");
}

#[test]
fn test_at_most_one_checked_over_random_operations() {
    let mut group = group_of((1..=5).map(button).collect());
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u32
    };

    for _ in 0..500 {
        let handle = Handle(next() % 6 + 1);
        match next() % 5 {
            0 => group.check(Some(handle)),
            1 => group.clear_check(),
            2 => group.toggle(handle),
            3 => group.set_item_checked(handle, false),
            _ => group.set_item_checked(handle, true),
        }

        let on = checked_items(&group);
        assert!(on.len() <= 1, "more than one item checked: {:?}", on);
        if let Some(&only) = on.first() {
            assert_eq!(group.checked(), Some(only));
        }
        assert!(!group.coordinator().is_protected());
    }
}

#[test]
fn test_duplicate_handle_is_reassigned() {
    let mut group = RelativeRadioGroup::new();
    group.add_child(Node::Item(button(1).checked(true)));
    group.add_child(Node::Item(button(1).checked(true)));

    let fresh = Handle(Handle::AUTO_BASE);
    let handles: Vec<Handle> = group
        .items()
        .filter_map(crate::Selectable::handle)
        .collect();
    assert_eq!(handles, vec![A, fresh]);
    assert_eq!(group.checked(), Some(fresh));
    assert_eq!(checked_items(&group), vec![fresh]);

    // Both items stay reachable, so a later check never leaves two on.
    group.check(Some(A));
    assert_eq!(checked_items(&group), vec![A]);
    group.check(Some(fresh));
    assert_eq!(checked_items(&group), vec![fresh]);
}

#[test]
fn test_toggle_unknown_handle_is_ignored() {
    let mut group = group_of(vec![button(1)]);
    let recorded = record(&mut group);

    group.toggle(Handle(99));
    assert_eq!(group.checked(), None);
    assert!(recorded.borrow().changes.is_empty());
}
