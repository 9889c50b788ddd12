//! Property-based tests for `TaskList` operations.
//!
//! Uses proptest to verify:
//! 1. Adding non-blank text grows the list by one pending task with that text.
//! 2. Adding blank text leaves the list unchanged.
//! 3. Toggling flips only the target task, and toggling twice restores it.
//! 4. Deleting removes exactly the target and keeps the relative order.
//! 5. Ids stay unique across any sequence of operations.

use std::collections::HashSet;

use proptest::prelude::*;
use todo_core::{Task, TaskList};

/// Strategy for text with at least one non-whitespace character.
fn arb_text() -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", "[a-zA-Z0-9àéñ✓]{1,16}", "[ \t]{0,3}")
        .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
}

/// Strategy for text that trims to nothing.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

/// Strategy for a populated list with a random subset of tasks completed.
fn arb_list() -> impl Strategy<Value = TaskList> {
    prop::collection::vec((arb_text(), any::<bool>()), 1..12).prop_map(|entries| {
        let mut list = TaskList::new();
        for (text, done) in entries {
            if let Some(id) = list.add(&text)
                && done
            {
                list.toggle(id);
            }
        }
        list
    })
}

fn snapshot(list: &TaskList) -> Vec<Task> {
    list.iter().cloned().collect()
}

/// Operations applied in sequence by the uniqueness property.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_text().prop_map(Op::Add),
        any::<usize>().prop_map(Op::Toggle),
        any::<usize>().prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn add_non_blank_appends_pending_task(mut list in arb_list(), text in arb_text()) {
        let before = snapshot(&list);
        let id = list.add(&text);
        prop_assert!(id.is_some());

        prop_assert_eq!(list.len(), before.len() + 1);
        let last = list.iter().last().unwrap();
        prop_assert_eq!(Some(last.id), id);
        prop_assert_eq!(&last.text, &text);
        prop_assert!(!last.completed);
        prop_assert_eq!(&snapshot(&list)[..before.len()], &before[..]);
    }

    #[test]
    fn add_blank_is_noop(mut list in arb_list(), text in arb_blank()) {
        let before = snapshot(&list);
        prop_assert!(list.add(&text).is_none());
        prop_assert_eq!(snapshot(&list), before);
    }

    #[test]
    fn toggle_flips_only_target(mut list in arb_list(), pick in any::<prop::sample::Index>()) {
        let before = snapshot(&list);
        let target = pick.get(&before).id;

        let flipped = list.toggle(target);
        let after = snapshot(&list);

        prop_assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            prop_assert_eq!(old.id, new.id);
            prop_assert_eq!(&old.text, &new.text);
            if old.id == target {
                prop_assert_eq!(new.completed, !old.completed);
                prop_assert_eq!(flipped, Some(new.completed));
            } else {
                prop_assert_eq!(new.completed, old.completed);
            }
        }
    }

    #[test]
    fn toggle_twice_restores(mut list in arb_list(), pick in any::<prop::sample::Index>()) {
        let before = snapshot(&list);
        let target = pick.get(&before).id;
        list.toggle(target);
        list.toggle(target);
        prop_assert_eq!(snapshot(&list), before);
    }

    #[test]
    fn delete_removes_only_target(mut list in arb_list(), pick in any::<prop::sample::Index>()) {
        let before = snapshot(&list);
        let target = pick.get(&before).id;

        let removed = list.delete(target);
        prop_assert_eq!(removed.map(|t| t.id), Some(target));
        prop_assert_eq!(list.len(), before.len() - 1);
        prop_assert!(list.get(target).is_none());

        let expected: Vec<Task> = before.into_iter().filter(|t| t.id != target).collect();
        prop_assert_eq!(snapshot(&list), expected);
    }

    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut list = TaskList::new();
        for op in ops {
            match op {
                Op::Add(text) => {
                    list.add(&text);
                }
                Op::Toggle(n) if !list.is_empty() => {
                    let id = list.get_index(n % list.len()).unwrap().id;
                    list.toggle(id);
                }
                Op::Delete(n) if !list.is_empty() => {
                    let id = list.get_index(n % list.len()).unwrap().id;
                    list.delete(id);
                }
                _ => {}
            }
            let ids: HashSet<_> = list.iter().map(|t| t.id).collect();
            prop_assert_eq!(ids.len(), list.len());
        }
    }
}
