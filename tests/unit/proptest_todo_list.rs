//! Property-based tests for the todo list
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::rc::Rc;

use proptest::prelude::*;
use todolist::models::{Todo, TodoList, TodoRef};

/// Build a list from `(title, done)` pairs, returning the handles in order
fn build(entries: &[(String, bool)]) -> (TodoList, Vec<TodoRef>) {
    let mut list = TodoList::new("Generated");
    let items: Vec<TodoRef> = entries
        .iter()
        .map(|(title, done)| {
            let todo = Todo::shared(title.as_str());
            if *done {
                todo.mark_done();
            }
            todo
        })
        .collect();
    for item in &items {
        list.add(Rc::clone(item));
    }
    (list, items)
}

fn same_items(a: &[TodoRef], b: &[TodoRef]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Rc::ptr_eq(x, y))
}

fn entries() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-c]{1,3}", any::<bool>()), 0..20)
}

proptest! {
    /// Every add grows the list by one and keeps insertion order
    #[test]
    fn add_keeps_count_and_order(entries in entries()) {
        let (list, items) = build(&entries);
        prop_assert_eq!(list.size(), entries.len());
        prop_assert!(same_items(&list.to_vec(), &items));
    }

    /// Filtering matches a plain iterator filter and leaves the source alone
    #[test]
    fn filter_matches_iterator_filter(
        entries in entries(),
        prefix in "[a-c]{0,2}",
        want_done in any::<bool>()
    ) {
        let (list, items) = build(&entries);
        let keep = |t: &TodoRef| t.title().starts_with(prefix.as_str()) && t.is_done() == want_done;

        let filtered = list.filter(keep);
        let expected: Vec<TodoRef> = list.to_vec().into_iter().filter(|t| keep(t)).collect();

        prop_assert!(same_items(&filtered.to_vec(), &expected));
        prop_assert_eq!(filtered.name(), list.name());
        prop_assert!(same_items(&list.to_vec(), &items));
    }

    /// remove_at drops exactly one item and shifts the rest down
    #[test]
    fn remove_at_shifts_later_items(
        entries in prop::collection::vec(("[a-c]{1,3}", any::<bool>()), 1..20),
        seed in any::<prop::sample::Index>()
    ) {
        let (mut list, items) = build(&entries);
        let index = seed.index(items.len());

        let removed = list.remove_at(index).unwrap();
        prop_assert!(Rc::ptr_eq(&removed, &items[index]));
        prop_assert_eq!(list.size(), items.len() - 1);

        let mut expected = items.clone();
        expected.remove(index);
        prop_assert!(same_items(&list.to_vec(), &expected));
    }

    /// A list is done exactly when it has no unfinished items
    #[test]
    fn is_done_iff_nothing_pending(entries in entries()) {
        let (list, _items) = build(&entries);
        prop_assert_eq!(list.is_done(), list.all_not_done().size() == 0);
        prop_assert_eq!(
            list.all_done().size() + list.all_not_done().size(),
            list.size()
        );
    }

    /// Marking an unknown title leaves every flag untouched
    #[test]
    fn mark_done_unknown_title_is_noop(entries in entries()) {
        let (list, items) = build(&entries);
        let before: Vec<bool> = items.iter().map(|t| t.is_done()).collect();

        list.mark_done("zzz");

        let after: Vec<bool> = items.iter().map(|t| t.is_done()).collect();
        prop_assert_eq!(before, after);
    }

    /// find_by_title returns the first item with that title
    #[test]
    fn find_by_title_returns_first_match(entries in entries(), title in "[a-c]{1,3}") {
        let (list, items) = build(&entries);
        let expected = items.iter().find(|t| t.title() == title);
        let found = list.find_by_title(&title);
        match (found, expected) {
            (Some(f), Some(e)) => {
                prop_assert!(Rc::ptr_eq(&f, e));
            }
            (None, None) => {}
            _ => {
                prop_assert!(false, "find_by_title disagreed with a linear search");
            }
        }
    }
}
