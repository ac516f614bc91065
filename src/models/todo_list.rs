//! Todo list
//!
//! An ordered, named collection of [`TodoRef`] handles. Insertion order is
//! kept by every operation except explicit removal. Derived lists built by
//! [`TodoList::filter`] share handles with their source, so state changes on
//! an item show up in both.
//!
//! # Examples
//!
//! ```
//! use todolist::models::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today");
//! list.add(Todo::shared("Buy milk"));
//! list.add(Todo::shared("Clean room"));
//! list.add(Todo::shared("Gym"));
//!
//! list.mark_done_at(1).unwrap();
//! assert!(list.item_at(1).unwrap().is_done());
//! assert!(!list.is_done());
//!
//! list.mark_all_done();
//! assert_eq!(
//!     list.to_string(),
//!     "---- Today ----\n[X] Buy milk\n[X] Clean room\n[X] Gym"
//! );
//! ```
//!
//! Only items can be added; anything else is rejected at compile time:
//!
//! ```compile_fail
//! use todolist::models::TodoList;
//!
//! let mut list = TodoList::new("Today");
//! list.add("Buy milk");
//! ```

use std::rc::Rc;

use crate::config::RenderConfig;
use crate::error::{Result, check_index};
use crate::models::TodoRef;

/// A named, ordered collection of to-do items
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    name: String,
    items: Vec<TodoRef>,
}

impl TodoList {
    /// Create an empty list
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// The list's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item to the end of the list
    pub fn add(&mut self, item: TodoRef) {
        log::debug!("adding '{}' to '{}'", item.title(), self.name);
        self.items.push(item);
    }

    /// Number of items
    #[must_use]
    pub const fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item, if any
    #[must_use]
    pub fn first(&self) -> Option<&TodoRef> {
        self.items.first()
    }

    /// Last item, if any
    #[must_use]
    pub fn last(&self) -> Option<&TodoRef> {
        self.items.last()
    }

    /// Item at `index`
    pub fn item_at(&self, index: usize) -> Result<&TodoRef> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Mark the item at `index` as finished
    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Mark the item at `index` as unfinished
    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// True when every item is finished (an empty list counts as finished)
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.items.iter().all(|todo| todo.is_done())
    }

    /// Remove and return the first item; no-op on an empty list
    pub fn remove_first(&mut self) -> Option<TodoRef> {
        if self.items.is_empty() {
            return None;
        }
        let removed = self.items.remove(0);
        log::debug!("removed '{}' from front of '{}'", removed.title(), self.name);
        Some(removed)
    }

    /// Remove and return the last item; no-op on an empty list
    pub fn remove_last(&mut self) -> Option<TodoRef> {
        let removed = self.items.pop()?;
        log::debug!("removed '{}' from back of '{}'", removed.title(), self.name);
        Some(removed)
    }

    /// Remove and return the item at `index`, shifting later items down
    pub fn remove_at(&mut self, index: usize) -> Result<TodoRef> {
        check_index(index, self.items.len())?;
        let removed = self.items.remove(index);
        log::debug!("removed '{}' at {index} from '{}'", removed.title(), self.name);
        Ok(removed)
    }

    /// Index of this exact item (by identity, not title)
    #[must_use]
    pub fn position_of(&self, item: &TodoRef) -> Option<usize> {
        self.items.iter().position(|todo| Rc::ptr_eq(todo, item))
    }

    /// Remove this exact item (by identity); `None` if the list does not hold it
    pub fn remove(&mut self, item: &TodoRef) -> Option<TodoRef> {
        let index = self.position_of(item)?;
        self.remove_at(index).ok()
    }

    /// Iterate over the items in order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoRef> {
        self.items.iter()
    }

    /// Call `visit` once per item, in order
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&TodoRef),
    {
        self.items.iter().for_each(visit);
    }

    /// New list with the same name holding the items that match `predicate`
    ///
    /// Items are shared with `self`, not copied.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&TodoRef) -> bool,
    {
        let mut filtered = Self::new(self.name.clone());
        self.for_each(|todo| {
            if predicate(todo) {
                filtered.items.push(Rc::clone(todo));
            }
        });
        log::trace!(
            "filtered '{}': kept {} of {}",
            self.name,
            filtered.size(),
            self.size()
        );
        filtered
    }

    /// First item whose title equals `title` exactly
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<TodoRef> {
        self.filter(|todo| todo.title() == title).first().cloned()
    }

    /// Finished items, as a derived list
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(|todo| todo.is_done())
    }

    /// Unfinished items, as a derived list
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|todo| !todo.is_done())
    }

    /// Mark the first item titled `title` as finished; no-op if none match
    pub fn mark_done(&self, title: &str) {
        match self.find_by_title(title) {
            Some(todo) => todo.mark_done(),
            None => log::trace!("no item titled '{title}' in '{}'", self.name),
        }
    }

    /// Mark every item as finished
    pub fn mark_all_done(&self) {
        self.for_each(|todo| todo.mark_done());
    }

    /// Mark every item as unfinished
    pub fn mark_all_undone(&self) {
        self.for_each(|todo| todo.mark_undone());
    }

    /// Shallow snapshot of the items
    ///
    /// Reordering the returned `Vec` leaves the list alone; marking an item
    /// through it does not, since the handles are shared.
    #[must_use]
    pub fn to_vec(&self) -> Vec<TodoRef> {
        self.items.clone()
    }

    /// Header line followed by one line per item, using the given markers
    #[must_use]
    pub fn describe_with(&self, render: &RenderConfig) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(render.header_line(&self.name));
        lines.extend(self.items.iter().map(|todo| todo.describe_with(render)));
        lines.join("\n")
    }
}

impl std::fmt::Display for TodoList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe_with(&RenderConfig::default()))
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoRef;
    type IntoIter = std::slice::Iter<'a, TodoRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
