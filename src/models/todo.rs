//! Todo item
//!
//! The title is fixed at construction. Only the completion flag changes, and
//! it lives in a [`Cell`] so it can be flipped through any shared handle.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::RenderConfig;

/// Marker rendered for a finished item
pub const DONE_MARKER: &str = "X";

/// Marker rendered for an unfinished item
pub const UNDONE_MARKER: &str = " ";

/// Shared handle to a [`Todo`]
///
/// Lists hold handles, not copies, so marking an item done through one list
/// is visible through every other list holding the same item.
pub type TodoRef = Rc<Todo>;

/// A single to-do entry
#[derive(Debug)]
pub struct Todo {
    title: String,
    done: Cell<bool>,
}

impl Todo {
    /// Create an unfinished item with the given title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    /// Create an unfinished item already wrapped in a shared handle
    #[must_use]
    pub fn shared(title: impl Into<String>) -> TodoRef {
        Rc::new(Self::new(title))
    }

    /// Mark as finished
    pub fn mark_done(&self) {
        log::trace!("marking '{}' done", self.title);
        self.done.set(true);
    }

    /// Mark as unfinished
    pub fn mark_undone(&self) {
        log::trace!("marking '{}' undone", self.title);
        self.done.set(false);
    }

    /// Whether the item is finished
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done.get()
    }

    /// The item's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render as `[<marker>] <title>` using the given markers
    #[must_use]
    pub fn describe_with(&self, render: &RenderConfig) -> String {
        render.item_line(self.is_done(), &self.title)
    }
}

impl std::fmt::Display for Todo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe_with(&RenderConfig::default()))
    }
}
