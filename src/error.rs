//! Error types for to-do collections
//!
//! Only index-taking operations can fail. Lookups that may come up empty
//! (`first`, `last`, `find_by_title`, `remove_first`, ...) return `Option`
//! instead, since an empty result is a normal outcome there.

use thiserror::Error;

/// Errors raised by [`TodoList`](crate::models::TodoList) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Index was outside `0..len`
    #[error("invalid index: {index} (list has {len} item(s))")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of items in the list when the index was checked
        len: usize,
    },
}

/// Result alias for to-do operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Check `index` against a list of `len` items
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        log::warn!("rejected index {index} for list of {len} item(s)");
        Err(TodoError::IndexOutOfRange { index, len })
    }
}
