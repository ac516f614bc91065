//! Data models for todolist
//!
//! - [`Todo`]: a single entry with a fixed title and a completion flag
//! - [`TodoList`]: a named, ordered collection of shared [`TodoRef`] handles

mod todo;
mod todo_list;

pub use todo::{DONE_MARKER, Todo, TodoRef, UNDONE_MARKER};
pub use todo_list::TodoList;
