//! todolist - An in-memory collection of to-do items
//!
//! Items are created by the caller, shared between lists by handle, and
//! searched, filtered, and updated in place. Nothing is persisted.
//!
//! ```
//! use todolist::models::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today");
//! list.add(Todo::shared("Buy milk"));
//! list.add(Todo::shared("Gym"));
//!
//! let pending = list.all_not_done();
//! pending.mark_all_done();
//! assert!(list.is_done());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::{Result, TodoError};
