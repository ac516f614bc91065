//! Shared test fixtures and helpers

use todolist::models::{Todo, TodoList, TodoRef};

/// Install a test logger so `RUST_LOG=debug cargo test` shows library logs
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A list with a handle to each of its items
pub struct Fixture {
    pub list: TodoList,
    pub items: Vec<TodoRef>,
}

impl Fixture {
    /// Build a list named `name` holding one fresh item per title, in order
    pub fn new(name: &str, titles: &[&str]) -> Self {
        init_logger();
        let mut list = TodoList::new(name);
        let items: Vec<TodoRef> = titles.iter().map(|t| Todo::shared(*t)).collect();
        for item in &items {
            list.add(item.clone());
        }
        Self { list, items }
    }

    /// The "Today" list:
    /// ```text
    /// ---- Today ----
    /// [ ] Buy milk
    /// [ ] Clean room
    /// [ ] Gym
    /// ```
    pub fn today() -> Self {
        Self::new("Today", &["Buy milk", "Clean room", "Gym"])
    }
}

/// Titles of the list's items, in order
pub fn titles(list: &TodoList) -> Vec<String> {
    list.iter().map(|t| t.title().to_string()).collect()
}
