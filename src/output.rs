//! Output formatting for human and JSON modes
//!
//! A [`ListReport`] is a plain snapshot of a [`TodoList`] that can be
//! rendered either as the list's text form or as machine-parseable JSON.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::models::TodoList;

/// Output mode for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Snapshot of a list's contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    /// List name
    pub name: String,
    /// Number of items
    pub total: usize,
    /// Number of finished items
    pub done: usize,
    /// Whether every item is finished
    pub all_done: bool,
    /// Items in list order
    pub items: Vec<TodoEntry>,
}

/// One item in a [`ListReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoEntry {
    /// Item title
    pub title: String,
    /// Whether the item is finished
    pub done: bool,
}

impl ListReport {
    /// Take a snapshot of `list`
    #[must_use]
    pub fn from_list(list: &TodoList) -> Self {
        let items: Vec<TodoEntry> = list
            .iter()
            .map(|todo| TodoEntry {
                title: todo.title().to_string(),
                done: todo.is_done(),
            })
            .collect();

        Self {
            name: list.name().to_string(),
            total: items.len(),
            done: items.iter().filter(|e| e.done).count(),
            all_done: items.iter().all(|e| e.done),
            items,
        }
    }

    /// Render the report based on output mode
    #[must_use]
    pub fn render(&self, mode: OutputMode, render: &RenderConfig) -> String {
        match mode {
            OutputMode::Human => self.render_human(render),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, render: &RenderConfig) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(render.header_line(&self.name));
        lines.extend(
            self.items
                .iter()
                .map(|entry| render.item_line(entry.done, &entry.title)),
        );
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl From<&TodoList> for ListReport {
    fn from(list: &TodoList) -> Self {
        Self::from_list(list)
    }
}
