//! Rendering configuration
//!
//! Controls how items and lists are drawn as text. Only presentation lives
//! here; list contents are never written to disk.
//!
//! ```toml
//! [render]
//! done_marker = "X"
//! undone_marker = " "
//! header_fill = "----"
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Text rendering preferences
    #[serde(default)]
    pub render: RenderConfig,
}

/// Markers used when rendering items and list headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Placed between the brackets of a finished item
    #[serde(default = "default_done_marker")]
    pub done_marker: String,
    /// Placed between the brackets of an unfinished item
    #[serde(default = "default_undone_marker")]
    pub undone_marker: String,
    /// Drawn on both sides of the list name in the header line
    #[serde(default = "default_header_fill")]
    pub header_fill: String,
}

fn default_done_marker() -> String {
    crate::models::DONE_MARKER.to_string()
}

fn default_undone_marker() -> String {
    crate::models::UNDONE_MARKER.to_string()
}

fn default_header_fill() -> String {
    "----".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            done_marker: default_done_marker(),
            undone_marker: default_undone_marker(),
            header_fill: default_header_fill(),
        }
    }
}

impl RenderConfig {
    /// Marker for the given completion state
    #[must_use]
    pub fn marker(&self, done: bool) -> &str {
        if done {
            &self.done_marker
        } else {
            &self.undone_marker
        }
    }

    /// Item line: `[<marker>] <title>`
    #[must_use]
    pub fn item_line(&self, done: bool, title: &str) -> String {
        format!("[{}] {title}", self.marker(done))
    }

    /// Header line: `<fill> <name> <fill>`
    #[must_use]
    pub fn header_line(&self, name: &str) -> String {
        format!("{fill} {name} {fill}", fill = self.header_fill)
    }
}

impl TodoConfig {
    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("failed to parse todo config")
    }

    /// Serialize config as pretty TOML
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load config from `path`, falling back to defaults if the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.to_toml_string()?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
