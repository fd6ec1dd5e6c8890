//! Output formatting for human and JSON modes
//!
//! Results can be rendered either as human-readable text or as
//! machine-parseable JSON. JSON output is the entity exactly as decoded.

use colored::Colorize;
use serde::Serialize;

use crate::client::Response;
use crate::models::{ProjectV2, ProjectV2Field, ProjectV2Item};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One-line human description of an entity
pub trait Summary {
    /// Identifier shown first (highlighted)
    fn label(&self) -> String;

    /// Rest of the line
    fn summary(&self) -> String;
}

impl Summary for ProjectV2 {
    fn label(&self) -> String {
        self.number
            .map_or_else(|| "#?".to_string(), |n| format!("#{n}"))
    }

    fn summary(&self) -> String {
        let mut line = self.display_title().to_string();
        if self.closed_at.is_some() || self.state.as_deref() == Some("closed") {
            line.push_str(" (closed)");
        }
        if let Some(short) = self.short_description.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(" - ");
            line.push_str(short);
        }
        line
    }
}

impl Summary for ProjectV2Field {
    fn label(&self) -> String {
        self.id.map_or_else(|| "?".to_string(), |id| id.to_string())
    }

    fn summary(&self) -> String {
        let mut line = format!(
            "{} [{}]",
            self.name.as_deref().unwrap_or("(unnamed)"),
            self.data_type.as_deref().unwrap_or("unknown")
        );
        if !self.options.is_empty() {
            let names: Vec<&str> = self
                .options
                .iter()
                .filter_map(|o| o.name.as_deref())
                .collect();
            line.push_str(": ");
            line.push_str(&names.join(", "));
        }
        line
    }
}

impl Summary for ProjectV2Item {
    fn label(&self) -> String {
        self.id.map_or_else(|| "?".to_string(), |id| id.to_string())
    }

    fn summary(&self) -> String {
        let kind = self.content_type.as_deref().unwrap_or("Item");
        let title = self
            .content
            .as_ref()
            .and_then(|c| c.get("title"))
            .and_then(serde_json::Value::as_str);

        let mut line = match title {
            Some(title) => format!("{kind}: {title}"),
            None => kind.to_string(),
        };
        if self.is_archived() {
            line.push_str(" (archived)");
        }
        line
    }
}

/// One page of a list call
#[derive(Debug, Serialize)]
pub struct PageResult<T> {
    /// Entities on this page
    pub items: Vec<T>,
    /// Cursor for the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Cursor for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl<T: Serialize + Summary> PageResult<T> {
    /// Pair a page with the cursors of its response
    #[must_use]
    pub fn new(items: Vec<T>, response: &Response) -> Self {
        Self {
            items,
            before: response.before.clone(),
            after: response.after.clone(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.items.is_empty() {
            println!("Nothing found.");
        }
        for item in &self.items {
            println!("  {} {}", item.label().as_str().bold(), item.summary());
        }
        if let Some(after) = &self.after {
            println!("\nMore results: --after {after}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Render a single entity
pub fn render_entity<T: Serialize + Summary>(entity: &T, mode: OutputMode) {
    match mode {
        OutputMode::Human => println!("{} {}", entity.label().as_str().bold(), entity.summary()),
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(entity).unwrap_or_default());
        },
    }
}

/// Generic operation result for calls without a body
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
