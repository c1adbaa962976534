//! Log record handed to sinks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One tracing event, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "folio_core::nav")
    pub target: String,

    pub message: String,

    /// Structured fields other than the message
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub fields: Map<String, Value>,

    /// Enclosing span names, root first, joined by " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogRecord {
    pub fn new(
        level: impl Into<String>,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            target: target.into(),
            message: message.into(),
            fields: Map::new(),
            span: None,
        }
    }

    /// Render as a single console line: `[target] message key=value ...`
    pub fn to_line(&self) -> String {
        let mut line = format!("[{}] {}", self.target, self.message);
        if let Some(ref span) = self.span {
            line.push_str(&format!(" ({})", span));
        }
        for (key, value) in &self.fields {
            match value {
                Value::String(s) => line.push_str(&format!(" {}={}", key, s)),
                other => line.push_str(&format!(" {}={}", key, other)),
            }
        }
        line
    }
}
