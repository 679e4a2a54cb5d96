//! Message lookup for violations.
//!
//! Templates are keyed by message code and use positional placeholders
//! (`{0}`, `{1}`, ...). A violation is rendered with the first of its codes
//! that has a template; failing that its default message; failing that its
//! most specific code.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::violation::{MessageArg, Violation};
use crate::error::CoreError;

/// Default catalogue shipped with the crate.
const BUNDLED_MESSAGES: &str = include_str!("../../messages/errors.json");

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("valid regex"));

/// Code → template table.
#[derive(Debug, Clone, Default)]
pub struct MessageSource {
    messages: HashMap<String, String>,
}

impl MessageSource {
    /// The catalogue bundled in `messages/errors.json`.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json(BUNDLED_MESSAGES)
    }

    /// Parse a flat JSON object of `code: template` pairs.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CoreError::Internal(format!("Invalid message catalogue: {e}")))?;
        Ok(Self { messages })
    }

    /// Load a catalogue from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to read message catalogue {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Raw template for an exact code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }

    /// Render the first template found among `codes`.
    pub fn find(&self, codes: &[String], arguments: &[MessageArg]) -> Option<String> {
        codes
            .iter()
            .find_map(|code| self.get(code))
            .map(|template| format_message(template, arguments))
    }

    /// Human-readable text for a violation.
    pub fn resolve(&self, violation: &Violation) -> String {
        if let Some(message) = self.find(&violation.codes, &violation.arguments) {
            return message;
        }
        if let Some(default) = &violation.default_message {
            return format_message(default, &violation.arguments);
        }
        violation
            .codes
            .first()
            .cloned()
            .unwrap_or_else(|| violation.code.clone())
    }
}

/// Substitute `{n}` placeholders with the n-th argument. Placeholders with
/// no matching argument are left as written.
pub fn format_message(template: &str, arguments: &[MessageArg]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| arguments.get(i))
                .map(ToString::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
