//! Path template interpolation
//!
//! Resource paths are written as `/files/{{ client_id }}/{{ connector_id }}/{{ id }}`.
//! Each `{{ variable }}` is replaced by the matching path parameter.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("template regex is valid")
});

/// Characters that would change the meaning of the request URL
const RESERVED_CHARS: [char; 4] = ['/', '\\', '?', '#'];

/// Values substituted into a path template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: BTreeMap<String, String>,
}

impl PathParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an identifier parameter, substituted as given
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a free-text parameter; spaces become underscores.
    ///
    /// Blank text is stored as given so that [`validate`](Self::validate)
    /// rejects it.
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: &str) -> Self {
        let segment = if value.trim().is_empty() {
            value.to_string()
        } else {
            free_text_segment(value)
        };
        self.values.insert(name.into(), segment);
        self
    }

    /// Get a parameter value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Check that every parameter is usable as a single path segment
    pub fn validate(&self) -> Result<()> {
        for (name, value) in &self.values {
            if value.trim().is_empty() {
                return Err(Error::invalid_param(name, "value must not be empty"));
            }
            if let Some(c) = value.chars().find(|c| RESERVED_CHARS.contains(c)) {
                return Err(Error::invalid_param(
                    name,
                    format!("value must not contain '{c}'"),
                ));
            }
            if is_dot_segment(value) {
                return Err(Error::invalid_param(
                    name,
                    format!("'{value}' is not a valid path segment"),
                ));
            }
        }
        Ok(())
    }
}

/// `.` and `..`, including percent-encoded dots, which URL parsing collapses
fn is_dot_segment(value: &str) -> bool {
    let decoded = value.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Map free text to a path segment: spaces become underscores, nothing else changes
pub fn free_text_segment(text: &str) -> String {
    text.replace(' ', "_")
}

/// Render a template string with the given parameters
pub fn render(template: &str, params: &PathParams) -> Result<String> {
    let mut errors = Vec::new();

    let result = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        if let Some(value) = params.get(name) {
            value.to_string()
        } else {
            errors.push(name.to_string());
            String::new()
        }
    });

    if errors.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Validate the parameters, then render the template
pub fn render_path(template: &str, params: &PathParams) -> Result<String> {
    params.validate()?;
    render(template, params)
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}
