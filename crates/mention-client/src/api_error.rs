//! Upstream API error taxonomy.
//!
//! The Mention API reports failures as an HTTP status plus an optional
//! recursive validation tree: `{"form": {"errors": [...], "children":
//! {"<field>": <same shape>}}}`, nesting as deep as the request fields do
//! (e.g. `query.included_keywords`).

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// An upstream-reported failure.
///
/// Constructed by the transport only for responses with status >= 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// HTTP status code; carried out of band, not part of the body.
    #[serde(skip)]
    pub status_code: u16,

    #[serde(default)]
    pub form: FormErrorNode,
}

/// One node of the validation tree: messages for this path plus children
/// keyed by field name. A node with no errors and no children means
/// "no error at this path" and is never rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormErrorNode {
    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default)]
    pub children: HashMap<String, FormErrorNode>,
}

impl ApiError {
    pub fn new(status_code: u16, form: FormErrorNode) -> Self {
        Self { status_code, form }
    }

    /// Decode an error response body.
    ///
    /// A body that does not parse as the error shape is never dropped: it
    /// becomes the single top-level form error of a synthesized value.
    pub fn from_body(status_code: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(mut err) => {
                err.status_code = status_code;
                err
            }
            Err(_) => ApiError {
                status_code,
                form: FormErrorNode {
                    errors: vec![String::from_utf8_lossy(body).into_owned()],
                    children: HashMap::new(),
                },
            },
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code >= 500
    }

    pub fn is_validation_error(&self) -> bool {
        self.status_code == 400
    }

    pub fn is_auth_error(&self) -> bool {
        self.status_code == 401 || self.status_code == 403
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status_code == 429
    }

    pub fn is_payment_required(&self) -> bool {
        self.status_code == 402
    }

    /// Messages attached to the node at a dot-separated field path.
    ///
    /// Returns `None` when any path segment is missing, which is
    /// distinguishable from an existing node with zero messages.
    pub fn field_errors(&self, field_path: &str) -> Option<&[String]> {
        let mut node = &self.form;
        for segment in field_path.split('.') {
            node = node.children.get(segment)?;
        }
        Some(&node.errors)
    }

    pub fn has_field_error(&self, field_path: &str) -> bool {
        self.field_errors(field_path)
            .is_some_and(|errors| !errors.is_empty())
    }
}

impl FormErrorNode {
    /// Depth-first collection of `"<path>: <message>"` lines for every
    /// descendant field, parent before child. Sibling order follows map
    /// iteration order and is unspecified.
    pub fn collect_field_errors(&self) -> Vec<String> {
        let mut lines = Vec::new();
        collect(&self.children, None, &mut lines);
        lines
    }
}

fn collect(children: &HashMap<String, FormErrorNode>, prefix: Option<&str>, lines: &mut Vec<String>) {
    for (field_name, node) in children {
        let current_path = match prefix {
            Some(prefix) => format!("{prefix}.{field_name}"),
            None => field_name.clone(),
        };

        for message in &node.errors {
            lines.push(format!("{current_path}: {message}"));
        }

        if !node.children.is_empty() {
            collect(&node.children, Some(&current_path), lines);
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = vec![format!("API request failed (HTTP {})", self.status_code)];

        if !self.form.errors.is_empty() {
            clauses.push(format!("Form errors: {}", self.form.errors.join(", ")));
        }

        let field_errors = self.form.collect_field_errors();
        if !field_errors.is_empty() {
            clauses.push(format!("Field errors: {}", field_errors.join("; ")));
        }

        f.write_str(&clauses.join(". "))
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
#[path = "api_error_tests.rs"]
mod tests;
