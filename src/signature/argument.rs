//! Argument and signature records
//!
//! An [`Argument`] is one entry of a parsed parameter list. Type annotations and
//! default values are kept as opaque text; nothing here tries to understand them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword-only marker (`*`)
pub const KEYWORD_ONLY_MARKER: &str = "*";
/// Positional-only marker (`/`)
pub const POSITIONAL_ONLY_MARKER: &str = "/";
/// Docstrings sometimes escape the keyword-only marker for reST
pub const ESCAPED_KEYWORD_ONLY_MARKER: &str = "\\*";

/// One parsed parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    /// Identifier, sentinel (`*`, `/`, `*args`, `**kwargs`) or a verbatim
    /// parenthesized group such as `(a1, a2, ...)`
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<String>,
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_expr: Option<String>,
    /// Set when the argument came from inside a `[...]` documentation group
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Argument {
            name: name.into(),
            type_expr: None,
            default_expr: None,
            optional: false,
        }
    }

    pub fn with_type(mut self, type_expr: impl Into<String>) -> Self {
        self.type_expr = non_empty(type_expr.into());
        self
    }

    pub fn with_default(mut self, default_expr: impl Into<String>) -> Self {
        self.default_expr = non_empty(default_expr.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// True when a non-empty default value was recorded
    pub fn has_default(&self) -> bool {
        self.default_expr.is_some()
    }

    pub fn is_keyword_only_marker(&self) -> bool {
        self.name == KEYWORD_ONLY_MARKER || self.name == ESCAPED_KEYWORD_ONLY_MARKER
    }

    pub fn is_positional_only_marker(&self) -> bool {
        self.name == POSITIONAL_ONLY_MARKER
    }

    /// `*args`-style positional catch-all (but not the bare `*` marker)
    pub fn is_var_positional(&self) -> bool {
        self.name.len() > 1 && self.name.starts_with('*') && !self.name.starts_with("**")
    }

    /// `**kwargs`-style keyword catch-all
    pub fn is_var_keyword(&self) -> bool {
        self.name.starts_with("**")
    }

    /// Doc-style grouped positional arguments, e.g. `(a1, a2, ...)`
    pub fn is_group(&self) -> bool {
        self.name.starts_with('(')
    }

    pub fn is_marker(&self) -> bool {
        self.is_keyword_only_marker() || self.is_positional_only_marker()
    }
}

/// Trimmed text, or `None` when nothing is left
pub(crate) fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

/// Renders as `name: type = default`, wrapped in brackets when optional
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_str("[")?;
        }
        f.write_str(&self.name)?;
        if let Some(type_expr) = &self.type_expr {
            write!(f, ": {type_expr}")?;
        }
        if let Some(default_expr) = &self.default_expr {
            write!(f, " = {default_expr}")?;
        }
        if self.optional {
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Result of parsing one signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub args: Vec<Argument>,
    /// Set when a bare `*name` catch-all was seen
    pub variadic: bool,
}

impl Signature {
    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.args.iter()
    }

    /// Argument names in order, markers included
    pub fn names(&self) -> Vec<&str> {
        self.args.iter().map(|arg| arg.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
