//! Format registry for parse report serialization
//!
//! Each output format implements [`Formatter`] and is looked up by name through
//! [`FormatRegistry`].

use super::report::SignatureReport;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serializes a batch of parse reports
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "text")
    fn name(&self) -> &str;

    fn serialize(&self, reports: &[SignatureReport]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of report formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters
            .get(&name.to_ascii_lowercase())
            .map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Serialize reports using the named format
    pub fn serialize(
        &self,
        reports: &[SignatureReport],
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(reports)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter::pretty());
        registry.register(super::JsonFormatter::compact());
        registry.register(super::YamlFormatter);
        registry.register(super::TextFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, reports: &[SignatureReport]) -> Result<String, FormatError> {
            Ok(format!("{} reports", reports.len()))
        }
    }

    #[test]
    fn test_registry_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let reports = vec![SignatureReport::new("(a)", false)];
        assert_eq!(registry.serialize(&reports, "test").unwrap(), "1 reports");
        assert!(registry.has("TEST"));
    }

    #[test]
    fn test_registry_format_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&[], "nonexistent");
        assert_eq!(
            result,
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "json-compact", "text", "yaml"]
        );
    }
}
