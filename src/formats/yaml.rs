//! YAML output

use super::registry::{FormatError, Formatter};
use super::report::SignatureReport;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, reports: &[SignatureReport]) -> Result<String, FormatError> {
        serde_yaml::to_string(reports).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML sequence of parse reports"
    }
}
