//! JSON output

use super::registry::{FormatError, Formatter};
use super::report::SignatureReport;

/// Serializes reports as a JSON array
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        JsonFormatter { pretty: true }
    }

    pub fn compact() -> Self {
        JsonFormatter { pretty: false }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        if self.pretty {
            "json"
        } else {
            "json-compact"
        }
    }

    fn serialize(&self, reports: &[SignatureReport]) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(reports)
        } else {
            serde_json::to_string(reports)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        if self.pretty {
            "Indented JSON array of parse reports"
        } else {
            "Single-line JSON array of parse reports"
        }
    }
}
