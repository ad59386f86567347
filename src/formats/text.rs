//! Compact text output
//!
//! One block per signature: the signature text, then one indented line per
//! argument in `name: type = default` form, optional ones in brackets.

use super::registry::{FormatError, Formatter};
use super::report::SignatureReport;
use std::fmt::Write;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, reports: &[SignatureReport]) -> Result<String, FormatError> {
        let mut output = String::new();
        for report in reports {
            write_report(&mut output, report)
                .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }
        Ok(output)
    }

    fn description(&self) -> &str {
        "Human-readable outline, one argument per line"
    }
}

fn write_report(output: &mut String, report: &SignatureReport) -> std::fmt::Result {
    writeln!(output, "{}", report.signature)?;
    if report.arguments.is_empty() {
        writeln!(output, "  (no arguments)")?;
    }
    for arg in &report.arguments {
        writeln!(output, "  {arg}")?;
    }
    if report.variadic {
        writeln!(output, "  variadic")?;
    }
    if let Some(shape) = &report.shape {
        let names: Vec<&str> = shape.positional.iter().map(|a| a.name.as_str()).collect();
        write!(output, "  shape: ({})", names.join(", "))?;
        if shape.variadic {
            write!(output, " + *args")?;
        }
        writeln!(output)?;
    }
    Ok(())
}
