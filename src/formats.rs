//! Output formats for parse reports
//!
//! - `json` / `json-compact`: the reports as a JSON array
//! - `yaml`: the same structure as YAML
//! - `text`: an indented outline for reading in a terminal

pub mod json;
pub mod registry;
pub mod report;
pub mod text;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use report::SignatureReport;
pub use text::TextFormatter;
pub use yaml::YamlFormatter;
