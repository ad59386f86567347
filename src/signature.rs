//! Signature parsing
//!
//! Parses the free-text call signatures produced by runtime introspection or
//! scraped from docstrings:
//!
//! ```text
//! (x1, x2, /, out=None, *, where=True, casting='same_kind')
//! ([start,] stop[, step,], dtype=None, *, device=None, like=None)
//! ```
//!
//! Type annotations and default values are kept as opaque text. See [`parser`]
//! for the grammar and [`scanning`] for the bracket and quote handling it relies on.

pub mod argument;
pub mod parser;
pub mod scanning;
pub mod shape;

pub use argument::{Argument, Signature};
pub use parser::{parse, parse_default, parse_signature, parse_type};
pub use scanning::{find_matching_close, scan_to};
pub use shape::{CallShape, Parameter, ParameterKind};
