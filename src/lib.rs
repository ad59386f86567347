//! # pysig
//!
//! A parser for Python-style call signatures as produced by runtime
//! introspection or scraped from docstrings.
//!
//! ```text
//! ([start,] stop[, step,], dtype=None, *, device=None, like=None)
//! ```
//!
//! parses to `start` (optional), `stop`, `step` (optional), `dtype = None`, the
//! keyword-only marker `*`, `device = None` and `like = None`. Parsing never
//! fails; malformed text yields whatever prefix could be interpreted.
//!
//! The [`signature`] module is the library proper. [`formats`] and [`settings`]
//! back the `pysig` command line.

pub mod error;
pub mod formats;
pub mod settings;
pub mod signature;

pub use error::Error;
pub use signature::{parse, parse_signature, Argument, Signature};
