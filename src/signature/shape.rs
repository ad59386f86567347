//! Parameter kinds and calling-convention shape
//!
//! Downstream generators don't want raw sentinels; they want to know which
//! arguments can be passed positionally and whether the callable takes a
//! variable number of them. [`Signature::parameters`] resolves the `/`, `*` and
//! catch-all markers into per-parameter kinds, and [`Signature::call_shape`] gives
//! the positional prefix a binding would expose.

use super::argument::{Argument, Signature};
use serde::{Deserialize, Serialize};

/// How a parameter can be supplied at a call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    PositionalOnly,
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

/// A parsed argument with its markers resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

/// Positional parameters a binding exposes, plus whether it accepts `*args`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallShape {
    pub positional: Vec<Argument>,
    pub variadic: bool,
}

impl Signature {
    /// Classify every real parameter; `/` and `*` markers are dropped
    pub fn parameters(&self) -> Vec<Parameter> {
        let positional_only_end = self
            .args
            .iter()
            .position(Argument::is_positional_only_marker);

        let mut keyword_only = false;
        let mut parameters = Vec::with_capacity(self.args.len());
        for (index, arg) in self.args.iter().enumerate() {
            if arg.is_marker() {
                if arg.is_keyword_only_marker() {
                    keyword_only = true;
                }
                continue;
            }

            let kind = if arg.is_var_keyword() {
                ParameterKind::VarKeyword
            } else if arg.is_var_positional() {
                keyword_only = true;
                ParameterKind::VarPositional
            } else if keyword_only {
                ParameterKind::KeywordOnly
            } else if arg.is_group() || positional_only_end.is_some_and(|end| index < end) {
                ParameterKind::PositionalOnly
            } else {
                ParameterKind::PositionalOrKeyword
            };

            parameters.push(Parameter {
                name: arg.name.clone(),
                kind,
                annotation: arg.type_expr.clone(),
                default: arg.default_expr.clone(),
                optional: arg.optional,
            });
        }
        parameters
    }

    /// Walk the arguments the way a binding generator lays out its parameters
    ///
    /// `/` is skipped. The walk ends at the keyword-only marker or at a `**name`
    /// catch-all. A bare `*name` ends it too and makes the shape variadic; it is
    /// not itself part of `positional`.
    pub fn call_shape(&self) -> CallShape {
        let mut shape = CallShape::default();
        for arg in &self.args {
            if arg.is_positional_only_marker() {
                continue;
            }
            if arg.is_keyword_only_marker() || arg.is_var_keyword() {
                break;
            }
            if arg.is_var_positional() {
                shape.variadic = true;
                break;
            }
            shape.positional.push(arg.clone());
        }
        shape
    }
}
