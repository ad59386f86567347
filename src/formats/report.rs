//! Per-signature parse report, the unit every output format serializes

use crate::signature::{parse_signature, Argument, CallShape};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureReport {
    /// The signature text as given
    pub signature: String,
    pub arguments: Vec<Argument>,
    pub variadic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<CallShape>,
}

impl SignatureReport {
    /// Parse `signature`, attaching the calling-convention shape when asked
    pub fn new(signature: &str, with_shape: bool) -> Self {
        let parsed = parse_signature(signature);
        let shape = with_shape.then(|| parsed.call_shape());
        SignatureReport {
            signature: signature.to_string(),
            arguments: parsed.args,
            variadic: parsed.variadic,
            shape,
        }
    }
}
