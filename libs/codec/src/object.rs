//! The structured (JSON-compatible) representation of a message
//!
//! This object is the interchange contract between implementations: up to
//! four optional fields, absence meaning the empty/false default. Field
//! order is part of the serialized layout and must stay `header`, `body`,
//! `text`, `encoding`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CodecError, CodecResult};

/// A message in structured form.
///
/// Being a plain serde type, it nests naturally inside larger JSON
/// documents (for instance a batch array of messages, or a message wrapped
/// with error context).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageObject {
    /// The message header, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, String>>,

    /// The (possibly transformed) body, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// True for a text body; omitted means binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<bool>,

    /// `+`-joined encoding chain, omitted when no transform was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl MessageObject {
    /// Interpret a JSON value as a structured message.
    ///
    /// Anything that is not a mapping (or a mapping with wrongly-typed
    /// fields) fails with [`CodecError::MalformedObject`].
    pub fn from_value(value: &Value) -> CodecResult<Self> {
        if !value.is_object() {
            return Err(CodecError::malformed_object(format!(
                "dict expected: {value}"
            )));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| CodecError::malformed_object(e.to_string()))
    }
}
