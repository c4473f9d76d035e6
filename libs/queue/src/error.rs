//! Queue facade errors

use codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The "type" tag names no known engine.
    #[error("queue type not valid: {kind}")]
    UnknownKind { kind: String },

    /// A value that is not a message where one is required.
    #[error("message expected: {detail}")]
    TypeMismatch { detail: String },

    /// No element is stored under the given handle.
    #[error("no such element: {element}")]
    NoSuchElement { element: String },

    /// Conversion failure while moving a message in or out of storage.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl QueueError {
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        QueueError::UnknownKind { kind: kind.into() }
    }

    pub fn type_mismatch(detail: impl Into<String>) -> Self {
        QueueError::TypeMismatch {
            detail: detail.into(),
        }
    }

    pub fn no_such_element(element: impl Into<String>) -> Self {
        QueueError::NoSuchElement {
            element: element.into(),
        }
    }
}
