//! # Courier Queue Facade
//!
//! An abstraction of a message queue. Its only purpose is to offer a
//! unified way to construct a queue engine and to fix the two operations
//! the rest of the system relies on: `enqueue` a message and get back an
//! element handle, `dequeue` a handle and get back the message. Locking,
//! persistence and iteration belong to the engines themselves;
//! directory-based engines live outside this repository and plug in
//! through the same trait.

pub mod error;
pub mod memory;

pub use error::QueueError;
pub use memory::MemoryQueue;

use types::Message;

/// The two operations the core expects from any queue engine.
pub trait MessageQueue {
    /// Add a message to the queue; returns the element handle it was
    /// stored under.
    fn enqueue(&mut self, message: &Message) -> Result<String, QueueError>;

    /// Remove the element with the given handle and return its message.
    fn dequeue(&mut self, element: &str) -> Result<Message, QueueError>;

    /// Add an already-serialized message.
    ///
    /// The payload is validated by decoding it first; anything that is not
    /// a serialized message fails with [`QueueError::TypeMismatch`].
    fn enqueue_serialized(&mut self, payload: &[u8]) -> Result<String, QueueError> {
        let message = codec::deserialize(payload)
            .map_err(|e| QueueError::type_mismatch(e.to_string()))?;
        self.enqueue(&message)
    }
}

/// Engine selection tag.
///
/// Engines are picked by a string "type" tag; the tag set is enumerated
/// here so an unknown tag is a typed failure instead of a lookup error
/// deep inside some registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    /// The in-memory reference engine.
    Memory,
}

impl QueueKind {
    pub fn tag(&self) -> &'static str {
        match self {
            QueueKind::Memory => "memory",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, QueueError> {
        match tag {
            "memory" => Ok(QueueKind::Memory),
            other => Err(QueueError::unknown_kind(other)),
        }
    }
}

/// Construct a queue engine from its type tag.
pub fn open(kind: &str) -> Result<Box<dyn MessageQueue>, QueueError> {
    let kind = QueueKind::from_tag(kind)?;
    tracing::debug!(kind = kind.tag(), "opening queue");
    match kind {
        QueueKind::Memory => Ok(Box::new(MemoryQueue::new())),
    }
}
