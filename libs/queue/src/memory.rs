//! In-memory reference queue engine
//!
//! Stores messages in serialized form keyed by a monotonically increasing
//! element handle. Useful as a test double and as the reference behavior
//! for external engines: what goes in through `enqueue` must come back out
//! of `dequeue` equal under message equality.

use std::collections::HashMap;

use types::Message;

use crate::error::QueueError;
use crate::MessageQueue;

#[derive(Debug, Default)]
pub struct MemoryQueue {
    elements: HashMap<String, Vec<u8>>,
    next_handle: u64,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements currently queued.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl MessageQueue for MemoryQueue {
    fn enqueue(&mut self, message: &Message) -> Result<String, QueueError> {
        let payload = codec::serialize(message, &codec::ConvertOptions::none())?;
        let handle = format!("{:016x}", self.next_handle);
        self.next_handle += 1;
        self.elements.insert(handle.clone(), payload);
        Ok(handle)
    }

    fn dequeue(&mut self, element: &str) -> Result<Message, QueueError> {
        let payload = self
            .elements
            .remove(element)
            .ok_or_else(|| QueueError::no_such_element(element))?;
        codec::deserialize(&payload).map_err(|e| QueueError::type_mismatch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_dequeue_round_trips() {
        let mut queue = MemoryQueue::new();
        let mut msg = Message::with_body(vec![0u8, 1, 2, 254, 255]);
        msg.header_mut().insert("k".into(), "v".into());

        let handle = queue.enqueue(&msg).unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(&handle).unwrap(), msg);
        assert!(queue.is_empty());
    }

    #[test]
    fn handles_are_unique() {
        let mut queue = MemoryQueue::new();
        let a = queue.enqueue(&Message::with_body("a")).unwrap();
        let b = queue.enqueue(&Message::with_body("b")).unwrap();
        assert_ne!(a, b);
        assert_eq!(queue.dequeue(&b).unwrap(), Message::with_body("b"));
        assert_eq!(queue.dequeue(&a).unwrap(), Message::with_body("a"));
    }

    #[test]
    fn dequeue_of_unknown_handle_fails() {
        let mut queue = MemoryQueue::new();
        assert!(matches!(
            queue.dequeue("missing"),
            Err(QueueError::NoSuchElement { element }) if element == "missing"
        ));
    }

    #[test]
    fn dequeue_is_destructive() {
        let mut queue = MemoryQueue::new();
        let handle = queue.enqueue(&Message::with_body("once")).unwrap();
        queue.dequeue(&handle).unwrap();
        assert!(queue.dequeue(&handle).is_err());
    }
}
