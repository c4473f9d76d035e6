//! # Courier Transport Adapter
//!
//! The mapping between transport-level frames (a header map plus raw body
//! bytes, the shape of STOMP-like publish/subscribe transports) and the
//! [`Message`] entity. No transformation beyond this mapping belongs here:
//! connection management, subscriptions and acknowledgments are the
//! transport client's business.

use std::collections::HashMap;

use thiserror::Error;
use types::{Body, Message};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Incoming frames carry text; a body that is not valid UTF-8 cannot
    /// become a received message.
    #[error("frame body is not valid text: {detail}")]
    InvalidFrameBody { detail: String },
}

/// A transport-level frame: header map plus raw body bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub header: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Frame {
    pub fn new(header: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self { header, body }
    }

    /// Receipt mapping: header verbatim, body decoded as text.
    pub fn into_message(self) -> Result<Message, TransportError> {
        let text = String::from_utf8(self.body).map_err(|e| TransportError::InvalidFrameBody {
            detail: e.to_string(),
        })?;
        Ok(Message::with_parts(self.header, text))
    }

    /// Send mapping: header verbatim, text UTF-8-encoded, binary as-is.
    pub fn from_message(message: &Message) -> Self {
        let body = match message.body() {
            Body::Text(text) => text.as_bytes().to_vec(),
            Body::Binary(bytes) => bytes.clone(),
        };
        Self {
            header: message.header().clone(),
            body,
        }
    }
}

/// A listener hook for incoming frames.
///
/// Implementors handle [`Message`] values; the default [`on_frame`]
/// adapter performs the frame conversion, so a transport client only
/// needs to hand frames over.
///
/// [`on_frame`]: FrameHandler::on_frame
pub trait FrameHandler {
    /// Called with each received message.
    fn handle(&mut self, message: Message);

    /// Entry point for the transport client.
    fn on_frame(&mut self, frame: Frame) -> Result<(), TransportError> {
        self.handle(frame.into_message()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn received_frames_become_text_messages() {
        let frame = Frame::new(
            HashMap::from([("destination".to_string(), "/topic/test".to_string())]),
            b"hello world".to_vec(),
        );
        let msg = frame.into_message().unwrap();
        assert!(msg.is_text());
        assert_eq!(msg.body(), &Body::Text("hello world".to_string()));
        assert_eq!(msg.header()["destination"], "/topic/test");
    }

    #[test]
    fn non_utf8_frame_bodies_are_rejected() {
        let frame = Frame::new(HashMap::new(), vec![0xff, 0xfe]);
        assert!(matches!(
            frame.into_message(),
            Err(TransportError::InvalidFrameBody { .. })
        ));
    }

    #[test]
    fn outgoing_frames_carry_header_and_bytes() {
        let mut msg = Message::with_body("payload");
        msg.header_mut().insert("subject".into(), "test".into());
        let frame = Frame::from_message(&msg);
        assert_eq!(frame.body, b"payload");
        assert_eq!(frame.header["subject"], "test");

        let binary = Message::with_body(vec![1u8, 2, 3]);
        assert_eq!(Frame::from_message(&binary).body, vec![1, 2, 3]);
    }

    #[test]
    fn frame_handler_dispatches_converted_messages() {
        #[derive(Default)]
        struct Collector {
            received: Vec<Message>,
        }
        impl FrameHandler for Collector {
            fn handle(&mut self, message: Message) {
                self.received.push(message);
            }
        }

        let mut collector = Collector::default();
        collector
            .on_frame(Frame::new(HashMap::new(), b"one".to_vec()))
            .unwrap();
        collector
            .on_frame(Frame::new(HashMap::new(), b"two".to_vec()))
            .unwrap();
        assert_eq!(collector.received.len(), 2);
        assert_eq!(collector.received[1], Message::with_body("two"));
    }
}
