//! Message surface consumed by the cursors.

use core_types::ServiceId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use wire_types::ArgBuffer;

/// Unique identifier for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Msg({})", self.0)
    }
}

/// Surface the marshaling engine needs from a message.
///
/// The engine never owns a message: cursors borrow one for the duration of
/// an append session or traversal. The service identity is consumed only to
/// bind path-like argument values.
pub trait Message {
    /// Identity of the peer service this message targets or originates from.
    fn service(&self) -> ServiceId;

    /// The encoded argument list.
    fn arguments(&self) -> &ArgBuffer;

    /// Mutable access to the argument list, for append sessions.
    fn arguments_mut(&mut self) -> &mut ArgBuffer;
}

/// A method call or reply with its encoded argument list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallMessage {
    id: MessageId,
    service: ServiceId,
    arguments: ArgBuffer,
}

impl CallMessage {
    /// Creates an empty message addressed to `service`.
    pub fn new(service: ServiceId) -> Self {
        Self {
            id: MessageId::new(),
            service,
            arguments: ArgBuffer::new(),
        }
    }

    /// Creates an empty message with an explicit argument capacity.
    pub fn with_capacity(service: ServiceId, capacity: usize) -> Self {
        Self {
            id: MessageId::new(),
            service,
            arguments: ArgBuffer::with_capacity(capacity),
        }
    }

    /// Unique identifier of this message.
    pub fn id(&self) -> MessageId {
        self.id
    }
}

impl Message for CallMessage {
    fn service(&self) -> ServiceId {
        self.service
    }

    fn arguments(&self) -> &ArgBuffer {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut ArgBuffer {
        &mut self.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_creation() {
        let id1 = MessageId::new();
        let id2 = MessageId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_message_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = MessageId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn test_call_message_starts_empty() {
        let service = ServiceId::new();
        let message = CallMessage::new(service);
        assert_eq!(message.service(), service);
        assert!(message.arguments().is_empty());
    }

    #[test]
    fn test_call_message_with_capacity() {
        let message = CallMessage::with_capacity(ServiceId::new(), 64);
        assert_eq!(message.arguments().capacity(), 64);
    }
}
