//! Forward-only cursors over a message's argument buffer.

use crate::error::MarshalError;
use crate::message::Message;
use crate::registry::registry;
use wire_types::{CodecError, WireType, WireValue};

/// Write cursor for one append session.
///
/// Created by [`AppendCursor::begin`], which resets the buffer to the start
/// of the argument list; the session's position state is released when the
/// cursor is dropped, on every exit path. The exclusive borrow keeps a
/// session single-flow by construction.
pub struct AppendCursor<'m, M: Message> {
    message: &'m mut M,
}

impl<'m, M: Message> AppendCursor<'m, M> {
    /// Begins an append session.
    ///
    /// Call exactly once per session, before the first append; the message's
    /// argument buffer is reset to empty.
    pub fn begin(message: &'m mut M) -> Self {
        message.arguments_mut().clear();
        Self { message }
    }

    /// Appends one encoded element at the cursor and advances past it.
    ///
    /// A path-like value is first bound to the message's service identity so
    /// the receiver can resolve it against that service. Overflow propagates
    /// from the codec as [`CodecError::BufferOverflow`] and leaves the
    /// buffer unchanged.
    pub fn append(&mut self, value: WireValue) -> Result<(), MarshalError> {
        let value = if value.wire_type().is_path_like() {
            value.bound_to(self.message.service())
        } else {
            value
        };
        value.append_to(self.message.arguments_mut())?;
        Ok(())
    }

    /// Current cursor position: bytes encoded so far in this session.
    pub fn position(&self) -> usize {
        self.message.arguments().len()
    }
}

/// Lazy, forward-only, restartable traversal over a message's encoded
/// argument list.
///
/// Several enumerators may walk the same message independently; each owns
/// only its own cursor state, released on drop.
pub struct ArgEnumerator<'m, M: Message> {
    message: &'m M,
    position: usize,
    started: bool,
}

impl<'m, M: Message> ArgEnumerator<'m, M> {
    /// Creates an enumerator positioned on the first element.
    pub fn new(message: &'m M) -> Self {
        Self {
            message,
            position: 0,
            started: false,
        }
    }

    /// Rewinds to the first element and clears the started flag.
    ///
    /// Safe to call at any time, any number of times.
    pub fn reset(&mut self) {
        self.position = 0;
        self.started = false;
    }

    /// Whether the cursor has run past the last encoded element.
    pub fn at_end(&self) -> bool {
        self.position >= self.message.arguments().len()
    }

    /// Byte offset of the cursor within the argument buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Advances to the next element.
    ///
    /// The first call after a reset marks the traversal started and returns
    /// `true` without moving: the cursor already sits on the first element
    /// (callers probing an empty buffer check [`ArgEnumerator::at_end`]).
    /// Once `false` is returned, it stays `false` until the next reset.
    pub fn move_next(&mut self) -> bool {
        if !self.started {
            self.started = true;
            return true;
        }
        if self.at_end() {
            return false;
        }
        match self.current_width() {
            Ok(width) => {
                self.position += width;
                !self.at_end()
            }
            // An element that cannot be walked ends the traversal; current()
            // reports the precise error without moving the cursor.
            Err(_) => false,
        }
    }

    /// Decodes the element at the cursor without advancing.
    ///
    /// The type code actually present on the wire selects the codec: an
    /// unregistered code fails with [`MarshalError::UnknownWireType`] and
    /// leaves the position unchanged. Path-like values decode bound to the
    /// owning message's service identity.
    pub fn current(&self) -> Result<WireValue, MarshalError> {
        let wire = self.lookup_current()?;
        let (value, _) = WireValue::decode(
            wire,
            self.payload_bytes(),
            Some(self.message.service()),
        )?;
        Ok(value)
    }

    /// Reads and resolves the type code at the cursor without decoding the
    /// payload.
    pub fn current_code(&self) -> Result<char, MarshalError> {
        Ok(self.lookup_current()?.code())
    }

    fn lookup_current(&self) -> Result<WireType, MarshalError> {
        let buffer = self.message.arguments().as_slice();
        let code_byte = *buffer.get(self.position).ok_or(MarshalError::Codec(
            CodecError::Truncated {
                needed: 1,
                remaining: 0,
            },
        ))?;
        let code = code_byte as char;
        registry()
            .by_code(code)
            .ok_or(MarshalError::UnknownWireType(code))
    }

    fn payload_bytes(&self) -> &[u8] {
        &self.message.arguments().as_slice()[self.position + 1..]
    }

    fn current_width(&self) -> Result<usize, MarshalError> {
        let wire = self.lookup_current()?;
        Ok(wire.element_width(self.payload_bytes())?)
    }
}

/// Derives the actual wire signature of a message by walking its encoded
/// buffer with a throwaway enumerator, reading type codes only.
pub fn wire_signature<M: Message>(message: &M) -> Result<String, MarshalError> {
    let mut cursor = ArgEnumerator::new(message);
    let mut signature = String::new();
    while cursor.move_next() {
        if cursor.at_end() {
            break;
        }
        signature.push(cursor.current_code()?);
    }
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::CallMessage;
    use crate::registry::match_type;
    use core_types::ServiceId;
    use wire_types::{HostValue, RemotePath};

    fn append(message: &mut CallMessage, values: Vec<HostValue>) {
        let mut cursor = AppendCursor::begin(message);
        for value in values {
            let wire = match_type(&value.host_type()).unwrap();
            cursor.append(WireValue::new(wire, value).unwrap()).unwrap();
        }
    }

    // ===== append path =====

    #[test]
    fn test_begin_resets_previous_session() {
        let mut message = CallMessage::new(ServiceId::new());
        append(&mut message, vec![HostValue::Int32(1), HostValue::Int32(2)]);
        append(&mut message, vec![HostValue::Bool(true)]);
        assert_eq!(wire_signature(&message).unwrap(), "b");
    }

    #[test]
    fn test_append_binds_path_to_message_service() {
        let service = ServiceId::new();
        let mut message = CallMessage::new(service);
        append(
            &mut message,
            vec![HostValue::Path(RemotePath::new("/org/example/obj"))],
        );

        let mut cursor = ArgEnumerator::new(&message);
        assert!(cursor.move_next());
        match cursor.current().unwrap().into_value() {
            HostValue::Path(path) => assert_eq!(path.service(), Some(service)),
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn test_append_cursor_advances_by_encoded_width() {
        let mut message = CallMessage::new(ServiceId::new());
        let mut cursor = AppendCursor::begin(&mut message);
        assert_eq!(cursor.position(), 0);
        let wire = match_type(&HostValue::Int32(7).host_type()).unwrap();
        cursor
            .append(WireValue::new(wire, HostValue::Int32(7)).unwrap())
            .unwrap();
        assert_eq!(cursor.position(), 5);
    }

    // ===== enumeration =====

    #[test]
    fn test_enumerate_yields_elements_in_wire_order() {
        let mut message = CallMessage::new(ServiceId::new());
        append(
            &mut message,
            vec![
                HostValue::Str("first".to_string()),
                HostValue::Int32(2),
            ],
        );

        let mut cursor = ArgEnumerator::new(&message);
        assert!(cursor.move_next());
        assert_eq!(
            cursor.current().unwrap().into_value(),
            HostValue::Str("first".to_string())
        );
        assert!(cursor.move_next());
        assert_eq!(cursor.current().unwrap().into_value(), HostValue::Int32(2));
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_exhaustion_is_stable_until_reset() {
        let mut message = CallMessage::new(ServiceId::new());
        append(&mut message, vec![HostValue::Bool(false)]);

        let mut cursor = ArgEnumerator::new(&message);
        assert!(cursor.move_next());
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());

        cursor.reset();
        assert!(cursor.move_next());
        assert_eq!(cursor.current().unwrap().into_value(), HostValue::Bool(false));
    }

    #[test]
    fn test_repeated_reset_is_idempotent() {
        let mut message = CallMessage::new(ServiceId::new());
        append(&mut message, vec![HostValue::Int64(9)]);

        let mut cursor = ArgEnumerator::new(&message);
        cursor.reset();
        cursor.reset();
        cursor.reset();
        assert!(cursor.move_next());
        assert_eq!(cursor.current().unwrap().into_value(), HostValue::Int64(9));
    }

    #[test]
    fn test_multiple_cursors_walk_independently() {
        let mut message = CallMessage::new(ServiceId::new());
        append(&mut message, vec![HostValue::Int32(1), HostValue::Int32(2)]);

        let mut first = ArgEnumerator::new(&message);
        let mut second = ArgEnumerator::new(&message);
        assert!(first.move_next());
        assert!(first.move_next());
        assert!(second.move_next());
        assert_eq!(second.current().unwrap().into_value(), HostValue::Int32(1));
        assert_eq!(first.current().unwrap().into_value(), HostValue::Int32(2));
    }

    #[test]
    fn test_first_move_next_on_empty_buffer_reports_started() {
        let message = CallMessage::new(ServiceId::new());
        let mut cursor = ArgEnumerator::new(&message);
        // The first call reports started even with nothing to read;
        // at_end() is the honest probe.
        assert!(cursor.move_next());
        assert!(cursor.at_end());
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_unknown_wire_code_fails_current_without_moving() {
        let mut message = CallMessage::new(ServiceId::new());
        message.arguments_mut().write(&[b'z']).unwrap();

        let mut cursor = ArgEnumerator::new(&message);
        assert!(cursor.move_next());
        let before = cursor.position();
        assert_eq!(
            cursor.current().unwrap_err(),
            MarshalError::UnknownWireType('z')
        );
        assert_eq!(cursor.position(), before);
        // Retry resumes at the same element.
        assert_eq!(
            cursor.current().unwrap_err(),
            MarshalError::UnknownWireType('z')
        );
    }

    // ===== signature derivation =====

    #[test]
    fn test_wire_signature_reads_codes_in_order() {
        let mut message = CallMessage::new(ServiceId::new());
        append(
            &mut message,
            vec![
                HostValue::Str("s".to_string()),
                HostValue::Int32(1),
                HostValue::Path(RemotePath::new("/p")),
            ],
        );
        assert_eq!(wire_signature(&message).unwrap(), "sio");
    }

    #[test]
    fn test_wire_signature_of_empty_message() {
        let message = CallMessage::new(ServiceId::new());
        assert_eq!(wire_signature(&message).unwrap(), "");
    }

    #[test]
    fn test_wire_signature_fails_on_unknown_code() {
        let mut message = CallMessage::new(ServiceId::new());
        message.arguments_mut().write(&[b'z']).unwrap();
        assert_eq!(
            wire_signature(&message).unwrap_err(),
            MarshalError::UnknownWireType('z')
        );
    }
}
