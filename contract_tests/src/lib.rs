//! # Wire Contract Tests
//!
//! This crate provides "golden" tests for the wire contract to ensure it
//! doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the wire contract is written as code
//! - **Testability first**: contract tests fail when codes, ordering, or
//!   encodings change
//! - **Mechanism not policy**: define what must stay stable, not how
//!   callers use it
//!
//! ## Structure
//!
//! - [`wire_format`]: type codes, registration order, element layouts
//! - [`call_binding`]: cross-crate call scenarios (append, enumerate,
//!   signature agreement, reply symmetry)

pub mod call_binding;
pub mod wire_format;

/// Common test helpers for contract validation
pub mod test_helpers {
    use core_types::ServiceId;
    use marshal::{match_type, AppendCursor, CallMessage};
    use wire_types::{HostValue, WireValue};

    /// Creates a message addressed to `service` holding `values` encoded in
    /// order.
    pub fn message_with_arguments(service: ServiceId, values: Vec<HostValue>) -> CallMessage {
        let mut message = CallMessage::new(service);
        let mut cursor = AppendCursor::begin(&mut message);
        for value in values {
            let wire = match_type(&value.host_type()).expect("no wire type for value");
            let instance = WireValue::new(wire, value).expect("value rejected by codec");
            cursor.append(instance).expect("append failed");
        }
        message
    }
}
