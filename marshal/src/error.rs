//! Marshaling error types.

use thiserror::Error;
use wire_types::{CodecError, HostType};

/// Errors surfaced by the marshaling engine.
///
/// None of these are recovered locally; each propagates to the invocation
/// layer, which decides whether to re-dispatch the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarshalError {
    /// No registered wire type can represent the host type.
    #[error("no suitable wire type for host type {0}")]
    NoSuitableType(HostType),

    /// A decoded type code has no registry entry.
    ///
    /// Indicates version skew between sender and receiver registries.
    #[error("unknown wire type code '{0}'")]
    UnknownWireType(char),

    /// The encoded argument list does not match the method's expected
    /// signature.
    #[error("signature mismatch: expected \"{expected}\", found \"{found}\"")]
    SignatureMismatch { expected: String, found: String },

    /// A codec-level failure propagated from the wire types.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
