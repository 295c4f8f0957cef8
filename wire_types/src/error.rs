//! Codec-level error types.

use crate::host::HostType;
use thiserror::Error;

/// Errors raised by the wire-type codecs.
///
/// None of these are recovered inside the marshaling core; they propagate to
/// the dispatch layer that owns the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// An append would exceed the argument buffer's fixed capacity.
    #[error("buffer overflow: {needed} bytes needed, {remaining} remaining")]
    BufferOverflow { needed: usize, remaining: usize },

    /// The buffer ended inside an encoded element.
    #[error("truncated element: {needed} bytes needed, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// The resolved codec has no construction from the given value.
    #[error("wire type '{code}' cannot encode a {value} value")]
    ValueMismatch { code: char, value: HostType },

    /// A decoded value cannot be read as the declared host type.
    #[error("decoded {decoded} value cannot be read as {requested}")]
    HostMismatch {
        requested: HostType,
        decoded: HostType,
    },

    /// The payload bytes violate the codec's encoding rules.
    #[error("malformed '{code}' payload: {reason}")]
    Malformed { code: char, reason: &'static str },
}
