//! # Argument Marshaling
//!
//! This crate bridges dynamically-typed method signatures and the linear,
//! self-describing encoding of argument values inside a message buffer.
//!
//! ## Philosophy
//!
//! - **Deterministic resolution**: a host type resolves to exactly one wire
//!   codec, by probing a fixed registration order; ties never depend on
//!   hidden state.
//! - **Forward-only cursors**: one append cursor writes a message's argument
//!   list in order; restartable enumerators walk it back out, driven by the
//!   type codes actually on the wire rather than the declared types.
//! - **Fail to the caller**: nothing here retries. Every failure is a typed
//!   error for the dispatch layer that owns the call.
//!
//! ## Architecture
//!
//! - [`registry`]: process-wide code-to-codec mapping, built once
//! - [`cursor`]: [`AppendCursor`] and [`ArgEnumerator`] over a message buffer
//! - [`signature`]: method signatures with IN/OUT/INOUT classification
//! - [`binder`]: moves values between live parameter lists and the wire

pub mod binder;
pub mod cursor;
pub mod error;
pub mod message;
pub mod registry;
pub mod signature;

pub use binder::{
    append_results, check_signature, expected_signature, get_parameters, get_results,
    parse_in_parameters, parse_out_parameters,
};
pub use cursor::{wire_signature, AppendCursor, ArgEnumerator};
pub use error::MarshalError;
pub use message::{CallMessage, Message, MessageId};
pub use registry::{match_type, registry, WireRegistry};
pub use signature::{Direction, MethodSignature, Parameter};
