//! # Wire Types
//!
//! This crate defines the closed set of wire-type codecs for Crossbus's
//! argument format.
//!
//! ## Philosophy
//!
//! - **Typed, not stringly-typed**: host values carry their type; codecs
//!   refuse values they cannot represent.
//! - **Self-describing wire data**: every encoded element starts with its
//!   one-character type code, so a receiver never needs the sender's
//!   declared types to walk a buffer.
//! - **Closed, not reflective**: the codec set is a tagged enum selected by
//!   a `match` over the type code. Adding a wire type means adding a variant
//!   and a registration entry, not registering a plugin at runtime.
//!
//! ## Key Types
//!
//! - [`HostType`] / [`HostValue`]: the dynamically-typed host side
//! - [`WireType`]: one codec per wire type, with its code and encoding
//! - [`WireValue`]: a codec instance wrapping one value
//! - [`ArgBuffer`]: the fixed-capacity buffer holding an argument list
//! - [`RemotePath`]: a path value resolved against a service identity

pub mod buffer;
pub mod codec;
pub mod error;
pub mod host;
pub mod path;

pub use buffer::{ArgBuffer, DEFAULT_ARG_CAPACITY};
pub use codec::{WireType, WireValue};
pub use error::CodecError;
pub use host::{ArrayValue, HostType, HostValue};
pub use path::RemotePath;
