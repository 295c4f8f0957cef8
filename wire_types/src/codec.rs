//! The closed set of wire-type codecs.
//!
//! Every encoded element is self-describing: a one-byte type code followed
//! by the codec's payload. Multi-byte integers are little-endian; strings
//! and paths are length-prefixed UTF-8; arrays carry their element code and
//! count once, followed by the raw element payloads.

use crate::buffer::ArgBuffer;
use crate::error::CodecError;
use crate::host::{ArrayValue, HostType, HostValue};
use crate::path::RemotePath;
use core_types::ServiceId;

/// One wire type of the argument format.
///
/// Each variant carries its own encode/decode behavior, selected by a
/// `match` over the type code. The set is closed: there is no runtime
/// registration surface beyond [`WireType::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Byte,
    Bool,
    Int32,
    UInt32,
    Int64,
    Double,
    Path,
    Str,
    Array,
}

impl WireType {
    /// Registration order.
    ///
    /// The type matcher probes [`WireType::suits`] in exactly this order and
    /// the first match wins, so more specific codecs must precede general
    /// ones: `Path` comes before `Str` so the path codec is never shadowed
    /// by the string codec. Reordering this list changes type resolution and
    /// is a wire-contract change.
    pub const ALL: [WireType; 9] = [
        WireType::Byte,
        WireType::Bool,
        WireType::Int32,
        WireType::UInt32,
        WireType::Int64,
        WireType::Double,
        WireType::Path,
        WireType::Str,
        WireType::Array,
    ];

    /// The one-character type code identifying this wire type.
    pub const fn code(self) -> char {
        match self {
            WireType::Byte => 'y',
            WireType::Bool => 'b',
            WireType::Int32 => 'i',
            WireType::UInt32 => 'u',
            WireType::Int64 => 'x',
            WireType::Double => 'd',
            WireType::Path => 'o',
            WireType::Str => 's',
            WireType::Array => 'a',
        }
    }

    /// Resolves a type code against the registered codecs.
    pub fn from_code(code: char) -> Option<WireType> {
        WireType::ALL.iter().copied().find(|wire| wire.code() == code)
    }

    /// Whether this wire type can represent the given host type.
    pub fn suits(self, host: &HostType) -> bool {
        match (self, host) {
            (WireType::Byte, HostType::Byte)
            | (WireType::Bool, HostType::Bool)
            | (WireType::Int32, HostType::Int32)
            | (WireType::UInt32, HostType::UInt32)
            | (WireType::Int64, HostType::Int64)
            | (WireType::Double, HostType::Double)
            | (WireType::Path, HostType::Path)
            | (WireType::Str, HostType::Str) => true,
            // Array elements must be basic types; nested arrays have no
            // wire representation.
            (WireType::Array, HostType::Array(element)) => {
                !matches!(element.as_ref(), HostType::Array(_))
            }
            _ => false,
        }
    }

    /// The first registered codec that suits `host`, in registration order.
    pub fn for_host(host: &HostType) -> Option<WireType> {
        WireType::ALL.iter().copied().find(|wire| wire.suits(host))
    }

    /// Whether decoded values of this type carry a service binding.
    pub const fn is_path_like(self) -> bool {
        matches!(self, WireType::Path)
    }

    /// Width in bytes of the encoded element starting at the cursor, type
    /// code included. `bytes` is the buffer content past the code byte.
    pub fn element_width(self, bytes: &[u8]) -> Result<usize, CodecError> {
        Ok(1 + self.payload_width(bytes)?)
    }

    /// The host type values of this wire type decode to, for basic
    /// (non-array) wire types.
    fn basic_host_type(self) -> Option<HostType> {
        match self {
            WireType::Byte => Some(HostType::Byte),
            WireType::Bool => Some(HostType::Bool),
            WireType::Int32 => Some(HostType::Int32),
            WireType::UInt32 => Some(HostType::UInt32),
            WireType::Int64 => Some(HostType::Int64),
            WireType::Double => Some(HostType::Double),
            WireType::Path => Some(HostType::Path),
            WireType::Str => Some(HostType::Str),
            WireType::Array => None,
        }
    }

    fn payload_width(self, bytes: &[u8]) -> Result<usize, CodecError> {
        match self {
            WireType::Byte | WireType::Bool => {
                need(bytes, 1)?;
                Ok(1)
            }
            WireType::Int32 | WireType::UInt32 => {
                need(bytes, 4)?;
                Ok(4)
            }
            WireType::Int64 | WireType::Double => {
                need(bytes, 8)?;
                Ok(8)
            }
            WireType::Str | WireType::Path => {
                let length = read_u32(bytes)? as usize;
                need(bytes, 4 + length)?;
                Ok(4 + length)
            }
            WireType::Array => {
                need(bytes, 5)?;
                let element = self.element_codec(bytes[0] as char)?;
                let count = read_u32(&bytes[1..])? as usize;
                let mut position = 5;
                for _ in 0..count {
                    position += element.payload_width(&bytes[position..])?;
                }
                Ok(position)
            }
        }
    }

    fn encode_payload(self, value: &HostValue, out: &mut Vec<u8>) -> Result<(), CodecError> {
        match (self, value) {
            (WireType::Byte, HostValue::Byte(v)) => out.push(*v),
            (WireType::Bool, HostValue::Bool(v)) => out.push(*v as u8),
            (WireType::Int32, HostValue::Int32(v)) => out.extend_from_slice(&v.to_le_bytes()),
            (WireType::UInt32, HostValue::UInt32(v)) => out.extend_from_slice(&v.to_le_bytes()),
            (WireType::Int64, HostValue::Int64(v)) => out.extend_from_slice(&v.to_le_bytes()),
            (WireType::Double, HostValue::Double(v)) => out.extend_from_slice(&v.to_le_bytes()),
            (WireType::Str, HostValue::Str(v)) => encode_text(v, out),
            (WireType::Path, HostValue::Path(v)) => encode_text(v.path(), out),
            (WireType::Array, HostValue::Array(array)) => {
                let element = WireType::for_host(array.element()).ok_or_else(|| {
                    CodecError::ValueMismatch {
                        code: self.code(),
                        value: array.element().clone(),
                    }
                })?;
                out.push(element.code() as u8);
                out.extend_from_slice(&(array.len() as u32).to_le_bytes());
                for item in array.items() {
                    element.encode_payload(item, out)?;
                }
            }
            _ => {
                return Err(CodecError::ValueMismatch {
                    code: self.code(),
                    value: value.host_type(),
                })
            }
        }
        Ok(())
    }

    fn decode_payload(
        self,
        bytes: &[u8],
        service: Option<ServiceId>,
    ) -> Result<(HostValue, usize), CodecError> {
        match self {
            WireType::Byte => {
                need(bytes, 1)?;
                Ok((HostValue::Byte(bytes[0]), 1))
            }
            WireType::Bool => {
                need(bytes, 1)?;
                let value = match bytes[0] {
                    0 => false,
                    1 => true,
                    _ => {
                        return Err(CodecError::Malformed {
                            code: self.code(),
                            reason: "boolean byte must be 0 or 1",
                        })
                    }
                };
                Ok((HostValue::Bool(value), 1))
            }
            WireType::Int32 => {
                let raw = read_fixed::<4>(bytes)?;
                Ok((HostValue::Int32(i32::from_le_bytes(raw)), 4))
            }
            WireType::UInt32 => {
                let raw = read_fixed::<4>(bytes)?;
                Ok((HostValue::UInt32(u32::from_le_bytes(raw)), 4))
            }
            WireType::Int64 => {
                let raw = read_fixed::<8>(bytes)?;
                Ok((HostValue::Int64(i64::from_le_bytes(raw)), 8))
            }
            WireType::Double => {
                let raw = read_fixed::<8>(bytes)?;
                Ok((HostValue::Double(f64::from_le_bytes(raw)), 8))
            }
            WireType::Str => {
                let (text, width) = decode_text(self.code(), bytes)?;
                Ok((HostValue::Str(text), width))
            }
            WireType::Path => {
                let (text, width) = decode_text(self.code(), bytes)?;
                let path = match service {
                    Some(service) => RemotePath::bound(text, service),
                    None => RemotePath::new(text),
                };
                Ok((HostValue::Path(path), width))
            }
            WireType::Array => {
                need(bytes, 5)?;
                let element = self.element_codec(bytes[0] as char)?;
                let element_type = element.basic_host_type().ok_or(CodecError::Malformed {
                    code: self.code(),
                    reason: "array elements must be a basic type",
                })?;
                let count = read_u32(&bytes[1..])? as usize;
                let mut array = ArrayValue::new(element_type);
                let mut position = 5;
                for _ in 0..count {
                    let (item, width) = element.decode_payload(&bytes[position..], service)?;
                    array.push(item)?;
                    position += width;
                }
                Ok((HostValue::Array(array), position))
            }
        }
    }

    fn element_codec(self, code: char) -> Result<WireType, CodecError> {
        WireType::from_code(code).ok_or(CodecError::Malformed {
            code: self.code(),
            reason: "unknown element type code",
        })
    }
}

/// A codec instance: one wire type wrapping one host value.
///
/// Constructed either from a host value (encode direction, validated
/// against the codec's `suits` predicate) or from a cursor position in a
/// buffer (decode direction).
#[derive(Debug, Clone, PartialEq)]
pub struct WireValue {
    wire: WireType,
    value: HostValue,
}

impl WireValue {
    /// Wraps `value` in the codec for `wire`.
    ///
    /// Fails with [`CodecError::ValueMismatch`] when the codec has no
    /// construction from that value.
    pub fn new(wire: WireType, value: HostValue) -> Result<Self, CodecError> {
        if !wire.suits(&value.host_type()) {
            return Err(CodecError::ValueMismatch {
                code: wire.code(),
                value: value.host_type(),
            });
        }
        Ok(Self { wire, value })
    }

    /// Decodes the element whose payload starts at `bytes`, returning the
    /// codec instance and the payload width consumed.
    ///
    /// `service` is the owning message's identity; path-like values decode
    /// bound to it.
    pub fn decode(
        wire: WireType,
        bytes: &[u8],
        service: Option<ServiceId>,
    ) -> Result<(Self, usize), CodecError> {
        let (value, width) = wire.decode_payload(bytes, service)?;
        Ok((Self { wire, value }, width))
    }

    /// The wire type of this instance.
    pub fn wire_type(&self) -> WireType {
        self.wire
    }

    /// The wrapped value.
    pub fn value(&self) -> &HostValue {
        &self.value
    }

    /// Unwraps the value.
    pub fn into_value(self) -> HostValue {
        self.value
    }

    /// Re-binds a path-like value to `service`; other values are returned
    /// unchanged.
    pub fn bound_to(self, service: ServiceId) -> Self {
        match self.value {
            HostValue::Path(path) => Self {
                wire: self.wire,
                value: HostValue::Path(path.with_service(service)),
            },
            _ => self,
        }
    }

    /// Appends this element (type code + payload) to `buf`, all-or-nothing.
    pub fn append_to(&self, buf: &mut ArgBuffer) -> Result<(), CodecError> {
        let mut encoded = Vec::with_capacity(16);
        encoded.push(self.wire.code() as u8);
        self.wire.encode_payload(&self.value, &mut encoded)?;
        buf.write(&encoded)
    }

    /// Converts the wrapped value to the declared host type.
    ///
    /// Conversion is strict: the decoded type must equal the declared type,
    /// with no implicit numeric widening.
    pub fn get(&self, requested: &HostType) -> Result<HostValue, CodecError> {
        let decoded = self.value.host_type();
        if &decoded != requested {
            return Err(CodecError::HostMismatch {
                requested: requested.clone(),
                decoded,
            });
        }
        Ok(self.value.clone())
    }
}

fn need(bytes: &[u8], n: usize) -> Result<(), CodecError> {
    if bytes.len() < n {
        return Err(CodecError::Truncated {
            needed: n,
            remaining: bytes.len(),
        });
    }
    Ok(())
}

fn read_fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CodecError> {
    need(bytes, N)?;
    let mut raw = [0u8; N];
    raw.copy_from_slice(&bytes[..N]);
    Ok(raw)
}

fn read_u32(bytes: &[u8]) -> Result<u32, CodecError> {
    Ok(u32::from_le_bytes(read_fixed::<4>(bytes)?))
}

fn encode_text(text: &str, out: &mut Vec<u8>) {
    out.extend_from_slice(&(text.len() as u32).to_le_bytes());
    out.extend_from_slice(text.as_bytes());
}

fn decode_text(code: char, bytes: &[u8]) -> Result<(String, usize), CodecError> {
    let length = read_u32(bytes)? as usize;
    need(bytes, 4 + length)?;
    let text = String::from_utf8(bytes[4..4 + length].to_vec()).map_err(|_| {
        CodecError::Malformed {
            code,
            reason: "argument text is not valid UTF-8",
        }
    })?;
    Ok((text, 4 + length))
}
