//! Host-side dynamic types and values.

use crate::error::CodecError;
use crate::path::RemotePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-level type of a method parameter or return value.
///
/// This is the dynamically-typed surface a method signature declares; the
/// type matcher resolves each host type to the wire codec that represents
/// it. A method with no return value carries `Option<HostType>::None` at the
/// signature level rather than a dedicated void type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostType {
    Byte,
    Bool,
    Int32,
    UInt32,
    Int64,
    Double,
    Str,
    Path,
    /// Homogeneous array of the given element type.
    Array(Box<HostType>),
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostType::Byte => write!(f, "byte"),
            HostType::Bool => write!(f, "bool"),
            HostType::Int32 => write!(f, "int32"),
            HostType::UInt32 => write!(f, "uint32"),
            HostType::Int64 => write!(f, "int64"),
            HostType::Double => write!(f, "double"),
            HostType::Str => write!(f, "string"),
            HostType::Path => write!(f, "path"),
            HostType::Array(element) => write!(f, "array<{}>", element),
        }
    }
}

/// A dynamically-typed host value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostValue {
    Byte(u8),
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    Double(f64),
    Str(String),
    Path(RemotePath),
    Array(ArrayValue),
}

impl HostValue {
    /// Returns the host type of this value.
    pub fn host_type(&self) -> HostType {
        match self {
            HostValue::Byte(_) => HostType::Byte,
            HostValue::Bool(_) => HostType::Bool,
            HostValue::Int32(_) => HostType::Int32,
            HostValue::UInt32(_) => HostType::UInt32,
            HostValue::Int64(_) => HostType::Int64,
            HostValue::Double(_) => HostType::Double,
            HostValue::Str(_) => HostType::Str,
            HostValue::Path(_) => HostType::Path,
            HostValue::Array(array) => HostType::Array(Box::new(array.element().clone())),
        }
    }
}

/// A homogeneous array value.
///
/// The element type is explicit so an empty array stays typed; every item is
/// checked against it on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    element: HostType,
    items: Vec<HostValue>,
}

impl ArrayValue {
    /// Creates an empty array of the given element type.
    pub fn new(element: HostType) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Creates an array from items, checking each against the element type.
    pub fn from_items(element: HostType, items: Vec<HostValue>) -> Result<Self, CodecError> {
        let mut array = Self::new(element);
        for item in items {
            array.push(item)?;
        }
        Ok(array)
    }

    /// Appends an item, failing when its type differs from the element type.
    pub fn push(&mut self, item: HostValue) -> Result<(), CodecError> {
        if item.host_type() != self.element {
            return Err(CodecError::ValueMismatch {
                code: 'a',
                value: item.host_type(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// The declared element type.
    pub fn element(&self) -> &HostType {
        &self.element
    }

    /// The array items in order.
    pub fn items(&self) -> &[HostValue] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
