//! Method signatures and parameter classification.

use serde::{Deserialize, Serialize};
use wire_types::HostType;

/// Classification of a formal parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Supplied by the caller, read by the callee.
    In,
    /// Produced by the callee, written back on return.
    Out,
    /// Supplied by the caller and written back on return.
    InOut,
}

impl Direction {
    /// Whether the callee reads this parameter from the incoming buffer.
    pub fn is_read(self) -> bool {
        matches!(self, Direction::In | Direction::InOut)
    }

    /// Whether the callee writes this parameter back on return.
    pub fn is_written(self) -> bool {
        matches!(self, Direction::Out | Direction::InOut)
    }
}

/// One formal parameter of a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    host_type: HostType,
    direction: Direction,
}

impl Parameter {
    /// Creates a parameter with an explicit direction.
    pub fn new(name: impl Into<String>, host_type: HostType, direction: Direction) -> Self {
        Self {
            name: name.into(),
            host_type,
            direction,
        }
    }

    /// Creates an IN parameter.
    pub fn input(name: impl Into<String>, host_type: HostType) -> Self {
        Self::new(name, host_type, Direction::In)
    }

    /// Creates an OUT parameter.
    pub fn output(name: impl Into<String>, host_type: HostType) -> Self {
        Self::new(name, host_type, Direction::Out)
    }

    /// Creates an INOUT parameter.
    pub fn in_out(name: impl Into<String>, host_type: HostType) -> Self {
        Self::new(name, host_type, Direction::InOut)
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared host type.
    pub fn host_type(&self) -> &HostType {
        &self.host_type
    }

    /// The IN/OUT/INOUT classification.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// An ordered method signature: formal parameters plus an optional return
/// type.
///
/// `None` as the return type means the method is void.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    name: String,
    parameters: Vec<Parameter>,
    return_type: Option<HostType>,
}

impl MethodSignature {
    /// Creates a void method with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Sets the return type.
    pub fn returning(mut self, host_type: HostType) -> Self {
        self.return_type = Some(host_type);
        self
    }

    /// Appends a formal parameter; declaration order is preserved.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The formal parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The declared return type, or `None` for a void method.
    pub fn return_type(&self) -> Option<&HostType> {
        self.return_type.as_ref()
    }
}
