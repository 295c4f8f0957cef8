//! Process-wide wire type registry.

use crate::error::MarshalError;
use std::collections::HashMap;
use std::sync::OnceLock;
use wire_types::{HostType, WireType};

/// The process-wide mapping from type code to wire type descriptor.
///
/// Built once on first access and immutable for the rest of the process
/// lifetime; rebuilding requires a restart.
#[derive(Debug)]
pub struct WireRegistry {
    order: Vec<WireType>,
    by_code: HashMap<char, WireType>,
}

impl WireRegistry {
    fn build() -> Self {
        let mut order = Vec::with_capacity(WireType::ALL.len());
        let mut by_code = HashMap::with_capacity(WireType::ALL.len());
        for wire in WireType::ALL {
            if by_code.insert(wire.code(), wire).is_some() {
                // Two codecs sharing one code cannot coexist on the wire;
                // this is a configuration error, not a runtime condition.
                panic!("wire type code '{}' registered twice", wire.code());
            }
            order.push(wire);
        }
        Self { order, by_code }
    }

    /// Looks up the codec registered for `code`.
    pub fn by_code(&self, code: char) -> Option<WireType> {
        self.by_code.get(&code).copied()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = WireType> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered codecs.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty (never, once built).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves a host type to the first registered codec whose `suits`
    /// predicate accepts it.
    ///
    /// Probing follows registration order; once a candidate matches, later
    /// candidates are never consulted.
    pub fn match_type(&self, host: &HostType) -> Result<WireType, MarshalError> {
        self.order
            .iter()
            .copied()
            .find(|wire| wire.suits(host))
            .ok_or_else(|| MarshalError::NoSuitableType(host.clone()))
    }
}

static REGISTRY: OnceLock<WireRegistry> = OnceLock::new();

/// Returns the process-wide registry, building it on first access.
///
/// Initialization is exactly-once and safe under concurrent first access;
/// afterwards the registry is read-only and freely shared.
pub fn registry() -> &'static WireRegistry {
    REGISTRY.get_or_init(WireRegistry::build)
}

/// Resolves a host type through the process-wide registry.
pub fn match_type(host: &HostType) -> Result<WireType, MarshalError> {
    registry().match_type(host)
}
