//! Path-like values resolved against a service identity.

use core_types::ServiceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A remote object path, optionally bound to the service that owns it.
///
/// The binding is context threaded in from the enclosing message at
/// encode/decode time; it never appears in the wire encoding, and path
/// equality compares the path text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePath {
    path: String,
    service: Option<ServiceId>,
}

impl RemotePath {
    /// Creates an unbound path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            service: None,
        }
    }

    /// Creates a path bound to the service that owns it.
    pub fn bound(path: impl Into<String>, service: ServiceId) -> Self {
        Self {
            path: path.into(),
            service: Some(service),
        }
    }

    /// Returns the same path bound to `service`.
    pub fn with_service(self, service: ServiceId) -> Self {
        Self {
            service: Some(service),
            ..self
        }
    }

    /// The path text.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The service this path resolves against, if bound.
    pub fn service(&self) -> Option<ServiceId> {
        self.service
    }
}

impl PartialEq for RemotePath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for RemotePath {}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}
