//! # Core Types
//!
//! This crate defines the fundamental identifiers used throughout Crossbus.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: identities are typed and cannot be confused
//!   with plain strings or integers.
//! - **Stable where it matters**: well-known services have fixed identifiers
//!   so peers agree on them without negotiation.
//!
//! ## Key Types
//!
//! - [`ServiceId`]: Unique identifier for a service on the bus

pub mod ids;
pub mod service_ids;

pub use ids::ServiceId;
pub use service_ids::bus_service_id;
