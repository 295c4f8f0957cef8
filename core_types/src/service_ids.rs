//! Stable service identifiers for well-known bus endpoints.

use crate::ServiceId;

const BUS_SERVICE_ID: u128 = 0x7f4e_2c91_a05b_43d8_b6e1_3a9d_44c2_8e07u128;

/// Stable service ID for the message bus itself.
///
/// Calls addressed to the bus (name registration, peer lookup) use this
/// identity rather than a per-process one.
pub fn bus_service_id() -> ServiceId {
    ServiceId::from_u128(BUS_SERVICE_ID)
}
