//! Contract tests for the wire format: type codes, registration order, and
//! element layouts.
