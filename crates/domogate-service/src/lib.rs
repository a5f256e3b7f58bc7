//! # domogate-service
//!
//! Business logic for DomoGate. The `share` module is the temporary
//! guest-access subsystem: link registry, issuance with scheduled expiry,
//! guest validation and actuation, and revocation.

pub mod share;
