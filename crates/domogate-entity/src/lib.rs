//! # domogate-entity
//!
//! Domain entity models for DomoGate: guest share links and the devices
//! they actuate.

pub mod device;
pub mod link;

pub use device::{Device, DeviceKind};
pub use link::ShareLink;
