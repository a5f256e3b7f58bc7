//! Trait seams between the guest-access core and its collaborators.

pub mod actuator;

pub use actuator::DeviceActuator;
