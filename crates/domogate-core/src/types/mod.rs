//! Typed identifiers shared across crates.

pub mod device;
pub mod token;

pub use device::DeviceId;
pub use token::LinkToken;
