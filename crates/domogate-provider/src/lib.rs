//! # domogate-provider
//!
//! Adapter to the upstream intercom cloud API: OAuth token refresh, the
//! subscriber key (device) directory, and the concrete [`DeviceActuator`]
//! implementation used in production.
//!
//! [`DeviceActuator`]: domogate_core::traits::DeviceActuator

pub mod actuator;
pub mod client;
pub mod directory;
pub mod token;

pub use actuator::ProviderActuator;
pub use client::ProviderClient;
pub use directory::DeviceDirectory;
pub use token::TokenManager;
