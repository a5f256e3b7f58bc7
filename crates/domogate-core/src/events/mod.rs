//! Domain events emitted by the guest-access core.

pub mod link;

pub use link::LinkEvent;
