//! Guest link management — issue, validate, actuate, and revoke share links.

pub mod access;
pub mod registry;
pub mod service;
pub mod token;

pub use access::GuestAccessService;
pub use registry::LinkRegistry;
pub use service::ShareLinkService;
pub use token::TokenGenerator;
