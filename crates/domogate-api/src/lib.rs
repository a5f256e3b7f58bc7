//! # domogate-api
//!
//! HTTP layer for DomoGate: the authenticated admin surface under `/api`
//! and the unauthenticated public guest surface for share links.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
