//! Shared plumbing for the storefront service.
//!
//! Holds the pieces that are independent of any one resource: environment
//! configuration, tracing setup, request-id middleware, liveness probes and the
//! field-level payload validation primitives the per-resource validators build on.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
pub mod validation;
