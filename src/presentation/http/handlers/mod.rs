//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod contact;
pub mod feed;
pub mod health;
