//! # Domain Layer
//!
//! The domain layer holds the data shapes and normalization rules of the
//! feed gateway and the contact relay. It is independent of any HTTP
//! framework or client.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Upstream access is expressed as traits (`PostSource`, `EmailSender`)
//! - Entities carry their own normalization behavior

pub mod entities;

// Re-export commonly used types
pub use entities::*;
