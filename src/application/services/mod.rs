//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **FeedService**: Paginated, normalized Instagram posts
//! - **ContactService**: Contact-form validation and email relay

pub mod contact_service;
pub mod feed_service;

// Re-export feed service types
pub use feed_service::{FeedError, FeedService, FeedServiceImpl};

// Re-export contact service types
pub use contact_service::{ContactError, ContactService, ContactServiceImpl};
