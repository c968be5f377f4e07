//! # Domain Entities
//!
//! Core domain types handled by the two request flows.
//!
//! - **Post**: normalized feed post, the raw upstream item shapes, and the
//!   `PostSource` trait for the upstream listing API
//! - **Contact**: contact-form submission, the outbound notification, and
//!   the `EmailSender` trait for the delivery API
//!
//! ## Source Traits
//!
//! The outbound APIs are reached through traits defined here and
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod contact;
mod post;

pub use contact::{ContactSubmission, DeliveryError, EmailMessage, EmailSender};
pub use post::{
    CarouselItem, FeedQuery, ImageCandidate, ImageVersions, MediaType, PostPage, PostRecord,
    PostSource, SourceError, UpstreamPage, UpstreamPostItem, PERMALINK_BASE,
};

#[cfg(test)]
pub use contact::MockEmailSender;
#[cfg(test)]
pub use post::MockPostSource;
