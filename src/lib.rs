//! # Feed Relay Library
//!
//! This crate provides a small web backend with:
//! - `GET /api/instagram`: paginated, normalized posts from the RapidAPI
//!   Instagram Social API
//! - `POST /api/contact`: contact-form submissions relayed through SendGrid
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Post and contact entities, normalization rules, and
//!   the upstream source traits
//! - **Application Layer**: Feed and contact services and DTOs
//! - **Infrastructure Layer**: HTTP clients for the upstream APIs, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! feed_relay/
//! +-- config/         Configuration management
//! +-- domain/         Entities and source traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Upstream API clients and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
