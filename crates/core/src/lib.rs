//! Rcolly Core - Shared types library.
//!
//! This crate provides common types used across all Rcolly components:
//! - `server` - REST API serving the storefront and admin console
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, order statuses, and size lists

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
