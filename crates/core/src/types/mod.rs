//! Core types for the Rcolly store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod sizes;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use sizes::Sizes;
pub use status::{OrderStatus, OrderStatusError};
