//! Admin console handlers.
//!
//! Every handler here takes the [`RequireAdmin`](crate::middleware::RequireAdmin)
//! extractor, so a request without an admin bearer token never reaches a
//! handler body.

pub mod orders;
pub mod products;
pub mod stats;
pub mod users;
