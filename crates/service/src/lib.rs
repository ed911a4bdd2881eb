//! Service layer for the flavors API.
//!
//! Sits between the HTTP handlers and storage; turns "no such row" into a
//! typed error.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod flavor_service;

pub use error::ServiceError;
pub use flavor_service::FlavorService;
