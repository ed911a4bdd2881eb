//! Core types and constants for the flavors service.
//!
//! Shared by the storage, service, HTTP and CLI crates.

mod constants;
mod env_config;
mod error;
mod flavor;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use flavor::*;
