//! # ftd-core
//!
//! Core types and utilities for working with the FTD on-box management API.
//!
//! This crate provides foundational types, error handling, and the HTTP
//! transport used by the resource-specific client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and structured API error parsing
//! - [`types`] - Shared wire types (references, links, paging, item lists)
//! - [`config`] - Client configuration and validation
//! - [`transport`] - The [`transport::Transport`] trait and reqwest implementation
//! - [`query`] - Query parameter and `field:value` filter construction

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod query;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use error::{ApiError, ApiMessage, Error, Result};
