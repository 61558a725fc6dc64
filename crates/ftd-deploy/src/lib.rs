//! Deployment trigger client for the FTD management API.
//!
//! Asks the appliance to apply staged configuration changes and exposes the
//! resulting deployment job for observation.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::DeployClient;
pub use models::DeploymentJob;

/// Convenient result alias that reuses the shared FTD error type.
pub type Result<T> = ftd_core::Result<T>;
