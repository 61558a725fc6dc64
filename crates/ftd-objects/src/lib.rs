//! Network object client and data models for the FTD management API.
//!
//! Provides typed structures and an asynchronous client for the appliance's
//! network-objects collection, including the create-with-duplicate-resolution
//! workflow.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::ObjectsClient;
pub use models::{NetworkObject, NetworkObjectListParams};

/// Convenient result alias that reuses the shared FTD error type.
pub type Result<T> = ftd_core::Result<T>;
