//! Access policy and access rule client for the FTD management API.
//!
//! Provides typed structures and an asynchronous client for the appliance's
//! access policies and the rules nested under them.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::PolicyClient;
pub use models::{AccessPolicy, AccessPolicyListParams, AccessRule, AccessRuleListParams};

/// Convenient result alias that reuses the shared FTD error type.
pub type Result<T> = ftd_core::Result<T>;
