//! Deployment job models for the FTD management API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire type tag for deployment jobs.
pub const DEPLOYMENT_TYPE: &str = "deploymentstatus";

/// Job state once a deployment has finished successfully.
pub const STATE_DEPLOYED: &str = "DEPLOYED";

/// Job state once a deployment has failed.
pub const STATE_FAILED: &str = "FAILED";

/// A deployment job as reported by the appliance.
///
/// Created by the deployment trigger; the appliance assigns the id and
/// advances `state` through QUEUED, DEPLOYING, and a terminal state.
/// Timestamps arrive as epoch milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentJob {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Job name, when the server provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Wire type tag
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
    /// QUEUED, DEPLOYING, DEPLOYED, or FAILED
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Human-readable progress message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// When the job was queued
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub queued_time: Option<DateTime<Utc>>,
    /// When the job finished
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
}

impl DeploymentJob {
    /// True once the job has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state.as_deref(),
            Some(STATE_DEPLOYED) | Some(STATE_FAILED)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_epoch_millis_timestamps() {
        let json = r#"{
            "id": "deploy-1",
            "type": "deploymentstatus",
            "state": "QUEUED",
            "statusMessage": "queued",
            "queuedTime": 1526924400000
        }"#;

        let job: DeploymentJob = serde_json::from_str(json).unwrap();
        assert_eq!(
            job.queued_time,
            Some(Utc.timestamp_millis_opt(1_526_924_400_000).unwrap())
        );
        assert!(job.end_time.is_none());
        assert!(!job.is_terminal());
    }

    #[test]
    fn terminal_states_detected() {
        let mut job = DeploymentJob {
            state: Some("DEPLOYING".to_string()),
            ..DeploymentJob::default()
        };
        assert!(!job.is_terminal());

        job.state = Some(STATE_DEPLOYED.to_string());
        assert!(job.is_terminal());

        job.state = Some(STATE_FAILED.to_string());
        assert!(job.is_terminal());
    }
}
