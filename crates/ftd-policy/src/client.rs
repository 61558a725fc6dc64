//! Asynchronous access-policy client.

use crate::models::{
    AccessPolicy, AccessPolicyListParams, AccessRule, AccessRuleListParams,
    ACCESS_DEFAULT_ACTION_TYPE, ACCESS_POLICY_TYPE, ACCESS_RULE_TYPE,
};
use crate::Result;
use ftd_core::config::FtdClientConfig;
use ftd_core::transport::{HttpTransport, Transport};
use ftd_core::types::ItemList;
use ftd_core::Error;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const POLICIES_ENDPOINT: &str = "policy/accesspolicies";

/// Asynchronous client for access policies and their nested rules.
#[derive(Clone)]
pub struct PolicyClient {
    transport: Arc<dyn Transport>,
}

impl PolicyClient {
    /// Construct a client directly from the appliance base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::from_config(&FtdClientConfig::new(base_url.as_ref().to_string())?)
    }

    /// Construct a client from an existing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn from_config(config: &FtdClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Construct a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List access policies.
    pub async fn list_policies(
        &self,
        params: &AccessPolicyListParams,
    ) -> Result<Vec<AccessPolicy>> {
        let bytes = self
            .transport
            .get(POLICIES_ENDPOINT, &params.to_pairs())
            .await?;
        let list: ItemList<AccessPolicy> = decode(&bytes)?;
        Ok(list.items)
    }

    /// Update an access policy and return the server's record.
    ///
    /// The wire type tags of the policy and its default action are forced to
    /// the values the appliance expects.
    pub async fn update_policy(
        &self,
        policy_id: &str,
        policy: &AccessPolicy,
    ) -> Result<AccessPolicy> {
        let mut body = policy.clone();
        body.object_type = ACCESS_POLICY_TYPE.to_string();
        body.default_action.object_type = ACCESS_DEFAULT_ACTION_TYPE.to_string();

        tracing::debug!(policy_id, "updating access policy");
        let path = format!("{POLICIES_ENDPOINT}/{policy_id}");
        let bytes = self.transport.put(&path, serde_json::to_value(&body)?).await?;
        decode(&bytes)
    }

    /// List the access rules nested under a policy.
    pub async fn list_rules(
        &self,
        policy_id: &str,
        params: &AccessRuleListParams,
    ) -> Result<Vec<AccessRule>> {
        let path = format!("{POLICIES_ENDPOINT}/{policy_id}/accessrules");
        let bytes = self.transport.get(&path, &params.to_pairs()).await?;
        let list: ItemList<AccessRule> = decode(&bytes)?;
        Ok(list.items)
    }

    /// Create an access rule under a policy and return the server's record.
    pub async fn create_rule(&self, policy_id: &str, rule: &AccessRule) -> Result<AccessRule> {
        let mut body = rule.clone();
        body.object_type = ACCESS_RULE_TYPE.to_string();

        let path = format!("{POLICIES_ENDPOINT}/{policy_id}/accessrules");
        let bytes = self.transport.post(&path, serde_json::to_value(&body)?).await?;
        decode(&bytes)
    }

    /// Delete an access rule from a policy.
    pub async fn delete_rule(&self, policy_id: &str, rule_id: &str) -> Result<()> {
        let path = format!("{POLICIES_ENDPOINT}/{policy_id}/accessrules/{rule_id}");
        self.transport.delete(&path).await
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(Error::from)
}
