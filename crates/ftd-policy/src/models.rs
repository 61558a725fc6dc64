//! Access policy and access rule models for the FTD management API.
//!
//! Both resources are reference-augmented records: identity fields plus
//! nested [`ReferenceObject`] handles to sub-resources (intrusion policy,
//! SSL policy, zones, ports). The only invariant is that `id` is set only
//! after the server has created the object.

use ftd_core::query::QueryParams;
use ftd_core::types::{Links, Referenceable, ReferenceObject};
use serde::{Deserialize, Serialize};

/// Wire type tag for access policies.
pub const ACCESS_POLICY_TYPE: &str = "accesspolicy";

/// Wire type tag for an access policy's default action.
pub const ACCESS_DEFAULT_ACTION_TYPE: &str = "accessdefaultaction";

/// Wire type tag for access rules.
pub const ACCESS_RULE_TYPE: &str = "accessrule";

/// An access policy as stored on the appliance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicy {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Policy name
    pub name: String,
    /// Server-assigned version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Wire type tag, always `accesspolicy`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
    /// Action applied to traffic no rule matches
    #[serde(default)]
    pub default_action: AccessDefaultAction,
    /// SSL decryption policy attached to this policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_policy: Option<ReferenceObject>,
    /// Rules contained in this policy, as references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ReferenceObject>,
    /// Identity policy attached to this policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_policy_setting: Option<ReferenceObject>,
    /// Security intelligence settings attached to this policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_intelligence: Option<ReferenceObject>,
    /// Server-provided hyperlinks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Default action of an access policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessDefaultAction {
    /// PERMIT, TRUST, or DENY
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
    /// Flow logging behavior (e.g. LOG_FLOW_START)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event_log_action: String,
    /// Intrusion policy applied to defaulted traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intrusion_policy: Option<ReferenceObject>,
    /// Syslog destination for defaulted traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog_server: Option<ReferenceObject>,
    /// Wire type tag, always `accessdefaultaction`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
}

impl Referenceable for AccessPolicy {
    fn reference(&self) -> ReferenceObject {
        ReferenceObject {
            id: self.id.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            object_type: self.object_type.clone(),
        }
    }
}

/// An access rule nested under an access policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Rule name
    pub name: String,
    /// Server-assigned version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Wire type tag, always `accessrule`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
    /// Server-assigned ordinal within the policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<u64>,
    /// Source security zones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_zones: Vec<ReferenceObject>,
    /// Destination security zones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_zones: Vec<ReferenceObject>,
    /// Source networks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_networks: Vec<ReferenceObject>,
    /// Destination networks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_networks: Vec<ReferenceObject>,
    /// Source ports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_ports: Vec<ReferenceObject>,
    /// Destination ports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_ports: Vec<ReferenceObject>,
    /// PERMIT, TRUST, or DENY
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rule_action: String,
    /// Flow logging behavior
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event_log_action: String,
    /// VLAN tag conditions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vlan_tags: Vec<ReferenceObject>,
    /// Matching identity users
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<ReferenceObject>,
    /// Intrusion policy applied to matching traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intrusion_policy: Option<ReferenceObject>,
    /// File policy applied to matching traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_policy: Option<ReferenceObject>,
    /// Whether file events are logged
    #[serde(default)]
    pub log_files: bool,
    /// Syslog destination for matching traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog_server: Option<ReferenceObject>,
    /// Server-provided hyperlinks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Referenceable for AccessRule {
    fn reference(&self) -> ReferenceObject {
        ReferenceObject {
            id: self.id.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            object_type: self.object_type.clone(),
        }
    }
}

/// Optional filters for listing access policies.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicyListParams {
    /// Maximum number of items to return
    pub limit: Option<u32>,
    /// Offset into the collection
    pub offset: Option<u32>,
}

impl AccessPolicyListParams {
    /// Convert the parameters into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("offset", self.offset);
        params.into_pairs()
    }
}

/// Optional filters for listing access rules.
#[derive(Debug, Clone, Default)]
pub struct AccessRuleListParams {
    /// Maximum number of items to return
    pub limit: Option<u32>,
    /// Offset into the collection
    pub offset: Option<u32>,
    /// Exact-match name filter
    pub name: Option<String>,
}

impl AccessRuleListParams {
    /// Convert the parameters into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("offset", self.offset);
        if let Some(name) = &self.name {
            params.push_filter("name", name);
        }
        params.into_pairs()
    }
}
