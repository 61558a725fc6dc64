//! Network object models for the FTD management API.

use ftd_core::query::QueryParams;
use ftd_core::types::{Links, Referenceable, ReferenceObject};
use serde::{Deserialize, Serialize};

/// Wire type tag for network objects.
pub const NETWORK_OBJECT_TYPE: &str = "networkobject";

/// A named network value (host, network, range, or FQDN) as stored on the
/// appliance.
///
/// `id`, `version`, and `links` are assigned by the server; a candidate
/// record submitted for creation leaves them unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkObject {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Object name, unique on the appliance
    pub name: String,
    /// Server-assigned version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Wire type tag, always `networkobject`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value kind: HOST, NETWORK, RANGE, or FQDN
    #[serde(rename = "subType")]
    pub sub_type: String,
    /// The address value (e.g. "10.0.0.0/8")
    pub value: String,
    /// True for objects shipped with the appliance
    #[serde(
        rename = "isSystemDefined",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_system_defined: Option<bool>,
    /// Server-provided hyperlinks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Referenceable for NetworkObject {
    fn reference(&self) -> ReferenceObject {
        ReferenceObject {
            id: self.id.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            object_type: self.object_type.clone(),
        }
    }
}

/// Optional filters for listing network objects.
#[derive(Debug, Clone, Default)]
pub struct NetworkObjectListParams {
    /// Maximum number of items to return
    pub limit: Option<u32>,
    /// Offset into the collection
    pub offset: Option<u32>,
    /// Exact-match name filter
    pub name: Option<String>,
}

impl NetworkObjectListParams {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_serialization_omits_server_fields() {
        let candidate = NetworkObject {
            name: "corp-net".to_string(),
            object_type: NETWORK_OBJECT_TYPE.to_string(),
            sub_type: "NETWORK".to_string(),
            value: "10.0.0.0/8".to_string(),
            ..NetworkObject::default()
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("version").is_none());
        assert!(json.get("links").is_none());
        assert_eq!(json["subType"], "NETWORK");
        assert_eq!(json["type"], "networkobject");
    }

    #[test]
    fn reference_carries_identity_fields() {
        let object = NetworkObject {
            id: Some("abc-123".to_string()),
            name: "corp-net".to_string(),
            version: Some("v1".to_string()),
            object_type: NETWORK_OBJECT_TYPE.to_string(),
            sub_type: "NETWORK".to_string(),
            value: "10.0.0.0/8".to_string(),
            ..NetworkObject::default()
        };

        let reference = object.reference();
        assert_eq!(reference.id.as_deref(), Some("abc-123"));
        assert_eq!(reference.name, "corp-net");
        assert_eq!(reference.version.as_deref(), Some("v1"));
        assert_eq!(reference.object_type, "networkobject");
    }

    #[test]
    fn list_params_encode_name_as_filter() {
        let params = NetworkObjectListParams {
            limit: Some(25),
            offset: None,
            name: Some("corp-net".to_string()),
        };

        let pairs = params.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit", "25".to_string()),
                ("filter", "name:corp-net".to_string()),
            ]
        );
    }
}
