//! Integration tests for parsing access-policy data.
//!
//! These tests validate that the ftd-policy models can correctly
//! deserialize actual appliance response data.

use ftd_core::types::ItemList;
use ftd_policy::models::AccessPolicy;
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load the access policy list fixture from disk.
fn load_policy_fixture() -> String {
    let fixture_path = fixtures_dir().join("access_policy_list.json");
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read access policy fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_access_policy_list() {
    let json_data = load_policy_fixture();

    let list: ItemList<AccessPolicy> = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!("Failed to deserialize access policy data: {e}\nJSON: {json_data}")
    });

    assert_eq!(list.items.len(), 1, "Expected 1 policy in test data");
    assert_eq!(list.paging.map(|p| p.count), Some(1));
}

#[test]
fn test_access_policy_nested_references() {
    let json_data = load_policy_fixture();
    let list: ItemList<AccessPolicy> = serde_json::from_str(&json_data).unwrap();
    let policy = &list.items[0];

    assert_eq!(policy.name, "NGFW-Access-Policy");
    assert_eq!(policy.object_type, "accesspolicy");
    assert_eq!(
        policy.id.as_deref(),
        Some("c78e66bc-cb57-43fe-bcbf-96b79b3475b3")
    );

    // Default action and its nested intrusion policy reference.
    assert_eq!(policy.default_action.action, "PERMIT");
    assert_eq!(policy.default_action.event_log_action, "LOG_FLOW_START");
    assert_eq!(policy.default_action.object_type, "accessdefaultaction");
    let intrusion = policy
        .default_action
        .intrusion_policy
        .as_ref()
        .expect("Should have an intrusion policy reference");
    assert_eq!(intrusion.name, "Balanced Security and Connectivity");
    assert_eq!(intrusion.object_type, "intrusionpolicy");

    // SSL policy and security intelligence references.
    assert_eq!(
        policy.ssl_policy.as_ref().map(|r| r.object_type.as_str()),
        Some("sslpolicy")
    );
    assert_eq!(
        policy
            .security_intelligence
            .as_ref()
            .map(|r| r.name.as_str()),
        Some("Security-Intelligence")
    );

    // Rule references.
    assert_eq!(policy.rules.len(), 2);
    assert_eq!(policy.rules[0].name, "allow-dns");
    assert_eq!(policy.rules[1].name, "block-guest-ssh");
    assert!(policy.rules.iter().all(|r| r.object_type == "accessrule"));
}
