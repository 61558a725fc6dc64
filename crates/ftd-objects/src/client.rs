//! Asynchronous network-objects client.
//!
//! Plain CRUD plus [`ObjectsClient::create_object`], which resolves
//! duplicate-name collisions according to a caller-supplied
//! [`DuplicateAction`].

use crate::models::{NetworkObject, NetworkObjectListParams, NETWORK_OBJECT_TYPE};
use crate::Result;
use ftd_core::config::FtdClientConfig;
use ftd_core::transport::{HttpTransport, Transport};
use ftd_core::types::{DuplicateAction, ItemList};
use ftd_core::Error;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const NETWORKS_ENDPOINT: &str = "object/networks";

/// Asynchronous client for the appliance's network-objects collection.
#[derive(Clone)]
pub struct ObjectsClient {
    transport: Arc<dyn Transport>,
}

impl ObjectsClient {
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

    /// List network objects with optional limit/offset/name filters.
    pub async fn list_objects(
        &self,
        params: &NetworkObjectListParams,
    ) -> Result<Vec<NetworkObject>> {
        let bytes = self
            .transport
            .get(NETWORKS_ENDPOINT, &params.to_pairs())
            .await?;
        let list: ItemList<NetworkObject> = decode(&bytes)?;
        Ok(list.items)
    }

    /// Fetch a single network object by id.
    pub async fn get_object(&self, id: &str) -> Result<NetworkObject> {
        let path = format!("{NETWORKS_ENDPOINT}/{id}");
        let bytes = self.transport.get(&path, &[]).await?;
        decode(&bytes)
    }

    /// Find network objects by exact name match.
    ///
    /// Uses the appliance's `filter=name:<value>` convention and returns
    /// every match.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<NetworkObject>> {
        let params = NetworkObjectListParams {
            name: Some(name.to_string()),
            ..NetworkObjectListParams::default()
        };
        self.list_objects(&params).await
    }

    /// Create a network object, resolving name collisions per `action`.
    ///
    /// The appliance enforces unique names and reports collisions through
    /// structured error codes rather than a distinct status path. On such a
    /// collision:
    ///
    /// - [`DuplicateAction::DoNothing`] returns the server's duplicate error
    ///   unchanged, signaling "already exists, not modified".
    /// - [`DuplicateAction::Replace`] looks up the existing object by exact
    ///   name, requires exactly one match, copies `value` and `subType` from
    ///   the candidate onto it, and updates it in place on the server. Zero
    ///   or multiple matches yield [`Error::AmbiguousDuplicate`] with
    ///   nothing modified.
    ///
    /// Any other error propagates unchanged; there are no retries. On
    /// success the returned record carries the server-assigned id, version,
    /// and links.
    pub async fn create_object(
        &self,
        candidate: &NetworkObject,
        action: DuplicateAction,
    ) -> Result<NetworkObject> {
        let mut body = candidate.clone();
        body.object_type = NETWORK_OBJECT_TYPE.to_string();

        let payload = serde_json::to_value(&body)?;
        match self.transport.post(NETWORKS_ENDPOINT, payload).await {
            Ok(bytes) => decode(&bytes),
            Err(Error::Api(api)) if api.is_duplicate_name() => {
                tracing::warn!(name = %body.name, "network object name already exists");
                match action {
                    DuplicateAction::DoNothing => Err(Error::Api(api)),
                    DuplicateAction::Replace => self.replace_existing(&body).await,
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Overwrite the single existing object matching the candidate's name.
    async fn replace_existing(&self, candidate: &NetworkObject) -> Result<NetworkObject> {
        let mut matches = self.find_by_name(&candidate.name).await?;
        if matches.len() != 1 {
            return Err(Error::AmbiguousDuplicate {
                name: candidate.name.clone(),
                matches: matches.len(),
            });
        }

        let mut existing = matches.remove(0);
        existing.value = candidate.value.clone();
        existing.sub_type = candidate.sub_type.clone();
        self.update_object(&existing).await
    }

    /// Update an existing network object and return the server's record.
    ///
    /// The object must carry the server-assigned id.
    pub async fn update_object(&self, object: &NetworkObject) -> Result<NetworkObject> {
        let id = object.id.as_deref().ok_or_else(|| {
            Error::InvalidRequest("cannot update a network object without an id".to_string())
        })?;

        let mut body = object.clone();
        body.object_type = NETWORK_OBJECT_TYPE.to_string();

        let path = format!("{NETWORKS_ENDPOINT}/{id}");
        let bytes = self.transport.put(&path, serde_json::to_value(&body)?).await?;
        decode(&bytes)
    }

    /// Delete a network object by id.
    pub async fn delete_object(&self, id: &str) -> Result<()> {
        let path = format!("{NETWORKS_ENDPOINT}/{id}");
        self.transport.delete(&path).await
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(Error::from)
}
