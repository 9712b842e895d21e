//! The data-access seam every controller is handed.
//!
//! # Design
//! `DataStore` is object-safe and speaks `serde_json::Value` so one trait
//! object serves all four collections; `list_records` and `create_record`
//! add the typed layer on top. Controllers receive a `&dyn DataStore`
//! instead of reaching for a global client, which is what lets tests drive
//! them with `MemoryStore`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::DataClient;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::query::{Collection, ListOptions};
use crate::types::Record;

#[async_trait]
pub trait DataStore: Send + Sync {
    /// Fetch every record in `collection` matching `options`, in service
    /// order. One round trip; no partial results on failure.
    async fn list(&self, collection: Collection, options: &ListOptions) -> Result<Vec<Value>, ApiError>;

    /// Persist one record and return it as stored.
    async fn create(&self, collection: Collection, fields: Value) -> Result<Value, ApiError>;
}

/// Typed `list`: decodes every record or fails the whole call.
pub async fn list_records<T: Record>(
    store: &dyn DataStore,
    options: &ListOptions,
) -> Result<Vec<T>, ApiError> {
    store
        .list(T::COLLECTION, options)
        .await?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string())))
        .collect()
}

/// Typed `create`.
pub async fn create_record<T: Serialize, R: DeserializeOwned>(
    store: &dyn DataStore,
    collection: Collection,
    fields: &T,
) -> Result<R, ApiError> {
    let fields = serde_json::to_value(fields).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    let created = store.create(collection, fields).await?;
    serde_json::from_value(created).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// `DataStore` that talks to the hosted service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore<T = UreqTransport> {
    client: DataClient,
    transport: T,
}

impl HttpStore<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport> HttpStore<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: DataClient::new(base_url),
            transport,
        }
    }

    pub fn client(&self) -> &DataClient {
        &self.client
    }
}

#[async_trait]
impl<T: Transport> DataStore for HttpStore<T> {
    async fn list(&self, collection: Collection, options: &ListOptions) -> Result<Vec<Value>, ApiError> {
        let request = self.client.build_list(collection, options);
        let response = self.transport.execute(request).await?;
        self.client.parse_list(response)
    }

    async fn create(&self, collection: Collection, fields: Value) -> Result<Value, ApiError> {
        let request = self.client.build_create(collection, &fields)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create(response)
    }
}
