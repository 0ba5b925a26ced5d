//! CouchDB store implementation
//!
//! This module implements [`InstrumentStore`] against the CouchDB REST API.
//! Instrument documents live in a single database; CouchDB's status codes
//! and `reason` strings are propagated to callers unchanged, which is what
//! lets the HTTP layer surface upstream failures verbatim.

use crate::adapters::couchdb::models::{CouchErrorBody, WriteReceipt};
use crate::adapters::store::traits::{InstrumentStore, StoreResult};
use crate::config::CouchDbConfig;
use crate::domain::{BandstandError, Document, InstrumentId, StoreError, INSTRUMENT_TYPE};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{header, Client, ClientBuilder, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// CouchDB-backed instrument store
///
/// # Example
///
/// ```no_run
/// use bandstand::adapters::couchdb::CouchDbStore;
/// use bandstand::config::CouchDbConfig;
///
/// # fn example() -> bandstand::domain::Result<()> {
/// let config = CouchDbConfig::default();
/// let store = CouchDbStore::new(config)?;
/// # Ok(())
/// # }
/// ```
pub struct CouchDbStore {
    /// Base URL of the CouchDB server, without trailing slash
    base_url: String,

    /// Database holding the instrument documents
    database: String,

    /// HTTP client for making requests
    client: Client,

    /// Connection configuration
    config: CouchDbConfig,
}

impl CouchDbStore {
    /// Create a new CouchDB store from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: CouchDbConfig) -> crate::domain::Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            BandstandError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let database = config.database.clone();

        Ok(Self {
            base_url,
            database,
            client,
            config,
        })
    }

    fn database_url(&self) -> String {
        format!("{}/{}", self.base_url, self.database)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.database, id)
    }

    /// Build authorization header value for basic auth, if configured
    fn auth_header_value(&self) -> Option<String> {
        match (&self.config.username, &self.config.password) {
            (Some(username), Some(password)) => {
                let credentials = format!("{}:{}", username, password.expose_secret());
                let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
                Some(format!("Basic {encoded}"))
            }
            _ => None,
        }
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_header_value() {
            Some(auth) => request.header(header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Map a non-success CouchDB response to a store error
    ///
    /// Keeps the status and the `reason` string intact for propagation.
    async fn read_error(response: Response) -> StoreError {
        let status = response.status().as_u16();
        let message = match response.json::<CouchErrorBody>().await {
            Ok(body) => body.message(),
            Err(_) => format!("document store returned status {status}"),
        };
        StoreError::new(status, message)
    }

    async fn read_document(response: Response) -> StoreResult<Document> {
        match response.json::<Value>().await {
            Ok(Value::Object(record)) => Ok(record),
            Ok(_) => Err(StoreError::unavailable(
                "document store returned a non-object document",
            )),
            Err(e) => Err(StoreError::unavailable(format!(
                "invalid response from document store: {e}"
            ))),
        }
    }

    async fn read_receipt(response: Response) -> StoreResult<WriteReceipt> {
        response.json::<WriteReceipt>().await.map_err(|e| {
            StoreError::unavailable(format!("invalid response from document store: {e}"))
        })
    }

    fn transport_error(e: reqwest::Error) -> StoreError {
        StoreError::unavailable(format!("failed to reach document store: {e}"))
    }
}

#[async_trait]
impl InstrumentStore for CouchDbStore {
    async fn get_instrument(&self, id: &InstrumentId) -> StoreResult<Document> {
        let url = self.document_url(id.as_str());

        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        Self::read_document(response).await
    }

    async fn add_instrument(&self, record: Document) -> StoreResult<Document> {
        let mut record = record;

        // The store owns identity: assign one unless the caller brought its
        // own, and stamp the type discriminator.
        let id = match record.get("_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                let id = format!("instrument_{}", Uuid::new_v4());
                record.insert("_id".to_string(), Value::String(id.clone()));
                id
            }
        };
        record.insert(
            "type".to_string(),
            Value::String(INSTRUMENT_TYPE.to_string()),
        );

        let url = self.document_url(&id);
        let response = self
            .with_auth(self.client.put(&url))
            .json(&record)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let receipt = Self::read_receipt(response).await?;
        tracing::debug!(id = %receipt.id, rev = %receipt.rev, "Created instrument document");

        record.insert("_rev".to_string(), Value::String(receipt.rev));
        Ok(record)
    }

    async fn put_instrument(&self, record: Document) -> StoreResult<Document> {
        let mut record = record;

        let id = record
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StoreError::new(400, "record has no _id"))?;

        let url = self.document_url(&id);
        let response = self
            .with_auth(self.client.put(&url))
            .json(&record)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let receipt = Self::read_receipt(response).await?;
        tracing::debug!(id = %receipt.id, rev = %receipt.rev, "Updated instrument document");

        record.insert("_rev".to_string(), Value::String(receipt.rev));
        Ok(record)
    }

    async fn delete_instrument(&self, id: &InstrumentId) -> StoreResult<Document> {
        // CouchDB deletes require the current revision, so read it first.
        let current = self.get_instrument(id).await?;
        let rev = current
            .get("_rev")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::unavailable("stored document has no _rev"))?
            .to_string();

        let url = self.document_url(id.as_str());
        let response = self
            .with_auth(self.client.delete(&url))
            .query(&[("rev", rev.as_str())])
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let receipt = Self::read_receipt(response).await?;
        tracing::debug!(id = %receipt.id, "Deleted instrument document");

        match serde_json::to_value(&receipt) {
            Ok(Value::Object(ack)) => Ok(ack),
            _ => Err(StoreError::unavailable(
                "failed to serialize deletion acknowledgment",
            )),
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        let response = self
            .with_auth(self.client.get(self.database_url()))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        tracing::debug!(
            base_url = %self.base_url,
            database = %self.database,
            "CouchDB health check passed"
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "couchdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn store_with(config: CouchDbConfig) -> CouchDbStore {
        CouchDbStore::new(config).unwrap()
    }

    #[test]
    fn test_document_url_formatting() {
        let config = CouchDbConfig {
            base_url: "http://localhost:5984/".to_string(),
            ..Default::default()
        };
        let store = store_with(config);

        assert_eq!(store.database_url(), "http://localhost:5984/instruments");
        assert_eq!(
            store.document_url("instrument_1"),
            "http://localhost:5984/instruments/instrument_1"
        );
    }

    #[test]
    fn test_auth_header_absent_without_credentials() {
        let store = store_with(CouchDbConfig::default());
        assert!(store.auth_header_value().is_none());
    }

    #[test]
    fn test_auth_header_encodes_credentials() {
        let config = CouchDbConfig {
            username: Some("max".to_string()),
            password: Some(secret_string("secret".to_string())),
            ..Default::default()
        };
        let store = store_with(config);

        // base64("max:secret")
        assert_eq!(
            store.auth_header_value().unwrap(),
            "Basic bWF4OnNlY3JldA=="
        );
    }
}
