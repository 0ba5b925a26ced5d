//! In-memory store adapter
//!
//! HashMap-backed [`InstrumentStore`] with CouchDB-like semantics: the
//! store assigns `_id` and `_rev`, a read of a missing document fails with
//! 404 "missing", and a write against a stale `_rev` fails with 409. Backs
//! the `memory` config target and the HTTP integration tests.

use crate::adapters::store::traits::{InstrumentStore, StoreResult};
use crate::domain::{Document, InstrumentId, StoreError, INSTRUMENT_TYPE};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory instrument store
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Next revision marker in the `{generation}-{suffix}` shape
    fn next_rev(current: Option<&str>) -> String {
        let generation = current
            .and_then(|rev| rev.split('-').next())
            .and_then(|gen| gen.parse::<u64>().ok())
            .unwrap_or(0)
            + 1;
        format!("{}-{}", generation, Uuid::new_v4().simple())
    }

    fn not_found() -> StoreError {
        StoreError::new(404, "missing")
    }

    fn conflict() -> StoreError {
        StoreError::new(409, "Document update conflict.")
    }
}

#[async_trait]
impl InstrumentStore for MemoryStore {
    async fn get_instrument(&self, id: &InstrumentId) -> StoreResult<Document> {
        let documents = self.documents.read().await;
        documents
            .get(id.as_str())
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn add_instrument(&self, record: Document) -> StoreResult<Document> {
        let mut record = record;

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
        record.insert("_rev".to_string(), Value::String(Self::next_rev(None)));

        let mut documents = self.documents.write().await;
        if documents.contains_key(&id) {
            return Err(Self::conflict());
        }
        documents.insert(id, record.clone());

        Ok(record)
    }

    async fn put_instrument(&self, record: Document) -> StoreResult<Document> {
        let mut record = record;

        let id = record
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StoreError::new(400, "record has no _id"))?;

        let mut documents = self.documents.write().await;
        let existing = documents.get(&id).ok_or_else(Self::not_found)?;

        let existing_rev = existing.get("_rev").and_then(Value::as_str);
        let offered_rev = record.get("_rev").and_then(Value::as_str);
        if existing_rev != offered_rev {
            return Err(Self::conflict());
        }

        record.insert(
            "_rev".to_string(),
            Value::String(Self::next_rev(existing_rev)),
        );
        documents.insert(id, record.clone());

        Ok(record)
    }

    async fn delete_instrument(&self, id: &InstrumentId) -> StoreResult<Document> {
        let mut documents = self.documents.write().await;
        let removed = documents.remove(id.as_str()).ok_or_else(Self::not_found)?;

        let tombstone_rev = Self::next_rev(removed.get("_rev").and_then(Value::as_str));

        let mut ack = Document::new();
        ack.insert("ok".to_string(), Value::Bool(true));
        ack.insert("id".to_string(), Value::String(id.as_str().to_string()));
        ack.insert("rev".to_string(), Value::String(tombstone_rev));
        Ok(ack)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
