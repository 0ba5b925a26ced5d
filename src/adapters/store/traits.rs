//! Store abstraction traits
//!
//! This module defines the trait that document-store adapters must
//! implement. The service orchestrates the store but does not implement
//! persistence itself; each operation completes with either a document or
//! a [`StoreError`] carrying the status and message the store reported.

use crate::domain::{Document, InstrumentId, StoreError};
use async_trait::async_trait;

/// Result of a store operation
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Document-store trait for instrument records
///
/// Implementations own record identity (`_id`), revision (`_rev`), and the
/// `type` discriminator. Callers hand over sanitized records and propagate
/// failures verbatim; no retries happen at this layer.
#[async_trait]
pub trait InstrumentStore: Send + Sync {
    /// Fetch an instrument record by identity
    ///
    /// # Errors
    ///
    /// Fails with the store's status and message when the record cannot be
    /// read (404 when it does not exist).
    async fn get_instrument(&self, id: &InstrumentId) -> StoreResult<Document>;

    /// Persist a new instrument record
    ///
    /// The store assigns `_id` (when the record carries none), `_rev`, and
    /// the `type` discriminator.
    ///
    /// # Returns
    ///
    /// The created record including its assigned identity fields.
    async fn add_instrument(&self, record: Document) -> StoreResult<Document>;

    /// Replace an existing instrument record
    ///
    /// The record must carry `_id` and the `_rev` of the revision it
    /// replaces; a stale `_rev` fails with the store's conflict status.
    ///
    /// # Returns
    ///
    /// The updated record with its new `_rev`.
    async fn put_instrument(&self, record: Document) -> StoreResult<Document>;

    /// Delete an instrument record by identity
    ///
    /// # Returns
    ///
    /// The store's deletion acknowledgment.
    async fn delete_instrument(&self, id: &InstrumentId) -> StoreResult<Document>;

    /// Verify that the store is reachable
    ///
    /// Used by the `status` command; not exposed over the CRUD routes.
    async fn health_check(&self) -> StoreResult<()>;

    /// Name of the backend, for logging and status output
    fn backend_name(&self) -> &'static str;
}
