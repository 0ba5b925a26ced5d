//! Store factory
//!
//! This module provides a factory function to create the configured store
//! backend.

use crate::adapters::couchdb::CouchDbStore;
use crate::adapters::memory::MemoryStore;
use crate::adapters::store::traits::InstrumentStore;
use crate::config::{BandstandConfig, StoreBackend};
use crate::domain::Result;
use std::sync::Arc;

/// Create an instrument store based on the configuration
///
/// This factory function examines `store_backend` in the configuration and
/// creates the appropriate adapter.
///
/// # Arguments
///
/// * `config` - The Bandstand configuration
///
/// # Returns
///
/// Returns an Arc-wrapped trait object that implements InstrumentStore
///
/// # Errors
///
/// Returns an error if the store client cannot be created
pub fn create_store(config: &BandstandConfig) -> Result<Arc<dyn InstrumentStore>> {
    match config.store_backend {
        StoreBackend::Couchdb => {
            tracing::info!(
                base_url = %config.couchdb.base_url,
                database = %config.couchdb.database,
                "Creating CouchDB store"
            );
            let store = CouchDbStore::new(config.couchdb.clone())?;
            Ok(Arc::new(store) as Arc<dyn InstrumentStore>)
        }
        StoreBackend::Memory => {
            tracing::info!("Creating in-memory store");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn InstrumentStore>)
        }
    }
}
