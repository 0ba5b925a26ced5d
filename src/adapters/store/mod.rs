//! Store abstraction layer
//!
//! This module provides a trait-based abstraction over the document store,
//! allowing the service to run against CouchDB or an in-memory backend.

pub mod factory;
pub mod traits;

pub use factory::create_store;
pub use traits::{InstrumentStore, StoreResult};
