//! CouchDB store adapter
//!
//! REST client for a CouchDB-compatible document store. Status codes and
//! `reason` strings from the store are preserved in [`StoreError`] values
//! so the HTTP layer can propagate them verbatim.
//!
//! [`StoreError`]: crate::domain::StoreError

pub mod client;
pub mod models;

pub use client::CouchDbStore;
pub use models::WriteReceipt;
