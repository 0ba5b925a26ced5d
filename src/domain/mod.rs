//! Domain models and types for Bandstand.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Instrument record model** and per-operation field lists
//!   ([`Document`], [`CREATE_REQUIRED_FIELDS`], [`UPDATE_REQUIRED_FIELDS`])
//! - **Strongly-typed identifier** ([`InstrumentId`])
//! - **Error types** ([`BandstandError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, BandstandError>`]:
//!
//! ```rust
//! use bandstand::domain::{BandstandError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(BandstandError::Validation("bad input".to_string()))
//! }
//! ```
//!
//! Store failures keep their upstream `{status, message}` pair intact in
//! [`StoreError`] so the HTTP layer can propagate them verbatim.

pub mod errors;
pub mod ids;
pub mod instrument;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{BandstandError, StoreError};
pub use ids::InstrumentId;
pub use instrument::{
    Document, CREATE_ALLOWED_FIELDS, CREATE_REQUIRED_FIELDS, INSTRUMENT_TYPE,
    UPDATE_ALLOWED_FIELDS, UPDATE_REQUIRED_FIELDS,
};
pub use result::Result;
