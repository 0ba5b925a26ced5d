//! Request-record validation and sanitization
//!
//! The only real logic this service owns: the required-field check with its
//! stable failure message, and the allow-list projection applied to write
//! bodies before they reach the store.
//!
//! # Example
//!
//! ```
//! use bandstand::core::validation::{find_missing_fields, format_missing_fields_message};
//! use bandstand::domain::CREATE_REQUIRED_FIELDS;
//! use serde_json::json;
//!
//! let body = json!({"name": "Guitar"});
//! let body = body.as_object().unwrap();
//!
//! let missing = find_missing_fields(&CREATE_REQUIRED_FIELDS, body);
//! assert_eq!(
//!     format_missing_fields_message(&missing),
//!     "missing required field(s): category, group, retailPrice, manufacturer"
//! );
//! ```

pub mod required;
pub mod sanitize;

pub use required::{find_missing_fields, format_missing_fields_message};
pub use sanitize::pick_allowed;
