//! Instrument record model and per-operation field lists
//!
//! Instrument records travel through the service as untyped JSON documents;
//! the store owns identity (`_id`), revision (`_rev`), and the `type`
//! discriminator. This module pins down the field vocabulary: which fields a
//! request must carry for each operation, and which fields survive
//! sanitization on the way to the store.

use serde_json::Value;

/// An instrument record as it moves between the HTTP layer and the store
///
/// Inbound bodies are untyped JSON objects; they are only narrowed (via the
/// required-field check and the allow-list projection) after validation
/// passes, so no partially-validated data escapes a handler.
pub type Document = serde_json::Map<String, Value>;

/// Document `type` discriminator stamped on every stored instrument
pub const INSTRUMENT_TYPE: &str = "instrument";

/// Fields a creation request must carry, in reporting order
///
/// `retailPrice` is a number and zero is a valid present value.
pub const CREATE_REQUIRED_FIELDS: [&str; 5] =
    ["name", "category", "group", "retailPrice", "manufacturer"];

/// Fields an update request must carry, in reporting order
///
/// All three are store-assigned: an update without them cannot be matched
/// to an existing revision.
pub const UPDATE_REQUIRED_FIELDS: [&str; 3] = ["_id", "_rev", "type"];

/// Fields persisted on create; everything else in the body is dropped
pub const CREATE_ALLOWED_FIELDS: [&str; 5] =
    ["name", "category", "group", "retailPrice", "manufacturer"];

/// Fields persisted on update: store identity plus the instrument fields
///
/// The identity triple alone would truncate an update to a bare shell, so
/// the canonical instrument fields are carried through as well.
pub const UPDATE_ALLOWED_FIELDS: [&str; 8] = [
    "_id",
    "_rev",
    "type",
    "name",
    "category",
    "group",
    "retailPrice",
    "manufacturer",
];
