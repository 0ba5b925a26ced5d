//! CRUD request handlers
//!
//! One stateless handler per route. Each write handler runs the same
//! sequence: parse the body, check required fields, project onto the
//! allow-list, then call the store. A validation failure returns before any
//! store call is made — invalid data never reaches the collaborator.

use crate::core::validation::{find_missing_fields, format_missing_fields_message, pick_allowed};
use crate::domain::{
    Document, InstrumentId, CREATE_ALLOWED_FIELDS, CREATE_REQUIRED_FIELDS, UPDATE_ALLOWED_FIELDS,
    UPDATE_REQUIRED_FIELDS,
};
use crate::http::error::HttpError;
use crate::http::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

/// `GET /`
pub async fn welcome() -> &'static str {
    "Welcome to the Instruments api."
}

/// `GET /instruments/:instrumentID`
pub async fn get_instrument(
    State(state): State<AppState>,
    Path(instrument_id): Path<String>,
) -> Result<Json<Value>, HttpError> {
    let id = InstrumentId::new(instrument_id).map_err(HttpError::bad_request)?;

    let record = state.store.get_instrument(&id).await?;
    Ok(Json(Value::Object(record)))
}

/// `POST /instruments`
pub async fn create_instrument(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), HttpError> {
    let record = into_record(body);

    if record.is_empty() {
        return Err(HttpError::bad_request("missing instrument in body."));
    }

    let missing = find_missing_fields(&CREATE_REQUIRED_FIELDS, &record);
    if !missing.is_empty() {
        return Err(HttpError::bad_request(format_missing_fields_message(
            &missing,
        )));
    }

    let sanitized = pick_allowed(&CREATE_ALLOWED_FIELDS, &record);
    let created = state.store.add_instrument(sanitized).await?;

    Ok((StatusCode::CREATED, Json(Value::Object(created))))
}

/// `PUT /instruments/:instrumentID`
pub async fn update_instrument(
    State(state): State<AppState>,
    Path(instrument_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), HttpError> {
    // The record's own `_id` addresses the document; the path segment only
    // has to be well-formed.
    InstrumentId::new(instrument_id).map_err(HttpError::bad_request)?;

    let record = into_record(body);

    let missing = find_missing_fields(&UPDATE_REQUIRED_FIELDS, &record);
    if !missing.is_empty() {
        return Err(HttpError::bad_request(format_missing_fields_message(
            &missing,
        )));
    }

    let sanitized = pick_allowed(&UPDATE_ALLOWED_FIELDS, &record);
    let updated = state.store.put_instrument(sanitized).await?;

    Ok((StatusCode::CREATED, Json(Value::Object(updated))))
}

/// `DELETE /instruments/:instrumentID`
pub async fn delete_instrument(
    State(state): State<AppState>,
    Path(instrument_id): Path<String>,
) -> Result<Json<Value>, HttpError> {
    let id = InstrumentId::new(instrument_id).map_err(HttpError::bad_request)?;

    let result = state.store.delete_instrument(&id).await?;
    Ok(Json(Value::Object(result)))
}

/// Narrow an optional JSON body to a record
///
/// Absent bodies, unparseable bodies, and non-object values all collapse to
/// the empty record, which the caller's emptiness check then rejects.
fn into_record(body: Option<Json<Value>>) -> Document {
    match body {
        Some(Json(Value::Object(record))) => record,
        _ => Document::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_record_object() {
        let record = into_record(Some(Json(json!({"name": "Guitar"}))));
        assert_eq!(record["name"], json!("Guitar"));
    }

    #[test]
    fn test_into_record_non_object_collapses() {
        assert!(into_record(Some(Json(json!(["not", "a", "record"])))).is_empty());
        assert!(into_record(Some(Json(json!("nope")))).is_empty());
        assert!(into_record(None).is_empty());
    }
}
