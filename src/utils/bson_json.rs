//! Rendering of stored BSON documents as JSON for API responses.
//!
//! ObjectIds become 24-char hex strings and datetimes become RFC 3339
//! strings, at any nesting depth. Everything else uses relaxed Extended JSON,
//! so plain numbers, strings, and nulls come out as ordinary JSON values.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Converts a stored document into a JSON object.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

/// Converts a single BSON value into JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            // Outside the RFC 3339 year range
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
