use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Pulls a Firestore typed value out of a document's `fields` map, e.g.
/// `typed_value(fields, "userId", "stringValue")`. Empty strings count as absent.
pub fn typed_value<'a>(fields: &'a Map<String, Value>, field: &str, kind: &str) -> Option<&'a str> {
    let element = fields.get(field)?.get(kind)?.as_str()?;
    if element.is_empty() {
        return None;
    }
    Some(element)
}

pub fn timestamp_from_value(fields: &Map<String, Value>, field: &str) -> Option<DateTime<Utc>> {
    let element = typed_value(fields, field, "timestampValue")?;
    DateTime::parse_from_rfc3339(element)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// The `error.message` of a Google API error body, if the body is one.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value["error"]["message"].as_str().map(String::from)
}
