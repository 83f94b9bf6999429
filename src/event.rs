use serde_json::{json, Value};

const BODY: &str = "body";
const RAW_BODY: &str = "raw_body";

/// Unwraps the webhook body of an API gateway envelope.
///
/// Events without a usable `body` are returned as they are. A body that is
/// not valid JSON text is kept verbatim under `raw_body`.
pub fn normalize_payload(event: &Value) -> Value {
    match event.as_object().and_then(|object| object.get(BODY)) {
        Some(body) if is_truthy(body) => decode_body(body),
        _ => event.clone(),
    }
}

fn decode_body(body: &Value) -> Value {
    body.as_str()
        .and_then(|text| serde_json::from_str(text).ok())
        .unwrap_or_else(|| json!({ RAW_BODY: body }))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}
