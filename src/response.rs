use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Return value of an invocation, shaped for API gateway proxies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok(message: &str) -> Self {
        Self::with_status(200, message)
    }

    pub fn error(message: &str) -> Self {
        Self::with_status(500, message)
    }

    // The body carries the message as a JSON string literal.
    fn with_status(status_code: u16, message: &str) -> Self {
        Response {
            status_code,
            body: Value::from(message).to_string(),
        }
    }
}
