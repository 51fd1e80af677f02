use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// **An application-specific error type**
///
/// Every failure a probe can run into while talking to the server.
/// None of them is fatal to a run: the caller reports it and moves on.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The server could not be reached at all (refused, unreachable).
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport-level failure: timeouts, DNS, broken bodies.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error {status}")]
    Status { status: StatusCode, body: String },

    #[error("expected a list, but got {observed}")]
    UnexpectedShape { observed: &'static str },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            let url = err.url().map(|url| url.to_string()).unwrap_or_default();
            ProbeError::Connect { url, source: err }
        } else {
            ProbeError::Transport(err)
        }
    }
}

/// **The JSON type name of a value, as reported in shape mismatches**
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
