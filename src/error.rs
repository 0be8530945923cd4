use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpretError {
    /// Connection, DNS or timeout failure before a response arrived
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the API
    #[error("Request failed with status {status}: {body}")]
    RequestFailure { status: StatusCode, body: String },

    /// Response body was not JSON or lacked `choices[0].message.content`
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl InterpretError {
    pub fn kind(&self) -> &'static str {
        match self {
            InterpretError::TransportFailure(_) => "transport_failure",
            InterpretError::RequestFailure { .. } => "request_failure",
            InterpretError::MalformedResponse(_) => "malformed_response",
            InterpretError::ConfigurationError(_) => "configuration_error",
        }
    }
}
