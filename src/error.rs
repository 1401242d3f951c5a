// @file: okx_adapter/src/error.rs
// @description: Error taxonomy for the transport boundary and the adapter.
// @author: LAS.

use thiserror::Error;


//
// TRANSPORT ERRORS
//

// Produced by transports only. The adapter never reinterprets these.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API Error {0}: {1}")]
    Status(u16, String),

    #[error("JSON Parse Error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}


//
// ADAPTER ERRORS
//

#[derive(Debug, Error)]
pub enum AdapterError {
    // The provider contract itself is broken (missing top-level field, wrong container).
    #[error("Response is invalid: {0}")]
    InvalidResponse(String),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
