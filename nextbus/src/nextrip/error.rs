//! NexTrip client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from fetching NexTrip collections.
#[derive(Debug)]
pub enum NexTripError {
    /// Transport failure: connect, TLS, or the per-request timeout
    Http(reqwest::Error),

    /// Body was not the expected JSON. Metro Transit's gateway answers some
    /// failures with an HTML page and a 200, so the start of the body is kept.
    Json {
        message: String,
        body: Option<String>,
    },

    /// Non-success status, with whatever body came back
    ApiError { status: u16, message: String },

    /// 429 from the gateway
    RateLimited,

    /// A catalog row the domain can't represent (an empty id)
    Conversion(ConversionError),

    /// Mock fixture could not be read or decoded
    Fixture(String),
}

impl fmt::Display for NexTripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NexTripError::Http(e) => write!(f, "HTTP error: {e}"),
            NexTripError::Json { message, body } => {
                write!(f, "unexpected NexTrip response: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            NexTripError::ApiError { status, message } => {
                write!(f, "NexTrip returned {status}: {message}")
            }
            NexTripError::RateLimited => write!(f, "rate limited by NexTrip"),
            NexTripError::Conversion(e) => write!(f, "unusable NexTrip data: {e}"),
            NexTripError::Fixture(msg) => write!(f, "mock fixture error: {msg}"),
        }
    }
}

impl std::error::Error for NexTripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NexTripError::Http(e) => Some(e),
            NexTripError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NexTripError {
    fn from(err: reqwest::Error) -> Self {
        NexTripError::Http(err)
    }
}

impl From<ConversionError> for NexTripError {
    fn from(err: ConversionError) -> Self {
        NexTripError::Conversion(err)
    }
}
