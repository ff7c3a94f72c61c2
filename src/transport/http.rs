use crate::error::body_excerpt;
use crate::{Error, Result};
use bytes::Bytes;

/// A fully read HTTP response: status code plus the raw body bytes.
///
/// Decoding works on this instead of on `reqwest::Response` so the body can be
/// inspected more than once (once for decoding, again for error reporting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Drain a `reqwest::Response` into memory.
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        Ok(Self { status, body })
    }

    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The error reported when the body is not a decodable envelope.
    pub fn undecodable(&self) -> Error {
        Error::UndecodableResponse {
            status: self.status,
            body: body_excerpt(&self.body),
        }
    }

    /// The error reported when the envelope decoded without a code.
    pub fn missing_code(&self) -> Error {
        Error::MissingResponseCode {
            status: self.status,
            body: body_excerpt(&self.body),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
