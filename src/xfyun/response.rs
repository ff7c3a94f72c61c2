//! Response envelopes and decoding.

use crate::transport::RawResponse;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// The only code that marks a successful call. Response content is only
/// meaningful when the code equals this value.
pub const SUCCESS_CODE: &str = "000000";

/// Capability shared by every xfyun response shape.
pub trait ApiResponse {
    /// The `code` field; empty when the body carried none.
    fn code(&self) -> &str;

    /// The `descInfo` field.
    fn desc_info(&self) -> &str;

    fn is_success(&self) -> bool {
        self.code() == SUCCESS_CODE
    }

    /// Error describing a failed call.
    fn to_error(&self) -> Error {
        Error::api(self.code(), self.desc_info())
    }
}

/// Common `{code, descInfo}` envelope.
///
/// Concrete shapes embed it with `#[serde(flatten)]` and forward [`ApiResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(rename = "descInfo", default, deserialize_with = "null_as_empty")]
    pub desc_info: String,
}

// `null` reads as an empty string, so `{"code":null}` takes the missing-code path.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiResponse for ResponseEnvelope {
    fn code(&self) -> &str {
        &self.code
    }

    fn desc_info(&self) -> &str {
        &self.desc_info
    }
}

/// Envelope plus the `content` payload most endpoints return.
///
/// `content` is optional because failure responses usually omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse<T> {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    pub content: Option<T>,
}

impl<T> ApiResponse for ContentResponse<T> {
    fn code(&self) -> &str {
        &self.envelope.code
    }

    fn desc_info(&self) -> &str {
        &self.envelope.desc_info
    }
}

/// Decode `raw` into `T`, failing unless the code is [`SUCCESS_CODE`].
///
/// An undecodable body and a body without a code are both reported from the raw
/// response, not from the JSON parser; the parser error is only logged.
pub fn decode_response<T>(raw: &RawResponse) -> Result<T>
where
    T: DeserializeOwned + ApiResponse,
{
    let body: T = match serde_json::from_slice(&raw.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(status = raw.status, error = %e, "xfyun response json decode failed");
            return Err(raw.undecodable());
        }
    };
    if body.code().is_empty() {
        return Err(raw.missing_code());
    }
    if !body.is_success() {
        tracing::warn!(
            code = body.code(),
            desc_info = body.desc_info(),
            "xfyun api call failed"
        );
        return Err(body.to_error());
    }
    Ok(body)
}

impl RawResponse {
    /// See [`decode_response`].
    pub fn decode<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + ApiResponse,
    {
        decode_response(self)
    }
}
