//! Request signing for the xfyun open API.

use crate::{Error, ErrorContext, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha1 = Hmac<Sha1>;

/// Per-request authentication parameters, merged into the outbound query.
///
/// Serializes with the wire names `signa`, `appId` and `ts`, so it can be passed
/// straight to `reqwest::RequestBuilder::query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedParams {
    pub signa: String,
    #[serde(rename = "appId")]
    pub app_id: String,
    pub ts: String,
}

impl SignedParams {
    pub fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            ("signa".to_string(), self.signa.clone()),
            ("appId".to_string(), self.app_id.clone()),
            ("ts".to_string(), self.ts.clone()),
        ])
    }
}

/// `base64(HMAC-SHA1(secret, hex(MD5(app_id + ts))))`
pub fn signature(app_id: &str, ts: &str, secret: &str) -> Result<String> {
    let base = hex::encode(Md5::digest(format!("{}{}", app_id, ts).as_bytes()));
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes()).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid signing key: {}", e),
            ErrorContext::new().with_source("xfyun"),
        )
    })?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Current Unix time in whole seconds.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
