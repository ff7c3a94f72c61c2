//! xfyun credentials record and signing entry points.

use super::sign::{signature, unix_timestamp, SignedParams};
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable holding the application id.
pub const ENV_APP_ID: &str = "XfyunAppid";
/// Environment variable holding the long-form transcription (lfasr) secret.
pub const ENV_LFASR_SECRET: &str = "XfyunLfAsrSecret";

/// Application credentials for the xfyun open API.
///
/// Each service has its own secret; only the transcription secret is modelled.
/// Values are owned by the caller: share a client by reference (or clone it)
/// instead of relying on process-wide state.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XfyunClient {
    #[serde(rename = "appid", default)]
    app_id: String,
    #[serde(rename = "lfAsrSecret", default)]
    lfasr_secret: String,
}

impl XfyunClient {
    /// Credentials with an application id and no secrets.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            lfasr_secret: String::new(),
        }
    }

    /// Parse a JSON config such as `{"appid":"...","lfAsrSecret":"..."}`.
    ///
    /// Only the JSON shape is checked; empty or bogus values are accepted.
    pub fn from_json(cfg: &str) -> Result<Self> {
        Ok(serde_json::from_str(cfg)?)
    }

    /// Read `XfyunAppid` and `XfyunLfAsrSecret` from the environment.
    ///
    /// Both must be present and non-empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name).filter(|v| !v.is_empty()).ok_or_else(|| {
                tracing::warn!(variable = name, "xfyun credential variable is not set");
                Error::configuration_with_context(
                    "missing environment variable",
                    ErrorContext::new()
                        .with_field_path(name)
                        .with_source("xfyun"),
                )
            })
        };
        let mut client = Self::new(require(ENV_APP_ID)?);
        client.set_lfasr_secret(require(ENV_LFASR_SECRET)?);
        Ok(client)
    }

    pub fn set_lfasr_secret(&mut self, secret: impl Into<String>) {
        self.lfasr_secret = secret.into();
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn lfasr_secret(&self) -> &str {
        &self.lfasr_secret
    }

    /// Sign a request with `secret` at the current time.
    pub fn sign(&self, secret: &str) -> Result<SignedParams> {
        self.sign_at(secret, unix_timestamp())
    }

    /// Sign a request with `secret` at Unix time `ts` (seconds).
    pub fn sign_at(&self, secret: &str, ts: u64) -> Result<SignedParams> {
        let ts = ts.to_string();
        tracing::debug!(app_id = %self.app_id, ts = %ts, "signing xfyun request");
        Ok(SignedParams {
            signa: signature(&self.app_id, &ts, secret)?,
            app_id: self.app_id.clone(),
            ts,
        })
    }

    /// Sign with the stored transcription secret.
    pub fn sign_lfasr(&self) -> Result<SignedParams> {
        if self.lfasr_secret.is_empty() {
            return Err(Error::configuration_with_context(
                "transcription secret is not set",
                ErrorContext::new()
                    .with_field_path("lfAsrSecret")
                    .with_source("xfyun"),
            ));
        }
        self.sign(&self.lfasr_secret)
    }
}

impl fmt::Debug for XfyunClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.lfasr_secret.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("XfyunClient")
            .field("app_id", &self.app_id)
            .field("lfasr_secret", &secret)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn from_json_reads_both_fields() {
        let client = XfyunClient::from_json(r#"{"appid":"X","lfAsrSecret":"Y"}"#).unwrap();
        assert_eq!(client.app_id(), "X");
        assert_eq!(client.lfasr_secret(), "Y");
    }

    #[test]
    fn from_json_tolerates_missing_fields() {
        let client = XfyunClient::from_json(r#"{"appid":"X"}"#).unwrap();
        assert_eq!(client.app_id(), "X");
        assert_eq!(client.lfasr_secret(), "");
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = XfyunClient::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn new_then_set_secret() {
        let mut client = XfyunClient::new("app");
        assert_eq!(client.lfasr_secret(), "");
        client.set_lfasr_secret("s1");
        client.set_lfasr_secret("s2");
        assert_eq!(client.lfasr_secret(), "s2");
    }

    #[test]
    fn lookup_requires_both_variables() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_APP_ID, "app"), (ENV_LFASR_SECRET, "secret")]);
        let client = XfyunClient::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(client.app_id(), "app");
        assert_eq!(client.lfasr_secret(), "secret");

        let only_id: HashMap<&str, &str> = HashMap::from([(ENV_APP_ID, "app")]);
        let err = XfyunClient::from_lookup(|k| only_id.get(k).map(|v| v.to_string())).unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some(ENV_LFASR_SECRET)
        );

        let empty_id: HashMap<&str, &str> =
            HashMap::from([(ENV_APP_ID, ""), (ENV_LFASR_SECRET, "secret")]);
        let err = XfyunClient::from_lookup(|k| empty_id.get(k).map(|v| v.to_string())).unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some(ENV_APP_ID)
        );
    }

    #[test]
    fn sign_within_same_second_is_stable() {
        let client = XfyunClient::new("app");
        let a = client.sign_at("secret", 1_700_000_000).unwrap();
        let b = client.sign_at("secret", 1_700_000_000).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ts, "1700000000");
        assert_eq!(a.app_id, "app");
        assert_eq!(a.signa, "C2IKAibSlEu0G2LomeqE09PDk/I=");

        let later = client.sign_at("secret", 1_700_000_001).unwrap();
        assert_ne!(later.ts, a.ts);
        assert_ne!(later.signa, a.signa);
    }

    #[test]
    fn sign_uses_current_clock() {
        let client = XfyunClient::new("app");
        let before = unix_timestamp();
        let params = client.sign("secret").unwrap();
        let ts: u64 = params.ts.parse().unwrap();
        assert!(ts >= before && ts <= unix_timestamp());
        assert_eq!(params.signa, signature("app", &params.ts, "secret").unwrap());
    }

    #[test]
    fn sign_lfasr_needs_secret() {
        let mut client = XfyunClient::new("app");
        assert!(matches!(
            client.sign_lfasr(),
            Err(Error::Configuration { .. })
        ));
        client.set_lfasr_secret("secret");
        let params = client.sign_lfasr().unwrap();
        assert_eq!(params.signa, signature("app", &params.ts, "secret").unwrap());
    }

    #[test]
    fn debug_redacts_secret() {
        let mut client = XfyunClient::new("app");
        client.set_lfasr_secret("top-secret");
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("app"));
        assert!(!rendered.contains("top-secret"));
    }
}
