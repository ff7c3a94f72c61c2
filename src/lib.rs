//! # svc-components
//!
//! Thin clients around two external services.
//!
//! ## Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`xfyun`] | Credentials, request signing and response validation for the iFlytek (xfyun) open API |
//! | [`kv`] | `INCR` / `DECR` / `GET` pass-through to a redis server |
//! | [`transport`] | Captured HTTP responses fed to the xfyun decoder |
//!
//! The two components share nothing but the [`Error`] type. Neither keeps
//! process-wide state: build an [`xfyun::XfyunClient`] or a [`kv::KvStore`] and
//! hand it to whoever needs it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svc_components::kv::KvStore;
//! use svc_components::xfyun::XfyunClient;
//!
//! #[tokio::main]
//! async fn main() -> svc_components::Result<()> {
//!     let xfyun = XfyunClient::from_env()?;
//!     let params = xfyun.sign_lfasr()?;
//!     println!("signa={} ts={}", params.signa, params.ts);
//!
//!     let store = KvStore::from_env()?;
//!     store.incr("signed_requests").await?;
//!     Ok(())
//! }
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod kv;
pub mod transport;
pub mod xfyun;

pub use kv::{KvBackend, KvStore, StoreError};
pub use xfyun::{ApiResponse, ResponseEnvelope, SignedParams, XfyunClient};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
