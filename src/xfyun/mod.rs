//! iFlytek open platform (xfyun) API helpers.
//!
//! Two concerns only: signing outbound requests and validating the
//! `{code, descInfo}` envelope every endpoint answers with. Sending the request
//! is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use svc_components::xfyun::{ResponseEnvelope, XfyunClient};
//! use svc_components::transport::RawResponse;
//!
//! let client = XfyunClient::from_json(r#"{"appid":"595f23df","lfAsrSecret":"d9f4aa7ea6d94faca62cd88a28fd5234"}"#)?;
//! let params = client.sign_at(client.lfasr_secret(), 1512041814)?;
//! assert_eq!(params.signa, "IrrzsJeOFk1NGfJHW6SkHUoN9CU=");
//!
//! let raw = RawResponse::new(200, r#"{"code":"000000","descInfo":"success"}"#);
//! let envelope: ResponseEnvelope = raw.decode()?;
//! assert_eq!(envelope.desc_info, "success");
//! # Ok::<(), svc_components::Error>(())
//! ```
//!
//! Documentation: <https://www.xfyun.cn/doc/>

mod client;
mod response;
mod sign;

pub use client::{XfyunClient, ENV_APP_ID, ENV_LFASR_SECRET};
pub use response::{decode_response, ApiResponse, ContentResponse, ResponseEnvelope, SUCCESS_CODE};
pub use sign::{signature, unix_timestamp, SignedParams};
