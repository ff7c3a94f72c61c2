//! HTTP response capture shared by the API client.

mod http;

pub use http::{RawResponse, TransportError};
