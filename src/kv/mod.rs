//! Key-value pass-through over a redis client.
//!
//! Exposes `INCR`, `DECR` and `GET` on one configured server. Protocol, pooling,
//! timeouts and retries all belong to the `redis` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use svc_components::kv::KvStore;
//!
//! #[tokio::main]
//! async fn main() -> svc_components::Result<()> {
//!     let store = KvStore::new("")?; // 127.0.0.1:6379
//!     let hits = store.incr("hits").await?;
//!     match store.get("greeting").await {
//!         Ok(v) => println!("{hits} {v}"),
//!         Err(e) if e.is_nil() => println!("{hits} <unset>"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::{KvBackend, KvStore, DEFAULT_ADDR, ENV_ADDR};
