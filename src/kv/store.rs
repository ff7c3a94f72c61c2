//! Redis-backed counter and string store.

use super::error::StoreError;
use crate::Result;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tokio::sync::OnceCell;

/// Address used when none is given.
pub const DEFAULT_ADDR: &str = "127.0.0.1:6379";
/// Environment variable read by [`KvStore::from_env`].
pub const ENV_ADDR: &str = "REDIS_ADDR";

/// The three store commands, as a seam for substituting the backend.
#[async_trait]
pub trait KvBackend: Send + Sync {
    async fn incr(&self, key: &str) -> Result<i64>;
    async fn decr(&self, key: &str) -> Result<i64>;
    async fn get(&self, key: &str) -> Result<String>;
}

/// Handle to a single redis server.
///
/// Construction performs no I/O; the multiplexed connection is opened on the
/// first command and shared by every later one. Atomicity and implicit key
/// creation are the server's, not this type's.
pub struct KvStore {
    addr: String,
    client: redis::Client,
    conn: OnceCell<MultiplexedConnection>,
}

impl KvStore {
    /// Configure a handle for `addr` (`host:port` or a `redis://` URL).
    ///
    /// An empty address means [`DEFAULT_ADDR`].
    pub fn new(addr: &str) -> Result<Self> {
        let addr = if addr.trim().is_empty() {
            DEFAULT_ADDR.to_string()
        } else {
            addr.trim().to_string()
        };
        let client = redis::Client::open(connection_url(&addr).as_str()).map_err(|e| {
            StoreError::InvalidAddress {
                addr: addr.clone(),
                reason: e.to_string(),
            }
        })?;
        tracing::info!(addr = %addr, "kv store configured");
        Ok(Self {
            addr,
            client,
            conn: OnceCell::new(),
        })
    }

    /// Configure from `REDIS_ADDR`, falling back to [`DEFAULT_ADDR`].
    pub fn from_env() -> Result<Self> {
        Self::new(&std::env::var(ENV_ADDR).unwrap_or_default())
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Whether the first command has already connected.
    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let conn = self.client.get_multiplexed_async_connection().await?;
                tracing::info!(addr = %self.addr, "kv store connected");
                Ok::<_, StoreError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }

    /// `INCR key`: add one, creating the key at 0 first if needed.
    pub async fn incr(&self, key: &str) -> Result<i64> {
        self.counter("INCR", key).await
    }

    /// `DECR key`: subtract one, creating the key at 0 first if needed.
    pub async fn decr(&self, key: &str) -> Result<i64> {
        self.counter("DECR", key).await
    }

    async fn counter(&self, command: &str, key: &str) -> Result<i64> {
        let mut conn = self.connection().await?;
        tracing::debug!(command, key, "kv command");
        let value: i64 = redis::cmd(command)
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::from)?;
        Ok(value)
    }

    /// `GET key`; a missing key is [`StoreError::Nil`].
    pub async fn get(&self, key: &str) -> Result<String> {
        let mut conn = self.connection().await?;
        tracing::debug!(command = "GET", key, "kv command");
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::from)?;
        value.ok_or_else(|| StoreError::Nil.into())
    }
}

#[async_trait]
impl KvBackend for KvStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        KvStore::incr(self, key).await
    }

    async fn decr(&self, key: &str) -> Result<i64> {
        KvStore::decr(self, key).await
    }

    async fn get(&self, key: &str) -> Result<String> {
        KvStore::get(self, key).await
    }
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore")
            .field("addr", &self.addr)
            .field("connected", &self.is_connected())
            .finish()
    }
}

fn connection_url(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("redis://{}/", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn host_port_becomes_url() {
        assert_eq!(connection_url("10.0.0.1:6380"), "redis://10.0.0.1:6380/");
        assert_eq!(connection_url("rediss://cache:6380/2"), "rediss://cache:6380/2");
    }

    #[test]
    fn empty_address_uses_default() {
        let store = KvStore::new("").unwrap();
        assert_eq!(store.addr(), DEFAULT_ADDR);
        assert!(!store.is_connected());
    }

    #[test]
    fn invalid_address_is_rejected() {
        let err = KvStore::new("localhost:notaport").unwrap_err();
        assert!(matches!(
            err,
            Error::Store(StoreError::InvalidAddress { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_server_passes_client_error_through() {
        let store = KvStore::new("127.0.0.1:1").unwrap();
        let err = store.incr("counter").await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Redis(_))));
        assert!(!store.is_connected());
    }
}
