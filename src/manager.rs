//! Lazily-opened connection to the store.

use crate::config::Config;
use crate::error::{KvError, KvResult};
use redis::aio::MultiplexedConnection;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Owns at most one connection to the store, opened on first use.
///
/// Concurrent first callers wait on the same initialization, so the
/// connection is opened exactly once. A failed attempt leaves the manager
/// unconnected and the next caller tries again.
pub struct ConnectionManager {
    config: Config,
    conn: OnceCell<MultiplexedConnection>,
    opened: AtomicU64,
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("addr", &self.config.addr())
            .field("connected", &self.is_connected())
            .field("opened", &self.connections_opened())
            .finish()
    }
}

impl ConnectionManager {
    pub fn new(config: Config) -> Self {
        ConnectionManager {
            config,
            conn: OnceCell::new(),
            opened: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    /// Number of connections this manager has opened to the store.
    pub fn connections_opened(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }

    /// Return the handle, connecting (and authenticating) first if needed.
    pub async fn ensure_connected(&self) -> KvResult<MultiplexedConnection> {
        let conn = self.conn.get_or_try_init(|| self.connect()).await?;
        Ok(conn.clone())
    }

    async fn connect(&self) -> KvResult<MultiplexedConnection> {
        let addr = self.config.addr();
        debug!("Connecting to {addr}");

        let connection_error = |source| KvError::Connection {
            addr: addr.clone(),
            source,
        };
        // AUTH goes out separately so its failure maps to KvError::Authentication.
        let client = redis::Client::open((self.config.host.clone(), self.config.port))
            .map_err(connection_error)?;
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(connection_error)?;
        self.opened.fetch_add(1, Ordering::Relaxed);

        if let Some(password) = &self.config.password {
            debug!("Authenticating connection to {addr}");
            let _: () = redis::cmd("AUTH")
                .arg(password)
                .query_async(&mut conn)
                .await
                .map_err(KvError::Authentication)?;
        }

        info!("Connected to {addr}");
        Ok(conn)
    }
}
