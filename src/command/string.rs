use crate::error::KvResult;
use crate::manager::ConnectionManager;
use redis::{AsyncCommands, FromRedisValue, ToRedisArgs};

impl ConnectionManager {
    /// SET, or `SET key value EX ttl` when a ttl in seconds is given.
    pub async fn set<V>(&self, key: &str, value: V, ttl: Option<u64>) -> KvResult<bool>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let mut conn = self.ensure_connected().await?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(secs) = ttl {
            cmd.arg("EX").arg(secs);
        }
        // OK on success, nil when the store declined the write.
        let reply: Option<String> = cmd.query_async(&mut conn).await?;
        Ok(reply.is_some())
    }

    /// GET. `None` when the key does not exist.
    pub async fn get<V: FromRedisValue>(&self, key: &str) -> KvResult<Option<V>> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.get(key).await?)
    }
}
