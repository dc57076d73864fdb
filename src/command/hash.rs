use crate::error::KvResult;
use crate::manager::ConnectionManager;
use redis::{AsyncCommands, FromRedisValue, ToRedisArgs};

impl ConnectionManager {
    /// HSET. Returns 1 if the field was created, 0 if it was updated.
    pub async fn hset<V>(&self, hash: &str, field: &str, value: V) -> KvResult<i64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.hset(hash, field, value).await?)
    }

    pub async fn hget<V: FromRedisValue>(&self, hash: &str, field: &str) -> KvResult<Option<V>> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.hget(hash, field).await?)
    }

    /// HDEL. Returns the number of fields removed.
    pub async fn hdel(&self, hash: &str, field: &str) -> KvResult<u64> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.hdel(hash, field).await?)
    }
}
