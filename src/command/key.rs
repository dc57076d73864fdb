use crate::error::KvResult;
use crate::manager::ConnectionManager;
use redis::AsyncCommands;

impl ConnectionManager {
    /// DEL. Returns the number of keys removed.
    pub async fn delete(&self, key: &str) -> KvResult<u64> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.del(key).await?)
    }

    pub async fn exists(&self, key: &str) -> KvResult<bool> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.exists(key).await?)
    }

    /// EXPIRE. False when the key does not exist.
    pub async fn expire(&self, key: &str, ttl: i64) -> KvResult<bool> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.expire(key, ttl).await?)
    }

    /// Remaining TTL in seconds, -1 for no expiry, -2 for a missing key.
    pub async fn ttl(&self, key: &str) -> KvResult<i64> {
        let mut conn = self.ensure_connected().await?;
        Ok(conn.ttl(key).await?)
    }
}
