use crate::error::KvResult;
use crate::manager::ConnectionManager;

impl ConnectionManager {
    /// PING, connecting first if needed.
    pub async fn ping(&self) -> KvResult<String> {
        let mut conn = self.ensure_connected().await?;
        Ok(redis::cmd("PING").query_async(&mut conn).await?)
    }
}
