//! The process-wide manager and free functions that forward to it.
//!
//! The first call to [`manager`] reads configuration from the environment
//! unless [`configure`] installed one earlier. Either way it is read once and
//! never reloaded.

use crate::config::Config;
use crate::error::KvResult;
use crate::manager::ConnectionManager;
use redis::{FromRedisValue, ToRedisArgs};
use std::sync::OnceLock;

static MANAGER: OnceLock<ConnectionManager> = OnceLock::new();

/// Install `config` for the process-wide manager.
/// Returns false if the manager was already created.
pub fn configure(config: Config) -> bool {
    MANAGER.set(ConnectionManager::new(config)).is_ok()
}

pub fn manager() -> &'static ConnectionManager {
    MANAGER.get_or_init(|| ConnectionManager::new(Config::from_env()))
}

pub async fn set<V>(key: &str, value: V, ttl: Option<u64>) -> KvResult<bool>
where
    V: ToRedisArgs + Send + Sync,
{
    manager().set(key, value, ttl).await
}

pub async fn get<V: FromRedisValue>(key: &str) -> KvResult<Option<V>> {
    manager().get(key).await
}

pub async fn delete(key: &str) -> KvResult<u64> {
    manager().delete(key).await
}

pub async fn exists(key: &str) -> KvResult<bool> {
    manager().exists(key).await
}

pub async fn expire(key: &str, ttl: i64) -> KvResult<bool> {
    manager().expire(key, ttl).await
}

pub async fn ttl(key: &str) -> KvResult<i64> {
    manager().ttl(key).await
}

pub async fn hset<V>(hash: &str, field: &str, value: V) -> KvResult<i64>
where
    V: ToRedisArgs + Send + Sync,
{
    manager().hset(hash, field, value).await
}

pub async fn hget<V: FromRedisValue>(hash: &str, field: &str) -> KvResult<Option<V>> {
    manager().hget(hash, field).await
}

pub async fn hdel(hash: &str, field: &str) -> KvResult<u64> {
    manager().hdel(hash, field).await
}

pub async fn ping() -> KvResult<String> {
    manager().ping().await
}
