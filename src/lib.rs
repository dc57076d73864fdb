//! # kvfacade
//!
//! A small key-value and hash facade over a Redis-compatible store.
//!
//! Connection parameters come from configuration (`redis.host`,
//! `redis.port`, `redis.password`, read from the environment by default).
//! The connection is opened lazily on first use and shared by every
//! operation afterwards. Commands go to the store unchanged through the
//! `redis` crate, and their replies and errors come back as-is.

pub mod command;
pub mod config;
pub mod error;
pub mod global;
pub mod manager;

pub use config::{Config, ConfigProvider, EnvProvider};
pub use error::{KvError, KvResult};
pub use global::{configure, delete, exists, expire, get, hdel, hget, hset, manager, ping, set, ttl};
pub use manager::ConnectionManager;
