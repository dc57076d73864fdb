use redis::RedisError;

#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("could not connect to {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: RedisError,
    },

    #[error("authentication rejected: {0}")]
    Authentication(#[source] RedisError),

    /// Errors raised by the store itself, passed through untouched.
    #[error(transparent)]
    Store(#[from] RedisError),
}

impl KvError {
    /// The store's error code (`WRONGTYPE`, `WRONGPASS`, ...), if the reply carried one.
    pub fn code(&self) -> Option<&str> {
        match self {
            KvError::Connection { source, .. } => source.code(),
            KvError::Authentication(source) | KvError::Store(source) => source.code(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, KvError::Connection { .. })
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, KvError::Authentication(_))
    }
}

pub type KvResult<T> = Result<T, KvError>;
