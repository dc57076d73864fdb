//! Forwarding operations on [`ConnectionManager`](crate::ConnectionManager).
//!
//! Each operation connects on first use and then hands the command to the
//! store unchanged. Replies and errors come back exactly as the store sent
//! them.

pub mod hash;
pub mod key;
pub mod server_cmd;
pub mod string;
