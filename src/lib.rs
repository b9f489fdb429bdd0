//! HTTP driver for paginated SQL query engines.
//!
//! The engine speaks a stateless request/response protocol: a statement
//! goes up as one POST, and the result comes back as a chain of JSON
//! pages linked by `next_uri`. This crate submits statements, walks the
//! chain, threads the server-owned session object between statements, and
//! hands back one assembled [`QueryResult`](types::QueryResult) per
//! statement.
//!
//! ```no_run
//! use db_ferry::client::Connection;
//!
//! # async fn run() -> db_ferry::error::Result<()> {
//! let mut conn = Connection::from_dsn("http://root@localhost:8000/default")?;
//! let result = conn.execute_statement("SELECT 1").await?;
//! println!("{}", db_ferry::format::format_rows(&result.rows));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod protocol;
pub mod session;
pub mod transport;
pub mod types;

pub use client::Connection;
pub use config::ConnectionConfig;
pub use error::{FerryError, Result};
pub use types::{QueryResult, Row, Value};
