//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here performs I/O: it holds the id/timestamp aliases, the
//! [`error::CoreError`] taxonomy, input validation helpers and a few serde
//! helpers used by request DTOs.

pub mod error;
pub mod serde_ext;
pub mod types;
pub mod validation;
