//! Owner-scoped resource services.
//!
//! Services sit between handlers and repositories: they normalize input, run
//! the friendly pre-checks, and translate constraint violations into domain
//! errors. Every method takes the caller's `owner_id` from the verified token
//! and a `&mut PgConnection`, so a handler can run several steps on one
//! transaction.

pub mod categories;
pub mod notes;

pub use categories::{CategoryNotes, CategoryService};
pub use notes::NoteService;
