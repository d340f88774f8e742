//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept any `PgExecutor` (a pool, a pooled connection or an open
//! transaction) as the first argument. Category and note methods take the
//! owner id as their second argument and every statement filters on it.

pub mod category_repo;
pub mod note_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use user_repo::UserRepo;
