//! Named schema constraints and classification of their violations.
//!
//! Unique and foreign-key constraints are the authoritative guards for
//! uniqueness and ownership; callers match a failed statement against the
//! constraint it tripped to turn it into a domain error.

/// `users (username)`.
pub const UQ_USERS_USERNAME: &str = "uq_users_username";

/// `categories (owner_id, name)`.
pub const UQ_CATEGORIES_OWNER_NAME: &str = "uq_categories_owner_name";

/// `notes (owner_id, title)`.
pub const UQ_NOTES_OWNER_TITLE: &str = "uq_notes_owner_title";

/// `notes (category_id, owner_id) -> categories (id, owner_id)`.
pub const FK_NOTES_CATEGORY_OWNER: &str = "fk_notes_category_owner";

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// True if `err` is a unique violation on `constraint`.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    violates(err, UNIQUE_VIOLATION, constraint)
}

/// True if `err` is a foreign-key violation on `constraint`.
pub fn is_foreign_key_violation(err: &sqlx::Error, constraint: &str) -> bool {
    violates(err, FOREIGN_KEY_VIOLATION, constraint)
}

fn violates(err: &sqlx::Error, sqlstate: &str, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(sqlstate) && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
