//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`credentials`] -- signup and credential verification against the `users` table.

pub mod credentials;
pub mod jwt;
pub mod password;
