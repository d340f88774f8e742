//! Credential store: signup and username/password verification.

use notekeep_core::error::CoreError;
use notekeep_core::validation::{
    check_max_length, require_text, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH,
};
use notekeep_db::constraints::{is_unique_violation, UQ_USERS_USERNAME};
use notekeep_db::models::user::{CreateUser, User};
use notekeep_db::repositories::UserRepo;
use sqlx::PgConnection;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Registers users and verifies their credentials.
pub struct CredentialStore;

impl CredentialStore {
    /// Create a user with a salted Argon2id hash of `password`.
    ///
    /// The username is trimmed; the password is taken verbatim.
    pub async fn register(
        conn: &mut PgConnection,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        let username = check_credentials(username, password)?;

        if UserRepo::find_by_username(&mut *conn, username)
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateUsername(username.to_string()).into());
        }

        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            username: username.to_string(),
            password_hash,
        };

        // The unique constraint catches a concurrent signup the lookup above missed.
        UserRepo::create(&mut *conn, &input)
            .await
            .map_err(|err| -> AppError {
                if is_unique_violation(&err, UQ_USERS_USERNAME) {
                    CoreError::DuplicateUsername(input.username.clone()).into()
                } else {
                    err.into()
                }
            })
    }

    /// Return the user whose username and password match.
    pub async fn verify(
        conn: &mut PgConnection,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        let username = check_credentials(username, password)?;

        let user = UserRepo::find_by_username(&mut *conn, username)
            .await?
            .ok_or_else(|| CoreError::UserNotFound(username.to_string()))?;

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

        if !password_valid {
            return Err(CoreError::InvalidCredentials.into());
        }
        Ok(user)
    }
}

/// Validate both fields, returning the trimmed username.
fn check_credentials<'a>(username: &'a str, password: &str) -> Result<&'a str, CoreError> {
    let username = require_text("username", username, MAX_USERNAME_LENGTH)?;
    if password.is_empty() {
        return Err(CoreError::InvalidInput("password is required".into()));
    }
    check_max_length("password", password, MAX_PASSWORD_LENGTH)?;
    Ok(username)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_username_is_invalid_input() {
        assert_matches!(
            check_credentials("  ", "pw1"),
            Err(CoreError::InvalidInput(msg)) if msg == "username is required"
        );
    }

    #[test]
    fn empty_password_is_invalid_input() {
        assert_matches!(
            check_credentials("alice", ""),
            Err(CoreError::InvalidInput(msg)) if msg == "password is required"
        );
    }

    #[test]
    fn oversized_password_is_rejected() {
        let long = "x".repeat(MAX_PASSWORD_LENGTH + 1);
        assert_matches!(
            check_credentials("alice", &long),
            Err(CoreError::InvalidInput(_))
        );
    }

    #[test]
    fn username_is_trimmed() {
        assert_eq!(check_credentials(" alice ", "pw1").unwrap(), "alice");
    }
}
