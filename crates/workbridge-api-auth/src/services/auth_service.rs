//! Credential verification against the user store.

use crate::error::ApiAuthError;
use sqlx::PgPool;
use workbridge_auth::PasswordHasher;
use workbridge_db::User;

/// Service for verifying user credentials.
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    password_hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
        }
    }

    /// Authenticate a user with email and password.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::InvalidCredentials` for an unknown email or a
    ///   wrong password (indistinguishable to the caller)
    /// - `ApiAuthError::AccountInactive` for a deactivated account
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiAuthError> {
        let user = User::find_by_email(&self.pool, email).await?;

        let user = user.ok_or_else(|| {
            tracing::debug!(email = %email, "Login attempt for non-existent user");
            ApiAuthError::InvalidCredentials
        })?;

        if !user.is_active {
            tracing::warn!(user_id = user.id, "Login attempt for inactive account");
            return Err(ApiAuthError::AccountInactive);
        }

        let valid = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| ApiAuthError::Internal(format!("Password verification failed: {e}")))?;

        if !valid {
            tracing::debug!(user_id = user.id, "Invalid password attempt");
            return Err(ApiAuthError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    /// Resolve a verified token subject back to a live user.
    ///
    /// This is the verification-time liveness check: a token for a user
    /// that has since been deactivated is rejected here regardless of
    /// its expiry.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::InvalidToken` if the user is missing or
    /// inactive.
    pub async fn resolve_active_user(&self, email: &str) -> Result<User, ApiAuthError> {
        let user = User::find_by_email(&self.pool, email)
            .await?
            .ok_or(ApiAuthError::InvalidToken)?;

        if !user.is_active {
            tracing::warn!(
                user_id = user.id,
                "Rejected token for deactivated account"
            );
            return Err(ApiAuthError::InvalidToken);
        }

        Ok(user)
    }
}
