//! Authentication: login, credential hashing, and the password reset flow
//!
//! Token issuance and mail delivery are collaborator traits; the core only
//! decides admission and manages reset-token state. Login failures for
//! unknown email and wrong password share one message so the surface leaks
//! no user-enumeration signal.

use std::sync::Arc;
use std::time::Duration;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use rand::RngCore;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::domain::Role;
use crate::error::{CoreError, Result};
use crate::infrastructure::database::entities::{reset_token, user, ResetToken, User};
use crate::services::users::UserView;

const INVALID_LOGIN: &str = "Invalid email or password";
const ROLE_MISMATCH: &str = "Role mismatch for this user";
const INVALID_UID: &str = "Invalid uid";
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Hash a password for storage
pub(crate) fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored hash
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

fn random_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Short-lived access credential plus longer-lived refresh credential
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Successful login payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserView,
}

/// Collaborator minting access credentials for an authenticated user
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &user::Model) -> Result<TokenPair>;
}

/// Default issuer: opaque random tokens.
///
/// Stands in for an external JWT issuer; the core treats the credential
/// strings as opaque either way.
pub struct OpaqueTokenIssuer;

impl TokenIssuer for OpaqueTokenIssuer {
    fn issue(&self, _user: &user::Model) -> Result<TokenPair> {
        Ok(TokenPair {
            access: random_token(),
            refresh: random_token(),
        })
    }
}

/// Collaborator delivering password reset links
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send_password_reset(&self, to: &str, reset_url: &str) -> Result<()>;
}

/// Default sender: logs the link instead of delivering mail
pub struct LoggingMailSender;

#[async_trait]
impl MailSender for LoggingMailSender {
    async fn send_password_reset(&self, to: &str, reset_url: &str) -> Result<()> {
        info!(recipient = %to, url = %reset_url, "Password reset link issued");
        Ok(())
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: DatabaseConnection,
    issuer: Arc<dyn TokenIssuer>,
    mail: Arc<dyn MailSender>,
    /// Base URL the reset link points at
    frontend_url: String,
    reset_token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        db: DatabaseConnection,
        issuer: Arc<dyn TokenIssuer>,
        mail: Arc<dyn MailSender>,
        frontend_url: String,
        reset_token_ttl: Duration,
    ) -> Self {
        Self {
            db,
            issuer,
            mail,
            frontend_url,
            reset_token_ttl,
        }
    }

    /// Authenticate by email, password, and requested role.
    ///
    /// Unknown email and wrong password fail identically; a correct
    /// credential with the wrong requested role gets its own message.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<LoginResponse> {
        let user = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::Credential(INVALID_LOGIN.to_string()))?;

        if !verify_password(password, &user.password_hash) {
            return Err(CoreError::Credential(INVALID_LOGIN.to_string()));
        }
        if user.role != role {
            return Err(CoreError::Credential(ROLE_MISMATCH.to_string()));
        }

        let tokens = self.issuer.issue(&user)?;
        info!(user = %user.email, role = %user.role, "Login succeeded");

        Ok(LoginResponse {
            access: tokens.access,
            refresh: tokens.refresh,
            user: user.into(),
        })
    }

    /// Issue a password reset link if the email is known.
    ///
    /// The outcome is the same either way, so the endpoint cannot be used
    /// to probe for registered addresses.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let Some(user) = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
        else {
            return Ok(());
        };

        let token = random_token();

        let mut record = reset_token::ActiveModel::new();
        record.user_id = Set(user.id);
        record.token_hash = Set(token_digest(&token));
        record.expires_at = Set(chrono::Utc::now()
            + chrono::Duration::from_std(self.reset_token_ttl)
                .map_err(|e| CoreError::Internal(e.to_string()))?);
        record.insert(&self.db).await?;

        let reset_url = format!(
            "{}/reset-password?uid={}&token={}",
            self.frontend_url, user.uuid, token
        );
        self.mail.send_password_reset(&user.email, &reset_url).await
    }

    /// Consume a reset token and set a new password
    pub async fn confirm_password_reset(
        &self,
        uid: &str,
        token: &str,
        new_password: &str,
    ) -> Result<()> {
        let uid = Uuid::parse_str(uid)
            .map_err(|_| CoreError::Credential(INVALID_UID.to_string()))?;
        let user = User::find()
            .filter(user::Column::Uuid.eq(uid))
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::Credential(INVALID_UID.to_string()))?;

        let record = ResetToken::find()
            .filter(reset_token::Column::UserId.eq(user.id))
            .filter(reset_token::Column::TokenHash.eq(token_digest(token)))
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::Credential(INVALID_TOKEN.to_string()))?;

        if record.used || record.expires_at < chrono::Utc::now() {
            return Err(CoreError::Credential(INVALID_TOKEN.to_string()));
        }

        let mut spent = record.into_active_model();
        spent.used = Set(true);
        spent.update(&self.db).await?;

        let mut account = user.into_active_model();
        account.password_hash = Set(hash_password(new_password)?);
        account.updated_at = Set(chrono::Utc::now());
        account.update(&self.db).await?;

        info!("Password reset completed");
        Ok(())
    }
}
