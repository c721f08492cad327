//! Authentication and user management service
//!
//! Issues JWT access tokens and manages the plant's user accounts. Roles are
//! flat: `admin` writes, `viewer` reads.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{validate_password, validate_username, Role};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::middleware::Claims;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    config: Arc<Config>,
}

/// A user account, without the password hash
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserAccount {
    pub id: Uuid,
    pub kullanici_adi: String,
    pub rol: String,
    pub created_at: DateTime<Utc>,
}

/// Row used during login; carries the hash
#[derive(Debug, FromRow)]
struct CredentialRow {
    id: Uuid,
    kullanici_adi: String,
    sifre_hash: String,
    rol: String,
    created_at: DateTime<Utc>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub kullanici_adi: String,
    pub sifre: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserAccount,
}

/// Input for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub kullanici_adi: String,
    pub sifre: String,
    pub rol: Role,
}

impl AuthService {
    pub fn new(db: PgPool, config: Arc<Config>) -> Self {
        Self { db, config }
    }

    /// Verify credentials and issue an access token
    pub async fn login(&self, input: LoginInput) -> AppResult<TokenResponse> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, kullanici_adi, sifre_hash, rol, created_at FROM users WHERE kullanici_adi = $1",
        )
        .bind(&input.kullanici_adi)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let valid = bcrypt::verify(&input.sifre, &row.sifre_hash)
            .map_err(|e| anyhow::anyhow!("bcrypt verify failed: {}", e))?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let expires_in = self.config.jwt.access_token_expiry;
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: row.id.to_string(),
            rol: row.rol.clone(),
            iat: now,
            exp: now + expires_in,
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt.secret.as_bytes()),
        )
        .map_err(|e| anyhow::anyhow!("token encoding failed: {}", e))?;

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: UserAccount {
                id: row.id,
                kullanici_adi: row.kullanici_adi,
                rol: row.rol,
                created_at: row.created_at,
            },
        })
    }

    /// Create a user account (admin operation)
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<UserAccount> {
        validate_username(&input.kullanici_adi).map_err(|msg| AppError::InvalidInput {
            field: "kullanici_adi".to_string(),
            message: msg.to_string(),
            message_tr: "Geçersiz kullanıcı adı".to_string(),
        })?;
        validate_password(&input.sifre).map_err(|msg| AppError::InvalidInput {
            field: "sifre".to_string(),
            message: msg.to_string(),
            message_tr: "Şifre en az 8 karakter olmalıdır".to_string(),
        })?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE kullanici_adi = $1)",
        )
        .bind(&input.kullanici_adi)
        .fetch_one(&self.db)
        .await?;
        if exists {
            return Err(AppError::DuplicateEntry("kullanici_adi".to_string()));
        }

        let hash = bcrypt::hash(&input.sifre, bcrypt::DEFAULT_COST)
            .map_err(|e| anyhow::anyhow!("bcrypt hash failed: {}", e))?;

        let user = sqlx::query_as::<_, UserAccount>(
            r#"
            INSERT INTO users (kullanici_adi, sifre_hash, rol)
            VALUES ($1, $2, $3)
            RETURNING id, kullanici_adi, rol, created_at
            "#,
        )
        .bind(&input.kullanici_adi)
        .bind(&hash)
        .bind(input.rol.as_str())
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    /// List all user accounts
    pub async fn list_users(&self) -> AppResult<Vec<UserAccount>> {
        let users = sqlx::query_as::<_, UserAccount>(
            "SELECT id, kullanici_adi, rol, created_at FROM users ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    /// Delete a user account
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        Ok(())
    }

    /// Seed the first admin account when the user table is empty
    pub async fn ensure_default_admin(&self, password: &str) -> AppResult<()> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await?;
        if count > 0 {
            return Ok(());
        }

        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| anyhow::anyhow!("bcrypt hash failed: {}", e))?;

        sqlx::query("INSERT INTO users (kullanici_adi, sifre_hash, rol) VALUES ('admin', $1, 'admin')")
            .bind(&hash)
            .execute(&self.db)
            .await?;

        tracing::warn!("Seeded default 'admin' account; change its password");
        Ok(())
    }
}
