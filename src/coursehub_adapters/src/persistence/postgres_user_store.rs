use chrono::{DateTime, Utc};
use coursehub_core::{Email, NewUser, User, UserId, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        User::parse(
            UserId::from(row.id),
            &row.name,
            &row.email,
            Secret::from(row.password_hash),
            &row.role,
            row.created_at,
            row.updated_at,
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let user = User::create(user, Utc::now());
        let id = *user.id().as_uuid();

        let query = sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(user.name().as_str())
        .bind(user.email().as_str())
        .bind(user.password_hash().as_ref().expose_secret())
        .bind(user.role().as_str())
        .bind(user.created_at())
        .bind(user.updated_at());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(user)
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, name, email, password_hash, role, created_at, updated_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_into()
    }
}
