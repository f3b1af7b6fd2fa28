use coursehub_core::{
    Email, Password, PasswordHashError, PasswordHasher, User, UserStore, UserStoreError,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Password verification error: {0}")]
    UnexpectedError(String),
}

impl From<PasswordHashError> for LoginError {
    fn from(error: PasswordHashError) -> Self {
        match error {
            PasswordHashError::Mismatch => LoginError::IncorrectPassword,
            PasswordHashError::UnexpectedError(e) => LoginError::UnexpectedError(e),
        }
    }
}

/// Login use case - handles user authentication
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The authenticated user. Unknown emails surface as `UserStoreError::UserNotFound`,
    /// wrong passwords as `LoginError::IncorrectPassword`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<User, LoginError> {
        let user = self.user_store.get_user(&email).await?;

        self.password_hasher
            .verify(&password, user.password_hash())
            .await?;

        Ok(user)
    }
}
