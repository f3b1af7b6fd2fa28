use coursehub_core::{
    Email, NewUser, Password, PasswordHashError, PasswordHasher, Role, User, UserName, UserStore,
    UserStoreError,
};

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
    #[error("Role {0} cannot be chosen at signup")]
    RoleNotAllowed(Role),
}

/// Signup use case - handles user registration
pub struct SignupUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> SignupUseCase<'a, U, H>
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

    /// Execute the signup use case
    ///
    /// The password is hashed before it reaches the store. Callers may register as
    /// learner (the default) or instructor; admins are provisioned out of band.
    ///
    /// # Returns
    /// The stored user, or `UserStoreError::UserAlreadyExists` if the email is taken
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: UserName,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<User, SignupError> {
        if role == Role::Admin {
            return Err(SignupError::RoleNotAllowed(role));
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let mut user = NewUser::new(name, email, password_hash);
        user.role = role;

        Ok(self.user_store.add_user(user).await?)
    }
}
