use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

const MIN_PASSWORD_LENGTH: usize = 6;

/// A plaintext password as submitted by a client. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, UserError> {
        let length = raw.expose_secret().chars().count();

        if length == 0 {
            return Err(UserError::MissingPassword);
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(UserError::InvalidPassword);
        }

        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
