use serde::Serialize;

use super::user::UserError;

const MIN_NAME_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(UserError::MissingName);
        }
        if trimmed.chars().count() < MIN_NAME_LENGTH {
            return Err(UserError::InvalidName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
