use std::fmt;

use serde::{Deserialize, Serialize};

use super::{course::Course, role::Role, user::User, user::UserId};

/// The caller attached to an authenticated request.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins manage every course; anyone else only the courses they own.
    pub fn can_manage(&self, course: &Course) -> bool {
        self.is_admin() || course.is_owned_by(self.id)
    }
}

// Spans and logs only ever see the id and role.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().as_str().to_string(),
            name: user.name().as_str().to_string(),
            role: user.role(),
        }
    }
}
