//! Users Data

use crate::domain::users::models::User;

/// New User Data, also the body of a full replace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub active: bool,
}

/// User Patch Data. The active flag is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// User listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<String>,
    pub active: Option<bool>,
}

impl UserFilter {
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        let role = self
            .role
            .as_ref()
            .is_none_or(|role| user.role.as_ref() == Some(role));

        let active = self.active.is_none_or(|active| user.active == active);

        role && active
    }
}

/// Case-insensitive substring search over name and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSearch {
    needle: String,
}

impl UserSearch {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        [user.name.as_deref(), user.email.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
