//! User Models

/// User identifier, assigned by the store.
pub type UserId = u64;

/// User Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub active: bool,
}
