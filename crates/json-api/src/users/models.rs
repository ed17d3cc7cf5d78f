//! User Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use sandbox_app::domain::users::{
    data::{NewUser, UserPatch},
    models::User,
};

/// User body for create and full replace
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,

    /// False when omitted
    #[serde(default)]
    pub active: bool,
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            role: request.role,
            active: request.active,
        }
    }
}

/// Partial user update. The active flag cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PatchUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<PatchUserRequest> for UserPatch {
    fn from(request: PatchUserRequest) -> Self {
        UserPatch {
            name: request.name,
            email: request.email,
            role: request.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            active: user.active,
        }
    }
}
