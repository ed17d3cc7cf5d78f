//! User Errors

use salvo::http::StatusError;
use tracing::debug;

use sandbox_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::NotFound(user) => {
            debug!(user_id = user, "user not found");

            StatusError::not_found().brief("User not found")
        }
    }
}
