use actix_web::HttpResponse;
use tracing::error;

use crate::profile::application::ports::incoming::use_cases::ProfileUseCaseError;
use crate::shared::api::ApiResponse;

pub(super) fn use_case_error_response(err: ProfileUseCaseError) -> HttpResponse {
    match err {
        ProfileUseCaseError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "There is no profile for this user")
        }

        ProfileUseCaseError::EntryNotFound => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", "No entry with this id")
        }

        ProfileUseCaseError::Validation(violations) => ApiResponse::validation_error(
            "Some fields are missing or invalid",
            serde_json::to_value(&violations).unwrap_or_default(),
        ),

        ProfileUseCaseError::RepositoryError(e) => {
            error!("Repository error in profile request: {}", e);
            ApiResponse::internal_error()
        }
    }
}
