mod add_education;
mod add_experience;
mod delete_profile;
mod get_own_profile;
mod get_profile_by_owner;
mod list_profiles;
mod remove_education;
mod remove_experience;
mod upsert_profile;

pub use add_education::AddEducationUseCase;
pub use add_experience::AddExperienceUseCase;
pub use delete_profile::DeleteProfileUseCase;
pub use get_own_profile::GetOwnProfileUseCase;
pub use get_profile_by_owner::GetProfileByOwnerUseCase;
pub use list_profiles::ListProfilesUseCase;
pub use remove_education::RemoveEducationUseCase;
pub use remove_experience::RemoveExperienceUseCase;
pub use upsert_profile::{UpsertProfileCommand, UpsertProfileUseCase};

use crate::auth::application::ports::outgoing::UserRepositoryError;
use crate::profile::application::ports::outgoing::{ProfileQueryError, ProfileRepositoryError};
use crate::profile::domain::{FieldViolation, ProfileError};

//
// ──────────────────────────────────────────────────────────
// Errors shared by every profile use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileUseCaseError {
    #[error("profile not found")]
    ProfileNotFound,

    #[error("entry not found")]
    EntryNotFound,

    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for ProfileUseCaseError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => ProfileUseCaseError::ProfileNotFound,
            ProfileRepositoryError::DatabaseError(msg)
            | ProfileRepositoryError::SerializationError(msg) => {
                ProfileUseCaseError::RepositoryError(msg)
            }
        }
    }
}

impl From<ProfileQueryError> for ProfileUseCaseError {
    fn from(err: ProfileQueryError) -> Self {
        match err {
            ProfileQueryError::DatabaseError(msg) | ProfileQueryError::SerializationError(msg) => {
                ProfileUseCaseError::RepositoryError(msg)
            }
        }
    }
}

impl From<UserRepositoryError> for ProfileUseCaseError {
    fn from(err: UserRepositoryError) -> Self {
        ProfileUseCaseError::RepositoryError(err.to_string())
    }
}

impl From<ProfileError> for ProfileUseCaseError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::EntryNotFound(_) => ProfileUseCaseError::EntryNotFound,
            ProfileError::Invalid(violations) => ProfileUseCaseError::Validation(violations),
        }
    }
}
