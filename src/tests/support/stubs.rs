use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::profile::application::ports::incoming::use_cases::*;
use crate::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError, ProfileView,
};
use crate::profile::domain::{NewEducation, NewExperience, Profile};

//
// ──────────────────────────────────────────────────────────
// Use case stub: every profile use case fails with the same error
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FailingUseCase(pub ProfileUseCaseError);

impl FailingUseCase {
    pub fn not_used() -> Self {
        Self(ProfileUseCaseError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl GetOwnProfileUseCase for FailingUseCase {
    async fn execute(&self, _owner: UserId) -> Result<ProfileView, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl ListProfilesUseCase for FailingUseCase {
    async fn execute(&self) -> Result<Vec<ProfileView>, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl GetProfileByOwnerUseCase for FailingUseCase {
    async fn execute(&self, _owner_id: &str) -> Result<ProfileView, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl UpsertProfileUseCase for FailingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl DeleteProfileUseCase for FailingUseCase {
    async fn execute(&self, _owner: UserId) -> Result<(), ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl AddExperienceUseCase for FailingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry: NewExperience,
    ) -> Result<Profile, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl RemoveExperienceUseCase for FailingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: &str,
    ) -> Result<Profile, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl AddEducationUseCase for FailingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry: NewEducation,
    ) -> Result<Profile, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl RemoveEducationUseCase for FailingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: &str,
    ) -> Result<Profile, ProfileUseCaseError> {
        Err(self.0.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// Port stubs: storage that is down
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct UnavailableStore;

const UNAVAILABLE: &str = "connection refused";

#[async_trait]
impl ProfileRepository for UnavailableStore {
    async fn find_by_owner(
        &self,
        _owner: UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Err(ProfileRepositoryError::DatabaseError(UNAVAILABLE.to_string()))
    }

    async fn save(&self, _profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        Err(ProfileRepositoryError::DatabaseError(UNAVAILABLE.to_string()))
    }

    async fn delete_by_owner(&self, _owner: UserId) -> Result<bool, ProfileRepositoryError> {
        Err(ProfileRepositoryError::DatabaseError(UNAVAILABLE.to_string()))
    }
}

#[async_trait]
impl ProfileQuery for UnavailableStore {
    async fn find_by_owner(
        &self,
        _owner: UserId,
    ) -> Result<Option<ProfileView>, ProfileQueryError> {
        Err(ProfileQueryError::DatabaseError(UNAVAILABLE.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        Err(ProfileQueryError::DatabaseError(UNAVAILABLE.to_string()))
    }
}

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn delete_user(&self, _user_id: UserId) -> Result<(), UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(UNAVAILABLE.to_string()))
    }
}
