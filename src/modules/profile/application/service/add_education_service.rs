use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    AddEducationUseCase, ProfileUseCaseError,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::domain::{NewEducation, Profile};

pub struct AddEducationService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> AddEducationService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddEducationUseCase for AddEducationService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        entry: NewEducation,
    ) -> Result<Profile, ProfileUseCaseError> {
        let violations = entry.validate();
        if !violations.is_empty() {
            return Err(ProfileUseCaseError::Validation(violations));
        }

        let mut profile = self
            .repository
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileUseCaseError::ProfileNotFound)?;

        let entry_id = profile.add_education(entry)?.id;
        debug!(owner = %owner, %entry_id, "Education added");

        Ok(self.repository.save(profile).await?)
    }
}
