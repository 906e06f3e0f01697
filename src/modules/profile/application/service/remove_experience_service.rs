use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileUseCaseError, RemoveExperienceUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::domain::Profile;

pub struct RemoveExperienceService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> RemoveExperienceService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveExperienceUseCase for RemoveExperienceService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        entry_id: &str,
    ) -> Result<Profile, ProfileUseCaseError> {
        let mut profile = self
            .repository
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileUseCaseError::ProfileNotFound)?;

        let entry_id =
            Uuid::parse_str(entry_id.trim()).map_err(|_| ProfileUseCaseError::EntryNotFound)?;
        profile.remove_experience(entry_id)?;
        debug!(owner = %owner, %entry_id, "Experience removed");

        Ok(self.repository.save(profile).await?)
    }
}
