use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileUseCaseError, UpsertProfileCommand, UpsertProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::domain::Profile;

pub struct UpsertProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpsertProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertProfileUseCase for UpsertProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileUseCaseError> {
        let violations = command.validate();
        if !violations.is_empty() {
            return Err(ProfileUseCaseError::Validation(violations));
        }

        let existing = self.repository.find_by_owner(owner).await?;
        let created = existing.is_none();

        let mut profile = existing.unwrap_or_else(|| Profile::new(owner));
        profile.apply_fields(command.into_fields());

        let saved = self.repository.save(profile).await?;

        if created {
            info!(owner = %owner, profile_id = %saved.id, "Profile created");
        } else {
            debug!(owner = %owner, profile_id = %saved.id, "Profile updated");
        }

        Ok(saved)
    }
}
