use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::profile::application::ports::incoming::use_cases::{
    DeleteProfileUseCase, ProfileUseCaseError,
};
use crate::profile::application::ports::outgoing::ProfileRepository;

pub struct DeleteProfileService<R, U>
where
    R: ProfileRepository,
    U: UserRepository,
{
    profiles: R,
    users: U,
}

impl<R, U> DeleteProfileService<R, U>
where
    R: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: R, users: U) -> Self {
        Self { profiles, users }
    }
}

#[async_trait]
impl<R, U> DeleteProfileUseCase for DeleteProfileService<R, U>
where
    R: ProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<(), ProfileUseCaseError> {
        // profile first, then the identity; the two are not atomic
        let profile_removed = self.profiles.delete_by_owner(owner).await?;

        match self.users.delete_user(owner).await {
            Ok(()) | Err(UserRepositoryError::UserNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        info!(owner = %owner, profile_removed, "Profile and user deleted");
        Ok(())
    }
}
