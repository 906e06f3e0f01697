use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::domain::{NewEducation, Profile};

#[async_trait]
pub trait AddEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry: NewEducation,
    ) -> Result<Profile, ProfileUseCaseError>;
}
