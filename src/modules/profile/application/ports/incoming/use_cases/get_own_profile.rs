use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::ProfileView;

#[async_trait]
pub trait GetOwnProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<ProfileView, ProfileUseCaseError>;
}
