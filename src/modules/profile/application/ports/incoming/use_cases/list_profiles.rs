use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::profile::application::ports::outgoing::ProfileView;

#[async_trait]
pub trait ListProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileView>, ProfileUseCaseError>;
}
