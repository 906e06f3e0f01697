use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::auth::application::domain::entities::UserId;

/// Removes the owner's profile and then the owner's user record.
#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<(), ProfileUseCaseError>;
}
