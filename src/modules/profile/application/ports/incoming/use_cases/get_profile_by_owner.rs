use async_trait::async_trait;

use super::ProfileUseCaseError;
use crate::profile::application::ports::outgoing::ProfileView;

/// Public lookup by a textual owner id. A malformed id and an unknown one
/// both yield `ProfileNotFound`.
#[async_trait]
pub trait GetProfileByOwnerUseCase: Send + Sync {
    async fn execute(&self, owner_id: &str) -> Result<ProfileView, ProfileUseCaseError>;
}
