use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileByOwnerUseCase, ProfileUseCaseError,
};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileView};

pub struct GetProfileByOwnerService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetProfileByOwnerService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileByOwnerUseCase for GetProfileByOwnerService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, owner_id: &str) -> Result<ProfileView, ProfileUseCaseError> {
        // malformed ids are indistinguishable from unknown ones
        let owner = UserId::parse(owner_id).ok_or(ProfileUseCaseError::ProfileNotFound)?;

        self.query
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileUseCaseError::ProfileNotFound)
    }
}
