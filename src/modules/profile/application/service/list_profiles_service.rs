use async_trait::async_trait;

use crate::profile::application::ports::incoming::use_cases::{
    ListProfilesUseCase, ProfileUseCaseError,
};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileView};

pub struct ListProfilesService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> ListProfilesService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListProfilesUseCase for ListProfilesService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileView>, ProfileUseCaseError> {
        Ok(self.query.list_all().await?)
    }
}
