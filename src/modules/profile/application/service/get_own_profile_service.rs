use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    GetOwnProfileUseCase, ProfileUseCaseError,
};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileView};

pub struct GetOwnProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetOwnProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOwnProfileUseCase for GetOwnProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<ProfileView, ProfileUseCaseError> {
        self.query
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileUseCaseError::ProfileNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::profile::domain::Profile;
    use crate::tests::support::in_memory::InMemoryProfileStore;
    use crate::tests::support::stubs::UnavailableStore;

    #[tokio::test]
    async fn returns_profile_joined_with_identity() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryProfileStore::new().with_identity(owner, "Ada");
        store.insert(Profile::new(owner));
        let service = GetOwnProfileService::new(store);

        let view = service.execute(owner).await.unwrap();

        assert_eq!(view.profile.owner, owner);
        assert_eq!(view.user.unwrap().name, "Ada");
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let service = GetOwnProfileService::new(InMemoryProfileStore::new());

        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        assert_eq!(result.unwrap_err(), ProfileUseCaseError::ProfileNotFound);
    }

    #[tokio::test]
    async fn storage_failure_is_a_repository_error() {
        let service = GetOwnProfileService::new(UnavailableStore);

        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(
            result.unwrap_err(),
            ProfileUseCaseError::RepositoryError(msg) if msg == "connection refused"
        ));
    }
}
