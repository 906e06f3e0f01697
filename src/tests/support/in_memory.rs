use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::application::domain::entities::{PublicIdentity, UserId};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError, ProfileView,
};
use crate::profile::domain::Profile;

/// Profile store backed by a map keyed by owner. Implements both the write
/// and the read port so services can be exercised end to end.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<Mutex<HashMap<UserId, Profile>>>,
    identities: Arc<Mutex<HashMap<UserId, PublicIdentity>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(self, owner: UserId, name: &str) -> Self {
        self.identities.lock().unwrap().insert(
            owner,
            PublicIdentity {
                name: name.to_string(),
                avatar: Some(format!("https://avatars.test/{}", owner)),
            },
        );
        self
    }

    pub fn insert(&self, profile: Profile) {
        self.profiles.lock().unwrap().insert(profile.owner, profile);
    }

    pub fn get(&self, owner: UserId) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&owner).cloned()
    }

    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    fn view(&self, profile: Profile) -> ProfileView {
        let user = self.identities.lock().unwrap().get(&profile.owner).cloned();
        ProfileView { profile, user }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self.get(owner))
    }

    async fn save(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        let mut profiles = self.profiles.lock().unwrap();
        // the stored row keeps its identity, as with an upsert on owner
        let stored = match profiles.get(&profile.owner) {
            Some(existing) => Profile {
                id: existing.id,
                created_at: existing.created_at,
                ..profile
            },
            None => profile,
        };
        profiles.insert(stored.owner, stored.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(stored)
    }

    async fn delete_by_owner(&self, owner: UserId) -> Result<bool, ProfileRepositoryError> {
        Ok(self.profiles.lock().unwrap().remove(&owner).is_some())
    }
}

#[async_trait]
impl ProfileQuery for InMemoryProfileStore {
    async fn find_by_owner(&self, owner: UserId) -> Result<Option<ProfileView>, ProfileQueryError> {
        Ok(self.get(owner).map(|p| self.view(p)))
    }

    async fn list_all(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        let mut profiles: Vec<Profile> =
            self.profiles.lock().unwrap().values().cloned().collect();
        profiles.sort_by_key(|p| p.created_at);
        Ok(profiles.into_iter().map(|p| self.view(p)).collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashSet<UserId>>>,
}

impl InMemoryUserRepository {
    pub fn with_user(self, user: UserId) -> Self {
        self.users.lock().unwrap().insert(user);
        self
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.users.lock().unwrap().contains(&user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        if self.users.lock().unwrap().remove(&user_id) {
            Ok(())
        } else {
            Err(UserRepositoryError::UserNotFound)
        }
    }
}
