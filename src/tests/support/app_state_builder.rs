use actix_web::web;
use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::*;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::*;
use crate::tests::support::in_memory::{InMemoryProfileStore, InMemoryUserRepository};
use crate::tests::support::stubs::FailingUseCase;
use crate::AppState;

pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
}

fn failing_use_cases(stub: FailingUseCase) -> ProfileUseCases {
    ProfileUseCases {
        get_own: Arc::new(stub.clone()),
        list: Arc::new(stub.clone()),
        get_by_owner: Arc::new(stub.clone()),
        upsert: Arc::new(stub.clone()),
        delete: Arc::new(stub.clone()),
        add_experience: Arc::new(stub.clone()),
        remove_experience: Arc::new(stub.clone()),
        add_education: Arc::new(stub.clone()),
        remove_education: Arc::new(stub),
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: failing_use_cases(FailingUseCase::not_used()),
        }
    }
}

impl TestAppStateBuilder {
    /// Wires the real services over in-memory ports.
    pub fn with_in_memory(store: InMemoryProfileStore, users: InMemoryUserRepository) -> Self {
        Self {
            profile: ProfileUseCases {
                get_own: Arc::new(GetOwnProfileService::new(store.clone())),
                list: Arc::new(ListProfilesService::new(store.clone())),
                get_by_owner: Arc::new(GetProfileByOwnerService::new(store.clone())),
                upsert: Arc::new(UpsertProfileService::new(store.clone())),
                delete: Arc::new(DeleteProfileService::new(store.clone(), users)),
                add_experience: Arc::new(AddExperienceService::new(store.clone())),
                remove_experience: Arc::new(RemoveExperienceService::new(store.clone())),
                add_education: Arc::new(AddEducationService::new(store.clone())),
                remove_education: Arc::new(RemoveEducationService::new(store)),
            },
        }
    }

    /// Every profile use case fails with `error`.
    pub fn failing_with(error: ProfileUseCaseError) -> Self {
        Self {
            profile: failing_use_cases(FailingUseCase(error)),
        }
    }

    pub fn with_upsert(mut self, uc: impl UpsertProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.upsert = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
        })
    }
}
