use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    AddEducationUseCase, AddExperienceUseCase, DeleteProfileUseCase, GetOwnProfileUseCase,
    GetProfileByOwnerUseCase, ListProfilesUseCase, RemoveEducationUseCase,
    RemoveExperienceUseCase, UpsertProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_own: Arc<dyn GetOwnProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    pub get_by_owner: Arc<dyn GetProfileByOwnerUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfileUseCase + Send + Sync>,
    pub add_experience: Arc<dyn AddExperienceUseCase + Send + Sync>,
    pub remove_experience: Arc<dyn RemoveExperienceUseCase + Send + Sync>,
    pub add_education: Arc<dyn AddEducationUseCase + Send + Sync>,
    pub remove_education: Arc<dyn RemoveEducationUseCase + Send + Sync>,
}
