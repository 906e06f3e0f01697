mod add_education_service;
mod add_experience_service;
mod delete_profile_service;
mod get_own_profile_service;
mod get_profile_by_owner_service;
mod list_profiles_service;
mod remove_education_service;
mod remove_experience_service;
mod upsert_profile_service;

pub use add_education_service::AddEducationService;
pub use add_experience_service::AddExperienceService;
pub use delete_profile_service::DeleteProfileService;
pub use get_own_profile_service::GetOwnProfileService;
pub use get_profile_by_owner_service::GetProfileByOwnerService;
pub use list_profiles_service::ListProfilesService;
pub use remove_education_service::RemoveEducationService;
pub use remove_experience_service::RemoveExperienceService;
pub use upsert_profile_service::UpsertProfileService;
