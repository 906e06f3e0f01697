mod education;
mod error_response;
mod experience;
mod own_profile;
mod public_profiles;

pub use education::{add_education_handler, remove_education_handler};
pub use experience::{add_experience_handler, remove_experience_handler};
pub use own_profile::{delete_profile_handler, get_own_profile_handler, upsert_profile_handler};
pub use public_profiles::{get_profile_by_user_handler, list_profiles_handler};
