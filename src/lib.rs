pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::profile;

use actix_web::web;

use crate::profile::application::profile_use_cases::ProfileUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::profile::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile: literal paths before `/api/profile/user/{user_id}`
    cfg.service(routes::get_own_profile_handler);
    cfg.service(routes::list_profiles_handler);
    cfg.service(routes::get_profile_by_user_handler);
    cfg.service(routes::upsert_profile_handler);
    cfg.service(routes::delete_profile_handler);
    // Experience
    cfg.service(routes::add_experience_handler);
    cfg.service(routes::remove_experience_handler);
    // Education
    cfg.service(routes::add_education_handler);
    cfg.service(routes::remove_education_handler);
}
