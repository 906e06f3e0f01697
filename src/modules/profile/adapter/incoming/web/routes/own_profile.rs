use actix_web::{delete, get, post, web, Responder};
use serde::{Deserialize, Serialize};

use super::error_response::use_case_error_response;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::UpsertProfileCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "githubusername")]
    pub github_username: Option<String>,
    /// Comma separated.
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl From<UpsertProfileRequest> for UpsertProfileCommand {
    fn from(req: UpsertProfileRequest) -> Self {
        UpsertProfileCommand {
            company: req.company,
            website: req.website,
            location: req.location,
            bio: req.bio,
            status: req.status,
            github_username: req.github_username,
            skills: req.skills,
            youtube: req.youtube,
            facebook: req.facebook,
            twitter: req.twitter,
            instagram: req.instagram,
            linkedin: req.linkedin,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/profile/me")]
pub async fn get_own_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get_own.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => use_case_error_response(e),
    }
}

#[post("/api/profile")]
pub async fn upsert_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpsertProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = UpsertProfileCommand::from(req.into_inner());

    match data.profile.upsert.execute(user.user_id, command).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => use_case_error_response(e),
    }
}

#[delete("/api/profile")]
pub async fn delete_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.delete.execute(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => use_case_error_response(e),
    }
}
