use actix_web::{delete, put, web, Responder};
use serde::{Deserialize, Serialize};

use super::error_response::use_case_error_response;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::domain::NewExperience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddExperienceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub location: Option<String>,
    /// `YYYY-MM-DD`
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl From<AddExperienceRequest> for NewExperience {
    fn from(req: AddExperienceRequest) -> Self {
        NewExperience {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

#[put("/api/profile/experience")]
pub async fn add_experience_handler(
    user: AuthenticatedUser,
    req: web::Json<AddExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry = NewExperience::from(req.into_inner());

    match data.profile.add_experience.execute(user.user_id, entry).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => use_case_error_response(e),
    }
}

#[delete("/api/profile/experience/{exp_id}")]
pub async fn remove_experience_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let exp_id = path.into_inner();

    match data
        .profile
        .remove_experience
        .execute(user.user_id, &exp_id)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => use_case_error_response(e),
    }
}
