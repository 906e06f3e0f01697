use actix_web::{get, web, Responder};

use super::error_response::use_case_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn list_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.list.execute().await {
        Ok(views) => ApiResponse::success(views),
        Err(e) => use_case_error_response(e),
    }
}

#[get("/api/profile/user/{user_id}")]
pub async fn get_profile_by_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.profile.get_by_owner.execute(&user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => use_case_error_response(e),
    }
}
