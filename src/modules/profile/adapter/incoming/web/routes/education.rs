use actix_web::{delete, put, web, Responder};
use serde::{Deserialize, Serialize};

use super::error_response::use_case_error_response;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::domain::NewEducation;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddEducationRequest {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default, alias = "fieldofstudy")]
    pub field: String,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl From<AddEducationRequest> for NewEducation {
    fn from(req: AddEducationRequest) -> Self {
        NewEducation {
            school: req.school,
            degree: req.degree,
            field: req.field,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

#[put("/api/profile/education")]
pub async fn add_education_handler(
    user: AuthenticatedUser,
    req: web::Json<AddEducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry = NewEducation::from(req.into_inner());

    match data.profile.add_education.execute(user.user_id, entry).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => use_case_error_response(e),
    }
}

#[delete("/api/profile/education/{edu_id}")]
pub async fn remove_education_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let edu_id = path.into_inner();

    match data
        .profile
        .remove_education
        .execute(user.user_id, &edu_id)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => use_case_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::profile::application::ports::incoming::use_cases::ProfileUseCaseError;
    use crate::profile::domain::Profile;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::in_memory::{InMemoryProfileStore, InMemoryUserRepository};

    #[actix_web::test]
    async fn test_add_education_accepts_fieldofstudy_alias() {
        let user_id = Uuid::new_v4();
        let store = InMemoryProfileStore::new();
        store.insert(Profile::new(UserId::from(user_id)));

        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::with_in_memory(
                        store.clone(),
                        InMemoryUserRepository::default(),
                    )
                    .build(),
                )
                .app_data(token_provider_data())
                .service(add_education_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile/education")
            .insert_header(("Authorization", bearer(user_id)))
            .set_json(json!({
                "school": "MIT",
                "degree": "BS",
                "fieldofstudy": "CS",
                "from": "2020-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["education"][0]["field"], "CS");
        assert_eq!(
            store.get(UserId::from(user_id)).unwrap().education.len(),
            1
        );
    }

    #[actix_web::test]
    async fn test_add_education_missing_school() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::with_in_memory(
                        InMemoryProfileStore::new(),
                        InMemoryUserRepository::default(),
                    )
                    .build(),
                )
                .app_data(token_provider_data())
                .service(add_education_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile/education")
            .insert_header(("Authorization", bearer(Uuid::new_v4())))
            .set_json(json!({ "degree": "BS", "field": "CS", "from": "2020-01-01" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["details"][0]["field"], "school");
    }

    #[actix_web::test]
    async fn test_remove_education_storage_failure_is_internal() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::failing_with(ProfileUseCaseError::RepositoryError(
                        "db down".to_string(),
                    ))
                    .build(),
                )
                .app_data(token_provider_data())
                .service(remove_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/profile/education/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
