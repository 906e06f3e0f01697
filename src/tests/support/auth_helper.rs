use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenProvider};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_ISSUER: &str = "devconnector-test";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: TEST_ISSUER.to_string(),
        secret_key: TEST_SECRET.to_string(),
    })
}

/// Signs an HS256 token the way the identity service issuing them would.
pub fn sign_token(user_id: Uuid, token_type: &str, expiry_seconds: i64, secret: &str) -> String {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
        iat: now.timestamp(),
        nbf: now.timestamp(),
        iss: TEST_ISSUER.to_string(),
        token_type: token_type.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("test token")
}

/// App data entry the `AuthenticatedUser` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for `user_id`.
pub fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", sign_token(user_id, "access", 3600, TEST_SECRET))
}
