use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    core::state::AppState,
    models::user::Model as User,
    repos::users::UsersRepo,
    utils::{jwt::create_jwt, response::APIError},
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    token: String,
    user: User,
}

/// Exchange an identity-provider-verified email for a session token,
/// provisioning the user row on first login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, APIError> {
    if payload.email.trim().is_empty() {
        return Err(APIError::BadRequest("Email is required".to_string()));
    }

    let users_repo = UsersRepo::new(state.database.clone());

    let user = match users_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => {
            info!("Existing user logged in: {}", u.email);
            u
        }
        Ok(None) => {
            info!("Signing up unregistered user: {}", payload.email);

            let name = payload
                .name
                .unwrap_or_else(|| payload.email.clone());

            users_repo
                .create(payload.email.clone(), name)
                .await
                .map_err(|e| {
                    error!("Failed to create user: {}", e);
                    APIError::InternalServerError("Failed to create user".to_string())
                })?
        }
        Err(e) => {
            error!("Failed to look up user: {}", e);
            return Err(APIError::InternalServerError(
                "Failed to look up user".to_string(),
            ));
        }
    };

    let token = create_jwt(
        user.email.clone(),
        user.id.clone(),
        &state.config.jwt_secret,
        state.config.jwt_expiry_hours,
    )
    .map_err(|e| {
        error!("Failed to create JWT: {}", e);
        APIError::InternalServerError("Failed to create session".to_string())
    })?;

    Ok(Json(AuthResponse { token, user }))
}

pub async fn get_me(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}
