use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub enum APIError {
    BadRequest(String),
    UnAuthorized,
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::UnAuthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(serde_json::json!({"status": "error", "details": msg})),
        )
            .into_response()
    }
}
