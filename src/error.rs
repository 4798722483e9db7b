use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Total weight exceeds vehicle capacity of {0} kg")]
    CapacityExceeded(f64),

    #[error("{0}")]
    DomainRule(String),

    #[error("database error: {0}")]
    Db(#[from] mongodb::error::Error),

    #[error("database error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::CapacityExceeded(_) | AppError::DomainRule(_) => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Bson(_) | AppError::Cache(_) | AppError::Serialization(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({
            "success": false,
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
