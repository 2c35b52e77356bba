use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodgram_shopping::ShoppingError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Shopping error: {0}")]
    ShoppingError(#[from] ShoppingError),

    #[error("Authentication credentials were not provided or are invalid")]
    Unauthorized,

    #[error("Internal server error")]
    InternalError(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided or are invalid.".to_string(),
            ),
            AppError::ShoppingError(ShoppingError::RecipeNotFound) => {
                (StatusCode::NOT_FOUND, "Recipe not found.".to_string())
            }
            AppError::ShoppingError(ShoppingError::NotInCart) => (
                StatusCode::NOT_FOUND,
                "Recipe is not in the shopping cart.".to_string(),
            ),
            AppError::ShoppingError(ShoppingError::AlreadyInCart) => (
                StatusCode::BAD_REQUEST,
                "Recipe is already in the shopping cart.".to_string(),
            ),
            AppError::ShoppingError(ShoppingError::NotFavorited) => (
                StatusCode::NOT_FOUND,
                "Recipe is not in favorites.".to_string(),
            ),
            AppError::ShoppingError(ShoppingError::AlreadyFavorited) => (
                StatusCode::BAD_REQUEST,
                "Recipe is already in favorites.".to_string(),
            ),
            AppError::ShoppingError(ShoppingError::Retrieval(e)) => {
                tracing::error!("Shopping list retrieval failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate the shopping list.".to_string(),
                )
            }
            AppError::ShoppingError(ShoppingError::Database(e)) | AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}
