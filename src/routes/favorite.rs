use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodgram_shopping::CartRecipe;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

/// GET /api/recipes/favorites/
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<CartRecipe>>, AppError> {
    Ok(Json(state.query.list_favorites(&user.id).await?))
}

/// POST /api/recipes/{id}/favorite/
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.favorites.favorite(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// DELETE /api/recipes/{id}/favorite/
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.favorites.unfavorite(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
