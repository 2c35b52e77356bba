use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use foodgram_shopping::{CartRecipe, export_shopping_list};

use crate::{auth::AuthUser, error::AppError, routes::AppState};

/// GET /api/recipes/download_shopping_cart/
pub async fn download(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let export = export_shopping_list(&state.query, &user.id, &state.export_format).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, export.media_type.to_owned()),
            (header::CONTENT_DISPOSITION, export.content_disposition()),
        ],
        export.content,
    ))
}

/// GET /api/recipes/shopping_cart/
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<CartRecipe>>, AppError> {
    Ok(Json(state.query.list_recipes(&user.id).await?))
}

/// POST /api/recipes/{id}/shopping_cart/
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.command.add_recipe(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// DELETE /api/recipes/{id}/shopping_cart/
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.command.remove_recipe(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
