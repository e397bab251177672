use axum::{
    Json,
    body::Body,
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{
    catalog::{list_catalog_images, resolve_catalog_image},
    errors::AppError,
    models::CatalogListing,
    state::AppState,
};

pub async fn get_catalog_images_handler(
    State(state): State<AppState>,
) -> Result<Json<CatalogListing>, AppError> {
    let images = list_catalog_images(&state.catalog_dir).await.map_err(|e| {
        tracing::error!("Error fetching catalog images: {}", e);
        e.context("Error fetching catalog images")
    })?;

    Ok(Json(CatalogListing::from(images)))
}

pub async fn serve_catalog_image_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, AppError> {
    let path = resolve_catalog_image(&state.catalog_dir, &filename).await?;

    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .map_err(|e| AppError::Internal(format!("Error serving catalog image: {e}")))?;

    Ok(response.map(Body::new).into_response())
}
