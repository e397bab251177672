use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{
        Rating, RatingStats,
        rating::validate_stars,
        response::{DeleteAllResponse, DeleteResponse, SubmitRatingResponse},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct SubmitRatingPayload {
    pub stars: i64,
    pub comment: Option<String>,
    pub photo: Option<String>,
    pub company: Option<String>,
}

pub async fn submit_rating_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRatingPayload>,
) -> Result<Json<SubmitRatingResponse>, AppError> {
    let stars = validate_stars(payload.stars)
        .inspect_err(|_| tracing::warn!("Rejected rating with {} stars", payload.stars))?;

    let rating = Rating::new(
        stars,
        payload.comment.unwrap_or_default(),
        payload.photo.unwrap_or_default(),
        payload.company.unwrap_or_default(),
    );

    state.store.insert_rating(&rating).await.map_err(|e| {
        tracing::error!("Error submitting rating: {}", e);
        e.context("Error submitting rating")
    })?;

    tracing::info!("Rating {} submitted with {} stars", rating.id, rating.stars);

    Ok(Json(SubmitRatingResponse {
        success: true,
        message: "Rating submitted successfully".into(),
        id: rating.id.to_string(),
    }))
}

pub async fn get_ratings_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Rating>>, AppError> {
    let ratings = state.store.list_ratings().await.map_err(|e| {
        tracing::error!("Error fetching ratings: {}", e);
        e.context("Error fetching ratings")
    })?;

    Ok(Json(ratings))
}

pub async fn delete_rating_handler(
    State(state): State<AppState>,
    Path(rating_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let not_found = || AppError::NotFound("Rating not found".into());

    let id = Uuid::parse_str(&rating_id).map_err(|_| not_found())?;

    let deleted = state.store.delete_rating(id).await.map_err(|e| {
        tracing::error!("Error deleting rating {}: {}", id, e);
        e.context("Error deleting rating")
    })?;

    if !deleted {
        return Err(not_found());
    }

    tracing::info!("Deleted rating {}", id);
    Ok(Json(DeleteResponse {
        success: true,
        message: "Rating deleted".into(),
    }))
}

pub async fn delete_all_ratings_handler(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>, AppError> {
    let deleted_count = state.store.delete_all_ratings().await.map_err(|e| {
        tracing::error!("Error deleting ratings: {}", e);
        e.context("Error deleting ratings")
    })?;

    tracing::info!("Deleted all ratings ({})", deleted_count);
    Ok(Json(DeleteAllResponse {
        success: true,
        deleted_count,
    }))
}

pub async fn get_rating_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<RatingStats>, AppError> {
    let stats = state.store.rating_stats().await.map_err(|e| {
        tracing::error!("Error fetching rating stats: {}", e);
        e.context("Error fetching stats")
    })?;

    Ok(Json(stats))
}
