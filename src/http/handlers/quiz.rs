use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{
        QuizScore, QuizStats,
        quiz::percentile,
        response::{DeleteAllResponse, DeleteResponse, SubmitQuizResponse},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct SubmitQuizPayload {
    pub score: i64,
    pub total_questions: i64,
    pub correct_answers: i64,
}

pub async fn submit_quiz_score_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitQuizPayload>,
) -> Result<Json<SubmitQuizResponse>, AppError> {
    let quiz_score = QuizScore::new(
        payload.score,
        payload.total_questions,
        payload.correct_answers,
    );

    let percentile = record_and_rank(&state, &quiz_score).await.map_err(|e| {
        tracing::error!("Error submitting quiz score: {}", e);
        e.context("Error submitting quiz score")
    })?;

    tracing::info!(
        "Quiz score {} submitted: {}% (percentile {})",
        quiz_score.id,
        quiz_score.score,
        percentile
    );

    Ok(Json(SubmitQuizResponse {
        success: true,
        id: quiz_score.id.to_string(),
        percentile,
    }))
}

async fn record_and_rank(state: &AppState, quiz_score: &QuizScore) -> Result<f64, AppError> {
    state.store.insert_quiz_score(quiz_score).await?;

    let total = state.store.count_quiz_scores().await?;
    let below = state.store.count_quiz_scores_below(quiz_score.score).await?;

    Ok(percentile(below, total))
}

pub async fn get_quiz_scores_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizScore>>, AppError> {
    let scores = state.store.list_quiz_scores().await.map_err(|e| {
        tracing::error!("Error fetching quiz scores: {}", e);
        e.context("Error fetching quiz scores")
    })?;

    Ok(Json(scores))
}

pub async fn delete_quiz_score_handler(
    State(state): State<AppState>,
    Path(score_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let not_found = || AppError::NotFound("Quiz score not found".into());

    let id = Uuid::parse_str(&score_id).map_err(|_| not_found())?;

    let deleted = state.store.delete_quiz_score(id).await.map_err(|e| {
        tracing::error!("Error deleting quiz score {}: {}", id, e);
        e.context("Error deleting quiz score")
    })?;

    if !deleted {
        return Err(not_found());
    }

    tracing::info!("Deleted quiz score {}", id);
    Ok(Json(DeleteResponse {
        success: true,
        message: "Quiz score deleted".into(),
    }))
}

pub async fn delete_all_quiz_scores_handler(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>, AppError> {
    let deleted_count = state.store.delete_all_quiz_scores().await.map_err(|e| {
        tracing::error!("Error deleting quiz scores: {}", e);
        e.context("Error deleting quiz scores")
    })?;

    tracing::info!("Deleted all quiz scores ({})", deleted_count);
    Ok(Json(DeleteAllResponse {
        success: true,
        deleted_count,
    }))
}

pub async fn get_quiz_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<QuizStats>, AppError> {
    let scores = state.store.list_quiz_scores().await.map_err(|e| {
        tracing::error!("Error fetching quiz stats: {}", e);
        e.context("Error fetching quiz stats")
    })?;

    Ok(Json(QuizStats::from_scores(&scores)))
}
