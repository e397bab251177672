use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    http::handlers::{
        delete_all_quiz_scores_handler, delete_all_ratings_handler, delete_quiz_score_handler,
        delete_rating_handler, get_catalog_images_handler, get_quiz_scores_handler,
        get_quiz_stats_handler, get_rating_stats_handler, get_ratings_handler, health_handler,
        serve_catalog_image_handler, submit_quiz_score_handler, submit_rating_handler,
    },
    state::AppState,
};

/// API routes, mounted under `/api` by the caller.
pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/ratings",
            post(submit_rating_handler)
                .get(get_ratings_handler)
                .delete(delete_all_ratings_handler),
        )
        .route("/ratings/stats", get(get_rating_stats_handler))
        .route("/ratings/{rating_id}", delete(delete_rating_handler))
        .route("/quiz/submit", post(submit_quiz_score_handler))
        .route(
            "/quiz/scores",
            get(get_quiz_scores_handler).delete(delete_all_quiz_scores_handler),
        )
        .route("/quiz/scores/{score_id}", delete(delete_quiz_score_handler))
        .route("/quiz/stats", get(get_quiz_stats_handler))
        .route("/catalog/images", get(get_catalog_images_handler))
        .route(
            "/static/catalog/{filename}",
            get(serve_catalog_image_handler),
        )
        .with_state(state)
}
