#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use async_trait::async_trait;
use inovix_portal_be::{
    create_app,
    db::{MemoryStore, PortalStore},
    errors::AppError,
    models::{QuizScore, Rating, RatingStats},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub static_dir: PathBuf,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn PortalStore>) -> Self {
        let static_dir = std::env::temp_dir().join(format!("inovix-portal-{}", Uuid::new_v4()));
        let state = AppState::new(store, static_dir.join("catalog"));
        Self {
            router: create_app(state, &static_dir),
            static_dir,
        }
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.static_dir.join("catalog")
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.request(method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.static_dir);
    }
}

/// Store whose every call fails like an unreachable Redis.
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T, AppError> {
    Err(AppError::RedisPoolError("boom".into()))
}

#[async_trait]
impl PortalStore for UnavailableStore {
    async fn insert_rating(&self, _: &Rating) -> Result<(), AppError> {
        unavailable()
    }

    async fn list_ratings(&self) -> Result<Vec<Rating>, AppError> {
        unavailable()
    }

    async fn delete_rating(&self, _: Uuid) -> Result<bool, AppError> {
        unavailable()
    }

    async fn delete_all_ratings(&self) -> Result<u64, AppError> {
        unavailable()
    }

    async fn rating_stats(&self) -> Result<RatingStats, AppError> {
        unavailable()
    }

    async fn insert_quiz_score(&self, _: &QuizScore) -> Result<(), AppError> {
        unavailable()
    }

    async fn list_quiz_scores(&self) -> Result<Vec<QuizScore>, AppError> {
        unavailable()
    }

    async fn count_quiz_scores(&self) -> Result<u64, AppError> {
        unavailable()
    }

    async fn count_quiz_scores_below(&self, _: i64) -> Result<u64, AppError> {
        unavailable()
    }

    async fn delete_quiz_score(&self, _: Uuid) -> Result<bool, AppError> {
        unavailable()
    }

    async fn delete_all_quiz_scores(&self) -> Result<u64, AppError> {
        unavailable()
    }
}
