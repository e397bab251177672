pub mod memory;
pub mod quiz;
pub mod rating;
pub mod redis_store;

use std::collections::HashMap;

use async_trait::async_trait;
use bb8::PooledConnection;
use bb8_redis::RedisConnectionManager;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{QuizScore, Rating, RatingStats},
    state::RedisClient,
};

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Document store holding the rating and quiz score collections.
///
/// Each call is a single logical operation. Single-document writes and
/// deletes are atomic; nothing is isolated across calls.
#[async_trait]
pub trait PortalStore: Send + Sync {
    async fn insert_rating(&self, rating: &Rating) -> Result<(), AppError>;

    /// Newest first.
    async fn list_ratings(&self) -> Result<Vec<Rating>, AppError>;

    /// `false` when no rating matched.
    async fn delete_rating(&self, id: Uuid) -> Result<bool, AppError>;

    async fn delete_all_ratings(&self) -> Result<u64, AppError>;

    async fn rating_stats(&self) -> Result<RatingStats, AppError>;

    async fn insert_quiz_score(&self, quiz_score: &QuizScore) -> Result<(), AppError>;

    /// Newest first.
    async fn list_quiz_scores(&self) -> Result<Vec<QuizScore>, AppError>;

    async fn count_quiz_scores(&self) -> Result<u64, AppError>;

    async fn count_quiz_scores_below(&self, score: i64) -> Result<u64, AppError>;

    async fn delete_quiz_score(&self, id: Uuid) -> Result<bool, AppError>;

    async fn delete_all_quiz_scores(&self) -> Result<u64, AppError>;
}

pub(crate) async fn get_conn(
    redis: &RedisClient,
) -> Result<PooledConnection<'_, RedisConnectionManager>, AppError> {
    redis.get().await.map_err(AppError::from)
}

/// Flattens a document into `HSET` field/value arguments.
pub(crate) fn hash_args(fields: &HashMap<String, String>) -> Vec<&str> {
    fields
        .iter()
        .flat_map(|(k, v)| [k.as_str(), v.as_str()])
        .collect()
}
