use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::{PortalStore, quiz, rating},
    errors::AppError,
    models::{QuizScore, Rating, RatingStats},
    state::RedisClient,
};

#[derive(Clone)]
pub struct RedisStore {
    redis: RedisClient,
    namespace: String,
}

impl RedisStore {
    pub fn new(redis: RedisClient, namespace: impl Into<String>) -> Self {
        Self {
            redis,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl PortalStore for RedisStore {
    async fn insert_rating(&self, new_rating: &Rating) -> Result<(), AppError> {
        rating::insert_rating(new_rating, &self.namespace, &self.redis).await
    }

    async fn list_ratings(&self) -> Result<Vec<Rating>, AppError> {
        rating::get_all_ratings(&self.namespace, &self.redis).await
    }

    async fn delete_rating(&self, id: Uuid) -> Result<bool, AppError> {
        rating::delete_rating(id, &self.namespace, &self.redis).await
    }

    async fn delete_all_ratings(&self) -> Result<u64, AppError> {
        rating::delete_all_ratings(&self.namespace, &self.redis).await
    }

    async fn rating_stats(&self) -> Result<RatingStats, AppError> {
        rating::get_rating_stats(&self.namespace, &self.redis).await
    }

    async fn insert_quiz_score(&self, quiz_score: &QuizScore) -> Result<(), AppError> {
        quiz::insert_quiz_score(quiz_score, &self.namespace, &self.redis).await
    }

    async fn list_quiz_scores(&self) -> Result<Vec<QuizScore>, AppError> {
        quiz::get_all_quiz_scores(&self.namespace, &self.redis).await
    }

    async fn count_quiz_scores(&self) -> Result<u64, AppError> {
        quiz::count_quiz_scores(&self.namespace, &self.redis).await
    }

    async fn count_quiz_scores_below(&self, score: i64) -> Result<u64, AppError> {
        quiz::count_quiz_scores_below(score, &self.namespace, &self.redis).await
    }

    async fn delete_quiz_score(&self, id: Uuid) -> Result<bool, AppError> {
        quiz::delete_quiz_score(id, &self.namespace, &self.redis).await
    }

    async fn delete_all_quiz_scores(&self) -> Result<u64, AppError> {
        quiz::delete_all_quiz_scores(&self.namespace, &self.redis).await
    }
}
