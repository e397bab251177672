use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::PortalStore,
    errors::AppError,
    models::{QuizScore, Rating, RatingStats},
};

/// Process-local store. Used by the test-suite and for running without Redis.
#[derive(Default)]
pub struct MemoryStore {
    ratings: RwLock<Vec<Rating>>,
    quiz_scores: RwLock<Vec<QuizScore>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortalStore for MemoryStore {
    async fn insert_rating(&self, rating: &Rating) -> Result<(), AppError> {
        self.ratings.write().await.push(rating.clone());
        Ok(())
    }

    async fn list_ratings(&self) -> Result<Vec<Rating>, AppError> {
        let mut ratings = self.ratings.read().await.clone();
        ratings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(ratings)
    }

    async fn delete_rating(&self, id: Uuid) -> Result<bool, AppError> {
        let mut ratings = self.ratings.write().await;
        let before = ratings.len();
        ratings.retain(|r| r.id != id);
        Ok(ratings.len() < before)
    }

    async fn delete_all_ratings(&self) -> Result<u64, AppError> {
        let mut ratings = self.ratings.write().await;
        let deleted = ratings.len() as u64;
        ratings.clear();
        Ok(deleted)
    }

    async fn rating_stats(&self) -> Result<RatingStats, AppError> {
        Ok(RatingStats::from_ratings(&self.ratings.read().await))
    }

    async fn insert_quiz_score(&self, quiz_score: &QuizScore) -> Result<(), AppError> {
        self.quiz_scores.write().await.push(quiz_score.clone());
        Ok(())
    }

    async fn list_quiz_scores(&self) -> Result<Vec<QuizScore>, AppError> {
        let mut scores = self.quiz_scores.read().await.clone();
        scores.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(scores)
    }

    async fn count_quiz_scores(&self) -> Result<u64, AppError> {
        Ok(self.quiz_scores.read().await.len() as u64)
    }

    async fn count_quiz_scores_below(&self, score: i64) -> Result<u64, AppError> {
        let scores = self.quiz_scores.read().await;
        Ok(scores.iter().filter(|s| s.score < score).count() as u64)
    }

    async fn delete_quiz_score(&self, id: Uuid) -> Result<bool, AppError> {
        let mut scores = self.quiz_scores.write().await;
        let before = scores.len();
        scores.retain(|s| s.id != id);
        Ok(scores.len() < before)
    }

    async fn delete_all_quiz_scores(&self) -> Result<u64, AppError> {
        let mut scores = self.quiz_scores.write().await;
        let deleted = scores.len() as u64;
        scores.clear();
        Ok(deleted)
    }
}
