use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{rating::parse_timestamp, round_to},
};

pub const DEFAULT_TOTAL_QUESTIONS: i64 = 10;
pub const DEFAULT_CORRECT_ANSWERS: i64 = 0;

/// Reported for a submission when no earlier scores exist.
pub const FIRST_SUBMISSION_PERCENTILE: f64 = 50.0;

fn default_total_questions() -> i64 {
    DEFAULT_TOTAL_QUESTIONS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizScore {
    pub id: Uuid,
    /// Percentage, 0-100.
    pub score: i64,
    #[serde(default = "default_total_questions")]
    pub total_questions: i64,
    #[serde(default)]
    pub correct_answers: i64,
    pub timestamp: DateTime<Utc>,
}

impl QuizScore {
    pub fn new(score: i64, total_questions: i64, correct_answers: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            score,
            total_questions,
            correct_answers,
            timestamp: Utc::now(),
        }
    }

    pub fn to_redis_hash(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("id".into(), self.id.to_string());
        map.insert("score".into(), self.score.to_string());
        map.insert("total_questions".into(), self.total_questions.to_string());
        map.insert("correct_answers".into(), self.correct_answers.to_string());
        map.insert("timestamp".into(), self.timestamp.to_rfc3339());
        map
    }

    pub fn from_redis_hash(map: &HashMap<String, String>) -> Result<Self, AppError> {
        Ok(Self {
            id: map
                .get("id")
                .ok_or_else(|| AppError::Deserialization("Missing quiz score id".into()))?
                .parse()
                .map_err(|_| AppError::Deserialization("Invalid UUID for quiz score id".into()))?,

            score: map
                .get("score")
                .ok_or_else(|| AppError::Deserialization("Missing score".into()))?
                .parse()
                .map_err(|_| AppError::Deserialization("Invalid score".into()))?,

            total_questions: map
                .get("total_questions")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOTAL_QUESTIONS),

            correct_answers: map
                .get("correct_answers")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CORRECT_ANSWERS),

            timestamp: map
                .get("timestamp")
                .ok_or_else(|| AppError::Deserialization("Missing quiz score timestamp".into()))
                .and_then(|s| parse_timestamp(s))?,
        })
    }
}

/// Share of recorded scores strictly below the new one, as a percentage with
/// one decimal. `total_scores` includes the new submission.
pub fn percentile(scores_below: u64, total_scores: u64) -> f64 {
    if total_scores <= 1 {
        return FIRST_SUBMISSION_PERCENTILE;
    }
    round_to(scores_below as f64 / total_scores as f64 * 100.0, 1)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizStats {
    pub total_attempts: u64,
    pub average_score: f64,
    pub highest_score: i64,
}

impl QuizStats {
    pub fn from_scores(scores: &[QuizScore]) -> Self {
        let Some(highest_score) = scores.iter().map(|s| s.score).max() else {
            return Self {
                total_attempts: 0,
                average_score: 0.0,
                highest_score: 0,
            };
        };

        let total_attempts = scores.len() as u64;
        let sum: i64 = scores.iter().map(|s| s.score).sum();

        Self {
            total_attempts,
            average_score: round_to(sum as f64 / total_attempts as f64, 1),
            highest_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submission_gets_fifty() {
        assert_eq!(percentile(0, 1), 50.0);
        assert_eq!(percentile(0, 0), 50.0);
    }

    #[test]
    fn percentile_counts_strictly_lower_scores() {
        // 50, 70, 90 submitted in order
        assert_eq!(percentile(1, 2), 50.0);
        assert_eq!(percentile(2, 3), 66.7);
        // lowest of four
        assert_eq!(percentile(0, 4), 0.0);
        // 6.25 ties to even
        assert_eq!(percentile(1, 16), 6.2);
    }

    #[test]
    fn stats_on_empty_collection() {
        let stats = QuizStats::from_scores(&[]);
        assert_eq!(
            stats,
            QuizStats {
                total_attempts: 0,
                average_score: 0.0,
                highest_score: 0,
            }
        );
    }

    #[test]
    fn stats_average_and_max() {
        let scores: Vec<QuizScore> = [50, 70, 95]
            .into_iter()
            .map(|s| QuizScore::new(s, 10, s / 10))
            .collect();
        let stats = QuizStats::from_scores(&scores);
        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.average_score, 71.7);
        assert_eq!(stats.highest_score, 95);
    }

    #[test]
    fn stats_average_ties_round_to_even() {
        // 281 / 4 = 70.25
        let scores: Vec<QuizScore> = [70, 70, 70, 71]
            .into_iter()
            .map(|s| QuizScore::new(s, 10, 7))
            .collect();
        assert_eq!(QuizStats::from_scores(&scores).average_score, 70.2);
    }

    #[test]
    fn missing_counts_fall_back_to_defaults() {
        let mut map = QuizScore::new(80, 20, 16).to_redis_hash();
        map.remove("total_questions");
        map.remove("correct_answers");

        let decoded = QuizScore::from_redis_hash(&map).unwrap();
        assert_eq!(decoded.score, 80);
        assert_eq!(decoded.total_questions, 10);
        assert_eq!(decoded.correct_answers, 0);
    }

    #[test]
    fn json_documents_use_the_same_defaults() {
        let doc = r#"{"id":"6f1c2a4e-8a8f-4a43-9a51-2d6c1d1c3b7e","score":40,"timestamp":"2026-01-05T10:00:00Z"}"#;
        let decoded: QuizScore = serde_json::from_str(doc).unwrap();
        assert_eq!(decoded.total_questions, 10);
        assert_eq!(decoded.correct_answers, 0);
    }
}
