use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::AppError, models::round_to};

pub const MIN_STARS: i64 = 1;
pub const MAX_STARS: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub stars: u8,
    #[serde(default)]
    pub comment: String,
    /// Base64 encoded image, stored as-is.
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub company: String,
    pub timestamp: DateTime<Utc>,
}

impl Rating {
    pub fn new(stars: u8, comment: String, photo: String, company: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            stars,
            comment,
            photo,
            company,
            timestamp: Utc::now(),
        }
    }

    pub fn to_redis_hash(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("id".into(), self.id.to_string());
        map.insert("stars".into(), self.stars.to_string());
        map.insert("comment".into(), self.comment.clone());
        map.insert("photo".into(), self.photo.clone());
        map.insert("company".into(), self.company.clone());
        map.insert("timestamp".into(), self.timestamp.to_rfc3339());
        map
    }

    pub fn from_redis_hash(map: &HashMap<String, String>) -> Result<Self, AppError> {
        Ok(Self {
            id: map
                .get("id")
                .ok_or_else(|| AppError::Deserialization("Missing rating id".into()))?
                .parse()
                .map_err(|_| AppError::Deserialization("Invalid UUID for rating id".into()))?,

            stars: map
                .get("stars")
                .ok_or_else(|| AppError::Deserialization("Missing stars".into()))?
                .parse()
                .map_err(|_| AppError::Deserialization("Invalid stars".into()))?,

            comment: map.get("comment").cloned().unwrap_or_default(),
            photo: map.get("photo").cloned().unwrap_or_default(),
            company: map.get("company").cloned().unwrap_or_default(),

            timestamp: map
                .get("timestamp")
                .ok_or_else(|| AppError::Deserialization("Missing rating timestamp".into()))
                .and_then(|s| parse_timestamp(s))?,
        })
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Deserialization(format!("Invalid timestamp '{raw}': {e}")))
}

/// Rejects star values outside 1..=5.
pub fn validate_stars(stars: i64) -> Result<u8, AppError> {
    if !(MIN_STARS..=MAX_STARS).contains(&stars) {
        return Err(AppError::BadRequest(
            "Stars must be between 1 and 5".into(),
        ));
    }
    Ok(stars as u8)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingStats {
    pub total_ratings: u64,
    pub average_stars: f64,
    /// Keyed "1" through "5", always all five present.
    pub star_distribution: BTreeMap<String, u64>,
}

impl RatingStats {
    /// `counts[i]` is the number of ratings with `i + 1` stars.
    pub fn from_counts(total_ratings: u64, counts: [u64; 5]) -> Self {
        let star_distribution: BTreeMap<String, u64> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| ((i + 1).to_string(), *count))
            .collect();

        if total_ratings == 0 {
            return Self {
                total_ratings: 0,
                average_stars: 0.0,
                star_distribution,
            };
        }

        let sum: u64 = counts
            .iter()
            .enumerate()
            .map(|(i, count)| (i as u64 + 1) * count)
            .sum();

        Self {
            total_ratings,
            average_stars: round_to(sum as f64 / total_ratings as f64, 2),
            star_distribution,
        }
    }

    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut counts = [0u64; 5];
        for rating in ratings {
            let slot = (rating.stars as usize).checked_sub(1);
            if let Some(count) = slot.and_then(|i| counts.get_mut(i)) {
                *count += 1;
            }
        }
        Self::from_counts(ratings.len() as u64, counts)
    }
}
