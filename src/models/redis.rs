use std::fmt::Display;

/// Key layout of the document store. Every key lives under the configured
/// database name.
pub struct RedisKey;

impl RedisKey {
    pub fn rating(ns: &str, id: impl Display) -> String {
        format!("{ns}:rating:{id}")
    }

    /// Sorted set of rating ids scored by creation time.
    pub fn ratings_by_time(ns: &str) -> String {
        format!("{ns}:ratings:by_time")
    }

    /// Sorted set of rating ids scored by star value.
    pub fn ratings_by_stars(ns: &str) -> String {
        format!("{ns}:ratings:by_stars")
    }

    pub fn quiz_score(ns: &str, id: impl Display) -> String {
        format!("{ns}:quiz_score:{id}")
    }

    /// Sorted set of quiz score ids scored by creation time.
    pub fn quiz_scores_by_time(ns: &str) -> String {
        format!("{ns}:quiz_scores:by_time")
    }

    /// Sorted set of quiz score ids scored by the score value.
    pub fn quiz_scores_by_score(ns: &str) -> String {
        format!("{ns}:quiz_scores:by_score")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn keys_are_namespaced() {
        let id = Uuid::nil();
        assert_eq!(
            RedisKey::rating("inovix_portal", id),
            "inovix_portal:rating:00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            RedisKey::quiz_scores_by_score("test"),
            "test:quiz_scores:by_score"
        );
    }
}
