use std::collections::HashMap;

use crate::{
    db::get_conn,
    errors::AppError,
    models::{QuizScore, redis::RedisKey},
    state::RedisClient,
};

/// All quiz scores, newest first.
pub async fn get_all_quiz_scores(
    ns: &str,
    redis: &RedisClient,
) -> Result<Vec<QuizScore>, AppError> {
    let mut conn = get_conn(redis).await?;

    let ids: Vec<String> = redis::cmd("ZREVRANGE")
        .arg(RedisKey::quiz_scores_by_time(ns))
        .arg(0)
        .arg(-1)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut pipe = redis::pipe();
    for id in &ids {
        pipe.cmd("HGETALL").arg(RedisKey::quiz_score(ns, id));
    }

    let maps: Vec<HashMap<String, String>> = pipe
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    maps.iter()
        .filter(|map| !map.is_empty())
        .map(QuizScore::from_redis_hash)
        .collect()
}

pub async fn count_quiz_scores(ns: &str, redis: &RedisClient) -> Result<u64, AppError> {
    let mut conn = get_conn(redis).await?;

    let total: u64 = redis::cmd("ZCARD")
        .arg(RedisKey::quiz_scores_by_score(ns))
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(total)
}

/// Number of recorded scores strictly lower than `score`.
pub async fn count_quiz_scores_below(
    score: i64,
    ns: &str,
    redis: &RedisClient,
) -> Result<u64, AppError> {
    let mut conn = get_conn(redis).await?;

    let below: u64 = redis::cmd("ZCOUNT")
        .arg(RedisKey::quiz_scores_by_score(ns))
        .arg("-inf")
        .arg(exclusive_bound(score))
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(below)
}

/// `ZCOUNT` bound that excludes `score` itself.
pub(crate) fn exclusive_bound(score: i64) -> String {
    format!("({score}")
}
