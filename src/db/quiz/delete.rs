use uuid::Uuid;

use crate::{db::get_conn, errors::AppError, models::redis::RedisKey, state::RedisClient};

/// Returns whether a quiz score with `id` existed.
pub async fn delete_quiz_score(id: Uuid, ns: &str, redis: &RedisClient) -> Result<bool, AppError> {
    let mut conn = get_conn(redis).await?;

    let member = id.to_string();
    let (deleted,): (u64,) = redis::pipe()
        .atomic()
        .cmd("DEL")
        .arg(RedisKey::quiz_score(ns, id))
        .cmd("ZREM")
        .arg(RedisKey::quiz_scores_by_time(ns))
        .arg(&member)
        .ignore()
        .cmd("ZREM")
        .arg(RedisKey::quiz_scores_by_score(ns))
        .arg(&member)
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(deleted > 0)
}

pub async fn delete_all_quiz_scores(ns: &str, redis: &RedisClient) -> Result<u64, AppError> {
    let mut conn = get_conn(redis).await?;

    let by_time = RedisKey::quiz_scores_by_time(ns);
    let ids: Vec<String> = redis::cmd("ZRANGE")
        .arg(&by_time)
        .arg(0)
        .arg(-1)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    if ids.is_empty() {
        return Ok(0);
    }

    let keys: Vec<String> = ids.iter().map(|id| RedisKey::quiz_score(ns, id)).collect();

    let (deleted,): (u64,) = redis::pipe()
        .atomic()
        .cmd("DEL")
        .arg(&keys)
        .cmd("ZREM")
        .arg(&by_time)
        .arg(&ids)
        .ignore()
        .cmd("ZREM")
        .arg(RedisKey::quiz_scores_by_score(ns))
        .arg(&ids)
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    tracing::info!("Deleted {} quiz score(s) under {}", deleted, ns);

    Ok(deleted)
}
