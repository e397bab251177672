use uuid::Uuid;

use crate::{db::get_conn, errors::AppError, models::redis::RedisKey, state::RedisClient};

/// Returns whether a rating with `id` existed.
pub async fn delete_rating(id: Uuid, ns: &str, redis: &RedisClient) -> Result<bool, AppError> {
    let mut conn = get_conn(redis).await?;

    let member = id.to_string();
    let (deleted,): (u64,) = redis::pipe()
        .atomic()
        .cmd("DEL")
        .arg(RedisKey::rating(ns, id))
        .cmd("ZREM")
        .arg(RedisKey::ratings_by_time(ns))
        .arg(&member)
        .ignore()
        .cmd("ZREM")
        .arg(RedisKey::ratings_by_stars(ns))
        .arg(&member)
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(deleted > 0)
}

pub async fn delete_all_ratings(ns: &str, redis: &RedisClient) -> Result<u64, AppError> {
    let mut conn = get_conn(redis).await?;

    let index_key = RedisKey::ratings_by_time(ns);
    let ids: Vec<String> = redis::cmd("ZRANGE")
        .arg(&index_key)
        .arg(0)
        .arg(-1)
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    if ids.is_empty() {
        return Ok(0);
    }

    let keys: Vec<String> = ids.iter().map(|id| RedisKey::rating(ns, id)).collect();

    // Only the ids read above are unindexed, so ratings submitted meanwhile survive.
    let (deleted,): (u64,) = redis::pipe()
        .atomic()
        .cmd("DEL")
        .arg(&keys)
        .cmd("ZREM")
        .arg(&index_key)
        .arg(&ids)
        .ignore()
        .cmd("ZREM")
        .arg(RedisKey::ratings_by_stars(ns))
        .arg(&ids)
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    tracing::info!("Deleted {} rating(s) under {}", deleted, ns);

    Ok(deleted)
}
