use std::collections::HashMap;

use crate::{
    db::get_conn,
    errors::AppError,
    models::{
        Rating, RatingStats,
        rating::{MAX_STARS, MIN_STARS},
        redis::RedisKey,
    },
    state::RedisClient,
};

/// All ratings, newest first.
pub async fn get_all_ratings(ns: &str, redis: &RedisClient) -> Result<Vec<Rating>, AppError> {
    let mut conn = get_conn(redis).await?;

    let ids: Vec<String> = redis::cmd("ZREVRANGE")
        .arg(RedisKey::ratings_by_time(ns))
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
        pipe.cmd("HGETALL").arg(RedisKey::rating(ns, id));
    }

    let maps: Vec<HashMap<String, String>> = pipe
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let mut ratings = Vec::with_capacity(maps.len());
    for map in maps {
        // document removed between the index read and the fetch
        if map.is_empty() {
            continue;
        }
        ratings.push(Rating::from_redis_hash(&map)?);
    }

    Ok(ratings)
}

/// Total and per-star counts, read from the star index without loading any
/// rating document.
pub async fn get_rating_stats(ns: &str, redis: &RedisClient) -> Result<RatingStats, AppError> {
    let mut conn = get_conn(redis).await?;

    let key = RedisKey::ratings_by_stars(ns);
    let mut pipe = redis::pipe();
    pipe.cmd("ZCARD").arg(&key);
    for stars in MIN_STARS..=MAX_STARS {
        pipe.cmd("ZCOUNT").arg(&key).arg(stars).arg(stars);
    }

    let (total, one, two, three, four, five): (u64, u64, u64, u64, u64, u64) = pipe
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(RatingStats::from_counts(total, [one, two, three, four, five]))
}
