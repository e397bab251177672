use crate::{
    db::{get_conn, hash_args},
    errors::AppError,
    models::{Rating, redis::RedisKey},
    state::RedisClient,
};

pub async fn insert_rating(rating: &Rating, ns: &str, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = get_conn(redis).await?;

    let fields = rating.to_redis_hash();

    let _: () = redis::pipe()
        .atomic()
        .cmd("HSET")
        .arg(RedisKey::rating(ns, rating.id))
        .arg(hash_args(&fields))
        .ignore()
        .cmd("ZADD")
        .arg(RedisKey::ratings_by_time(ns))
        .arg(rating.timestamp.timestamp_micros())
        .arg(rating.id.to_string())
        .ignore()
        .cmd("ZADD")
        .arg(RedisKey::ratings_by_stars(ns))
        .arg(rating.stars)
        .arg(rating.id.to_string())
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
