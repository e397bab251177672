use crate::{
    db::{get_conn, hash_args},
    errors::AppError,
    models::{QuizScore, redis::RedisKey},
    state::RedisClient,
};

pub async fn insert_quiz_score(
    quiz_score: &QuizScore,
    ns: &str,
    redis: &RedisClient,
) -> Result<(), AppError> {
    let mut conn = get_conn(redis).await?;

    let fields = quiz_score.to_redis_hash();
    let member = quiz_score.id.to_string();

    let _: () = redis::pipe()
        .atomic()
        .cmd("HSET")
        .arg(RedisKey::quiz_score(ns, quiz_score.id))
        .arg(hash_args(&fields))
        .ignore()
        .cmd("ZADD")
        .arg(RedisKey::quiz_scores_by_time(ns))
        .arg(quiz_score.timestamp.timestamp_micros())
        .arg(&member)
        .ignore()
        .cmd("ZADD")
        .arg(RedisKey::quiz_scores_by_score(ns))
        .arg(quiz_score.score)
        .arg(&member)
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
