pub mod catalog;
pub mod health;
pub mod quiz;
pub mod rating;

pub use catalog::{get_catalog_images_handler, serve_catalog_image_handler};
pub use health::health_handler;
pub use quiz::{
    delete_all_quiz_scores_handler, delete_quiz_score_handler, get_quiz_scores_handler,
    get_quiz_stats_handler, submit_quiz_score_handler,
};
pub use rating::{
    delete_all_ratings_handler, delete_rating_handler, get_rating_stats_handler,
    get_ratings_handler, submit_rating_handler,
};
