pub mod delete;
pub mod get;
pub mod post;

pub use delete::{delete_all_quiz_scores, delete_quiz_score};
pub use get::{count_quiz_scores, count_quiz_scores_below, get_all_quiz_scores};
pub use post::insert_quiz_score;
