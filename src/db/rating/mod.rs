pub mod delete;
pub mod get;
pub mod post;

pub use delete::{delete_all_ratings, delete_rating};
pub use get::{get_all_ratings, get_rating_stats};
pub use post::insert_rating;
