pub mod catalog;
pub mod quiz;
pub mod rating;
pub mod redis;
pub mod response;

pub use catalog::{CatalogImage, CatalogListing};
pub use quiz::{QuizScore, QuizStats};
pub use rating::{Rating, RatingStats};

/// Rounds to `decimals` places, ties to even.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_to(4.125, 2), 4.12);
        assert_eq!(round_to(70.25, 1), 70.2);
        assert_eq!(round_to(6.25, 1), 6.2);
        assert_eq!(round_to(2.0 / 3.0 * 100.0, 1), 66.7);
    }
}
