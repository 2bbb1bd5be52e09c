//! Derived rating aggregates.
//!
//! Pure views over a product's reviews; nothing here is stored.

use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Average rating and review count for a product.
///
/// `average` is the unrounded arithmetic mean; rounding for display is the
/// rendering layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RatingSummary {
    /// Mean rating, exactly `0.0` when there are no reviews.
    pub average: f64,
    /// Number of reviews.
    pub count: usize,
}

/// Compute the rating summary for a set of reviews.
pub fn rating_summary(reviews: &[Review]) -> RatingSummary {
    if reviews.is_empty() {
        return RatingSummary::default();
    }
    let total: u64 = reviews.iter().map(|r| r.rating as u64).sum();
    RatingSummary {
        average: total as f64 / reviews.len() as f64,
        count: reviews.len(),
    }
}

/// Order reviews by recency, newest first.
///
/// The sort is stable, so reviews sharing a timestamp keep their input
/// order.
pub fn newest_first(reviews: &[Review]) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// Count of reviews at each star level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    /// Tally the distribution from a set of reviews.
    ///
    /// Ratings outside [1, 5] are ignored; they can't occur through
    /// validated ingestion.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut dist = Self::default();
        for review in reviews {
            match review.rating {
                5 => dist.five_star += 1,
                4 => dist.four_star += 1,
                3 => dist.three_star += 1,
                2 => dist.two_star += 1,
                1 => dist.one_star += 1,
                _ => {}
            }
        }
        dist
    }

    /// Total number of tallied reviews.
    pub fn total(&self) -> u32 {
        self.five_star + self.four_star + self.three_star + self.two_star + self.one_star
    }

    /// Percentage of reviews at a star level; `0.0` when there are none.
    pub fn percentage(&self, stars: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let count = match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        };
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str, rating: u8, created_at: i64) -> Review {
        let mut review = Review::new(id, "prod-1", "user-1", rating, "Runs ahead a few seconds.");
        review.created_at = created_at;
        review
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = rating_summary(&[]);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn test_summary_mean() {
        let reviews = vec![review("r1", 4, 10), review("r2", 2, 20)];
        let summary = rating_summary(&reviews);
        assert_eq!(summary.average, 3.0);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn test_summary_is_unrounded() {
        let reviews = vec![review("r1", 5, 10), review("r2", 4, 20), review("r3", 4, 30)];
        let summary = rating_summary(&reviews);
        assert!((summary.average - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_newest_first() {
        let reviews = vec![review("r1", 4, 100), review("r2", 5, 300), review("r3", 3, 200)];
        let sorted = newest_first(&reviews);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r3", "r1"]);
    }

    #[test]
    fn test_newest_first_is_stable_on_ties() {
        let reviews = vec![review("r1", 4, 100), review("r2", 5, 100)];
        let sorted = newest_first(&reviews);
        assert_eq!(sorted[0].id.as_str(), "r1");
        assert_eq!(sorted[1].id.as_str(), "r2");
    }

    #[test]
    fn test_distribution() {
        let reviews = vec![
            review("r1", 5, 10),
            review("r2", 5, 20),
            review("r3", 3, 30),
            review("r4", 1, 40),
        ];
        let dist = RatingDistribution::from_reviews(&reviews);

        assert_eq!(dist.five_star, 2);
        assert_eq!(dist.three_star, 1);
        assert_eq!(dist.one_star, 1);
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.percentage(5), 50.0);
        assert_eq!(dist.percentage(2), 0.0);
    }

    #[test]
    fn test_distribution_empty_percentage() {
        let dist = RatingDistribution::default();
        assert_eq!(dist.percentage(5), 0.0);
    }
}
