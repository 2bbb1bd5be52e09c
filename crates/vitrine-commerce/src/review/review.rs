//! Review record.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId, UserId};

/// Minimum accepted comment length, in characters.
pub const MIN_COMMENT_LEN: usize = 10;

/// A product review.
///
/// Reviews are append-mostly: a review can be deleted, and `updated_at`
/// records an edit when the hosting application performs one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier, assigned by the data source.
    pub id: ReviewId,
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Author identifier.
    pub user_id: UserId,
    /// Author display name.
    #[serde(default)]
    pub user_name: String,
    /// Author email.
    #[serde(default)]
    pub user_email: String,
    /// Star rating in [1, 5].
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of the last edit, if any.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Review {
    /// Create a new review, stamped with the current time.
    pub fn new(
        id: impl Into<ReviewId>,
        product_id: impl Into<ProductId>,
        user_id: impl Into<UserId>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            user_id: user_id.into(),
            user_name: String::new(),
            user_email: String::new(),
            rating,
            comment: comment.into(),
            created_at: current_timestamp(),
            updated_at: None,
        }
    }

    /// Set the author's display name and email.
    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.user_name = name.into();
        self.user_email = email.into();
        self
    }

    /// Validate the record at the ingestion boundary.
    ///
    /// The aggregates never validate; a review rejected here must not reach
    /// them.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CommerceError::Validation(format!(
                "rating must be between 1 and 5, got {}",
                self.rating
            )));
        }
        if self.comment.trim().chars().count() < MIN_COMMENT_LEN {
            return Err(CommerceError::Validation(format!(
                "comment must be at least {} characters",
                MIN_COMMENT_LEN
            )));
        }
        Ok(())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
