//! Customer reviews.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::ReviewId;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    /// Reviewer display name.
    pub author: String,
    /// Star rating, 1 to `MAX_RATING`.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Create a review, clamping the rating into `1..=MAX_RATING`.
    pub fn new(
        id: impl Into<ReviewId>,
        author: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into().trim().to_string(),
            rating: rating.clamp(1, MAX_RATING),
            comment: comment.into(),
            date,
        }
    }

    /// Filled and empty stars, e.g. "★★★★☆" for a 4.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating);
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(empty))
    }

    /// Date as shown under the review (e.g. "2023-10-15").
    pub fn date_display(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 15).unwrap()
    }

    #[test]
    fn test_stars() {
        let review = Review::new(1u32, "Rider", 4, "Good", date());
        assert_eq!(review.stars(), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
    }

    #[test]
    fn test_rating_clamped() {
        assert_eq!(Review::new(1u32, "A", 0, "", date()).rating, 1);
        assert_eq!(Review::new(2u32, "B", 9, "", date()).rating, 5);
    }

    #[test]
    fn test_author_trimmed_and_date_display() {
        let review = Review::new(3u32, "Ganesh Acharya ", 5, "", date());
        assert_eq!(review.author, "Ganesh Acharya");
        assert_eq!(review.date_display(), "2023-10-15");
    }
}
