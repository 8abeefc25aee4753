//! Performance review history, keyed by review period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{OffboardError, OffboardResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// Unique key, e.g. "2025 H2"
    pub period: String,
    pub reviewer: String,
    pub date: NaiveDate,
    /// 1.0 to 5.0
    pub rating: f64,
    pub comments: String,
}

impl PerformanceReview {
    fn validate(&self) -> OffboardResult<()> {
        if self.period.trim().is_empty() {
            return Err(OffboardError::missing_field("period"));
        }
        if self.reviewer.trim().is_empty() {
            return Err(OffboardError::missing_field("reviewer"));
        }
        if !(1.0..=5.0).contains(&self.rating) {
            return Err(OffboardError::invalid_input(
                "rating",
                self.rating.to_string(),
                "Rating must be between 1.0 and 5.0",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewHistory {
    reviews: Vec<PerformanceReview>,
}

impl ReviewHistory {
    pub fn new(reviews: Vec<PerformanceReview>) -> Self {
        ReviewHistory { reviews }
    }

    pub fn all(&self) -> &[PerformanceReview] {
        &self.reviews
    }

    pub fn get(&self, period: &str) -> Option<&PerformanceReview> {
        self.reviews.iter().find(|r| r.period == period)
    }

    /// Add a review for a period not yet on file.
    pub fn add(&mut self, review: PerformanceReview) -> OffboardResult<()> {
        review.validate()?;
        if self.get(&review.period).is_some() {
            return Err(OffboardError::duplicate("reviews", review.period));
        }
        self.reviews.push(review);
        Ok(())
    }

    /// Replace the review for `period`. The edited review may rename the
    /// period as long as the new key stays unique.
    pub fn edit(&mut self, period: &str, updated: PerformanceReview) -> OffboardResult<()> {
        updated.validate()?;
        let index = self
            .reviews
            .iter()
            .position(|r| r.period == period)
            .ok_or_else(|| OffboardError::not_found("reviews", period))?;
        if updated.period != period && self.get(&updated.period).is_some() {
            return Err(OffboardError::duplicate("reviews", updated.period));
        }
        self.reviews[index] = updated;
        Ok(())
    }

    pub fn delete(&mut self, period: &str) -> OffboardResult<PerformanceReview> {
        let index = self
            .reviews
            .iter()
            .position(|r| r.period == period)
            .ok_or_else(|| OffboardError::not_found("reviews", period))?;
        Ok(self.reviews.remove(index))
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        Some(self.reviews.iter().map(|r| r.rating).sum::<f64>() / self.reviews.len() as f64)
    }
}

pub(crate) fn seed_reviews(manager: &str, joined: NaiveDate) -> Vec<PerformanceReview> {
    let year = chrono::Datelike::year(&joined).max(2023);
    let review = |period: String, date: NaiveDate, rating: f64, comments: &str| PerformanceReview {
        period,
        reviewer: manager.to_string(),
        date,
        rating,
        comments: comments.to_string(),
    };
    let date = |y: i32, m: u32| NaiveDate::from_ymd_opt(y, m, 15).unwrap_or(joined);
    vec![
        review(format!("{} H1", year), date(year, 7), 4.0, "Consistently meets expectations."),
        review(format!("{} H2", year), date(year + 1, 1), 4.5, "Strong delivery on key projects."),
        review(format!("{} H1", year + 1), date(year + 1, 7), 4.2, "Good collaboration across teams."),
    ]
}
