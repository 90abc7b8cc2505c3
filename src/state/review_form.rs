#[cfg(test)]
#[path = "review_form_test.rs"]
mod review_form_test;

use crate::state::review::{Rating, Recommendation, Review};
use crate::util::event_bus::{BusEvent, EventBus};

/// A missing field reported by [`ReviewFormState::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name required.")]
    NameRequired,
    #[error("Review required.")]
    ReviewRequired,
    #[error("Rating required.")]
    RatingRequired,
    #[error("Recommendation required.")]
    RecommendationRequired,
}

/// Input state of the review form plus the errors from the last submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewFormState {
    pub name: String,
    pub review: String,
    pub rating: Option<Rating>,
    pub recommendation: Option<Recommendation>,
    pub errors: Vec<ValidationError>,
}

impl ReviewFormState {
    /// Validate the form and publish the review on success.
    ///
    /// Success needs a name, review text and rating; the recommendation may
    /// be unset. On success every field is reset. On failure the fields are
    /// kept and `errors` lists each missing field, recommendation included.
    pub fn submit(&mut self, bus: &EventBus) -> Option<Review> {
        self.errors.clear();

        match self.rating {
            Some(rating) if !self.name.is_empty() && !self.review.is_empty() => {
                let review = Review {
                    name: std::mem::take(&mut self.name),
                    review: std::mem::take(&mut self.review),
                    rating,
                    recommendation: self.recommendation.take(),
                };
                self.rating = None;
                log::debug!("review form: accepted review from {}", review.name);
                bus.publish(BusEvent::ReviewSubmitted(review.clone()));
                Some(review)
            }
            _ => {
                self.errors = self.missing_fields();
                log::debug!("review form: rejected with {} error(s)", self.errors.len());
                None
            }
        }
    }

    fn missing_fields(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        if self.review.is_empty() {
            errors.push(ValidationError::ReviewRequired);
        }
        if self.rating.is_none() {
            errors.push(ValidationError::RatingRequired);
        }
        if self.recommendation.is_none() {
            errors.push(ValidationError::RecommendationRequired);
        }
        errors
    }

    /// Error messages in display order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Set the rating from the selector's raw value. Unparseable values unset it.
    pub fn set_rating_raw(&mut self, raw: &str) {
        self.rating = match raw.parse::<u8>().map(Rating::try_from) {
            Ok(Ok(rating)) => Some(rating),
            _ => None,
        };
    }
}
