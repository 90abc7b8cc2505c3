#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use crate::state::review::Review;
use crate::util::event_bus::{BusEvent, EventBus, SubscriptionId, Topic};

/// Collection of published reviews, owned by the application root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewsState {
    reviews: Vec<Review>,
}

impl ReviewsState {
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }
}

/// Forward every submitted review on `bus` to `sink`.
pub fn subscribe_reviews<F>(bus: &EventBus, sink: F) -> SubscriptionId
where
    F: Fn(Review) + Send + Sync + 'static,
{
    bus.subscribe(Topic::ReviewSubmitted, move |event| match event {
        BusEvent::ReviewSubmitted(review) => sink(review.clone()),
    })
}
