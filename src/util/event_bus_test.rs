use super::*;

use crate::state::review::{Rating, Recommendation};

fn review(name: &str) -> Review {
    Review {
        name: name.to_owned(),
        review: "Great socks".to_owned(),
        rating: Rating::try_from(5).unwrap(),
        recommendation: Some(Recommendation::Yes),
    }
}

fn names_sink() -> (Arc<Mutex<Vec<String>>>, impl Fn(&BusEvent) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handler = move |event: &BusEvent| {
        let BusEvent::ReviewSubmitted(r) = event;
        sink.lock().unwrap().push(r.name.clone());
    };
    (seen, handler)
}

// =============================================================
// Topic
// =============================================================

#[test]
fn topic_wire_name() {
    assert_eq!(Topic::ReviewSubmitted.as_str(), "review-submitted");
    assert_eq!(Topic::ReviewSubmitted.to_string(), "review-submitted");
}

#[test]
fn event_maps_to_topic() {
    assert_eq!(BusEvent::ReviewSubmitted(review("a")).topic(), Topic::ReviewSubmitted);
}

// =============================================================
// publish / subscribe
// =============================================================

#[test]
fn publish_without_subscribers_returns_zero() {
    let bus = EventBus::new();
    assert_eq!(bus.publish(BusEvent::ReviewSubmitted(review("a"))), 0);
}

#[test]
fn publish_reaches_subscriber_synchronously() {
    let bus = EventBus::new();
    let (seen, handler) = names_sink();
    bus.subscribe(Topic::ReviewSubmitted, handler);

    let delivered = bus.publish(BusEvent::ReviewSubmitted(review("Alice")));

    assert_eq!(delivered, 1);
    assert_eq!(*seen.lock().unwrap(), vec!["Alice".to_owned()]);
}

#[test]
fn handlers_run_in_registration_order() {
    let bus = EventBus::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        bus.subscribe(Topic::ReviewSubmitted, move |_| order.lock().unwrap().push(tag));
    }

    assert_eq!(bus.publish(BusEvent::ReviewSubmitted(review("a"))), 3);
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn clones_share_registry() {
    let bus = EventBus::new();
    let publisher = bus.clone();
    let (seen, handler) = names_sink();
    bus.subscribe(Topic::ReviewSubmitted, handler);

    publisher.publish(BusEvent::ReviewSubmitted(review("Bob")));

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(publisher.subscriber_count(Topic::ReviewSubmitted), 1);
}

// =============================================================
// unsubscribe
// =============================================================

#[test]
fn unsubscribe_stops_delivery() {
    let bus = EventBus::new();
    let (seen, handler) = names_sink();
    let id = bus.subscribe(Topic::ReviewSubmitted, handler);

    assert!(bus.unsubscribe(id));
    assert_eq!(bus.publish(BusEvent::ReviewSubmitted(review("a"))), 0);
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(bus.subscriber_count(Topic::ReviewSubmitted), 0);
}

#[test]
fn unsubscribe_unknown_id_returns_false() {
    let bus = EventBus::new();
    let id = bus.subscribe(Topic::ReviewSubmitted, |_| {});
    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
}

// =============================================================
// Re-entrancy
// =============================================================

#[test]
fn handler_may_subscribe_during_publish() {
    let bus = EventBus::new();
    let inner_bus = bus.clone();
    let late_calls = Arc::new(Mutex::new(0));
    let late = Arc::clone(&late_calls);
    bus.subscribe(Topic::ReviewSubmitted, move |_| {
        let late = Arc::clone(&late);
        inner_bus.subscribe(Topic::ReviewSubmitted, move |_| *late.lock().unwrap() += 1);
    });

    // Handlers added mid-publish are not invoked by that publish.
    assert_eq!(bus.publish(BusEvent::ReviewSubmitted(review("a"))), 1);
    assert_eq!(*late_calls.lock().unwrap(), 0);
    assert_eq!(bus.subscriber_count(Topic::ReviewSubmitted), 2);
}

#[test]
fn handler_may_publish_during_publish() {
    let bus = EventBus::new();
    let inner_bus = bus.clone();
    let (seen, sink) = names_sink();
    bus.subscribe(Topic::ReviewSubmitted, move |event| {
        let BusEvent::ReviewSubmitted(r) = event;
        if r.name == "outer" {
            inner_bus.publish(BusEvent::ReviewSubmitted(review("inner")));
        }
    });
    bus.subscribe(Topic::ReviewSubmitted, sink);

    bus.publish(BusEvent::ReviewSubmitted(review("outer")));

    assert_eq!(*seen.lock().unwrap(), vec!["inner".to_owned(), "outer".to_owned()]);
}
