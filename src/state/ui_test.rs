use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_info_tab_is_shipping() {
    let state = UiState::default();
    assert_eq!(state.info_tab, InfoTab::Shipping);
}

#[test]
fn ui_state_default_review_tab_is_reviews() {
    let state = UiState::default();
    assert_eq!(state.review_tab, ReviewTab::Reviews);
}

// =============================================================
// InfoTab
// =============================================================

#[test]
fn info_tab_labels() {
    let labels: Vec<&str> = InfoTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Shipping", "Details"]);
}

#[test]
fn select_info_tab_switches_and_cycles() {
    let mut state = UiState::default();
    assert!(state.select_info_tab(InfoTab::Details));
    assert_eq!(state.info_tab, InfoTab::Details);

    assert!(state.select_info_tab(InfoTab::Shipping));
    assert_eq!(state.info_tab, InfoTab::Shipping);
}

#[test]
fn select_info_tab_again_is_noop() {
    let mut state = UiState::default();
    state.select_info_tab(InfoTab::Details);
    let before = state;

    assert!(!state.select_info_tab(InfoTab::Details));
    assert_eq!(state, before);
}

// =============================================================
// ReviewTab
// =============================================================

#[test]
fn review_tab_labels() {
    let labels: Vec<&str> = ReviewTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Reviews", "Make a Review"]);
}

#[test]
fn review_tab_variants_are_distinct() {
    assert_ne!(ReviewTab::Reviews, ReviewTab::MakeReview);
}

#[test]
fn select_review_tab_switches_and_cycles() {
    let mut state = UiState::default();
    assert!(state.select_review_tab(ReviewTab::MakeReview));
    assert_eq!(state.review_tab, ReviewTab::MakeReview);

    assert!(state.select_review_tab(ReviewTab::Reviews));
    assert_eq!(state.review_tab, ReviewTab::Reviews);
}

#[test]
fn select_review_tab_again_is_noop() {
    let mut state = UiState::default();
    let before = state;

    assert!(!state.select_review_tab(ReviewTab::Reviews));
    assert_eq!(state, before);
}

#[test]
fn exactly_one_tab_active_after_any_selection() {
    let mut state = UiState::default();
    for info in InfoTab::ALL {
        for review in ReviewTab::ALL {
            state.select_info_tab(*info);
            state.select_review_tab(*review);
            assert_eq!(InfoTab::ALL.iter().filter(|t| **t == state.info_tab).count(), 1);
            assert_eq!(ReviewTab::ALL.iter().filter(|t| **t == state.review_tab).count(), 1);
        }
    }
}

#[test]
fn selecting_review_tab_leaves_info_tab_alone() {
    let mut state = UiState::default();
    state.select_info_tab(InfoTab::Details);
    state.select_review_tab(ReviewTab::MakeReview);
    assert_eq!(state.info_tab, InfoTab::Details);
}
