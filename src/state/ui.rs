#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the tab selectors.
///
/// Each selector holds exactly one active tab. Selecting the active tab
/// again leaves the state unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub info_tab: InfoTab,
    pub review_tab: ReviewTab,
}

impl UiState {
    /// Make `tab` the active info tab. Returns `false` if it already was.
    pub fn select_info_tab(&mut self, tab: InfoTab) -> bool {
        let changed = self.info_tab != tab;
        self.info_tab = tab;
        changed
    }

    /// Make `tab` the active review tab. Returns `false` if it already was.
    pub fn select_review_tab(&mut self, tab: ReviewTab) -> bool {
        let changed = self.review_tab != tab;
        self.review_tab = tab;
        changed
    }
}

/// A fixed set of labelled tabs.
pub trait Tab: Copy + PartialEq + 'static {
    /// Every tab, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Tabs of the shipping/details switcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InfoTab {
    #[default]
    Shipping,
    Details,
}

impl Tab for InfoTab {
    const ALL: &'static [Self] = &[Self::Shipping, Self::Details];

    fn label(self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Details => "Details",
        }
    }
}

/// Tabs of the reviews switcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewTab {
    #[default]
    Reviews,
    MakeReview,
}

impl Tab for ReviewTab {
    const ALL: &'static [Self] = &[Self::Reviews, Self::MakeReview];

    fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeReview => "Make a Review",
        }
    }
}
