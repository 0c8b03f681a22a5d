// Landing page state

use crate::catalog::{Feature, FEATURES};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LandingPage {
    /// Index into `FEATURES` of the feature shown in the detail panel
    pub active_feature: usize,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &'static Feature {
        &FEATURES[self.active_feature.min(FEATURES.len() - 1)]
    }

    pub fn select_previous(&mut self) {
        self.active_feature = self.active_feature.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.active_feature + 1 < FEATURES.len() {
            self.active_feature += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_selection_is_clamped() {
        let mut page = LandingPage::new();
        assert_eq!(page.active().title, "Speed Boost");

        page.select_previous();
        assert_eq!(page.active_feature, 0);

        for _ in 0..10 {
            page.select_next();
        }
        assert_eq!(page.active_feature, FEATURES.len() - 1);
        assert_eq!(page.active().title, "Secure Global Access");
    }
}
