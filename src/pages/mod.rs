// Per-view state
//
// Each view owns an explicit state struct. Views share nothing: leaving a
// view unmounts it and entering one builds fresh state.

pub mod dashboard;
pub mod landing;
pub mod onboarding;
pub mod settings;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use onboarding::{OnboardingPage, OnboardingStep};
pub use settings::{SettingsPage, SettingsRow, SettingsTab};

use crate::app::config::View;
use std::time::Duration;

/// The mounted view and its state
pub enum Page {
    Landing(LandingPage),
    Onboarding(OnboardingPage),
    Dashboard(DashboardPage),
    Settings(SettingsPage),
}

impl Page {
    pub fn view(&self) -> View {
        match self {
            Page::Landing(_) => View::Landing,
            Page::Onboarding(_) => View::Onboarding,
            Page::Dashboard(_) => View::Dashboard,
            Page::Settings(_) => View::Settings,
        }
    }

    pub fn on_tick(&mut self, now: Duration) {
        match self {
            Page::Dashboard(d) => d.on_tick(now),
            Page::Settings(s) => s.on_tick(now),
            Page::Landing(_) | Page::Onboarding(_) => {}
        }
    }

    /// Tear down anything scheduled by the view before it is dropped
    pub fn unmount(&mut self, now: Duration) {
        if let Page::Dashboard(d) = self {
            d.unmount(now);
        }
    }

    /// JSON rendering of the page state for debug logging
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        match self {
            Page::Landing(p) => serde_json::to_string(p),
            Page::Onboarding(p) => serde_json::to_string(p),
            Page::Dashboard(p) => serde_json::to_string(&p.snapshot()),
            Page::Settings(p) => serde_json::to_string(p),
        }
    }
}
