// Application state management
//
// This module contains the main AppState struct: the mounted page, the
// simulated clock, navigation between views and the injected clipboard.

pub mod config;
pub mod event;

pub use config::{Args, SimConfig, View};

use crate::catalog::{self, Server};
use crate::clipboard::Clipboard;
use crate::pages::{DashboardPage, LandingPage, OnboardingPage, Page, SettingsPage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// The mounted view
    pub page: Page,

    /// Simulated time since startup, advanced by `on_tick`
    pub now: Duration,

    /// Server chosen during onboarding, shown on the dashboard
    pub server: &'static Server,

    /// Timing and bounds handed to every new simulator
    sim_config: SimConfig,

    /// Seeds the per-dashboard jitter generator
    rng: StdRng,

    clipboard: Box<dyn Clipboard>,
}

impl AppState {
    /// Create a new AppState showing `start`
    pub fn new(start: View, seed: Option<u64>, clipboard: Box<dyn Clipboard>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = Self {
            running: true,
            page: Page::Landing(LandingPage::new()),
            now: Duration::ZERO,
            server: catalog::default_server(),
            sim_config: SimConfig::default(),
            rng,
            clipboard,
        };
        if start != View::Landing {
            state.navigate(start);
        }
        state
    }

    pub fn view(&self) -> View {
        self.page.view()
    }

    /// Advance the simulated clock and let the mounted page catch up
    pub fn on_tick(&mut self, now: Duration) {
        self.now = self.now.max(now);
        self.page.on_tick(self.now);
    }

    /// Unmount the current page and mount a fresh one for `view`
    pub fn navigate(&mut self, view: View) {
        let from = self.view();
        match self.page.snapshot_json() {
            Ok(json) => debug!(view = from.title(), snapshot = %json, "leaving view"),
            Err(e) => warn!(error = %e, "failed to serialize page state"),
        }
        self.page.unmount(self.now);

        self.page = match view {
            View::Landing => Page::Landing(LandingPage::new()),
            View::Onboarding => Page::Onboarding(OnboardingPage::new()),
            View::Dashboard => {
                let rng = StdRng::seed_from_u64(self.rng.gen());
                Page::Dashboard(DashboardPage::new(self.server, self.sim_config.clone(), rng))
            }
            View::Settings => Page::Settings(SettingsPage::new()),
        };
        info!(from = from.title(), to = view.title(), "navigated");
    }

    /// Finish onboarding with the selected server
    pub fn complete_onboarding(&mut self) {
        if let Page::Onboarding(o) = &self.page {
            self.server = o.selected_server();
            self.navigate(View::Dashboard);
        }
    }

    /// Go back one view. Returns `false` when there is nowhere to go.
    pub fn go_back(&mut self) -> bool {
        match &mut self.page {
            Page::Landing(_) => false,
            Page::Onboarding(o) => {
                if !o.back() {
                    self.navigate(View::Landing);
                }
                true
            }
            Page::Dashboard(_) => {
                self.navigate(View::Onboarding);
                true
            }
            Page::Settings(_) => {
                self.navigate(View::Dashboard);
                true
            }
        }
    }

    /// Activate the focused settings row, handing it the clipboard
    pub fn activate_setting(&mut self) {
        let now = self.now;
        if let Page::Settings(s) = &mut self.page {
            s.activate(now, &mut *self.clipboard);
        }
    }

    pub fn quit(&mut self) {
        self.page.unmount(self.now);
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::sim::ConnectionStatus;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn app(start: View) -> AppState {
        AppState::new(start, Some(42), Box::new(MemoryClipboard::new()))
    }

    fn dashboard(app: &AppState) -> &DashboardPage {
        match &app.page {
            Page::Dashboard(d) => d,
            _ => panic!("expected dashboard, got {:?}", app.view()),
        }
    }

    #[test]
    fn test_start_view() {
        assert_eq!(app(View::Landing).view(), View::Landing);
        assert_eq!(app(View::Settings).view(), View::Settings);
        assert_eq!(
            dashboard(&app(View::Dashboard)).status(),
            ConnectionStatus::Disconnected
        );
    }

    #[test]
    fn test_onboarding_carries_server_to_dashboard() {
        let mut a = app(View::Onboarding);
        if let Page::Onboarding(o) = &mut a.page {
            o.push_char('a');
            o.continue_with_email();
            o.select_next_server();
        }
        a.complete_onboarding();
        assert_eq!(a.view(), View::Dashboard);
        assert_eq!(dashboard(&a).server.id, "japan");
    }

    #[test]
    fn test_leaving_dashboard_cancels_connection() {
        let mut a = app(View::Dashboard);
        if let Page::Dashboard(d) = &mut a.page {
            d.toggle_connect(ms(0));
        }
        a.on_tick(ms(3000));
        assert_eq!(dashboard(&a).status(), ConnectionStatus::Connected);

        a.navigate(View::Settings);
        a.on_tick(ms(20_000));
        assert!(a.go_back());
        assert_eq!(a.view(), View::Dashboard);
        assert_eq!(dashboard(&a).status(), ConnectionStatus::Disconnected);
        assert_eq!(dashboard(&a).metrics().throughput_mbps, 0.0);
    }

    #[test]
    fn test_back_navigation_chain() {
        let mut a = app(View::Settings);
        assert!(a.go_back());
        assert_eq!(a.view(), View::Dashboard);
        assert!(a.go_back());
        assert_eq!(a.view(), View::Onboarding);
        assert!(a.go_back());
        assert_eq!(a.view(), View::Landing);
        assert!(!a.go_back());
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut a = app(View::Landing);
        a.on_tick(ms(500));
        a.on_tick(ms(100));
        assert_eq!(a.now, ms(500));
    }

    #[test]
    fn test_copy_fingerprint_lights_indicator() {
        let mut a = app(View::Settings);
        if let Page::Settings(s) = &mut a.page {
            s.set_tab(crate::pages::SettingsTab::About);
        }
        a.on_tick(ms(100));
        a.activate_setting();
        match &a.page {
            Page::Settings(s) => assert!(s.copied(ms(100))),
            _ => unreachable!(),
        }
        a.on_tick(ms(2100));
        match &a.page {
            Page::Settings(s) => assert!(!s.copied(ms(2100))),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_quit_disconnects() {
        let mut a = app(View::Dashboard);
        if let Page::Dashboard(d) = &mut a.page {
            d.toggle_connect(ms(0));
        }
        a.quit();
        assert!(!a.running);
        assert_eq!(dashboard(&a).status(), ConnectionStatus::Disconnected);
    }
}
