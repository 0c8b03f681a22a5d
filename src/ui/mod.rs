// UI rendering module
//
// This module contains all UI rendering components for MorVPN.
// The main draw() function lays out the header, the mounted view and the
// status bar, and hands the body to the view's renderer.

mod dashboard;
mod header;
mod landing;
mod onboarding;
mod settings;
mod status_bar;
mod text;

use crate::app::AppState;
use crate::pages::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use dashboard::render_dashboard;
use header::render_header;
use landing::render_landing;
use onboarding::render_onboarding;
use settings::render_settings;
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &AppState) {
    let size = f.area();

    // Main layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_header(f, chunks[0], app);

    match &app.page {
        Page::Landing(p) => render_landing(f, chunks[1], p),
        Page::Onboarding(p) => render_onboarding(f, chunks[1], p),
        Page::Dashboard(p) => render_dashboard(f, chunks[1], p, app.now),
        Page::Settings(p) => render_settings(f, chunks[1], p, app.now),
    }

    render_status_bar(f, chunks[2], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::clipboard::MemoryClipboard;
    use crate::pages::SettingsTab;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn render(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app(start: View) -> AppState {
        AppState::new(start, Some(3), Box::new(MemoryClipboard::new()))
    }

    #[test]
    fn test_landing_renders_features() {
        let out = render(&app(View::Landing));
        assert!(out.contains("MorVPN"));
        assert!(out.contains("Speed Boost"));
        assert!(out.contains("Active Users"));
    }

    #[test]
    fn test_onboarding_renders_both_steps() {
        let mut a = app(View::Onboarding);
        assert!(render(&a).contains("Welcome to MorVPN"));

        if let Page::Onboarding(o) = &mut a.page {
            o.push_char('x');
            o.continue_with_email();
        }
        let out = render(&a);
        assert!(out.contains("Choose Your Server Location"));
        assert!(out.contains("Frankfurt"));
        assert!(out.contains("Recommended"));
    }

    #[test]
    fn test_dashboard_renders_connection_states() {
        let mut a = app(View::Dashboard);
        let out = render(&a);
        assert!(out.contains("Disconnected"));
        assert!(out.contains("Connect"));
        assert!(out.contains("0 Mbps"));

        if let Page::Dashboard(d) = &mut a.page {
            d.toggle_connect(Duration::ZERO);
        }
        assert!(render(&a).contains("Connecting..."));

        a.on_tick(Duration::from_millis(3000));
        let out = render(&a);
        assert!(out.contains("85 Mbps"));
        assert!(out.contains("Disconnect"));
    }

    #[test]
    fn test_settings_renders_each_tab() {
        let mut a = app(View::Settings);
        assert!(render(&a).contains("Dark Mode"));

        for (tab, needle) in [
            (SettingsTab::Network, "Split Tunneling"),
            (SettingsTab::Logs, "Connection Logs"),
            (SettingsTab::About, "MorVPN 2.4.1"),
        ] {
            if let Page::Settings(s) = &mut a.page {
                s.set_tab(tab);
            }
            assert!(render(&a).contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        for view in [View::Landing, View::Onboarding, View::Dashboard, View::Settings] {
            let a = app(view);
            let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
            terminal.draw(|f| draw(f, &a)).unwrap();
        }
    }
}
