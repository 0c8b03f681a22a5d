// Keyboard event handling
//
// This module contains the keyboard event handler that processes
// user input and updates the application state accordingly.

use super::{AppState, View};
use crate::pages::{OnboardingStep, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// Global:
/// - `Ctrl+C` - Quit
/// - `q`, `Q` - Quit (except while typing an email)
/// - `Esc` - Back, or quit from the landing page
///
/// Landing: `Up`/`Down` select feature, `Enter` get started
///
/// Onboarding: type email, `Enter` continue / connect,
/// `Up`/`Down` choose server
///
/// Dashboard: `Enter`/`Space`/`c` connect or disconnect, `a` AI boost,
/// `Left`/`Right` protocol, `s` settings
///
/// Settings: `Tab`/`Left`/`Right` switch tab, `Up`/`Down` focus,
/// `Enter`/`Space` toggle, `y` copy fingerprint
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return app.running;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return false;
    }

    if key.code == KeyCode::Esc {
        if !app.go_back() {
            app.quit();
        }
        return app.running;
    }

    let typing = matches!(&app.page, Page::Onboarding(o) if o.step == OnboardingStep::SignIn);
    if !typing && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.quit();
        return false;
    }

    let now = app.now;
    match &mut app.page {
        Page::Landing(landing) => match key.code {
            KeyCode::Up => landing.select_previous(),
            KeyCode::Down => landing.select_next(),
            KeyCode::Enter => app.navigate(View::Onboarding),
            _ => {}
        },
        Page::Onboarding(onboarding) => match (onboarding.step, key.code) {
            (OnboardingStep::SignIn, KeyCode::Char(c)) => onboarding.push_char(c),
            (OnboardingStep::SignIn, KeyCode::Backspace) => onboarding.pop_char(),
            (OnboardingStep::SignIn, KeyCode::Enter) => {
                onboarding.continue_with_email();
            }
            (OnboardingStep::ChooseServer, KeyCode::Up) => onboarding.select_previous_server(),
            (OnboardingStep::ChooseServer, KeyCode::Down) => onboarding.select_next_server(),
            (OnboardingStep::ChooseServer, KeyCode::Enter) => app.complete_onboarding(),
            _ => {}
        },
        Page::Dashboard(dashboard) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('C') => {
                // The button is disabled while connecting
                if dashboard.connect_enabled() {
                    dashboard.toggle_connect(now);
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => dashboard.toggle_ai_boost(now),
            KeyCode::Left => dashboard.previous_protocol(now),
            KeyCode::Right => dashboard.next_protocol(now),
            KeyCode::Char('s') | KeyCode::Char('S') => app.navigate(View::Settings),
            _ => {}
        },
        Page::Settings(settings) => match key.code {
            KeyCode::Tab | KeyCode::Right => settings.next_tab(),
            KeyCode::BackTab | KeyCode::Left => settings.previous_tab(),
            KeyCode::Up => settings.focus_previous(),
            KeyCode::Down => settings.focus_next(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_setting(),
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                settings.set_tab(crate::pages::SettingsTab::About);
                app.activate_setting();
            }
            _ => {}
        },
    }
    app.running
}
