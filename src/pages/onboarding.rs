// Onboarding page state
//
// Two steps: an email sign-in form (nothing is sent anywhere) followed by
// the server picker whose choice is carried into the dashboard.

use crate::catalog::{Server, DEFAULT_SERVER_ID, SERVERS};
use serde::Serialize;

/// Longest email the sign-in field accepts
const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OnboardingStep {
    #[default]
    SignIn,
    ChooseServer,
}

impl OnboardingStep {
    /// 1-based position shown in the progress indicator
    pub fn number(self) -> usize {
        match self {
            OnboardingStep::SignIn => 1,
            OnboardingStep::ChooseServer => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingPage {
    pub step: OnboardingStep,
    #[serde(skip_serializing)]
    pub email: String,
    /// Index into `SERVERS`
    pub selected_server: usize,
}

impl Default for OnboardingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingPage {
    pub fn new() -> Self {
        let selected_server = SERVERS
            .iter()
            .position(|s| s.id == DEFAULT_SERVER_ID)
            .unwrap_or(0);
        Self {
            step: OnboardingStep::SignIn,
            email: String::new(),
            selected_server,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.step == OnboardingStep::SignIn && !c.is_control() && self.email.len() < MAX_EMAIL_LEN {
            self.email.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.step == OnboardingStep::SignIn {
            self.email.pop();
        }
    }

    /// The continue button is disabled until something has been typed
    pub fn can_continue(&self) -> bool {
        !self.email.is_empty()
    }

    /// Advance to server selection. Returns `false` if the email is empty.
    pub fn continue_with_email(&mut self) -> bool {
        if self.step != OnboardingStep::SignIn || !self.can_continue() {
            return false;
        }
        self.step = OnboardingStep::ChooseServer;
        true
    }

    /// Step back to sign-in. Returns `false` if already on the first step.
    pub fn back(&mut self) -> bool {
        match self.step {
            OnboardingStep::SignIn => false,
            OnboardingStep::ChooseServer => {
                self.step = OnboardingStep::SignIn;
                true
            }
        }
    }

    pub fn select_previous_server(&mut self) {
        self.selected_server = self.selected_server.saturating_sub(1);
    }

    pub fn select_next_server(&mut self) {
        if self.selected_server + 1 < SERVERS.len() {
            self.selected_server += 1;
        }
    }

    pub fn selected_server(&self) -> &'static Server {
        &SERVERS[self.selected_server.min(SERVERS.len() - 1)]
    }
}
