// Settings page state
//
// Four tabs of toggles and read-only information. Every value lives only as
// long as the page is mounted; nothing is saved.

use crate::app::config::COPIED_FLASH_DURATION;
use crate::catalog::{CERTIFICATE_FINGERPRINT, LANGUAGES, SPLIT_TUNNEL_APPS};
use crate::clipboard::{Clipboard, ClipboardError};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SettingsTab {
    #[default]
    General,
    Network,
    Logs,
    About,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::General,
        SettingsTab::Network,
        SettingsTab::Logs,
        SettingsTab::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Network => "Network",
            SettingsTab::Logs => "Logs",
            SettingsTab::About => "About",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A focusable row on the current tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SettingsRow {
    DarkMode,
    Language,
    AutoConnect,
    KillSwitch,
    AutoReconnect,
    SplitTunneling,
    /// Per-app route, index into `SPLIT_TUNNEL_APPS`
    App(usize),
    UseMorVpnDns,
    ShowLogs,
    CopyFingerprint,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsPage {
    pub tab: SettingsTab,
    /// Index into `rows()` of the focused row
    pub focus: usize,
    pub dark_mode: bool,
    /// Index into `LANGUAGES`
    pub language: usize,
    pub auto_connect: bool,
    pub kill_switch: bool,
    pub auto_reconnect: bool,
    pub split_tunneling: bool,
    pub app_routes: Vec<bool>,
    pub use_morvpn_dns: bool,
    pub show_logs: bool,
    /// The "copied" indicator is lit until this instant
    copied_until: Option<Duration>,
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPage {
    pub fn new() -> Self {
        Self {
            tab: SettingsTab::default(),
            focus: 0,
            dark_mode: false,
            language: 0,
            auto_connect: true,
            kill_switch: true,
            auto_reconnect: true,
            split_tunneling: false,
            app_routes: SPLIT_TUNNEL_APPS.iter().map(|a| a.enabled_by_default).collect(),
            use_morvpn_dns: true,
            show_logs: false,
            copied_until: None,
        }
    }

    pub fn rows(&self) -> Vec<SettingsRow> {
        match self.tab {
            SettingsTab::General => vec![
                SettingsRow::DarkMode,
                SettingsRow::Language,
                SettingsRow::AutoConnect,
                SettingsRow::KillSwitch,
                SettingsRow::AutoReconnect,
            ],
            SettingsTab::Network => {
                let mut rows = vec![SettingsRow::SplitTunneling];
                if self.split_tunneling {
                    rows.extend((0..self.app_routes.len()).map(SettingsRow::App));
                }
                rows.push(SettingsRow::UseMorVpnDns);
                rows
            }
            SettingsTab::Logs => vec![SettingsRow::ShowLogs],
            SettingsTab::About => vec![SettingsRow::CopyFingerprint],
        }
    }

    pub fn focused_row(&self) -> Option<SettingsRow> {
        self.rows().get(self.focus).copied()
    }

    pub fn language_name(&self) -> &'static str {
        LANGUAGES[self.language % LANGUAGES.len()].1
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.set_tab(self.tab.previous());
    }

    pub fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.focus = 0;
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        if self.focus + 1 < self.rows().len() {
            self.focus += 1;
        }
    }

    /// Toggle or trigger the focused row
    pub fn activate(&mut self, now: Duration, clipboard: &mut dyn Clipboard) {
        let Some(row) = self.focused_row() else {
            return;
        };
        match row {
            SettingsRow::DarkMode => self.dark_mode = !self.dark_mode,
            SettingsRow::Language => self.language = (self.language + 1) % LANGUAGES.len(),
            SettingsRow::AutoConnect => self.auto_connect = !self.auto_connect,
            SettingsRow::KillSwitch => self.kill_switch = !self.kill_switch,
            SettingsRow::AutoReconnect => self.auto_reconnect = !self.auto_reconnect,
            SettingsRow::SplitTunneling => {
                self.split_tunneling = !self.split_tunneling;
                self.focus = self.focus.min(self.rows().len().saturating_sub(1));
            }
            SettingsRow::App(i) => {
                if let Some(route) = self.app_routes.get_mut(i) {
                    *route = !*route;
                }
            }
            SettingsRow::UseMorVpnDns => self.use_morvpn_dns = !self.use_morvpn_dns,
            SettingsRow::ShowLogs => self.show_logs = !self.show_logs,
            SettingsRow::CopyFingerprint => {
                // Copy failures are not worth interrupting the user for
                if let Err(e) = self.copy_fingerprint(now, clipboard) {
                    warn!(error = %e, "failed to copy certificate fingerprint");
                }
            }
        }
    }

    /// Copy the certificate fingerprint and light the "copied" indicator
    pub fn copy_fingerprint(
        &mut self,
        now: Duration,
        clipboard: &mut dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        clipboard.copy(CERTIFICATE_FINGERPRINT)?;
        info!("certificate fingerprint copied");
        self.copied_until = Some(now + COPIED_FLASH_DURATION);
        Ok(())
    }

    pub fn copied(&self, now: Duration) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    pub fn on_tick(&mut self, now: Duration) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_defaults() {
        let page = SettingsPage::new();
        assert_eq!(page.tab, SettingsTab::General);
        assert!(!page.dark_mode);
        assert!(page.auto_connect && page.kill_switch && page.auto_reconnect);
        assert!(!page.split_tunneling);
        assert_eq!(page.app_routes, vec![true, false, true, false, true]);
        assert_eq!(page.language_name(), "English");
    }

    #[test]
    fn test_copy_fingerprint_round_trips() {
        let mut page = SettingsPage::new();
        let mut cb = MemoryClipboard::new();
        page.set_tab(SettingsTab::About);
        page.activate(ms(1000), &mut cb);

        assert_eq!(cb.contents(), Some(CERTIFICATE_FINGERPRINT));
        assert!(page.copied(ms(1000)));
        assert!(page.copied(ms(2999)));
        assert!(!page.copied(ms(3000)));

        page.on_tick(ms(3000));
        assert!(!page.copied(ms(1500)));
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let mut page = SettingsPage::new();
        let mut cb = MemoryClipboard::unavailable();
        page.set_tab(SettingsTab::About);
        page.activate(ms(0), &mut cb);
        assert!(!page.copied(ms(0)));
        assert!(page.copy_fingerprint(ms(0), &mut cb).is_err());
    }

    #[test]
    fn test_split_tunneling_reveals_app_rows() {
        let mut page = SettingsPage::new();
        let mut cb = MemoryClipboard::new();
        page.set_tab(SettingsTab::Network);
        assert_eq!(page.rows(), vec![SettingsRow::SplitTunneling, SettingsRow::UseMorVpnDns]);

        page.activate(ms(0), &mut cb);
        assert!(page.split_tunneling);
        assert_eq!(page.rows().len(), 2 + SPLIT_TUNNEL_APPS.len());

        page.focus_next();
        page.focus_next();
        assert_eq!(page.focused_row(), Some(SettingsRow::App(1)));
        page.activate(ms(0), &mut cb);
        assert!(page.app_routes[1]);
    }

    #[test]
    fn test_tabs_wrap_and_reset_focus() {
        let mut page = SettingsPage::new();
        page.focus_next();
        page.focus_next();
        assert_eq!(page.focused_row(), Some(SettingsRow::AutoConnect));

        page.previous_tab();
        assert_eq!(page.tab, SettingsTab::About);
        assert_eq!(page.focus, 0);
        page.next_tab();
        assert_eq!(page.tab, SettingsTab::General);
    }

    #[test]
    fn test_language_cycles() {
        let mut page = SettingsPage::new();
        let mut cb = MemoryClipboard::new();
        page.focus_next();
        for _ in 0..LANGUAGES.len() + 1 {
            page.activate(ms(0), &mut cb);
        }
        assert_eq!(page.language_name(), "Español");
    }

    #[test]
    fn test_focus_is_clamped() {
        let mut page = SettingsPage::new();
        page.set_tab(SettingsTab::Logs);
        page.focus_next();
        page.focus_previous();
        page.focus_previous();
        assert_eq!(page.focused_row(), Some(SettingsRow::ShowLogs));
    }
}
