// Dashboard page state
//
// Owns the connection simulator for as long as the dashboard is mounted and
// turns simulator events into the "Recent Activity" feed.

use crate::app::config::{SimConfig, ACTIVITY_FEED_LEN};
use crate::catalog::{Protocol, Server};
use crate::sim::{ConnectionSimulator, ConnectionStatus, Metrics, SimEvent};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Connection,
    Routing,
    Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityTime {
    /// Pre-recorded entry with a fixed relative label
    Fixed(&'static str),
    /// Live entry recorded at this simulated instant
    At(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub message: String,
    pub time: ActivityTime,
}

impl ActivityItem {
    fn fixed(kind: ActivityKind, message: &str, ago: &'static str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            time: ActivityTime::Fixed(ago),
        }
    }

    /// Relative time label such as "12s ago"
    pub fn ago(&self, now: Duration) -> String {
        match self.time {
            ActivityTime::Fixed(label) => label.to_string(),
            ActivityTime::At(at) => {
                let secs = now.saturating_sub(at).as_secs();
                if secs < 60 {
                    format!("{}s ago", secs)
                } else {
                    format!("{}m ago", secs / 60)
                }
            }
        }
    }
}

/// Serializable view of the dashboard for debug snapshots
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub status: ConnectionStatus,
    pub metrics: Metrics,
    pub server: &'static str,
    pub ai_boost: bool,
    pub protocol: Protocol,
    pub activity: Vec<ActivityItem>,
}

pub struct DashboardPage<R = StdRng> {
    sim: ConnectionSimulator<R>,
    pub server: &'static Server,
    pub ai_boost: bool,
    pub protocol: Protocol,
    activity: VecDeque<ActivityItem>,
}

impl<R: Rng> DashboardPage<R> {
    pub fn new(server: &'static Server, config: SimConfig, rng: R) -> Self {
        let activity = VecDeque::from(vec![
            ActivityItem::fixed(ActivityKind::Connection, "Connected to US East", "2m ago"),
            ActivityItem::fixed(ActivityKind::Routing, "AI route optimized", "5m ago"),
            ActivityItem::fixed(ActivityKind::Notice, "ChatGPT access verified", "8m ago"),
        ]);
        Self {
            sim: ConnectionSimulator::new(config, rng),
            server,
            ai_boost: true,
            protocol: Protocol::default(),
            activity,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.sim.status()
    }

    pub fn metrics(&self) -> Metrics {
        self.sim.metrics()
    }

    pub fn is_connected(&self) -> bool {
        self.sim.status() == ConnectionStatus::Connected
    }

    pub fn activity(&self) -> impl Iterator<Item = &ActivityItem> {
        self.activity.iter()
    }

    pub fn toggle_connect(&mut self, now: Duration) {
        self.sim.toggle_connect(now);
        self.collect_events();
    }

    pub fn on_tick(&mut self, now: Duration) {
        self.sim.tick(now);
        self.collect_events();
    }

    /// Called when the dashboard is navigated away from: the simulated
    /// connection and all its timers go with it.
    pub fn unmount(&mut self, now: Duration) {
        debug!(pending_timers = self.sim.pending_timers(), "dashboard unmounting");
        self.sim.disconnect(now);
        self.sim.drain_events();
    }

    pub fn toggle_ai_boost(&mut self, now: Duration) {
        self.ai_boost = !self.ai_boost;
        let message = if self.ai_boost {
            "AI route optimized"
        } else {
            "AI boost disabled"
        };
        self.record(ActivityKind::Routing, message.to_string(), now);
    }

    pub fn next_protocol(&mut self, now: Duration) {
        self.set_protocol(self.protocol.next(), now);
    }

    pub fn previous_protocol(&mut self, now: Duration) {
        self.set_protocol(self.protocol.previous(), now);
    }

    fn set_protocol(&mut self, protocol: Protocol, now: Duration) {
        self.protocol = protocol;
        info!(protocol = protocol.label(), "protocol selected");
        self.record(
            ActivityKind::Routing,
            format!("Protocol set to {}", protocol.label()),
            now,
        );
    }

    /// The connect button is disabled while a connection attempt is in flight
    pub fn connect_enabled(&self) -> bool {
        self.status() != ConnectionStatus::Connecting
    }

    pub fn connect_button_label(&self) -> &'static str {
        match self.status() {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected | ConnectionStatus::Reconnecting => "Disconnect",
            ConnectionStatus::Disconnected => "Connect",
        }
    }

    pub fn status_glyph(&self) -> &'static str {
        match self.status() {
            ConnectionStatus::Connected => "●",
            ConnectionStatus::Connecting => "◐",
            _ => "○",
        }
    }

    /// Session length as "1h 23m", or "--" while not connected
    pub fn session_time(&self, now: Duration) -> String {
        match self.sim.session_elapsed(now) {
            Some(elapsed) => {
                let mins = elapsed.as_secs() / 60;
                if mins >= 60 {
                    format!("{}h {}m", mins / 60, mins % 60)
                } else {
                    format!("{}m {}s", mins, elapsed.as_secs() % 60)
                }
            }
            None => "--".to_string(),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            status: self.status(),
            metrics: self.metrics(),
            server: self.server.id,
            ai_boost: self.ai_boost,
            protocol: self.protocol,
            activity: self.activity.iter().cloned().collect(),
        }
    }

    fn collect_events(&mut self) {
        for event in self.sim.drain_events() {
            if let SimEvent::StatusChanged { to, at, .. } = event {
                let message = match to {
                    ConnectionStatus::Connecting => format!("Connecting to {}", self.server.city),
                    ConnectionStatus::Connected => format!("Connected to {}", self.server.name),
                    ConnectionStatus::Disconnected => "Disconnected".to_string(),
                    ConnectionStatus::Reconnecting => "Reconnecting".to_string(),
                };
                self.record(ActivityKind::Connection, message, at);
            }
        }
    }

    fn record(&mut self, kind: ActivityKind, message: String, at: Duration) {
        self.activity.push_front(ActivityItem {
            kind,
            message,
            time: ActivityTime::At(at),
        });
        self.activity.truncate(ACTIVITY_FEED_LEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_server, server_by_id};
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn page() -> DashboardPage<StdRng> {
        DashboardPage::new(default_server(), SimConfig::default(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_button_follows_status() {
        let mut d = page();
        assert_eq!(d.connect_button_label(), "Connect");
        assert_eq!(d.status_glyph(), "○");

        d.toggle_connect(ms(0));
        assert_eq!(d.connect_button_label(), "Connecting...");
        assert_eq!(d.status_glyph(), "◐");
        assert!(!d.connect_enabled());

        d.on_tick(ms(3000));
        assert_eq!(d.connect_button_label(), "Disconnect");
        assert_eq!(d.status_glyph(), "●");
        assert_eq!(d.metrics().throughput_mbps, 85.0);
    }

    #[test]
    fn test_activity_feed_records_transitions() {
        let server = server_by_id("japan").unwrap();
        let mut d = DashboardPage::new(server, SimConfig::default(), StdRng::seed_from_u64(1));
        d.toggle_connect(ms(0));
        d.on_tick(ms(3000));

        let latest: Vec<_> = d.activity().take(2).map(|a| a.message.as_str()).collect();
        assert_eq!(latest, vec!["Connected to Japan", "Connecting to Tokyo"]);
        assert_eq!(d.activity().next().unwrap().ago(ms(15_000)), "12s ago");
    }

    #[test]
    fn test_activity_feed_is_bounded() {
        let mut d = page();
        for i in 0..20 {
            d.toggle_ai_boost(ms(i));
        }
        assert_eq!(d.activity().count(), ACTIVITY_FEED_LEN);
    }

    #[test]
    fn test_unmount_cancels_connection() {
        let mut d = page();
        d.toggle_connect(ms(0));
        d.unmount(ms(1000));
        d.on_tick(ms(10_000));
        assert_eq!(d.status(), ConnectionStatus::Disconnected);
        assert_eq!(d.metrics().throughput_mbps, 0.0);
    }

    #[test]
    fn test_session_time_format() {
        let mut d = page();
        assert_eq!(d.session_time(ms(0)), "--");
        d.toggle_connect(ms(0));
        d.on_tick(ms(3000));
        assert_eq!(d.session_time(ms(3000 + 65_000)), "1m 5s");
        assert_eq!(d.session_time(ms(3000 + 83 * 60_000)), "1h 23m");
    }

    #[test]
    fn test_protocol_cycling_and_snapshot() {
        let mut d = page();
        d.next_protocol(ms(0));
        assert_eq!(d.protocol, Protocol::V2Ray);
        d.previous_protocol(ms(0));
        d.previous_protocol(ms(0));
        assert_eq!(d.protocol, Protocol::Shadowsocks);

        let json = serde_json::to_value(d.snapshot()).unwrap();
        assert_eq!(json["protocol"], "Shadowsocks");
        assert_eq!(json["status"], "Disconnected");
        assert_eq!(json["server"], "us-east");
    }
}
