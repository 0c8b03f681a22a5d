// Connection simulator
//
// A small state machine that fakes a VPN connection: a user toggle moves it
// between Disconnected, Connecting and Connected, and a periodic sampler
// jitters the displayed metrics while connected. Time is supplied by the
// caller and randomness is injected, so every run is reproducible in tests.

pub mod timer;

use crate::app::config::SimConfig;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use timer::{TimerHandle, Timers};
use tracing::{debug, info};

/// Simulated connection phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    /// Declared for display, never entered by any transition
    Reconnecting,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Reconnecting => "Reconnecting",
        }
    }

    /// Whether the sampler may run in this phase
    pub fn is_live(self) -> bool {
        matches!(
            self,
            ConnectionStatus::Connected | ConnectionStatus::Reconnecting
        )
    }
}

/// Synthetic performance numbers shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub latency_ms: f64,
    pub throughput_mbps: f64,
    pub packet_loss_pct: f64,
}

impl Metrics {
    /// Baseline shown whenever the connection is not up
    pub fn idle(config: &SimConfig) -> Self {
        Self {
            latency_ms: config.idle_latency_ms,
            throughput_mbps: 0.0,
            packet_loss_pct: 0.0,
        }
    }
}

/// Something observable happened inside the simulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SimEvent {
    StatusChanged {
        from: ConnectionStatus,
        to: ConnectionStatus,
        at: Duration,
    },
    Sampled {
        at: Duration,
        metrics: Metrics,
    },
    /// A toggle arrived while a connection attempt was in flight
    ToggleIgnored { at: Duration },
}

/// The simulated connection, owned by the dashboard view
#[derive(Debug)]
pub struct ConnectionSimulator<R> {
    config: SimConfig,
    status: ConnectionStatus,
    metrics: Metrics,
    timers: Timers,
    connect_timer: Option<TimerHandle>,
    sampler: Option<TimerHandle>,
    connected_since: Option<Duration>,
    events: Vec<SimEvent>,
    rng: R,
}

impl<R: Rng> ConnectionSimulator<R> {
    pub fn new(config: SimConfig, rng: R) -> Self {
        let metrics = Metrics::idle(&config);
        Self {
            config,
            status: ConnectionStatus::Disconnected,
            metrics,
            timers: Timers::new(),
            connect_timer: None,
            sampler: None,
            connected_since: None,
            events: Vec::new(),
            rng,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Number of scheduled callbacks still outstanding
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Time spent connected, if currently connected
    pub fn session_elapsed(&self, now: Duration) -> Option<Duration> {
        self.connected_since.map(|since| now.saturating_sub(since))
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Handle the connect/disconnect button.
    ///
    /// Disconnected starts a connection attempt, Connected (or Reconnecting)
    /// tears the connection down, and Connecting ignores the press so the
    /// pending transition is left exactly as scheduled.
    pub fn toggle_connect(&mut self, now: Duration) -> ConnectionStatus {
        match self.status {
            ConnectionStatus::Disconnected => self.begin_connect(now),
            ConnectionStatus::Connecting => {
                debug!(?now, "toggle ignored while connecting");
                self.events.push(SimEvent::ToggleIgnored { at: now });
            }
            ConnectionStatus::Connected | ConnectionStatus::Reconnecting => {
                self.disconnect_at(now);
            }
        }
        self.status
    }

    /// Force the Disconnected state from any phase and cancel every
    /// outstanding callback
    pub fn disconnect(&mut self, now: Duration) {
        self.disconnect_at(now);
    }

    /// Advance simulated time, firing every callback due at or before `now`
    pub fn tick(&mut self, now: Duration) {
        while let Some(fired) = self.timers.pop_due(now) {
            if Some(fired.handle) == self.connect_timer {
                self.connect_timer = None;
                self.complete_connect(fired.at);
            } else if Some(fired.handle) == self.sampler {
                self.sample(fired.at);
            } else {
                // Not ours anymore; a periodic one would keep firing
                if self.timers.is_pending(fired.handle) {
                    self.timers.cancel(fired.handle);
                }
            }
        }
    }

    fn begin_connect(&mut self, now: Duration) {
        self.cancel_timers();
        self.set_status(ConnectionStatus::Connecting, now);
        self.connect_timer = Some(self.timers.schedule_once(now + self.config.connect_delay));
    }

    fn complete_connect(&mut self, at: Duration) {
        if let Some(old) = self.sampler.take() {
            self.timers.cancel(old);
        }
        self.set_status(ConnectionStatus::Connected, at);
        self.connected_since = Some(at);
        self.metrics.throughput_mbps = self.config.initial_throughput_mbps;
        let period = self.config.sample_interval;
        self.sampler = Some(self.timers.schedule_every(at + period, period));
    }

    fn disconnect_at(&mut self, now: Duration) {
        self.cancel_timers();
        self.connected_since = None;
        self.metrics = Metrics::idle(&self.config);
        if self.status != ConnectionStatus::Disconnected {
            self.set_status(ConnectionStatus::Disconnected, now);
        }
    }

    fn cancel_timers(&mut self) {
        self.connect_timer = None;
        self.sampler = None;
        self.timers.cancel_all();
    }

    fn sample(&mut self, at: Duration) {
        if !self.status.is_live() {
            return;
        }
        let cfg = &self.config;
        let m = &mut self.metrics;
        let latency_step = self.rng.gen_range(-cfg.latency_jitter_ms..=cfg.latency_jitter_ms);
        let throughput_step = self
            .rng
            .gen_range(-cfg.throughput_jitter_mbps..=cfg.throughput_jitter_mbps);
        m.latency_ms = (m.latency_ms + latency_step).max(cfg.latency_floor_ms);
        m.throughput_mbps = (m.throughput_mbps + throughput_step).max(0.0);
        m.packet_loss_pct = self.rng.gen_range(0.0..=cfg.max_packet_loss_pct);
        self.events.push(SimEvent::Sampled {
            at,
            metrics: *m,
        });
    }

    fn set_status(&mut self, to: ConnectionStatus, at: Duration) {
        let from = self.status;
        self.status = to;
        info!(from = from.label(), to = to.label(), ?at, "connection status changed");
        self.events.push(SimEvent::StatusChanged { from, to, at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::CONNECT_DELAY;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn sim(seed: u64) -> ConnectionSimulator<StdRng> {
        ConnectionSimulator::new(SimConfig::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_starts_disconnected_with_idle_metrics() {
        let s = sim(1);
        assert_eq!(s.status(), ConnectionStatus::Disconnected);
        assert_eq!(s.metrics().throughput_mbps, 0.0);
        assert_eq!(s.metrics().latency_ms, 12.0);
        assert_eq!(s.pending_timers(), 0);
    }

    #[test]
    fn test_connect_scenario() {
        let mut s = sim(1);
        assert_eq!(s.toggle_connect(ms(0)), ConnectionStatus::Connecting);

        s.tick(ms(2999));
        assert_eq!(s.status(), ConnectionStatus::Connecting);

        s.tick(ms(3000));
        assert_eq!(s.status(), ConnectionStatus::Connected);
        assert_eq!(s.metrics().throughput_mbps, 85.0);
        assert_eq!(s.session_elapsed(ms(4000)), Some(ms(1000)));
    }

    #[test]
    fn test_disconnect_scenario_stops_sampling() {
        let mut s = sim(7);
        s.toggle_connect(ms(0));
        s.tick(ms(7000)); // connected at 3000, samples at 5000 and 7000
        assert_eq!(s.status(), ConnectionStatus::Connected);

        assert_eq!(s.toggle_connect(ms(7100)), ConnectionStatus::Disconnected);
        assert_eq!(s.metrics().throughput_mbps, 0.0);
        assert_eq!(s.pending_timers(), 0);

        s.drain_events();
        let frozen = s.metrics();
        s.tick(ms(60_000));
        assert_eq!(s.metrics(), frozen);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_toggle_while_connecting_is_ignored() {
        let mut s = sim(3);
        s.toggle_connect(ms(0));
        s.drain_events();

        assert_eq!(s.toggle_connect(ms(1000)), ConnectionStatus::Connecting);
        assert_eq!(s.toggle_connect(ms(2000)), ConnectionStatus::Connecting);
        assert_eq!(s.pending_timers(), 1);

        // Still fires at the first scheduled deadline, not pushed back
        s.tick(ms(3000));
        assert_eq!(s.status(), ConnectionStatus::Connected);

        let events = s.drain_events();
        assert_eq!(events[0], SimEvent::ToggleIgnored { at: ms(1000) });
        assert_eq!(events[1], SimEvent::ToggleIgnored { at: ms(2000) });
    }

    #[test]
    fn test_disconnect_while_connecting_cancels_pending_transition() {
        let mut s = sim(3);
        s.toggle_connect(ms(0));
        s.disconnect(ms(1500));
        assert_eq!(s.status(), ConnectionStatus::Disconnected);

        s.tick(ms(10_000));
        assert_eq!(s.status(), ConnectionStatus::Disconnected);
        assert_eq!(s.metrics().throughput_mbps, 0.0);
    }

    #[test]
    fn test_reconnect_after_disconnect_uses_fresh_deadline() {
        let mut s = sim(5);
        s.toggle_connect(ms(0));
        s.disconnect(ms(1000));
        s.toggle_connect(ms(2000));

        // The first attempt would have completed at 3000
        s.tick(ms(4999));
        assert_eq!(s.status(), ConnectionStatus::Connecting);
        s.tick(ms(5000));
        assert_eq!(s.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_sampler_fires_every_interval_after_connecting() {
        let mut s = sim(11);
        s.toggle_connect(ms(0));
        s.tick(ms(3000));
        s.drain_events();

        s.tick(ms(9500));
        let sampled_at: Vec<_> = s
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                SimEvent::Sampled { at, .. } => Some(at),
                _ => None,
            })
            .collect();
        assert_eq!(sampled_at, vec![ms(5000), ms(7000), ms(9000)]);
    }

    #[test]
    fn test_same_seed_same_metrics() {
        let run = |seed| {
            let mut s = sim(seed);
            s.toggle_connect(ms(0));
            s.tick(ms(30_000));
            s.metrics()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_status_events_are_ordered() {
        let mut s = sim(2);
        s.toggle_connect(ms(0));
        s.tick(ms(3000));
        s.toggle_connect(ms(3500));

        let transitions: Vec<_> = s
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                SimEvent::StatusChanged { from, to, at } => Some((from, to, at)),
                _ => None,
            })
            .collect();
        assert_eq!(
            transitions,
            vec![
                (ConnectionStatus::Disconnected, ConnectionStatus::Connecting, ms(0)),
                (ConnectionStatus::Connecting, ConnectionStatus::Connected, ms(3000)),
                (ConnectionStatus::Connected, ConnectionStatus::Disconnected, ms(3500)),
            ]
        );
    }

    #[derive(Debug, Clone)]
    enum Action {
        Toggle,
        Disconnect,
        Advance(u64),
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Toggle),
            Just(Action::Disconnect),
            (0u64..6000).prop_map(Action::Advance),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Connected is only ever entered from Connecting, exactly one
        /// connect delay after Connecting was entered.
        #[test]
        fn prop_connected_only_via_connecting(
            seed in any::<u64>(),
            actions in prop::collection::vec(action(), 0..40),
        ) {
            let mut s = sim(seed);
            let mut now = Duration::ZERO;
            let mut connecting_since = None;

            for a in actions {
                match a {
                    Action::Toggle => { s.toggle_connect(now); }
                    Action::Disconnect => s.disconnect(now),
                    Action::Advance(d) => {
                        now += ms(d);
                        s.tick(now);
                    }
                }
                for e in s.drain_events() {
                    if let SimEvent::StatusChanged { from, to, at } = e {
                        if to == ConnectionStatus::Connecting {
                            connecting_since = Some(at);
                        }
                        if to == ConnectionStatus::Connected {
                            prop_assert_eq!(from, ConnectionStatus::Connecting);
                            prop_assert_eq!(connecting_since.map(|t| at - t), Some(CONNECT_DELAY));
                        }
                    }
                }
            }
        }

        /// Metric bounds hold across any number of sampler ticks
        #[test]
        fn prop_metrics_stay_in_bounds(seed in any::<u64>(), ticks in 1u64..300) {
            let mut s = sim(seed);
            s.toggle_connect(Duration::ZERO);
            let cfg = SimConfig::default();
            for i in 0..ticks {
                s.tick(cfg.connect_delay + cfg.sample_interval * (i as u32));
                let m = s.metrics();
                prop_assert!(m.latency_ms >= 8.0);
                prop_assert!(m.throughput_mbps >= 0.0);
                prop_assert!((0.0..=0.5).contains(&m.packet_loss_pct));
            }
        }

        /// After a disconnect nothing moves, however far time advances
        #[test]
        fn prop_no_mutation_after_disconnect(
            seed in any::<u64>(),
            connected_for in 0u64..20_000,
            later in 1u64..100_000,
        ) {
            let mut s = sim(seed);
            s.toggle_connect(Duration::ZERO);
            let t = CONNECT_DELAY + ms(connected_for);
            s.tick(t);
            s.disconnect(t);
            s.drain_events();

            let frozen = s.metrics();
            s.tick(t + ms(later));
            prop_assert_eq!(s.metrics(), frozen);
            prop_assert_eq!(s.status(), ConnectionStatus::Disconnected);
            prop_assert!(s.drain_events().is_empty());
            prop_assert_eq!(s.pending_timers(), 0);
        }
    }
}
