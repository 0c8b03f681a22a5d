// Application configuration types
//
// This module contains configuration structs and enums for:
// - Simulator timing and metric bounds
// - UI refresh interval
// - Command-line arguments

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Delay between pressing Connect and reaching the connected state
pub const CONNECT_DELAY: Duration = Duration::from_millis(3000);

/// Interval between metric samples while connected
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Throughput reported at the moment the connection comes up (Mbps)
pub const INITIAL_THROUGHPUT_MBPS: f64 = 85.0;

/// Latency shown before any sample has been taken (ms)
pub const IDLE_LATENCY_MS: f64 = 12.0;

/// Latency never drops below this floor (ms)
pub const LATENCY_FLOOR_MS: f64 = 8.0;

/// Maximum latency change per sample, in either direction (ms)
pub const LATENCY_JITTER_MS: f64 = 2.0;

/// Maximum throughput change per sample, in either direction (Mbps)
pub const THROUGHPUT_JITTER_MBPS: f64 = 10.0;

/// Packet loss is redrawn from `[0, MAX_PACKET_LOSS_PCT]` on every sample
pub const MAX_PACKET_LOSS_PCT: f64 = 0.5;

/// How long the "copied" indicator stays lit after copying the fingerprint
pub const COPIED_FLASH_DURATION: Duration = Duration::from_millis(2000);

/// Number of simulator events kept in the dashboard activity feed
pub const ACTIVITY_FEED_LEN: usize = 6;

/// Minimum UI poll interval in milliseconds
pub const MIN_TICK_MS: u64 = 50;

/// Maximum UI poll interval in milliseconds
pub const MAX_TICK_MS: u64 = 1000;

/// Default UI poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

// ============================================================================
// Enums
// ============================================================================

/// The four views of the application, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
pub enum View {
    /// Marketing landing page (default)
    #[default]
    Landing,
    /// Sign-in and server selection
    Onboarding,
    /// Connection control panel
    Dashboard,
    /// Preferences, logs and about
    Settings,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Onboarding => "Get Started",
            View::Dashboard => "Dashboard",
            View::Settings => "Settings",
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Timing and bounds for the connection simulator
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// One-shot delay from Connecting to Connected
    pub connect_delay: Duration,

    /// Period of the metric sampler while connected
    pub sample_interval: Duration,

    /// Throughput assigned when the connection comes up
    pub initial_throughput_mbps: f64,

    /// Latency before the first sample and after disconnecting
    pub idle_latency_ms: f64,

    /// Lower bound for sampled latency
    pub latency_floor_ms: f64,

    /// Half-width of the latency random walk step
    pub latency_jitter_ms: f64,

    /// Half-width of the throughput random walk step
    pub throughput_jitter_mbps: f64,

    /// Upper bound for the freshly drawn packet loss
    pub max_packet_loss_pct: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            connect_delay: CONNECT_DELAY,
            sample_interval: SAMPLE_INTERVAL,
            initial_throughput_mbps: INITIAL_THROUGHPUT_MBPS,
            idle_latency_ms: IDLE_LATENCY_MS,
            latency_floor_ms: LATENCY_FLOOR_MS,
            latency_jitter_ms: LATENCY_JITTER_MS,
            throughput_jitter_mbps: THROUGHPUT_JITTER_MBPS,
            max_packet_loss_pct: MAX_PACKET_LOSS_PCT,
        }
    }
}

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "morvpn", version, about = "MorVPN terminal control panel (simulated)")]
pub struct Args {
    /// View to open on startup
    #[arg(long, value_enum, default_value_t = View::Landing)]
    pub start: View,

    /// Seed for the metric jitter generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// UI poll interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS,
          value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..=MAX_TICK_MS))]
    pub tick_ms: u64,

    /// Write tracing output to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Keep copied text in memory instead of sending it to the terminal clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}

impl Args {
    /// Get UI poll interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
