// Status styling functions
//
// Map simulator and catalog state onto colors and short labels.

use ratatui::style::Color;

use super::{ALERT_RED, BRAND_BLUE, CAUTION_YELLOW, SIGNAL_GREEN, SLATE, WARN_ORANGE};
use crate::catalog::{LogLevel, SignalStrength};
use crate::sim::ConnectionStatus;

/// Color for the status glyph, label and power icon
pub fn status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Connected => SIGNAL_GREEN,
        ConnectionStatus::Connecting => CAUTION_YELLOW,
        ConnectionStatus::Reconnecting => WARN_ORANGE,
        ConnectionStatus::Disconnected => SLATE,
    }
}

/// Text for the header badge
pub fn status_badge_text(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Reconnecting => "Reconnecting...",
        ConnectionStatus::Disconnected => "Disconnected",
    }
}

pub fn signal_color(signal: SignalStrength) -> Color {
    match signal {
        SignalStrength::Excellent => SIGNAL_GREEN,
        SignalStrength::Good => BRAND_BLUE,
        SignalStrength::Fair => CAUTION_YELLOW,
        SignalStrength::Poor => ALERT_RED,
    }
}

pub fn log_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Rgb(96, 165, 250),
        LogLevel::Warn => Color::Rgb(250, 204, 21),
    }
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Gauge color for throughput: red when starved, green at 100 Mbps and up
pub fn throughput_color(throughput_mbps: f64) -> Color {
    let ratio = (throughput_mbps / 100.0) as f32;
    interpolate_color((220, 38, 38), (22, 163, 74), ratio)
}

/// Qualitative latency label under the latency figure
pub fn latency_label(latency_ms: f64) -> &'static str {
    if latency_ms < 30.0 {
        "Excellent"
    } else if latency_ms < 60.0 {
        "Good"
    } else if latency_ms < 90.0 {
        "Fair"
    } else {
        "Poor"
    }
}

/// Qualitative packet loss label under the packet loss figure
pub fn packet_loss_label(packet_loss_pct: f64) -> &'static str {
    if packet_loss_pct < 1.0 {
        "Minimal"
    } else {
        "Noticeable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_endpoints_and_clamp() {
        assert_eq!(interpolate_color((0, 0, 0), (200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(interpolate_color((0, 0, 0), (200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(interpolate_color((0, 0, 0), (200, 100, 50), 2.0), Color::Rgb(200, 100, 50));
        assert_eq!(interpolate_color((0, 0, 0), (200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let all = [
            ConnectionStatus::Disconnected,
            ConnectionStatus::Connecting,
            ConnectionStatus::Connected,
            ConnectionStatus::Reconnecting,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(status_color(*a), status_color(*b));
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(latency_label(12.0), "Excellent");
        assert_eq!(latency_label(75.0), "Fair");
        assert_eq!(packet_loss_label(0.4), "Minimal");
        assert_eq!(status_badge_text(ConnectionStatus::Connecting), "Connecting...");
        assert_eq!(throughput_color(0.0), Color::Rgb(220, 38, 38));
        assert_eq!(throughput_color(250.0), Color::Rgb(22, 163, 74));
    }
}
