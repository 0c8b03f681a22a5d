// Static presentation data
//
// Fixed tables rendered read-only by the views: servers, split tunneling
// apps, connection logs, product information and marketing copy.

use serde::Serialize;

/// A selectable VPN exit location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Server {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country_code: &'static str,
    /// Simulated round-trip time in milliseconds
    pub ping_ms: u32,
    /// Simulated load percentage
    pub load_pct: u8,
    pub flag: &'static str,
    pub recommended: bool,
    pub coordinates: &'static str,
}

pub const SERVERS: [Server; 5] = [
    Server {
        id: "us-east",
        name: "United States (East)",
        city: "New York",
        country_code: "US",
        ping_ms: 12,
        load_pct: 23,
        flag: "🇺🇸",
        recommended: true,
        coordinates: "40.7128° N, 74.0060° W",
    },
    Server {
        id: "japan",
        name: "Japan",
        city: "Tokyo",
        country_code: "JP",
        ping_ms: 45,
        load_pct: 18,
        flag: "🇯🇵",
        recommended: false,
        coordinates: "35.6762° N, 139.6503° E",
    },
    Server {
        id: "singapore",
        name: "Singapore",
        city: "Singapore",
        country_code: "SG",
        ping_ms: 38,
        load_pct: 31,
        flag: "🇸🇬",
        recommended: false,
        coordinates: "1.3521° N, 103.8198° E",
    },
    Server {
        id: "germany",
        name: "Germany",
        city: "Frankfurt",
        country_code: "DE",
        ping_ms: 67,
        load_pct: 15,
        flag: "🇩🇪",
        recommended: false,
        coordinates: "50.1109° N, 8.6821° E",
    },
    Server {
        id: "india",
        name: "India",
        city: "Mumbai",
        country_code: "IN",
        ping_ms: 89,
        load_pct: 42,
        flag: "🇮🇳",
        recommended: false,
        coordinates: "19.0760° N, 72.8777° E",
    },
];

/// Server preselected in onboarding and used when none was chosen
pub const DEFAULT_SERVER_ID: &str = "us-east";

pub fn server_by_id(id: &str) -> Option<&'static Server> {
    SERVERS.iter().find(|s| s.id == id)
}

pub fn default_server() -> &'static Server {
    server_by_id(DEFAULT_SERVER_ID).unwrap_or(&SERVERS[0])
}

/// Signal quality derived from a server's ping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalStrength {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SignalStrength {
    pub fn from_ping(ping_ms: u32) -> Self {
        match ping_ms {
            0..=29 => SignalStrength::Excellent,
            30..=59 => SignalStrength::Good,
            60..=89 => SignalStrength::Fair,
            _ => SignalStrength::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignalStrength::Excellent => "Excellent",
            SignalStrength::Good => "Good",
            SignalStrength::Fair => "Fair",
            SignalStrength::Poor => "Poor",
        }
    }

    /// Number of filled bars out of four
    pub fn bars(self) -> u8 {
        match self {
            SignalStrength::Excellent => 4,
            SignalStrength::Good => 3,
            SignalStrength::Fair => 2,
            SignalStrength::Poor => 1,
        }
    }
}

pub fn load_label(load_pct: u8) -> &'static str {
    match load_pct {
        0..=29 => "Low",
        30..=59 => "Moderate",
        _ => "High",
    }
}

/// An application that split tunneling can route around the VPN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitTunnelApp {
    pub name: &'static str,
    pub enabled_by_default: bool,
    pub icon: &'static str,
}

pub const SPLIT_TUNNEL_APPS: [SplitTunnelApp; 5] = [
    SplitTunnelApp { name: "ChatGPT", enabled_by_default: true, icon: "🤖" },
    SplitTunnelApp { name: "Google Chrome", enabled_by_default: false, icon: "🌐" },
    SplitTunnelApp { name: "Netflix", enabled_by_default: true, icon: "📺" },
    SplitTunnelApp { name: "Spotify", enabled_by_default: false, icon: "🎵" },
    SplitTunnelApp { name: "Steam", enabled_by_default: true, icon: "🎮" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogLevel {
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub time: &'static str,
    pub level: LogLevel,
    pub message: &'static str,
}

pub const CONNECTION_LOGS: [LogEntry; 6] = [
    LogEntry { time: "14:32:15", level: LogLevel::Info, message: "Connected to US-East server successfully" },
    LogEntry { time: "14:32:12", level: LogLevel::Info, message: "AI routing optimization completed" },
    LogEntry { time: "14:32:10", level: LogLevel::Info, message: "WireGuard tunnel established" },
    LogEntry { time: "14:32:08", level: LogLevel::Info, message: "Authentication successful" },
    LogEntry { time: "14:32:05", level: LogLevel::Warn, message: "High latency detected, switching routes" },
    LogEntry { time: "14:32:02", level: LogLevel::Info, message: "Connection initiated" },
];

pub const CERTIFICATE_FINGERPRINT: &str =
    "SHA256:a1:b2:c3:d4:e5:f6:07:08:09:0a:1b:2c:3d:4e:5f:60:71:82:93:a4:b5:c6:d7:e8:f9:0a:1b:2c:3d:4e:5f:60";

pub const PRODUCT_NAME: &str = "MorVPN";

/// (label, value) pairs on the About tab
pub const ABOUT_INFO: [(&str, &str); 4] = [
    ("Version", "MorVPN 2.4.1"),
    ("Build", "20241201.1"),
    ("Protocol", "WireGuard 1.0.20210914"),
    ("Platform", "Cross-platform"),
];

/// (document, badge) pairs; `None` renders a "View" link
pub const COMPLIANCE: [(&str, Option<&str>); 4] = [
    ("Privacy Policy", None),
    ("Terms of Service", None),
    ("Data Processing Agreement", None),
    ("Audit Reports", Some("SOC 2 Type II")),
];

pub const PRIMARY_DNS: &str = "1.1.1.1";
pub const SECONDARY_DNS: &str = "1.0.0.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Protocol {
    #[default]
    WireGuard,
    V2Ray,
    Shadowsocks,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::WireGuard, Protocol::V2Ray, Protocol::Shadowsocks];

    pub fn label(self) -> &'static str {
        match self {
            Protocol::WireGuard => "WireGuard",
            Protocol::V2Ray => "V2Ray",
            Protocol::Shadowsocks => "Shadowsocks",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Protocol::WireGuard => "Fast and secure modern protocol",
            Protocol::V2Ray => "Advanced protocol with obfuscation",
            Protocol::Shadowsocks => "Lightweight and efficient",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// (code, native name)
pub const LANGUAGES: [(&str, &str); 6] = [
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("ja", "日本語"),
    ("zh", "中文"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Speed Boost",
        description: "Advanced acceleration technology that increases your connection speed by up to 300%",
        details: "Our proprietary speed optimization algorithms analyze network conditions in real-time to provide the fastest possible connection.",
    },
    Feature {
        icon: "🧠",
        title: "AI-Assisted Routing",
        description: "Smart routing powered by machine learning for optimal path selection",
        details: "AI continuously learns from network patterns to automatically select the best routes and servers for your specific needs.",
    },
    Feature {
        icon: "🌐",
        title: "GPT/Google Unlock",
        description: "Seamless access to ChatGPT, Google services, and other geo-restricted content",
        details: "Specialized servers optimized for accessing AI services and bypassing geographical restrictions with minimal latency.",
    },
    Feature {
        icon: "🛡",
        title: "Secure Global Access",
        description: "Military-grade encryption with servers in 50+ countries worldwide",
        details: "AES-256 encryption with multiple protocol support ensures your data remains private and secure across our global network.",
    },
];

/// (value, label) pairs in the landing stats row
pub const LANDING_STATS: [(&str, &str); 4] = [
    ("10M+", "Active Users"),
    ("50+", "Countries"),
    ("99.9%", "Uptime"),
    ("4.8/5", "User Rating"),
];

/// (label, value) pairs in the dashboard quick stats card
pub const QUICK_STATS: [(&str, &str); 2] = [("Data Used Today", "2.4 GB"), ("Speed Boost", "+247%")];

pub const ENCRYPTION: &str = "AES-256-GCM";
