// Settings view rendering
//
// A tab bar over four panels. Focusable rows come from `SettingsPage::rows`
// so the highlight always matches what Enter will toggle.

use super::text::{pad_right, switch_span};
use crate::catalog::{
    ABOUT_INFO, CERTIFICATE_FINGERPRINT, COMPLIANCE, CONNECTION_LOGS, PRIMARY_DNS, SECONDARY_DNS,
    SPLIT_TUNNEL_APPS,
};
use crate::pages::{SettingsPage, SettingsRow, SettingsTab};
use crate::theme::{log_level_color, palette, Palette, SELECTION_BG, SIGNAL_GREEN};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Duration;

pub fn render_settings(f: &mut Frame, area: Rect, page: &SettingsPage, now: Duration) {
    let colors = palette(page.dark_mode);

    let outer = Block::default()
        .title(Span::styled(
            " ⚙ Settings ",
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().fg(colors.fg).bg(colors.bg));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(SettingsTab::ALL.iter().map(|t| t.label()))
        .select(page.tab.index())
        .style(Style::default().fg(colors.muted))
        .highlight_style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors.muted)),
        );
    f.render_widget(tabs, chunks[0]);

    let mut lines = row_lines(page, &colors);
    match page.tab {
        SettingsTab::General | SettingsTab::Network => {}
        SettingsTab::Logs => lines.extend(log_lines(page, &colors)),
        SettingsTab::About => lines.extend(about_lines(page, now, &colors)),
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

/// Title, description and current value for a focusable row
fn describe(page: &SettingsPage, row: SettingsRow) -> (String, &'static str, Option<bool>, String) {
    let toggle = |title: &str, desc: &'static str, on: bool| {
        (title.to_string(), desc, Some(on), String::new())
    };
    match row {
        SettingsRow::DarkMode => toggle("Dark Mode", "Switch to dark theme", page.dark_mode),
        SettingsRow::Language => (
            "Language".to_string(),
            "Choose your preferred language",
            None,
            page.language_name().to_string(),
        ),
        SettingsRow::AutoConnect => toggle(
            "Auto-connect on Startup",
            "Connect automatically when the app starts",
            page.auto_connect,
        ),
        SettingsRow::KillSwitch => toggle(
            "Kill Switch",
            "Block internet if VPN connection drops",
            page.kill_switch,
        ),
        SettingsRow::AutoReconnect => toggle(
            "Auto-reconnect",
            "Automatically reconnect when connection is lost",
            page.auto_reconnect,
        ),
        SettingsRow::SplitTunneling => toggle(
            "Split Tunneling",
            "Choose which apps use the VPN connection",
            page.split_tunneling,
        ),
        SettingsRow::App(i) => {
            let app = &SPLIT_TUNNEL_APPS[i % SPLIT_TUNNEL_APPS.len()];
            let on = page.app_routes.get(i).copied().unwrap_or(false);
            (
                format!("  {} {}", app.icon, app.name),
                if on { "Routed through VPN" } else { "Bypasses VPN" },
                Some(on),
                String::new(),
            )
        }
        SettingsRow::UseMorVpnDns => toggle(
            "Use MorVPN DNS",
            "Secure DNS servers with malware protection",
            page.use_morvpn_dns,
        ),
        SettingsRow::ShowLogs => toggle(
            "Connection Logs",
            "Recent connection activity and events",
            page.show_logs,
        ),
        SettingsRow::CopyFingerprint => (
            "Certificate Fingerprint".to_string(),
            "Press Enter or y to copy",
            None,
            String::new(),
        ),
    }
}

fn row_lines(page: &SettingsPage, colors: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, row) in page.rows().into_iter().enumerate() {
        let focused = idx == page.focus;
        let (title, desc, switch, value) = describe(page, row);

        let mut spans = vec![
            Span::styled(
                if focused { "› " } else { "  " },
                Style::default().fg(colors.accent),
            ),
            Span::styled(pad_right(&title, 30), Style::default().add_modifier(Modifier::BOLD)),
        ];
        match switch {
            Some(on) => spans.push(switch_span(on, SIGNAL_GREEN)),
            None if !value.is_empty() => {
                spans.push(Span::styled(format!("< {} >", value), Style::default().fg(colors.accent)))
            }
            None => {}
        }
        spans.push(Span::styled(format!("  {}", desc), Style::default().fg(colors.muted)));

        let line = Line::from(spans);
        lines.push(if focused {
            line.style(Style::default().bg(SELECTION_BG))
        } else {
            line
        });

        if row == SettingsRow::UseMorVpnDns && page.use_morvpn_dns {
            lines.push(Line::from(Span::styled(
                format!("    Primary DNS {}   Secondary DNS {}", PRIMARY_DNS, SECONDARY_DNS),
                Style::default().fg(colors.muted),
            )));
        }
    }
    lines
}

fn log_lines(page: &SettingsPage, colors: &Palette) -> Vec<Line<'static>> {
    if !page.show_logs {
        return vec![
            Line::default(),
            Line::from(Span::styled(
                "    Logs are hidden. Toggle Connection Logs to show them.",
                Style::default().fg(colors.muted),
            )),
        ];
    }
    let mut lines = vec![Line::default()];
    lines.extend(CONNECTION_LOGS.iter().map(|entry| {
        Line::from(vec![
            Span::styled(format!("    {} ", entry.time), Style::default().fg(colors.muted)),
            Span::styled(
                format!("[{:<5}] ", entry.level.as_str()),
                Style::default()
                    .fg(log_level_color(entry.level))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(entry.message),
        ])
    }));
    lines
}

fn about_lines(page: &SettingsPage, now: Duration, colors: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("    {}", CERTIFICATE_FINGERPRINT),
        Style::default().fg(colors.muted),
    ))];
    if page.copied(now) {
        lines.push(Line::from(Span::styled(
            "    ✔ Copied",
            Style::default().fg(SIGNAL_GREEN).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Application Information",
        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
    )));
    lines.extend(ABOUT_INFO.iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("  {}", pad_right(label, 12)), Style::default().fg(colors.muted)),
            Span::raw(*value),
        ])
    }));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Legal & Compliance",
        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
    )));
    lines.extend(COMPLIANCE.iter().map(|(doc, badge)| {
        let tail = match badge {
            Some(badge) => Span::styled(
                format!("[{}]", badge),
                Style::default().fg(SIGNAL_GREEN).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("View ›", Style::default().fg(colors.accent)),
        };
        Line::from(vec![Span::raw(format!("  {}", pad_right(doc, 30))), tail])
    }));
    lines
}
