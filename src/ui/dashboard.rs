// Dashboard view rendering
//
// Left column: connection card, AI routing and protocol controls, and the
// performance monitor. Right column: quick stats, server details and the
// recent activity feed.

use crate::catalog::{load_label, Protocol, ENCRYPTION, QUICK_STATS};
use crate::pages::dashboard::{ActivityKind, DashboardPage};
use crate::theme::{
    latency_label, packet_loss_label, status_color, throughput_color, AI_PURPLE, ALERT_RED,
    BRAND_BLUE, CAUTION_YELLOW, SIGNAL_GREEN, SLATE,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Tabs},
    Frame,
};
use std::time::Duration;

fn card(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SLATE))
}

pub fn render_dashboard(f: &mut Frame, area: Rect, page: &DashboardPage, now: Duration) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Connection status
            Constraint::Length(6), // Controls
            Constraint::Min(7),    // Performance monitor
        ])
        .split(cols[0]);

    render_connection_card(f, left[0], page);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(left[1]);
    render_ai_routing(f, controls[0], page);
    render_protocol(f, controls[1], page);

    render_performance(f, left[2], page);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Quick stats
            Constraint::Length(8), // Server details
            Constraint::Min(0),    // Recent activity
        ])
        .split(cols[1]);

    render_quick_stats(f, right[0], page, now);
    render_server_details(f, right[1], page);
    render_activity(f, right[2], page, now);
}

fn render_connection_card(f: &mut Frame, area: Rect, page: &DashboardPage) {
    let status = page.status();
    let color = status_color(status);
    let server = page.server;

    let button_style = if !page.connect_enabled() {
        Style::default().fg(SLATE).add_modifier(Modifier::DIM)
    } else if page.is_connected() {
        Style::default()
            .fg(Color::White)
            .bg(ALERT_RED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(SIGNAL_GREEN)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", server.flag)),
            Span::styled(server.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}", server.city), Style::default().fg(SLATE)),
        ])
        .alignment(Alignment::Right),
        Line::from(Span::styled(
            page.status_glyph(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            status.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];
    if page.is_connected() {
        lines.push(
            Line::from(Span::styled(
                "Connected via ChatGPT-optimized route",
                Style::default().fg(SLATE),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            format!("   {}   ", page.connect_button_label()),
            button_style,
        ))
        .alignment(Alignment::Center),
    );

    f.render_widget(
        Paragraph::new(lines).block(card("⏻ Connection Status", color)),
        area,
    );
}

fn render_ai_routing(f: &mut Frame, area: Rect, page: &DashboardPage) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Automatically optimize your connection path",
            Style::default().fg(SLATE),
        )),
        Line::from(vec![
            Span::raw("AI Boost  "),
            super::text::switch_span(page.ai_boost, AI_PURPLE),
        ]),
    ];
    if page.ai_boost {
        lines.push(Line::from(Span::styled(
            "🤖 AI is optimizing your route for ChatGPT access",
            Style::default().fg(AI_PURPLE),
        )));
    }
    f.render_widget(
        Paragraph::new(lines).block(card("🧠 AI Smart Routing", AI_PURPLE)),
        area,
    );
}

fn render_protocol(f: &mut Frame, area: Rect, page: &DashboardPage) {
    let block = card("📶 Protocol", BRAND_BLUE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selected = Protocol::ALL
        .iter()
        .position(|p| *p == page.protocol)
        .unwrap_or(0);
    let tabs = Tabs::new(Protocol::ALL.iter().map(|p| p.label()))
        .select(selected)
        .style(Style::default().fg(SLATE))
        .highlight_style(Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .divider("│");
    f.render_widget(tabs, rows[0]);
    f.render_widget(
        Paragraph::new(page.protocol.description()).style(Style::default().fg(SLATE)),
        rows[1],
    );
}

fn render_performance(f: &mut Frame, area: Rect, page: &DashboardPage) {
    let block = card("📈 Performance Monitor", SIGNAL_GREEN);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let metrics = page.metrics();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let figure = |label: &'static str, value: String, note: &'static str| {
        Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                value,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(note, Style::default().fg(SLATE))),
        ])
        .alignment(Alignment::Center)
    };

    f.render_widget(
        figure(
            "🕑 Latency",
            format!("{}ms", metrics.latency_ms.round()),
            latency_label(metrics.latency_ms),
        ),
        cols[0],
    );

    let throughput_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(cols[1]);
    f.render_widget(
        figure(
            "↗ Throughput",
            format!("{} Mbps", metrics.throughput_mbps.round()),
            "",
        ),
        throughput_rows[0],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(throughput_color(metrics.throughput_mbps)))
            .ratio((metrics.throughput_mbps / 100.0).clamp(0.0, 1.0))
            .label(""),
        throughput_rows[1],
    );

    f.render_widget(
        figure(
            "↘ Packet Loss",
            format!("{:.2}%", metrics.packet_loss_pct),
            packet_loss_label(metrics.packet_loss_pct),
        ),
        cols[2],
    );
}

fn render_quick_stats(f: &mut Frame, area: Rect, page: &DashboardPage, now: Duration) {
    let session = page.session_time(now);
    let mut lines: Vec<Line> = QUICK_STATS
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", label), Style::default().fg(SLATE)),
                Span::styled(*value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();
    lines.insert(
        1,
        Line::from(vec![
            Span::styled(format!("{:<18}", "Session Time"), Style::default().fg(SLATE)),
            Span::styled(session, Style::default().add_modifier(Modifier::BOLD)),
        ]),
    );
    f.render_widget(
        Paragraph::new(lines).block(card("⚡ Quick Stats", CAUTION_YELLOW)),
        area,
    );
}

fn render_server_details(f: &mut Frame, area: Rect, page: &DashboardPage) {
    let server = page.server;
    let lines = vec![
        Line::from(Span::styled(
            format!("📍 {}, {}", server.city, server.country_code),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("   {}", server.coordinates), Style::default().fg(SLATE))),
        Line::from(Span::styled("▤ Server Load", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!("   {}% ({})", server.load_pct, load_label(server.load_pct)),
            Style::default().fg(SLATE),
        )),
        Line::from(Span::styled("🛡 Encryption", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!("   {}", ENCRYPTION), Style::default().fg(SLATE))),
    ];
    f.render_widget(
        Paragraph::new(lines).block(card("🌐 Server Details", BRAND_BLUE)),
        area,
    );
}

fn render_activity(f: &mut Frame, area: Rect, page: &DashboardPage, now: Duration) {
    let items: Vec<ListItem> = page
        .activity()
        .map(|item| {
            let dot = match item.kind {
                ActivityKind::Connection => SIGNAL_GREEN,
                ActivityKind::Routing => BRAND_BLUE,
                ActivityKind::Notice => AI_PURPLE,
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(dot)),
                Span::raw(item.message.clone()),
                Span::styled(format!("  {}", item.ago(now)), Style::default().fg(SLATE)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(card("Recent Activity", Color::White)), area);
}
