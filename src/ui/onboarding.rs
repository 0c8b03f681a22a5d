// Onboarding view rendering
//
// Step 1: the sign-in card with the email field.
// Step 2: the server picker with signal strength and load per location.

use super::text::pad_right;
use crate::catalog::{SignalStrength, SERVERS};
use crate::pages::{OnboardingPage, OnboardingStep};
use crate::theme::{signal_color, BRAND_BLUE, SELECTION_BG, SIGNAL_GREEN, SLATE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_onboarding(f: &mut Frame, area: Rect, page: &OnboardingPage) {
    match page.step {
        OnboardingStep::SignIn => render_sign_in(f, centered(area, 60, 16), page),
        OnboardingStep::ChooseServer => render_server_picker(f, centered(area, 96, 24), page),
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_sign_in(f: &mut Frame, area: Rect, page: &OnboardingPage) {
    let button_style = if page.can_continue() {
        Style::default()
            .fg(Color::White)
            .bg(BRAND_BLUE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SLATE).add_modifier(Modifier::DIM)
    };

    let email_line = if page.email.is_empty() {
        Span::styled("Enter your email", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(page.email.as_str())
    };

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to MorVPN",
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Sign in to your account or create a new one to get started",
            Style::default().fg(SLATE),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled("Email Address", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("│ ", Style::default().fg(BRAND_BLUE)),
            email_line,
            Span::styled("▏", Style::default().fg(BRAND_BLUE)),
        ]),
        Line::default(),
        Line::from(Span::styled(" ✉ Continue with Email ", button_style)).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled("── Or continue with ──", Style::default().fg(SLATE)))
            .alignment(Alignment::Center),
        Line::from(Span::styled("[ Google ]   [ GitHub ]", Style::default().fg(SLATE)))
            .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "By continuing, you agree to our Terms of Service and Privacy Policy",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" 🛡 Sign in ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BRAND_BLUE)),
        ),
        area,
    );
}

fn render_server_picker(f: &mut Frame, area: Rect, page: &OnboardingPage) {
    let block = Block::default()
        .title(Span::styled(
            " 📍 Choose Your Server Location ",
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND_BLUE));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Min(0),    // Server list
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(
            "Select the server location that best fits your needs. \
             We recommend the closest server for optimal performance.",
        )
        .style(Style::default().fg(SLATE))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let items: Vec<ListItem> = SERVERS
        .iter()
        .enumerate()
        .map(|(idx, server)| {
            let selected = idx == page.selected_server;
            let signal = SignalStrength::from_ping(server.ping_ms);
            let bars = "▮".repeat(signal.bars() as usize) + &"▯".repeat(4 - signal.bars() as usize);

            let mut first = vec![
                Span::raw(format!(" {} ", server.flag)),
                Span::styled(
                    pad_right(server.name, 24),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>5}ms ", server.ping_ms),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{} ", bars), Style::default().fg(signal_color(signal))),
                Span::styled(
                    pad_right(signal.label(), 10),
                    Style::default().fg(signal_color(signal)),
                ),
                Span::styled(format!("{:>3}% load", server.load_pct), Style::default().fg(SLATE)),
            ];
            if server.recommended {
                first.push(Span::styled(
                    "  Recommended",
                    Style::default().fg(SIGNAL_GREEN).add_modifier(Modifier::BOLD),
                ));
            }
            if selected {
                first.push(Span::styled("  ✔", Style::default().fg(BRAND_BLUE)));
            }

            let item = ListItem::new(vec![
                Line::from(first),
                Line::from(Span::styled(format!("      {}", server.city), Style::default().fg(SLATE))),
            ]);
            if selected {
                item.style(Style::default().bg(SELECTION_BG))
            } else {
                item
            }
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    let buttons = Line::from(vec![
        Span::styled(" ← Back ", Style::default().fg(SLATE)),
        Span::raw("   "),
        Span::styled(
            " Connect to MorVPN › ",
            Style::default()
                .fg(Color::White)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), chunks[2]);
}
