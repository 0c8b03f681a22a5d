// Landing view rendering
//
// Hero text, the stats row, the feature list with the active feature
// highlighted, and a detail panel for the active feature.

use crate::catalog::{FEATURES, LANDING_STATS};
use crate::pages::LandingPage;
use crate::theme::{BRAND_BLUE, SELECTION_BG, SIGNAL_GREEN, SLATE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_landing(f: &mut Frame, area: Rect, page: &LandingPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero
            Constraint::Length(4), // Stats
            Constraint::Min(0),    // Features
            Constraint::Length(3), // Call to action
        ])
        .split(area);

    render_hero(f, chunks[0]);
    render_stats(f, chunks[1]);

    let feature_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_feature_list(f, feature_chunks[0], page);
    render_feature_detail(f, feature_chunks[1], page);

    let cta = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            " ▶ Start Your Free Trial ",
            Style::default()
                .fg(Color::White)
                .bg(SIGNAL_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   30-day money-back guarantee • No credit card required",
            Style::default().fg(SLATE),
        ),
    ])])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(SLATE)));
    f.render_widget(cta, chunks[3]);
}

fn render_hero(f: &mut Frame, area: Rect) {
    let hero = vec![
        Line::from(Span::styled(
            "★ Trusted by 10M+ users worldwide",
            Style::default().fg(BRAND_BLUE),
        )),
        Line::default(),
        Line::from(Span::styled(
            "The World's Fastest",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "VPN Accelerator",
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Experience blazing-fast speeds with AI-powered routing, unlock global content, \
             and protect your privacy with military-grade security.",
            Style::default().fg(SLATE),
        )),
    ];
    f.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_stats(f: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, LANDING_STATS.len() as u32); LANDING_STATS.len()])
        .split(area);

    for ((value, label), col) in LANDING_STATS.iter().zip(cols.iter()) {
        let stat = Paragraph::new(vec![
            Line::from(Span::styled(
                *value,
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(SLATE))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(stat, *col);
    }
}

fn render_feature_list(f: &mut Frame, area: Rect, page: &LandingPage) {
    let items: Vec<ListItem> = FEATURES
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            let active = idx == page.active_feature;
            let marker = if active { "▌" } else { " " };
            let title_style = if active {
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let item = ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(BRAND_BLUE)),
                    Span::raw(format!("{} ", feature.icon)),
                    Span::styled(feature.title, title_style),
                ]),
                Line::from(Span::styled(
                    format!("   {}", feature.description),
                    Style::default().fg(SLATE),
                )),
            ]);
            if active {
                item.style(Style::default().bg(SELECTION_BG))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(
                " Powerful Features for Modern Users ",
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BRAND_BLUE)),
    );
    f.render_widget(list, area);
}

fn render_feature_detail(f: &mut Frame, area: Rect, page: &LandingPage) {
    let feature = page.active();
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}  {}", feature.icon, feature.title),
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(feature.details),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(BRAND_BLUE)),
    );
    f.render_widget(detail, area);
}
