// Header rendering module
//
// Renders the top bar with the product name, the current view and, on the
// dashboard, the connection badge.

use crate::app::{AppState, View};
use crate::catalog::PRODUCT_NAME;
use crate::pages::Page;
use crate::theme::{status_badge_text, status_color, BRAND_BLUE, SLATE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(BRAND_BLUE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner);

    let title = match app.view() {
        View::Settings => format!("{} Settings", PRODUCT_NAME),
        _ => PRODUCT_NAME.to_string(),
    };
    let mut left = vec![
        Span::styled(" 🛡 ", Style::default().fg(BRAND_BLUE)),
        Span::styled(
            title,
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.view() != View::Settings {
        left.push(Span::styled(
            format!("  › {}", app.view().title()),
            Style::default().fg(SLATE),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(left)), cols[0]);

    let right = match &app.page {
        Page::Dashboard(d) => Line::from(Span::styled(
            format!("[ {} ] ", status_badge_text(d.status())),
            Style::default()
                .fg(status_color(d.status()))
                .add_modifier(Modifier::BOLD),
        )),
        Page::Onboarding(o) => {
            // Two-segment progress indicator
            let seg = |n: usize| {
                let color = if o.step.number() >= n { BRAND_BLUE } else { SLATE };
                Span::styled("━━━━ ", Style::default().fg(color))
            };
            Line::from(vec![seg(1), seg(2)])
        }
        _ => Line::default(),
    };
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);
}
