// Status Bar rendering module
//
// Renders the bottom status bar with the key hints of the mounted view,
// dropping lower-priority hints when the terminal is narrow.

use crate::app::AppState;
use crate::pages::{OnboardingStep, Page};
use crate::theme::{ALERT_RED, BRAND_BLUE, SLATE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
    color: Color,
}

const fn hint(priority: u8, key: &'static str, desc: &'static str) -> Hint {
    Hint {
        priority,
        key,
        desc,
        color: BRAND_BLUE,
    }
}

fn hints_for(app: &AppState) -> Vec<Hint> {
    let mut hints = match &app.page {
        Page::Landing(_) => vec![
            hint(1, "Enter:", "Get Started | "),
            hint(2, "↑↓:", "Features | "),
        ],
        Page::Onboarding(o) if o.step == OnboardingStep::SignIn => vec![
            hint(1, "Enter:", "Continue | "),
            hint(1, "Esc:", "Home | "),
        ],
        Page::Onboarding(_) => vec![
            hint(1, "Enter:", "Connect | "),
            hint(1, "↑↓:", "Server | "),
            hint(2, "Esc:", "Back | "),
        ],
        Page::Dashboard(d) => {
            let connect = if d.connect_enabled() {
                hint(1, "Enter:", "Connect/Disconnect | ")
            } else {
                hint(1, "Enter:", "(connecting) | ")
            };
            vec![
                connect,
                hint(1, "S:", "Settings | "),
                hint(2, "A:", "AI Boost | "),
                hint(2, "←→:", "Protocol | "),
                hint(3, "Esc:", "Servers | "),
            ]
        }
        Page::Settings(_) => vec![
            hint(1, "Tab:", "Section | "),
            hint(1, "Enter:", "Toggle | "),
            hint(2, "↑↓:", "Move | "),
            hint(2, "Y:", "Copy Fingerprint | "),
            hint(3, "Esc:", "Dashboard | "),
        ],
    };

    let typing = matches!(&app.page, Page::Onboarding(o) if o.step == OnboardingStep::SignIn);
    let quit = if typing {
        Hint { priority: 1, key: "^C:", desc: "Quit ", color: ALERT_RED }
    } else {
        Hint { priority: 1, key: "Q:", desc: "Quit ", color: ALERT_RED }
    };
    hints.push(quit);
    hints
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    // Calculate available width for hints (subtract borders and icon)
    let available_width = area.width.saturating_sub(4) as usize;
    let hints = hints_for(app);

    let mut spans = vec![Span::styled(" ⌨ ", Style::default().fg(BRAND_BLUE))];
    let mut current_length = 4;

    // Process hints by priority
    for priority in 1..=3 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.chars().count() + hint.desc.len();
            if current_length + hint_length <= available_width {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(hint.desc, Style::default().fg(SLATE)));
                current_length += hint_length;
            }
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(BRAND_BLUE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
