// src/tui/widgets/mod.rs — Panels and overlays of the playground screen.

pub mod items;
pub mod pca;
pub mod similarity;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::playground::{FailedRequest, FundsAccount};
use crate::tui::theme::Theme;

/// Shorten `s` to at most `max` characters, marking the cut with an ellipsis.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('\u{2026}');
    out
}

/// Shown in place of a chart until something has been scored.
pub fn render_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let p = Paragraph::new(Line::from(Span::styled(message.to_string(), Theme::text_dim())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

/// One-line error above the results. Service failures are labeled with
/// their kind; a request refused locally already reads as a sentence.
pub fn render_error(f: &mut Frame, area: Rect, error: &FailedRequest) {
    let line = if error.remote {
        Line::from(vec![
            Span::styled(format!(" {} failed: ", error.kind), Theme::error()),
            Span::styled(error.message.clone(), Theme::text()),
        ])
    } else {
        Line::from(Span::styled(format!(" {}", error.message), Theme::warning()))
    };
    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Red banner for when the hosted service has spent its budget.
pub fn render_funds_banner(f: &mut Frame, area: Rect, account: &FundsAccount) {
    let text = format!(
        " The ${:.2} set aside for embeddings has run out; requests will likely fail until it is topped up. ",
        account.funds
    );
    let p = Paragraph::new(Line::from(Span::styled(text, Theme::banner())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::error()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

/// Model selector overlay.
pub fn render_model_picker(f: &mut Frame, area: Rect, models: &[String], cursor: usize, current: &str) {
    let height = (models.len() as u16 + 2).min(area.height);
    let popup = centered_rect(50, height, area);

    let rows: Vec<ListItem> = models
        .iter()
        .map(|m| {
            let marker = if m == current { "\u{2713} " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::key_hint()),
                Span::styled(m.clone(), Theme::text()),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .title(" Model ")
                .borders(Borders::ALL)
                .border_style(Theme::border_focus()),
        )
        .highlight_style(Theme::selected());

    let mut state = ListState::default();
    state.select(Some(cursor));

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);
}

/// A rect `percent_x` wide and `height` rows tall, centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
