// src/tui/widgets/similarity.rs — 1-D similarity scatter against the anchor item.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::playground::view::{score_bounds, ScorePoint};
use crate::playground::SimilarityMethod;
use crate::tui::theme::Theme;

use super::ellipsize;

pub fn render(f: &mut Frame, area: Rect, method: SimilarityMethod, points: &[ScorePoint]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(area);

    render_chart(f, chunks[0], method, points);
    render_ranking(f, chunks[1], method, points);
}

fn render_chart(f: &mut Frame, area: Rect, method: SimilarityMethod, points: &[ScorePoint]) {
    let n = points.len();
    let top = n.saturating_sub(1).max(1) as f64;

    // One dataset per point so each gets its own color. First item on top.
    let coords: Vec<[(f64, f64); 1]> = points
        .iter()
        .enumerate()
        .map(|(row, p)| [(p.score, (n - 1 - row) as f64)])
        .collect();
    let datasets: Vec<Dataset> = points
        .iter()
        .zip(coords.iter())
        .map(|(p, c)| {
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Theme::item(&p.color)))
                .data(c)
        })
        .collect();

    let [lo, hi] = score_bounds(points);
    let x_labels = vec![
        format!("{lo:.3}"),
        format!("{:.3}", (lo + hi) / 2.0),
        format!("{hi:.3}"),
    ];
    // Axis labels are spread evenly bottom-to-top, matching integer rows.
    let y_labels: Vec<String> = points
        .iter()
        .rev()
        .map(|p| ellipsize(&p.text, 14))
        .collect();

    let anchor = points
        .iter()
        .find(|p| p.is_anchor)
        .map(|p| ellipsize(&p.text, 24))
        .unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} vs \"{anchor}\" ", method.axis_title()))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled(method.axis_title(), Theme::text_dim()))
                .style(Theme::axis())
                .bounds([lo, hi])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Theme::axis())
                .bounds([0.0, top])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn render_ranking(f: &mut Frame, area: Rect, method: SimilarityMethod, points: &[ScorePoint]) {
    let block = Block::default()
        .title(format!(" {} ", method.label()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines: Vec<Line> = points
        .iter()
        .map(|p| {
            let marker = if p.is_anchor { "\u{2693}" } else { "\u{25cf}" };
            Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(Theme::item(&p.color))),
                Span::styled(format!("{:<18}", ellipsize(&p.text, 18)), Theme::text()),
                Span::styled(format!("{:>10.6}", p.score), Theme::score()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
