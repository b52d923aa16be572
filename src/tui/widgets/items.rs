// src/tui/widgets/items.rs — The editable item list (left pane).

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::playground::{color, ItemStore};
use crate::tui::app::Mode;
use crate::tui::theme::Theme;

const CURSOR: &str = "\u{258f}";

pub struct ItemsPane<'a> {
    pub store: &'a ItemStore,
    pub selected: usize,
    pub mode: &'a Mode,
    pub compare_enabled: bool,
    pub loading: bool,
}

pub fn render(f: &mut Frame, area: Rect, pane: &ItemsPane) {
    let focused = !matches!(pane.mode, Mode::Normal);

    let rows: Vec<ListItem> = pane
        .store
        .items()
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::styled("\u{21c5} ", Theme::text_dim()),
                Span::styled(
                    "\u{25a0}\u{25a0}",
                    Style::default().fg(Theme::item(&item.color)),
                ),
                Span::raw(" "),
            ];

            if item.text.is_empty() {
                spans.push(Span::styled("(empty)", Theme::text_dim()));
            } else {
                spans.push(Span::styled(item.text.clone(), Theme::text()));
            }

            match pane.mode {
                Mode::EditText { id } if *id == item.id => {
                    spans.push(Span::styled(CURSOR, Theme::key_hint()));
                }
                Mode::EditColor { id, buffer, .. } if *id == item.id => {
                    let style = if color::is_valid(buffer) {
                        Theme::text()
                    } else {
                        Theme::error()
                    };
                    spans.push(Span::styled("  color: ", Theme::text_dim()));
                    spans.push(Span::styled(buffer.clone(), style));
                    spans.push(Span::styled(CURSOR, Theme::key_hint()));
                }
                _ => {}
            }

            if pane.store.is_edited(&item.id) {
                spans.push(Span::styled(" *", Theme::warning()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let compare_label = if pane.loading {
        " scoring\u{2026} "
    } else {
        " compare "
    };
    let actions = Line::from(vec![
        Span::styled(" a", Theme::key_hint()),
        Span::styled(" add ", Theme::key_desc()),
        Span::styled(" s", Theme::action(pane.compare_enabled)),
        Span::styled(compare_label, Theme::action(pane.compare_enabled)),
    ]);

    let block = Block::default()
        .title(format!(" Items ({}) ", pane.store.len()))
        .title_bottom(actions)
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focus()
        } else {
            Theme::border()
        });

    let list = List::new(rows)
        .block(block)
        .highlight_style(Theme::selected());

    let mut state = ListState::default();
    if !pane.store.is_empty() {
        state.select(Some(pane.selected.min(pane.store.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}
