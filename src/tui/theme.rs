// src/tui/theme.rs — Color scheme and style definitions for the playground.

use ratatui::style::{Color, Modifier, Style};

use crate::playground::color;

/// Playground palette and semantic styles.
pub struct Theme;

impl Theme {
    // ── Palette ──────────────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(16, 185, 129);
    pub const MINT: Color = Color::Rgb(209, 250, 229);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const YELLOW: Color = Color::Rgb(230, 200, 60);
    pub const GRAY: Color = Color::Rgb(120, 120, 140);
    pub const DIM: Color = Color::Rgb(80, 80, 100);
    pub const SELECTED_BG: Color = Color::Rgb(40, 44, 60);

    // ── Semantic styles ──────────────────────────────────────────

    /// Active view tab.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive view tab.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// App title in the header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Border of the pane that has keyboard focus (editing, picking).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Failed request line.
    pub fn error() -> Style {
        Style::default().fg(Theme::RED)
    }

    /// Status messages and local refusals.
    pub fn warning() -> Style {
        Style::default().fg(Theme::YELLOW)
    }

    /// Red banner for an exhausted funds account.
    pub fn banner() -> Style {
        Style::default()
            .fg(Theme::RED)
            .bg(Color::Rgb(60, 20, 20))
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted row in the item list.
    pub fn selected() -> Style {
        Style::default().bg(Theme::SELECTED_BG).fg(Theme::WHITE)
    }

    /// Chart axes and PCA axis lines.
    pub fn axis() -> Style {
        Style::default().fg(Theme::MINT)
    }

    /// A score value in the ranking list.
    pub fn score() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Compare action label: live when a submit would do something.
    pub fn action(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::DIM)
        }
    }

    /// Key name in the footer hints.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Description next to a key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Terminal color for an item color string. Unparseable colors draw gray.
    pub fn item(color_str: &str) -> Color {
        match color::parse_rgb(color_str) {
            Some((r, g, b)) => Color::Rgb(r, g, b),
            None => Theme::GRAY,
        }
    }
}
