// tests/render_test.rs — Playground screen rendered into an in-memory terminal

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use embedscope::client::ScoreOutcome;
use embedscope::infra::config::Config;
use embedscope::infra::errors::PlaygroundError;
use embedscope::playground::types::{PcaPoint, Similarity};
use embedscope::playground::{FundsAccount, Item, ScoringResult};
use embedscope::tui::app::{render, Action, App, Incoming};

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, c: char) -> Action {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn result_for(items: &[Item]) -> ScoringResult {
    let mut table = HashMap::new();
    for a in items {
        let row = items
            .iter()
            .filter(|b| b.id != a.id)
            .map(|b| (b.id.clone(), 0.25))
            .collect();
        table.insert(a.id.clone(), row);
    }
    ScoringResult {
        model: "openai/text-embedding-3-small".into(),
        similarity: Similarity {
            cosine: table.clone(),
            dot_product: table.clone(),
            euclidean: table,
        },
        pca: items
            .iter()
            .map(|i| (i.id.clone(), PcaPoint { x: 0.3, y: -0.2, z: 0.1 }))
            .collect(),
    }
}

fn scored_app() -> App {
    let mut app = App::new(&Config::default(), "openai/text-embedding-3-small");
    let Action::Dispatch(req) = press(&mut app, 's') else {
        panic!("seeded list should be comparable");
    };
    let result = result_for(&req.items);
    app.apply(Incoming::Scored(ScoreOutcome {
        seq: req.seq,
        result: Ok(result),
    }));
    app
}

#[test]
fn test_initial_screen_shows_seed_and_placeholder() {
    let app = App::new(&Config::default(), "openai/text-embedding-3-small");
    let text = screen(&app);
    assert!(text.contains("embedscope"));
    assert!(text.contains("openai/text-embedding-3-small"));
    assert!(text.contains("Manchester United"));
    assert!(text.contains("Items (8)"));
    assert!(text.contains("Press s to compare and see results."));
}

#[test]
fn test_similarity_view_after_scoring() {
    let app = scored_app();
    let text = screen(&app);
    assert!(!text.contains("Press s to compare"));
    assert!(text.contains("cosine distance"));
    assert!(text.contains("0.250000"));
}

#[test]
fn test_pca_view_after_toggle() {
    let mut app = scored_app();
    press(&mut app, 'v');
    let text = screen(&app);
    assert!(text.contains("yaw 35"));
    assert!(!text.contains("Press s to compare"));
}

#[test]
fn test_error_line_shown_on_failure() {
    let mut app = App::new(&Config::default(), "openai/text-embedding-3-small");
    let Action::Dispatch(req) = press(&mut app, 's') else {
        panic!("seeded list should be comparable");
    };
    app.apply(Incoming::Scored(ScoreOutcome {
        seq: req.seq,
        result: Err(PlaygroundError::Network("connection refused".into())),
    }));
    let text = screen(&app);
    assert!(text.contains("network failed"));
    assert!(text.contains("connection refused"));
    assert!(text.contains("Press s to compare and see results."));
}

#[test]
fn test_local_refusal_not_reported_as_service_failure() {
    let mut config = Config::default();
    config.seed.truncate(1);
    let mut app = App::new(&config, "openai/text-embedding-3-small");
    assert_eq!(press(&mut app, 's'), Action::None);

    let text = screen(&app);
    assert!(text.contains("Invalid request: at least 2 items are required, got 1"));
    assert!(!text.contains("failed"));
}

#[test]
fn test_funds_banner_only_when_exhausted() {
    let mut app = App::new(&Config::default(), "openai/text-embedding-3-small");
    app.apply(Incoming::Funds(Ok(FundsAccount {
        funds: 25.0,
        costs_incurred: 3.0,
    })));
    assert!(!screen(&app).contains("has run out"));

    app.apply(Incoming::Funds(Ok(FundsAccount {
        funds: 25.0,
        costs_incurred: 25.0,
    })));
    assert!(screen(&app).contains("has run out"));
}

#[test]
fn test_model_picker_overlay() {
    let mut app = App::new(&Config::default(), "openai/text-embedding-3-small");
    press(&mut app, 'm');
    let text = screen(&app);
    assert!(text.contains("voyageai/voyage-3-lite"));
    assert!(text.contains("google/text-embedding-005"));
}
