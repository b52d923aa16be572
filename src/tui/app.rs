// src/tui/app.rs — Playground state, key handling, event loop, and rendering.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::client::{self, ScoreOutcome, ScoringBackend};
use crate::infra::config::Config;
use crate::infra::errors::PlaygroundError;
use crate::playground::{
    color, Camera, Controller, FundsAccount, ItemStore, ResultView, ScoreRequest,
    SimilarityMethod, ViewMode,
};

use super::theme::Theme;
use super::widgets;

const SPINNER: [&str; 4] = ["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"];
const PLACEHOLDER: &str = "Press s to compare and see results.";

// ── Interaction mode ─────────────────────────────────────────────

/// What keystrokes currently act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    EditText {
        id: String,
    },
    EditColor {
        id: String,
        buffer: String,
        original: String,
    },
    PickModel {
        cursor: usize,
    },
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq)]
pub enum Action {
    None,
    Quit,
    Dispatch(ScoreRequest),
}

/// Messages from background tasks back to the UI thread.
#[derive(Debug)]
pub enum Incoming {
    Scored(ScoreOutcome),
    Funds(Result<FundsAccount, PlaygroundError>),
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    store: ItemStore,
    controller: Controller,
    models: Vec<String>,
    selected: usize,
    mode: Mode,
    view_mode: ViewMode,
    method: SimilarityMethod,
    camera: Camera,
    funds: Option<FundsAccount>,
    status: Option<String>,
    /// Store revision carried by the compare in flight, if any.
    scoring_rev: Option<u64>,
    tick: usize,
}

impl App {
    pub fn new(config: &Config, model: impl Into<String>) -> Self {
        Self {
            store: ItemStore::seeded(&config.seed),
            controller: Controller::new(model, config.limits.clone()),
            models: config.model_choices(),
            selected: 0,
            mode: Mode::Normal,
            view_mode: config.display.view,
            method: config.display.method,
            camera: Camera::default(),
            funds: None,
            status: None,
            scoring_rev: None,
            tick: 0,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn method(&self) -> SimilarityMethod {
        self.method
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn funds(&self) -> Option<&FundsAccount> {
        self.funds.as_ref()
    }

    pub fn compare_enabled(&self) -> bool {
        self.store.can_submit() && !self.controller.is_loading()
    }

    /// Feed back a message from a background task.
    pub fn apply(&mut self, msg: Incoming) {
        match msg {
            Incoming::Scored(outcome) => {
                if !self.controller.complete(outcome.seq, outcome.result) {
                    return;
                }
                // Edits stay marked after a failure so `s` retries them.
                if let Some(rev) = self.scoring_rev.take() {
                    if self.controller.last_error().is_none() {
                        self.store.mark_scored(rev);
                    }
                }
            }
            Incoming::Funds(Ok(account)) => {
                if account.is_exhausted() {
                    tracing::warn!(funds = account.funds, "scoring service funds exhausted");
                }
                self.funds = Some(account);
            }
            Incoming::Funds(Err(e)) => {
                tracing::debug!("funds lookup failed: {e}");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::EditText { id } => {
                self.handle_edit_text(&id, key);
                Action::None
            }
            Mode::EditColor {
                id,
                buffer,
                original,
            } => {
                self.handle_edit_color(id, buffer, original, key);
                Action::None
            }
            Mode::PickModel { cursor } => self.handle_pick_model(cursor, key),
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) -> Action {
        self.status = None;
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,

            // Reorder
            KeyCode::Up if shift => self.move_selected(-1),
            KeyCode::Down if shift => self.move_selected(1),
            KeyCode::Char('K') => self.move_selected(-1),
            KeyCode::Char('J') => self.move_selected(1),

            // Selection
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.store.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(max);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }

            // Editing
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
                if let Some(id) = self.selected_id() {
                    self.mode = Mode::EditText { id };
                }
            }
            KeyCode::Char('a') => {
                let id = self.store.add();
                self.selected = self.store.len() - 1;
                self.mode = Mode::EditText { id };
            }
            KeyCode::Char('c') => {
                if let Some(item) = self.selected_id().and_then(|id| self.store.get(&id)) {
                    self.mode = Mode::EditColor {
                        id: item.id.clone(),
                        buffer: item.color.clone(),
                        original: item.color.clone(),
                    };
                }
            }

            // Scoring
            KeyCode::Char('s') => {
                if let Some(req) = self.compare() {
                    return Action::Dispatch(req);
                }
            }
            KeyCode::Char('m') => {
                let cursor = self
                    .models
                    .iter()
                    .position(|m| m == self.controller.model())
                    .unwrap_or(0);
                self.mode = Mode::PickModel { cursor };
            }

            // Results
            KeyCode::Char('v') | KeyCode::Tab => self.view_mode = self.view_mode.toggle(),
            KeyCode::Char('d') => self.method = self.method.next(),
            KeyCode::Char('[') => self.camera.rotate(-15.0, 0.0),
            KeyCode::Char(']') => self.camera.rotate(15.0, 0.0),
            KeyCode::Char('{') => self.camera.rotate(0.0, -10.0),
            KeyCode::Char('}') => self.camera.rotate(0.0, 10.0),

            _ => {}
        }
        Action::None
    }

    fn handle_edit_text(&mut self, id: &str, key: KeyEvent) {
        let Some(current) = self.store.get(id).map(|i| i.text.clone()) else {
            self.mode = Mode::Normal;
            return;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                let mut text = current;
                if text.pop().is_some() {
                    self.store.edit_text(id, text);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = current;
                text.push(c);
                self.store.edit_text(id, text);
            }
            _ => {}
        }
    }

    fn handle_edit_color(&mut self, id: String, mut buffer: String, original: String, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.apply_color(&id, &original);
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Enter => {
                if !color::is_valid(&buffer) {
                    self.status = Some(format!("'{buffer}' is not a color; kept {original}"));
                    self.apply_color(&id, &original);
                }
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Tab | KeyCode::Right => buffer = color::next_preset(&buffer).to_string(),
            KeyCode::BackTab | KeyCode::Left => buffer = color::prev_preset(&buffer).to_string(),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buffer.push(c),
            _ => {}
        }
        // Valid colors preview live, like dragging a picker.
        if color::is_valid(&buffer) {
            self.apply_color(&id, &buffer);
        }
        self.mode = Mode::EditColor {
            id,
            buffer,
            original,
        };
    }

    fn handle_pick_model(&mut self, cursor: usize, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = Mode::Normal,
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::PickModel {
                    cursor: cursor.saturating_sub(1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.models.len().saturating_sub(1);
                self.mode = Mode::PickModel {
                    cursor: (cursor + 1).min(max),
                };
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                if let Some(model) = self.models.get(cursor).cloned() {
                    let superseding = self.controller.is_loading();
                    if let Some(req) = self.controller.set_model(model) {
                        if !superseding {
                            self.scoring_rev = None;
                        }
                        return Action::Dispatch(req);
                    }
                }
            }
            _ => {}
        }
        Action::None
    }

    fn selected_id(&self) -> Option<String> {
        self.store.items().get(self.selected).map(|i| i.id.clone())
    }

    fn move_selected(&mut self, delta: isize) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let target = self.selected.saturating_add_signed(delta);
        if let Some(to) = self.store.reorder(&id, target) {
            self.selected = to;
            self.sync_cosmetic(&id);
        }
    }

    fn apply_color(&mut self, id: &str, color: &str) {
        self.store.edit_color(id, color);
        self.sync_cosmetic(id);
    }

    fn sync_cosmetic(&mut self, id: &str) {
        if let (Some(item), Some(pos)) = (self.store.get(id), self.store.position(id)) {
            self.controller.sync_cosmetic(item, pos);
        }
    }

    fn compare(&mut self) -> Option<ScoreRequest> {
        if self.controller.is_loading() {
            self.status = Some("Already scoring; wait for the result.".into());
            return None;
        }
        let rev = self.store.revision();
        let Some(items) = self.store.submit() else {
            self.status = Some("Nothing changed since the last compare.".into());
            return None;
        };
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
        let req = self.controller.compare(items)?;
        self.scoring_rev = Some(rev);
        Some(req)
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the playground. Blocks until the user quits (q / Esc / Ctrl-C).
///
/// Must be called from inside a tokio runtime; requests run as tasks on it.
pub fn run_playground(
    config: &Config,
    backend: Arc<dyn ScoringBackend>,
    model: String,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Handle::try_current()
        .map_err(|e| anyhow::anyhow!("the playground needs a tokio runtime: {e}"))?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, model);

    if config.service.show_funds {
        let backend = backend.clone();
        let tx = tx.clone();
        runtime.spawn(async move {
            let funds = backend.remaining_funds().await;
            let _ = tx.send(Incoming::Funds(funds));
        });
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_term)?;

    let result = run_event_loop(&mut terminal, &mut app, &runtime, &backend, &tx, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &tokio::runtime::Handle,
    backend: &Arc<dyn ScoringBackend>,
    tx: &mpsc::UnboundedSender<Incoming>,
    rx: &mut mpsc::UnboundedReceiver<Incoming>,
) -> anyhow::Result<()> {
    loop {
        while let Ok(msg) = rx.try_recv() {
            app.apply(msg);
        }

        app.tick = app.tick.wrapping_add(1);
        terminal.draw(|f| render(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match app.handle_key(key) {
            Action::Quit => return Ok(()),
            Action::Dispatch(req) => {
                let backend = backend.clone();
                let tx = tx.clone();
                runtime.spawn(async move {
                    let outcome = client::run_request(backend, req).await;
                    let _ = tx.send(Incoming::Scored(outcome));
                });
            }
            Action::None => {}
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let banner = app.funds.filter(|a| a.is_exhausted());

    let mut constraints = vec![Constraint::Length(3)];
    if banner.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(10));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let mut idx = 0;
    render_header(f, chunks[idx], app);
    idx += 1;
    if let Some(account) = banner {
        widgets::render_funds_banner(f, chunks[idx], &account);
        idx += 1;
    }
    render_body(f, chunks[idx], app);
    render_footer(f, chunks[idx + 1], app);

    if let Mode::PickModel { cursor } = app.mode {
        widgets::render_model_picker(f, size, &app.models, cursor, app.controller.model());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let views = [ViewMode::Similarity, ViewMode::Pca];
    let titles: Vec<Line> = views
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let style = if *v == app.view_mode {
                Theme::tab_active()
            } else {
                Theme::tab_inactive()
            };
            Line::from(Span::styled(format!(" {} {} ", i + 1, v.label()), style))
        })
        .collect();

    let loading = if app.controller.is_loading() {
        format!(" {} ", SPINNER[app.tick % SPINNER.len()])
    } else {
        String::new()
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled(" embedscope ", Theme::header()))
                .title(Span::styled(
                    format!(" {}{loading}", app.controller.model()),
                    Theme::text_dim(),
                ))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .select(views.iter().position(|v| *v == app.view_mode).unwrap_or(0))
        .highlight_style(Theme::tab_active())
        .divider(Span::styled(" | ", Theme::text_dim()));

    f.render_widget(tabs, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    let pane = widgets::items::ItemsPane {
        store: &app.store,
        selected: app.selected,
        mode: &app.mode,
        compare_enabled: app.compare_enabled(),
        loading: app.controller.is_loading(),
    };
    widgets::items::render(f, chunks[0], &pane);
    render_results(f, chunks[1], app);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let (area, error_area) = match app.controller.last_error() {
        Some(_) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(5)])
                .split(area);
            (parts[1], Some(parts[0]))
        }
        None => (area, None),
    };
    if let (Some(err), Some(err_area)) = (app.controller.last_error(), error_area) {
        widgets::render_error(f, err_area, err);
    }

    match app.controller.view(app.view_mode, app.method) {
        ResultView::Placeholder => widgets::render_placeholder(f, area, PLACEHOLDER),
        ResultView::Similarity { method, points } => {
            widgets::similarity::render(f, area, method, &points)
        }
        ResultView::Pca { points } => widgets::pca::render(f, area, &points, app.camera),
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = &app.status {
        let p = Paragraph::new(Line::from(Span::styled(format!(" {status}"), Theme::warning())));
        f.render_widget(p, area);
        return;
    }

    let pairs: &[(&str, &str)] = match app.mode {
        Mode::Normal => &[
            (" q", " quit  "),
            ("a", " add  "),
            ("enter", " edit  "),
            ("c", " color  "),
            ("J/K", " move  "),
            ("s", " compare  "),
            ("m", " model  "),
            ("v", " view  "),
            ("d", " metric  "),
            ("[ ] { }", " rotate"),
        ],
        Mode::EditText { .. } => &[(" type", " to edit  "), ("enter/esc", " done")],
        Mode::EditColor { .. } => &[
            (" type", " hex or name  "),
            ("tab/\u{2190}\u{2192}", " presets  "),
            ("enter", " keep  "),
            ("esc", " revert"),
        ],
        Mode::PickModel { .. } => &[(" \u{2191}\u{2193}", " choose  "), ("enter", " select  "), ("esc", " cancel")],
    };

    let spans: Vec<Span> = pairs
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, Theme::key_hint()),
                Span::styled(*desc, Theme::key_desc()),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
