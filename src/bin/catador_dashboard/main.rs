//! catador-dashboard: terminal dashboard for the wine inference server
//!
//! Probes the backend, previews a prepared test sample, submits it
//! for prediction on demand, and keeps a session history of results.
//! The feature importance chart reads the local model artifact, not
//! the server.
//!
//! # Usage
//!
//! ```bash
//! # Start the server in one terminal
//! catador serve --demo
//!
//! # Dashboard in another terminal
//! catador-dashboard --url http://127.0.0.1:8000 --input data/test_input.json
//! ```
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ Backend: ● online   http://127.0.0.1:8000   input: test.json    │
//! ├───────────────────────────────┬──────────────────────────────────┤
//! │ Test Input                    │ Prediction                       │
//! │ {                             │                                  │
//! │   "alcohol": 13.2,            │   Predicted Wine Class: Class 0  │
//! │   "malic_acid": 1.78,         ├──────────────────────────────────┤
//! │   ...                         │ History                          │
//! │ }                             │ Alcohol  Malic Acid  Prediction  │
//! │                               │ 13.20    1.78        0           │
//! ├───────────────────────────────┴──────────────────────────────────┤
//! │ Feature Importance                                               │
//! │ proline              ████████████████████ 0.280                  │
//! │ flavanoids           ███████████████ 0.210                       │
//! │ ...                                                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ [p] Predict  [r] Reload input  [c] Clear history  [q] Quit       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Wrap},
};

use catador::artifact::{WineModel, DEFAULT_ARTIFACT_PATH};
use catador::client::{BackendStatus, PredictionClient};
use catador::wine::{TestInput, CLASS_LABELS};

/// How long a transient notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// How many history rows the table shows
const HISTORY_LIMIT: usize = 5;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "catador-dashboard")]
#[command(about = "Terminal dashboard for the catador wine inference server")]
#[command(version)]
struct Args {
    /// Server URL to talk to
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Test input JSON file ({"input_test": {...}})
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Local model artifact, used for the gate check and the
    /// feature importance chart
    #[arg(short, long, default_value = DEFAULT_ARTIFACT_PATH)]
    model: PathBuf,

    /// Health probe interval in milliseconds
    #[arg(long, default_value = "2000")]
    probe_ms: u64,
}

/// What the prediction panel is showing
#[derive(Debug, Clone, PartialEq, Eq)]
enum PredictionView {
    /// Nothing requested yet, or the last request failed
    Idle,
    /// Request in flight (rendered once before the blocking call)
    Pending,
    /// Last request succeeded with this class id
    Shown(u32),
}

/// One completed prediction
#[derive(Debug, Clone, PartialEq)]
struct HistoryEntry {
    alcohol: f64,
    malic_acid: f64,
    prediction: u32,
}

/// Transient message, the terminal stand-in for a toast
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    raised_at: Instant,
}

/// Dashboard state
struct DashboardApp {
    /// Backend client
    client: PredictionClient,
    /// Where the test input file lives, if configured
    input_path: Option<PathBuf>,
    /// Local artifact for the gate check and the importance chart
    model_path: PathBuf,
    /// Health probe cadence
    probe_interval: Duration,
    /// Last probe outcome
    backend: BackendStatus,
    /// Loaded test sample
    input: Option<TestInput>,
    /// Why the input failed to load
    input_error: Option<String>,
    /// Prediction panel state
    view: PredictionView,
    /// Session prediction history
    history: Vec<HistoryEntry>,
    /// (name, importance) pairs from the local artifact
    importances: Option<Vec<(String, f64)>>,
    /// Why there is no chart
    importance_note: Option<String>,
    /// Transient message
    notice: Option<Notice>,
    /// When the backend was last probed
    last_probe: Option<Instant>,
    /// Should quit
    should_quit: bool,
}

impl DashboardApp {
    /// Create the app without touching the network or the filesystem
    fn new(url: String, input_path: Option<PathBuf>, model_path: PathBuf, probe_ms: u64) -> Self {
        Self {
            client: PredictionClient::new(url),
            input_path,
            model_path,
            probe_interval: Duration::from_millis(probe_ms),
            backend: BackendStatus::Offline("not probed yet".to_string()),
            input: None,
            input_error: None,
            view: PredictionView::Idle,
            history: Vec::new(),
            importances: None,
            importance_note: Some("artifact not read yet".to_string()),
            notice: None,
            last_probe: None,
            should_quit: false,
        }
    }

    /// Probe the backend health endpoint
    fn probe_health(&mut self) {
        self.backend = self.client.health();
        if let BackendStatus::Offline(reason) = &self.backend {
            log::error!("backend offline: {reason}");
        }
        self.last_probe = Some(Instant::now());
    }

    /// Re-read the test input file, replacing the loaded sample
    fn reload_input(&mut self) {
        let Some(path) = self.input_path.clone() else {
            self.raise_notice("No input file configured. Start with --input <file>.");
            return;
        };
        match TestInput::from_path(&path) {
            Ok(input) => {
                self.input = Some(input);
                self.input_error = None;
            }
            Err(e) => {
                self.input = None;
                self.input_error = Some(e.to_string());
                log::error!("input reload failed: {e}");
            }
        }
    }

    /// Read the local artifact for the feature importance chart
    fn refresh_importances(&mut self) {
        match WineModel::load(&self.model_path) {
            Ok(model) => match model.feature_importances() {
                Some(importances) => {
                    self.importances = Some(
                        model
                            .feature_names
                            .iter()
                            .cloned()
                            .zip(importances.iter().copied())
                            .collect(),
                    );
                    self.importance_note = None;
                }
                None => {
                    self.importances = None;
                    self.importance_note =
                        Some("artifact carries no feature importances".to_string());
                }
            },
            Err(e) => {
                self.importances = None;
                self.importance_note = Some(e.to_string());
            }
        }
    }

    /// Run the prediction gates; on success enter the pending state
    ///
    /// Returns true when the caller should go on and submit the
    /// request. Gate failures raise a notice and leave everything
    /// else untouched.
    fn begin_prediction(&mut self) -> bool {
        if self.input.is_none() {
            self.raise_notice("Upload a test input file with an input_test field first.");
            return false;
        }
        if !self.model_path.is_file() {
            self.raise_notice(format!(
                "Model artifact {} missing. Train and save a model first.",
                self.model_path.display()
            ));
            return false;
        }
        self.view = PredictionView::Pending;
        true
    }

    /// Submit the loaded sample and apply the outcome
    ///
    /// Call only after [`begin_prediction`] returned true.
    ///
    /// [`begin_prediction`]: DashboardApp::begin_prediction
    fn complete_prediction(&mut self) {
        let Some(input) = self.input.clone() else {
            self.view = PredictionView::Idle;
            return;
        };
        let outcome = self.client.predict(&input.input_test);
        self.apply_prediction(&input, outcome);
    }

    /// Fold a prediction outcome into the view and the history
    ///
    /// Failures raise a notice and return the panel to idle; the
    /// history only records successes.
    fn apply_prediction(&mut self, input: &TestInput, outcome: catador::Result<u32>) {
        match outcome {
            Ok(class) => {
                self.view = PredictionView::Shown(class);
                self.history.push(HistoryEntry {
                    alcohol: input.input_test.alcohol,
                    malic_acid: input.input_test.malic_acid,
                    prediction: class,
                });
            }
            Err(e) => {
                self.view = PredictionView::Idle;
                self.raise_notice(e.to_string());
                log::error!("prediction failed: {e}");
            }
        }
    }

    /// History rows the table shows, oldest of the kept rows first
    fn recent_history(&self) -> &[HistoryEntry] {
        let start = self.history.len().saturating_sub(HISTORY_LIMIT);
        &self.history[start..]
    }

    /// Drop all session history
    fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Show a transient notice, replacing any current one
    fn raise_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            raised_at: Instant::now(),
        });
    }

    /// Periodic upkeep: expire the notice, re-probe the backend
    fn tick(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.raised_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
        let due = match self.last_probe {
            None => true,
            Some(at) => at.elapsed() >= self.probe_interval,
        };
        if due {
            self.probe_health();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // opt-in logging: stderr writes would tear the alternate screen,
    // so only log when the user asked for it (and redirected stderr)
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let args = Args::parse();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = DashboardApp::new(args.url, args.input, args.model, args.probe_ms);
    if app.input_path.is_some() {
        app.reload_input();
    }
    app.refresh_importances();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut DashboardApp,
) -> io::Result<()> {
    loop {
        app.tick();

        // Draw UI
        terminal.draw(|f| ui(f, app))?;

        // Handle input (non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('p') => {
                            if app.begin_prediction() {
                                // show the pending state before the
                                // blocking request starts
                                terminal.draw(|f| ui(f, app))?;
                                app.complete_prediction();
                            }
                        }
                        KeyCode::Char('r') => {
                            app.reload_input();
                        }
                        KeyCode::Char('c') => {
                            app.clear_history();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &DashboardApp) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // status bar
            Constraint::Min(10),    // input preview + prediction/history
            Constraint::Length(15), // feature importance chart
            Constraint::Length(1),  // transient notice
            Constraint::Length(1),  // key hints
        ])
        .split(area);

    render_status_bar(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_input_preview(f, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(main_chunks[1]);

    render_prediction(f, app, right_chunks[0]);
    render_history(f, app, right_chunks[1]);
    render_importances(f, app, chunks[2]);

    // Transient notice line
    if let Some(notice) = &app.notice {
        let line = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(Color::White).bg(Color::Red),
        )]));
        f.render_widget(line, chunks[3]);
    }

    let hints = Paragraph::new(Line::from(vec![Span::styled(
        " [p] Predict  [r] Reload input  [c] Clear history  [q] Quit",
        Style::default().fg(Color::DarkGray),
    )]));
    f.render_widget(hints, chunks[4]);
}

fn render_status_bar(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let (dot_color, status_text) = match &app.backend {
        BackendStatus::Online => (Color::Green, "online".to_string()),
        BackendStatus::Degraded(code) => (Color::Yellow, format!("problem connecting (HTTP {code})")),
        BackendStatus::Offline(_) => (Color::Red, "offline".to_string()),
    };

    let input_text = match &app.input_path {
        Some(path) => path.display().to_string(),
        None => "none".to_string(),
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" Backend: "),
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::styled(status_text, Style::default().fg(dot_color).bold()),
        Span::raw("   "),
        Span::styled(
            app.client.base_url().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   input: "),
        Span::styled(input_text, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Wine Prediction Dashboard "),
    );
    f.render_widget(status, area);
}

fn render_input_preview(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let body = if let Some(error) = &app.input_error {
        Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
        ])
    } else if let Some(input) = &app.input {
        let preview = serde_json::to_string_pretty(&input.input_test)
            .unwrap_or_else(|_| "input not renderable".to_string());
        Text::from(preview)
    } else {
        Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No test input loaded.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Start with --input <file> and press [r].",
                Style::default().fg(Color::DarkGray),
            )),
        ])
    };

    let preview = Paragraph::new(body).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Test Input "),
    );
    f.render_widget(preview, area);
}

fn render_prediction(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let body = match &app.view {
        PredictionView::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Press [p] to predict.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        PredictionView::Pending => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Predicting...",
                Style::default().fg(Color::Yellow).bold(),
            )),
        ],
        PredictionView::Shown(class) => {
            let label = CLASS_LABELS
                .get(*class as usize)
                .copied()
                .unwrap_or("unknown class");
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw("  Predicted Wine Class: "),
                    Span::styled(label, Style::default().fg(Color::Green).bold()),
                ]),
                Line::from(Span::styled(
                    format!("  class id {class}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };

    let panel = Paragraph::new(body).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Prediction "),
    );
    f.render_widget(panel, area);
}

fn render_history(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" History ({} total) ", app.history.len()));

    if app.history.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No predictions yet.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = app
        .recent_history()
        .iter()
        .map(|entry| {
            Row::new(vec![
                format!("{:.2}", entry.alcohol),
                format!("{:.2}", entry.malic_acid),
                entry.prediction.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Alcohol", "Malic Acid", "Prediction"])
            .style(Style::default().fg(Color::White).bold()),
    )
    .block(block);
    f.render_widget(table, area);
}

fn render_importances(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Feature Importance ");

    let Some(importances) = &app.importances else {
        let note = app
            .importance_note
            .clone()
            .unwrap_or_else(|| "importances unavailable".to_string());
        let empty = Paragraph::new(Line::from(Span::styled(
            note,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    };

    // bar values are integers; scale so three decimals survive
    let bars: Vec<Bar> = importances
        .iter()
        .map(|(name, value)| {
            Bar::default()
                .label(Line::from(name.clone()))
                .value((value * 1000.0).round() as u64)
                .text_value(format!("{value:.3}"))
        })
        .collect();

    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .data(BarGroup::default().bars(&bars))
        .block(block);
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> TestInput {
        TestInput {
            input_test: catador::wine::WineFeatures {
                alcohol: 13.2,
                malic_acid: 1.78,
                ash: 2.14,
                alcalinity_of_ash: 11.2,
                magnesium: 100.0,
                total_phenols: 2.65,
                flavanoids: 2.76,
                nonflavanoid_phenols: 0.26,
                proanthocyanins: 1.28,
                color_intensity: 4.38,
                hue: 1.05,
                od280_od315: 3.4,
                proline: 1050.0,
            },
        }
    }

    fn test_app() -> DashboardApp {
        DashboardApp::new(
            "http://127.0.0.1:1".to_string(),
            None,
            PathBuf::from("/nonexistent/model.ctd"),
            2000,
        )
    }

    #[test]
    fn history_table_shows_at_most_five_rows() {
        let mut app = test_app();
        for i in 0..7 {
            app.history.push(HistoryEntry {
                alcohol: f64::from(i),
                malic_acid: 1.0,
                prediction: 0,
            });
        }
        let recent = app.recent_history();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].alcohol, 2.0);
        assert_eq!(recent[4].alcohol, 6.0);
    }

    #[test]
    fn clear_history_empties_the_session() {
        let mut app = test_app();
        app.history.push(HistoryEntry {
            alcohol: 13.2,
            malic_acid: 1.78,
            prediction: 0,
        });
        app.clear_history();
        assert!(app.history.is_empty());
        assert!(app.recent_history().is_empty());
    }

    #[test]
    fn prediction_without_input_is_gated() {
        let mut app = test_app();
        assert!(!app.begin_prediction());
        assert_eq!(app.view, PredictionView::Idle);
        assert!(app.notice.is_some());
        assert!(app.history.is_empty());
    }

    #[test]
    fn prediction_without_artifact_is_gated() {
        let mut app = test_app();
        app.input = Some(sample_input());
        assert!(!app.begin_prediction());
        let notice = app.notice.expect("gate should raise a notice");
        assert!(notice.message.contains("/nonexistent/model.ctd"));
    }

    #[test]
    fn prediction_with_both_gates_satisfied_enters_pending() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.ctd");
        WineModel::demo().save(&model_path).unwrap();

        let mut app = test_app();
        app.model_path = model_path;
        app.input = Some(sample_input());

        assert!(app.begin_prediction());
        assert_eq!(app.view, PredictionView::Pending);
    }

    #[test]
    fn failed_request_returns_to_idle_and_keeps_history_clean() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.ctd");
        WineModel::demo().save(&model_path).unwrap();

        // port 1 refuses connections, so the request fails fast
        let mut app = test_app();
        app.model_path = model_path;
        app.input = Some(sample_input());

        assert!(app.begin_prediction());
        app.complete_prediction();

        assert_eq!(app.view, PredictionView::Idle);
        assert!(app.notice.is_some());
        assert!(app.history.is_empty());
    }

    #[test]
    fn successful_outcomes_append_to_history_in_order() {
        let mut app = test_app();
        let input = sample_input();
        for class in [0, 2, 1] {
            app.apply_prediction(&input, Ok(class));
        }
        assert_eq!(app.view, PredictionView::Shown(1));
        let classes: Vec<u32> = app.history.iter().map(|e| e.prediction).collect();
        assert_eq!(classes, vec![0, 2, 1]);
        assert_eq!(app.history[0].alcohol, input.input_test.alcohol);
    }

    #[test]
    fn notice_expires_after_ttl() {
        let mut app = test_app();
        app.raise_notice("stale");
        if let Some(notice) = &mut app.notice {
            if let Some(past) = Instant::now().checked_sub(NOTICE_TTL + Duration::from_secs(1)) {
                notice.raised_at = past;
            }
        }
        app.last_probe = Some(Instant::now()); // keep tick from probing
        app.tick();
        assert!(app.notice.is_none());
    }

    #[test]
    fn reload_without_path_raises_notice() {
        let mut app = test_app();
        app.reload_input();
        assert!(app.notice.is_some());
        assert!(app.input.is_none());
    }

    #[test]
    fn reload_with_bad_file_records_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut app = test_app();
        app.input_path = Some(path);
        app.reload_input();

        assert!(app.input.is_none());
        assert!(app.input_error.is_some());
    }

    #[test]
    fn reload_with_valid_file_loads_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        let json = serde_json::to_string(&sample_input()).unwrap();
        std::fs::write(&path, json).unwrap();

        let mut app = test_app();
        app.input_path = Some(path);
        app.reload_input();

        assert_eq!(app.input, Some(sample_input()));
        assert!(app.input_error.is_none());
    }

    #[test]
    fn importances_from_demo_artifact_are_ordered_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.ctd");
        WineModel::demo().save(&model_path).unwrap();

        let mut app = test_app();
        app.model_path = model_path;
        app.refresh_importances();

        let pairs = app.importances.expect("demo artifact has importances");
        assert_eq!(pairs.len(), 13);
        assert_eq!(pairs[0].0, "alcohol");
        assert_eq!(pairs[12].0, "proline");
        assert!(app.importance_note.is_none());
    }

    #[test]
    fn missing_artifact_leaves_a_note_instead_of_importances() {
        let mut app = test_app();
        app.refresh_importances();
        assert!(app.importances.is_none());
        let note = app.importance_note.expect("missing artifact leaves a note");
        assert!(note.contains("/nonexistent/model.ctd"));
    }
}
