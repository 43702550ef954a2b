//! Main application state and TUI event loop.
//!
//! [`App`] owns the theme, view mode, input path and the most recent pipeline
//! result.  It drives a synchronous crossterm event loop with a 250 ms poll
//! timeout; `r` re-reads the file and rebuilds the charts, `e` exports the
//! current charts as PNG files.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Span,
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{error, info, warn};

use board_core::models::RenderResult;
use board_data::pipeline;

use crate::chart_view;
use crate::table_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Chart dashboard (trend + category).
    Dashboard,
    /// Aggregate summary tables.
    Summary,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the sales dashboard TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Path of the file the dashboard reads from.
    pub input: PathBuf,
    /// Directory PNG exports are written to.
    pub export_dir: PathBuf,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// Latest pipeline result, or the load error message when the file could
    /// not be read at all.
    pub last_result: std::result::Result<RenderResult, String>,
    /// One-line status shown in the footer after reload/export actions.
    pub status: Option<String>,
}

impl App {
    /// Construct a new application and run the pipeline once on `input`.
    pub fn new(theme_name: &str, view_mode: ViewMode, input: PathBuf, export_dir: PathBuf) -> Self {
        let last_result = load_and_render(&input);
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            input,
            export_dir,
            should_quit: false,
            last_result,
            status: None,
        }
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the interactive TUI until the user quits.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the loop stays responsive without spinning.  Exits on `q`, `Q`, or
    /// `Ctrl+C`; `r` reloads the input file; `e` exports PNGs.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    /// Apply one key press: `q`/`Q`/`Ctrl+C` request quit, `r` reloads the
    /// file, `e` exports PNGs. Everything else is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.reload(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export(),
            _ => {}
        }
    }

    /// Re-read the input file and rebuild both charts from scratch.
    pub fn reload(&mut self) {
        info!(path = %self.input.display(), "reloading input file");
        self.last_result = load_and_render(&self.input);
        self.status = Some(match &self.last_result {
            Ok(_) => format!("Reloaded {}", self.input.display()),
            Err(msg) => {
                warn!(%msg, "reload failed");
                format!("Reload failed: {msg}")
            }
        });
    }

    /// Export the current charts as PNG files into the export directory.
    pub fn export(&mut self) {
        let result = match &self.last_result {
            Ok(r) => r,
            Err(_) => {
                self.status = Some("Nothing to export: file did not load".to_string());
                return;
            }
        };

        match crate::plot::export_all(result, &self.export_dir) {
            Ok(paths) if paths.is_empty() => {
                self.status = Some("Nothing to export: no charts were built".to_string());
            }
            Ok(paths) => {
                self.status = Some(format!(
                    "Exported {} chart(s) to {}",
                    paths.len(),
                    self.export_dir.display()
                ));
            }
            Err(e) => {
                error!(%e, "PNG export failed");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    ///
    /// When a status message is pending (after a reload or export), the
    /// bottom line of the screen is reserved for it.
    fn render(&self, frame: &mut Frame) {
        let full = frame.area();
        let (area, status_area) = if self.status.is_some() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(full);
            (chunks[0], Some(chunks[1]))
        } else {
            (full, None)
        };

        match &self.last_result {
            Err(msg) => chart_view::render_load_error(frame, area, msg, &self.theme),
            Ok(result) => match self.view_mode {
                ViewMode::Dashboard => {
                    chart_view::render_dashboard(frame, area, result, &self.theme)
                }
                ViewMode::Summary => table_view::render_summary(frame, area, result, &self.theme),
            },
        }

        if let (Some(status), Some(status_area)) = (&self.status, status_area) {
            frame.render_widget(
                Paragraph::new(Span::styled(status.as_str(), self.theme.info)),
                status_area,
            );
        }
    }
}

/// Read `input` from disk and run the rendering pipeline on its bytes.
///
/// IO and pipeline errors are flattened to a display string so the UI can
/// show them without holding the error value.
fn load_and_render(input: &std::path::Path) -> std::result::Result<RenderResult, String> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    let bytes = std::fs::read(input).map_err(|e| format!("{}: {e}", input.display()))?;
    pipeline::render(&bytes, &name).map_err(|e| e.to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    // ── ViewMode ──────────────────────────────────────────────────────────────

    #[test]
    fn test_view_mode_enum_equality() {
        assert_eq!(ViewMode::Dashboard, ViewMode::Dashboard);
        assert_eq!(ViewMode::Summary, ViewMode::Summary);
        assert_ne!(ViewMode::Dashboard, ViewMode::Summary);
    }

    // ── App::new ──────────────────────────────────────────────────────────────

    #[test]
    fn test_app_new_runs_pipeline() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(
            &dir,
            "sales.csv",
            "date ordered,category,sales\n2024-03-01,Toys,100\n2024-03-02,Toys,50\n",
        );

        let app = App::new(
            "dark",
            ViewMode::Dashboard,
            input,
            dir.path().to_path_buf(),
        );

        let result = app.last_result.as_ref().unwrap();
        assert_eq!(result.source_name, "sales.csv");
        assert!(result.trend.is_some());
        assert!(result.category.is_some());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_app_new_missing_file_captures_error() {
        let dir = TempDir::new().unwrap();
        let app = App::new(
            "dark",
            ViewMode::Dashboard,
            dir.path().join("nope.csv"),
            dir.path().to_path_buf(),
        );
        assert!(app.last_result.is_err());
    }

    #[test]
    fn test_app_new_unknown_theme_falls_back() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(&dir, "s.csv", "date ordered,sales\n2024-03-01,10\n");
        // Should not panic for unknown theme names.
        let _ = App::new("neon", ViewMode::Summary, input, dir.path().to_path_buf());
    }

    // ── handle_key ────────────────────────────────────────────────────────────

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_handle_key_q_requests_quit() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(&dir, "s.csv", "date ordered,sales\n2024-03-01,10\n");
        let mut app = App::new("dark", ViewMode::Dashboard, input, dir.path().to_path_buf());

        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_ctrl_c_requests_quit() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(&dir, "s.csv", "date ordered,sales\n2024-03-01,10\n");
        let mut app = App::new("dark", ViewMode::Dashboard, input, dir.path().to_path_buf());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_r_reloads_without_quitting() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(&dir, "s.csv", "date ordered,sales\n2024-03-01,10\n");
        let mut app = App::new("dark", ViewMode::Dashboard, input, dir.path().to_path_buf());

        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.should_quit);
        assert!(app.status.as_ref().unwrap().starts_with("Reloaded"));
    }

    #[test]
    fn test_handle_key_other_keys_ignored() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(&dir, "s.csv", "date ordered,sales\n2024-03-01,10\n");
        let mut app = App::new("dark", ViewMode::Dashboard, input, dir.path().to_path_buf());

        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.should_quit);
        assert!(app.status.is_none());
    }

    // ── reload ────────────────────────────────────────────────────────────────

    #[test]
    fn test_reload_picks_up_new_rows() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(
            &dir,
            "sales.csv",
            "date ordered,category,sales\n2024-03-01,Toys,100\n",
        );

        let mut app = App::new(
            "dark",
            ViewMode::Dashboard,
            input.clone(),
            dir.path().to_path_buf(),
        );
        assert_eq!(
            app.last_result.as_ref().unwrap().trend.as_ref().unwrap().points.len(),
            1
        );

        write_csv(
            &dir,
            "sales.csv",
            "date ordered,category,sales\n2024-03-01,Toys,100\n2024-03-02,Games,75\n",
        );
        app.reload();

        assert_eq!(
            app.last_result.as_ref().unwrap().trend.as_ref().unwrap().points.len(),
            2
        );
        assert!(app.status.as_ref().unwrap().starts_with("Reloaded"));
    }

    #[test]
    fn test_reload_missing_file_sets_error_status() {
        let dir = TempDir::new().unwrap();
        let input = write_csv(&dir, "sales.csv", "date ordered,sales\n2024-03-01,10\n");

        let mut app = App::new(
            "dark",
            ViewMode::Dashboard,
            input.clone(),
            dir.path().to_path_buf(),
        );
        std::fs::remove_file(&input).unwrap();
        app.reload();

        assert!(app.last_result.is_err());
        assert!(app.status.as_ref().unwrap().starts_with("Reload failed"));
    }

    // ── export ────────────────────────────────────────────────────────────────

    #[test]
    fn test_export_without_loaded_file_sets_status() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            "dark",
            ViewMode::Dashboard,
            dir.path().join("nope.csv"),
            dir.path().to_path_buf(),
        );
        app.export();
        assert!(app.status.as_ref().unwrap().contains("Nothing to export"));
    }

    #[test]
    fn test_export_with_no_charts_sets_status() {
        let dir = TempDir::new().unwrap();
        // Header only, so both charts are skipped by the pipeline.
        let input = write_csv(&dir, "empty.csv", "date ordered,category,sales\n");
        let mut app = App::new(
            "dark",
            ViewMode::Dashboard,
            input,
            dir.path().to_path_buf(),
        );
        app.export();
        assert!(app.status.as_ref().unwrap().contains("no charts"));
    }
}
