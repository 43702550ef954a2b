mod bootstrap;

use anyhow::Result;
use board_core::error::BoardError;
use board_core::settings::Settings;
use board_data::pipeline;
use board_ui::app::{App, ViewMode};
use board_ui::plot;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Salesboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, View: {}, Theme: {}",
        settings.input.display(),
        settings.view,
        settings.theme
    );

    let export_dir = settings
        .export_dir
        .clone()
        .unwrap_or_else(bootstrap::default_export_dir);

    match settings.view.as_str() {
        "dashboard" | "summary" => {
            let view_mode = if settings.view == "summary" {
                ViewMode::Summary
            } else {
                ViewMode::Dashboard
            };

            let app = App::new(
                &settings.theme,
                view_mode,
                settings.input.clone(),
                export_dir,
            );

            // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the
            // TUI. We also listen for Ctrl+C at the OS level so that signals
            // received while the terminal is in raw mode are handled cleanly.
            tokio::select! {
                result = app.run() => {
                    result?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received; shutting down");
                }
            }
        }

        "export" => {
            tracing::info!("Running headless export...");

            let name = settings
                .input
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| settings.input.display().to_string());
            let bytes = std::fs::read(&settings.input).map_err(|e| BoardError::FileRead {
                path: settings.input.clone(),
                source: e,
            })?;

            let result = pipeline::render(&bytes, &name)?;

            for message in &result.messages {
                eprintln!("{}: {}", message.severity, message.text);
            }

            std::fs::create_dir_all(&export_dir)?;
            let written = plot::export_all(&result, &export_dir)?;
            if written.is_empty() {
                eprintln!("No charts could be built from {name}; nothing exported.");
            } else {
                for path in written {
                    println!("{}", path.display());
                }
            }
        }

        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}
