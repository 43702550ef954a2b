use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Salesboard pipeline and UI.
#[derive(Error, Debug)]
pub enum BoardError {
    /// The uploaded bytes could not be decoded as CSV or a spreadsheet.
    /// Carries the underlying parser message verbatim for display.
    #[error("Failed to load {name}: {message}")]
    Load { name: String, message: String },

    /// The filename extension maps to no known table format.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A static plot could not be written.
    #[error("Plot export failed: {0}")]
    PlotExport(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the salesboard crates.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_load() {
        let err = BoardError::Load {
            name: "sales.csv".to_string(),
            message: "invalid utf-8".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to load sales.csv: invalid utf-8");
    }

    #[test]
    fn test_error_display_unsupported_format() {
        let err = BoardError::UnsupportedFormat("sales.pdf".to_string());
        assert_eq!(err.to_string(), "Unsupported file format: sales.pdf");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = BoardError::FileRead {
            path: PathBuf::from("/data/sales.xlsx"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/data/sales.xlsx"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_plot_export() {
        let err = BoardError::PlotExport("backend gone".to_string());
        assert_eq!(err.to_string(), "Plot export failed: backend gone");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BoardError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: BoardError = anyhow::anyhow!("something else broke").into();
        assert!(err.to_string().contains("something else broke"));
    }
}
