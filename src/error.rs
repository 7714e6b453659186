use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to load {path}: {message}")]
    DataLoad { path: String, message: String },

    #[error("Column '{column}' is missing from {path}")]
    MissingColumn { path: String, column: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl DashboardError {
    pub fn data_load(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::DataLoad {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}
