use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, ImporterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_names_column() {
        let err = ImporterError::MissingColumn("companyName");
        assert_eq!(err.to_string(), "Missing column: companyName");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ImporterError = io.into();
        assert!(matches!(err, ImporterError::IoError(_)));
    }
}
