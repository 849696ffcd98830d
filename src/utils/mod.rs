pub mod config;
pub mod errors;

pub use config::{AppConfig, CsvConfig, LoggingConfig, SupabaseConfig, SupabaseCredentials};
pub use errors::{ImporterError, Result};
