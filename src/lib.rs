pub mod csv_processor;
pub mod importer;
pub mod notification;
pub mod utils;

pub use csv_processor::{Column, CsvStreamReader, RowSchema, SourceRow};
pub use importer::{evaluate_row, ImportSummary, Importer, RowDecision, RowOutcome, SkipReason};
pub use notification::{NotificationRecord, NotificationStore, ReviewAnswer, SupabaseStore};
pub use utils::{AppConfig, ImporterError, Result, SupabaseCredentials};
