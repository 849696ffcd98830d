pub mod reader;
pub mod row;
pub mod timestamp;

pub use reader::{file_exists, CsvStreamReader};
pub use row::{Column, RowSchema, SourceRow};
pub use timestamp::normalize_timestamp;
