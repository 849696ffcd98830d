use crate::utils::{ImporterError, Result};
use csv::StringRecord;

/// Columns of the Sumsub applicant export that the importer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ReviewResult,
    ReviewedAt,
    ApplicantId,
    ExternalUserId,
    CompanyName,
    Email,
    ReviewStatus,
    LevelName,
    CreatedAt,
    Country,
    Phone,
    ApplicantPlatform,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::ReviewResult,
        Column::ReviewedAt,
        Column::ApplicantId,
        Column::ExternalUserId,
        Column::CompanyName,
        Column::Email,
        Column::ReviewStatus,
        Column::LevelName,
        Column::CreatedAt,
        Column::Country,
        Column::Phone,
        Column::ApplicantPlatform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::ReviewResult => "reviewResult",
            Column::ReviewedAt => "reviewedAt",
            Column::ApplicantId => "applicantId",
            Column::ExternalUserId => "externalUserId",
            Column::CompanyName => "companyName",
            Column::Email => "email",
            Column::ReviewStatus => "reviewStatus",
            Column::LevelName => "levelName",
            Column::CreatedAt => "createdAt",
            Column::Country => "country",
            Column::Phone => "phone",
            Column::ApplicantPlatform => "applicantPlatform",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Header positions of the known columns, resolved once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSchema {
    indices: [Option<usize>; 12],
}

impl RowSchema {
    /// Header names are matched exactly; unknown columns are ignored.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut indices = [None; 12];
        for column in Column::ALL {
            indices[column.slot()] = headers.iter().position(|h| h == column.name());
        }
        Self { indices }
    }

    pub fn missing_columns(&self) -> Vec<&'static str> {
        Column::ALL
            .iter()
            .filter(|c| self.indices[c.slot()].is_none())
            .map(|c| c.name())
            .collect()
    }

    pub fn parse(&self, record: &StringRecord) -> SourceRow {
        let cells = self.indices.map(|idx| match idx {
            None => Cell::Absent,
            Some(i) => record
                .get(i)
                .map_or(Cell::Unfilled, |v| Cell::Value(v.to_string())),
        });
        SourceRow { cells }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Cell {
    /// Column is not in the header.
    #[default]
    Absent,
    /// Column is in the header but the record ends before it.
    Unfilled,
    Value(String),
}

/// One data line of the export. An empty string is a present but blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    cells: [Cell; 12],
}

impl SourceRow {
    pub fn get(&self, column: Column) -> Result<&str> {
        match &self.cells[column.slot()] {
            Cell::Value(v) => Ok(v),
            Cell::Absent | Cell::Unfilled => Err(ImporterError::MissingColumn(column.name())),
        }
    }

    /// Like [`SourceRow::get`], but a record too short to reach the column
    /// yields `Ok(None)`. A column missing from the header is still an error.
    pub fn get_unfilled_as_none(&self, column: Column) -> Result<Option<&str>> {
        match &self.cells[column.slot()] {
            Cell::Value(v) => Ok(Some(v)),
            Cell::Unfilled => Ok(None),
            Cell::Absent => Err(ImporterError::MissingColumn(column.name())),
        }
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.cells[column.slot()] = Cell::Value(value.into());
    }

    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }
}
