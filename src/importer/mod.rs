//! Row-by-row import of a Sumsub applicant export.
//!
//! Each data row is gated on `reviewResult == "completed"` and a parseable
//! `reviewedAt`, transformed into a [`NotificationRecord`] and upserted.
//! Rows are handled strictly in file order and a failing row never stops
//! the run.

use crate::csv_processor::{normalize_timestamp, Column, CsvStreamReader, SourceRow};
use crate::notification::{
    document_from_external_id, NotificationPayload, NotificationRecord, NotificationStore,
    ReviewAnswer, VERIFICATION_TYPE_COMPANY,
};
use crate::utils::{AppConfig, ImporterError, Result};
use std::io::Read;
use tracing::{debug, info, warn};

const COMPLETED: &str = "completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotCompleted,
    MissingReviewDate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotCompleted => write!(f, "review not completed"),
            SkipReason::MissingReviewDate => write!(f, "no parseable review date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDecision {
    Accept(NotificationRecord),
    Skip(SkipReason),
}

#[derive(Debug)]
pub enum RowOutcome {
    Imported { company: String },
    Skipped(SkipReason),
    Failed(ImporterError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl ImportSummary {
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Imported { .. } => self.imported += 1,
            RowOutcome::Skipped(_) => self.skipped += 1,
            RowOutcome::Failed(_) => self.errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.imported + self.skipped + self.errors
    }
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "📊 Imported: {} | Skipped: {} | Errors: {}",
            self.imported, self.skipped, self.errors
        )
    }
}

/// Applies the acceptance gate and builds the record for an accepted row.
/// Only columns needed to reach the decision are required for a skip, and a
/// record too short to hold the gate columns is skipped rather than failed.
pub fn evaluate_row(row: &SourceRow) -> Result<RowDecision> {
    if row.get_unfilled_as_none(Column::ReviewResult)? != Some(COMPLETED) {
        return Ok(RowDecision::Skip(SkipReason::NotCompleted));
    }
    let reviewed_at = match row
        .get_unfilled_as_none(Column::ReviewedAt)?
        .and_then(normalize_timestamp)
    {
        Some(ts) => ts,
        None => return Ok(RowDecision::Skip(SkipReason::MissingReviewDate)),
    };

    let external_user_id = row.get(Column::ExternalUserId)?;

    let record = NotificationRecord {
        applicant_id: row.get(Column::ApplicantId)?.to_string(),
        external_user_id: external_user_id.to_string(),
        name: row.get(Column::CompanyName)?.to_string(),
        email: row.get(Column::Email)?.to_string(),
        document: document_from_external_id(external_user_id),
        verification_type: VERIFICATION_TYPE_COMPANY.to_string(),
        review_answer: ReviewAnswer::from_review_status(row.get(Column::ReviewStatus)?),
        level_name: row.get(Column::LevelName)?.to_string(),
        created_at: normalize_timestamp(row.get(Column::CreatedAt)?),
        reviewed_at: Some(reviewed_at),
        payload: NotificationPayload {
            country: row.get(Column::Country)?.to_string(),
            phone: row.get(Column::Phone)?.to_string(),
            platform: row.get(Column::ApplicantPlatform)?.to_string(),
            imported_from_csv: true,
        },
    };

    Ok(RowDecision::Accept(record))
}

pub struct Importer<S: NotificationStore> {
    store: S,
    delimiter: u8,
}

impl<S: NotificationStore> Importer<S> {
    pub fn new(store: S, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            store,
            delimiter: config.csv.delimiter_byte()?,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn process_row(&self, row: &SourceRow) -> RowOutcome {
        let record = match evaluate_row(row) {
            Ok(RowDecision::Accept(record)) => record,
            Ok(RowDecision::Skip(reason)) => return RowOutcome::Skipped(reason),
            Err(e) => return RowOutcome::Failed(e),
        };

        match self.store.upsert(&record).await {
            Ok(()) => RowOutcome::Imported {
                company: record.name,
            },
            Err(e) => RowOutcome::Failed(e),
        }
    }

    /// Imports every data row of the file at `path`. `on_row` sees each
    /// outcome with its 1-based data row number, in file order.
    pub async fn import_file<F>(&self, path: &str, on_row: F) -> Result<ImportSummary>
    where
        F: FnMut(usize, &RowOutcome),
    {
        let reader = CsvStreamReader::open(path, self.delimiter)?;
        info!(path = path, "Importing Sumsub export");
        self.run(reader, on_row).await
    }

    pub async fn import_reader<R, F>(&self, input: R, on_row: F) -> Result<ImportSummary>
    where
        R: Read,
        F: FnMut(usize, &RowOutcome),
    {
        let reader = CsvStreamReader::from_reader(input, self.delimiter)?;
        self.run(reader, on_row).await
    }

    async fn run<R, F>(&self, reader: CsvStreamReader<R>, mut on_row: F) -> Result<ImportSummary>
    where
        R: Read,
        F: FnMut(usize, &RowOutcome),
    {
        let mut summary = ImportSummary::default();

        for (row_number, parsed) in reader {
            let outcome = match parsed {
                Ok(row) => self.process_row(&row).await,
                Err(e) => RowOutcome::Failed(e),
            };

            match &outcome {
                RowOutcome::Imported { company } => {
                    debug!(row = row_number, company = %company, "Row imported")
                }
                RowOutcome::Skipped(reason) => {
                    debug!(row = row_number, reason = %reason, "Row skipped")
                }
                RowOutcome::Failed(e) => warn!(row = row_number, error = %e, "Row failed"),
            }

            summary.record(&outcome);
            on_row(row_number, &outcome);
        }

        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            errors = summary.errors,
            "Import finished"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_row() -> SourceRow {
        SourceRow::default()
            .with(Column::ReviewResult, "completed")
            .with(Column::ReviewedAt, "2024-01-15 10:30:00")
            .with(Column::ApplicantId, "65a1")
            .with(Column::ExternalUserId, "cnpj_12345678")
            .with(Column::CompanyName, "Acme Ltda")
            .with(Column::Email, "ops@acme.test")
            .with(Column::ReviewStatus, "GREEN")
            .with(Column::LevelName, "kyb-level")
            .with(Column::CreatedAt, "2024-01-10 08:00:00")
            .with(Column::Country, "BRA")
            .with(Column::Phone, "+5511999999999")
            .with(Column::ApplicantPlatform, "Web")
    }

    #[test]
    fn test_completed_green_row_is_accepted() {
        let record = match evaluate_row(&completed_row()).unwrap() {
            RowDecision::Accept(record) => record,
            other => panic!("expected accept, got {:?}", other),
        };

        assert_eq!(record.document, "12345678");
        assert_eq!(record.review_answer, ReviewAnswer::Green);
        assert_eq!(record.reviewed_at.as_deref(), Some("2024-01-15T10:30:00"));
        assert_eq!(record.created_at.as_deref(), Some("2024-01-10T08:00:00"));
        assert_eq!(record.verification_type, "company");
        assert_eq!(record.payload.platform, "Web");
        assert!(record.payload.imported_from_csv);
    }

    #[test]
    fn test_pending_row_is_skipped() {
        let row = completed_row().with(Column::ReviewResult, "pending");
        assert_eq!(
            evaluate_row(&row).unwrap(),
            RowDecision::Skip(SkipReason::NotCompleted)
        );
    }

    #[test]
    fn test_completed_without_review_date_is_skipped() {
        for value in ["", "yesterday", "2024-01-15"] {
            let row = completed_row().with(Column::ReviewedAt, value);
            assert_eq!(
                evaluate_row(&row).unwrap(),
                RowDecision::Skip(SkipReason::MissingReviewDate)
            );
        }
    }

    #[test]
    fn test_unparsable_created_at_is_absent_not_error() {
        let row = completed_row().with(Column::CreatedAt, "n/a");
        let RowDecision::Accept(record) = evaluate_row(&row).unwrap() else {
            panic!("expected accept");
        };
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_red_status_is_accepted_as_red() {
        let row = completed_row().with(Column::ReviewStatus, "RED");
        let RowDecision::Accept(record) = evaluate_row(&row).unwrap() else {
            panic!("expected accept");
        };
        assert_eq!(record.review_answer, ReviewAnswer::Red);
    }

    #[test]
    fn test_skip_does_not_need_other_columns() {
        let row = SourceRow::default()
            .with(Column::ReviewResult, "rejected")
            .with(Column::ReviewedAt, "");
        assert_eq!(
            evaluate_row(&row).unwrap(),
            RowDecision::Skip(SkipReason::NotCompleted)
        );
    }

    #[test]
    fn test_accepted_row_with_missing_column_fails() {
        let row = SourceRow::default()
            .with(Column::ReviewResult, "completed")
            .with(Column::ReviewedAt, "2024-01-15 10:30:00")
            .with(Column::ExternalUserId, "cnpj_1");
        assert!(matches!(
            evaluate_row(&row),
            Err(ImporterError::MissingColumn("applicantId"))
        ));
    }

    #[test]
    fn test_missing_review_result_column_fails() {
        assert!(matches!(
            evaluate_row(&SourceRow::default()),
            Err(ImporterError::MissingColumn("reviewResult"))
        ));
    }

    #[test]
    fn test_summary_display_and_total() {
        let mut summary = ImportSummary::default();
        summary.record(&RowOutcome::Imported {
            company: "Acme".to_string(),
        });
        summary.record(&RowOutcome::Skipped(SkipReason::NotCompleted));
        summary.record(&RowOutcome::Failed(ImporterError::ApiError("boom".to_string())));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.to_string(), "📊 Imported: 1 | Skipped: 1 | Errors: 1");
    }
}
