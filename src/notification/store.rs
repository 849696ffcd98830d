use crate::notification::record::NotificationRecord;
use crate::utils::Result;
use async_trait::async_trait;

/// Destination table for notification records.
#[async_trait]
pub trait NotificationStore {
    /// Inserts the record, or replaces the existing one with the same
    /// `applicant_id`.
    async fn upsert(&self, record: &NotificationRecord) -> Result<()>;
}
