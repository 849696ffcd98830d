use crate::notification::record::NotificationRecord;
use crate::notification::store::NotificationStore;
use crate::utils::{ImporterError, Result, SupabaseConfig, SupabaseCredentials};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Upserts records through the Supabase REST (PostgREST) endpoint.
pub struct SupabaseStore {
    client: Client,
    credentials: SupabaseCredentials,
    table: String,
    conflict_target: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig, credentials: SupabaseCredentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::with_client(client, config, credentials))
    }

    pub fn with_client(
        client: Client,
        config: &SupabaseConfig,
        credentials: SupabaseCredentials,
    ) -> Self {
        Self {
            client,
            credentials,
            table: config.table.clone(),
            conflict_target: config.conflict_target.clone(),
        }
    }

    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.credentials.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

#[async_trait]
impl NotificationStore for SupabaseStore {
    async fn upsert(&self, record: &NotificationRecord) -> Result<()> {
        let response = self
            .client
            .post(self.table_url())
            .query(&[("on_conflict", self.conflict_target.as_str())])
            .header("apikey", &self.credentials.service_key)
            .bearer_auth(&self.credentials.service_key)
            .header("Content-Type", "application/json")
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(record)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ImporterError::ApiError(format!(
                "upsert into {} returned {}: {}",
                self.table, status, body
            )));
        }

        tracing::debug!(
            applicant_id = %record.applicant_id,
            table = %self.table,
            "Upserted notification record"
        );

        Ok(())
    }
}
