use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::{DatastoreConfig, ScraperConfig};
use crate::error::SinkError;
use crate::export::RecordSink;
use crate::types::PlayerRecord;

/// Inserts rows through Supabase's REST (PostgREST) endpoint.
pub struct SupabaseSink {
    client: Client,
    endpoint: String,
    key: String,
}

impl SupabaseSink {
    pub fn new(datastore: &DatastoreConfig, scraper: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(scraper.scraping.request_timeout_secs))
            .build()
            .context("Failed to create Supabase client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/{}", datastore.url, datastore.table),
            key: datastore.key.clone(),
        })
    }
}

#[async_trait]
impl RecordSink for SupabaseSink {
    async fn insert(&mut self, record: &PlayerRecord) -> Result<(), SinkError> {
        debug!("Inserting player: {:?}", record);
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SinkError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
