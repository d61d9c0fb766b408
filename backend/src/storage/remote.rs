//! Typed client for the managed data-connector service.
//!
//! Four generated operations: create-user, list-advice, save-advice and
//! list-my-mood-logs. Entities are keyed by UUIDs, timestamps travel as
//! strings. Failures are surfaced to the caller and logged; no business
//! logic depends on them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserKey {
    pub id: Uuid,
}

/// One catalog entry of pre-written financial advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceItem {
    pub id: Uuid,
    pub author: Option<String>,
    pub category: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAdviceKey {
    pub user_id: Uuid,
    pub advice_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodInfo {
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub color_code: Option<String>,
}

/// One recorded state-of-mind snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodLog {
    pub id: Uuid,
    pub mood: MoodInfo,
    /// Timestamp string as stored by the connector.
    pub logged_at: String,
    pub user_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateUserData {
    user_insert: UserKey,
}

#[derive(Debug, Deserialize)]
struct ListAdviceData {
    advices: Vec<AdviceItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveAdviceVariables {
    advice_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct SaveAdviceData {
    savedAdvice_insert: SavedAdviceKey,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListMyMoodLogsData {
    user_mood_logs: Vec<MoodLog>,
}

/// Forwards the generated operations to the connector endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn call<V: Serialize, D: for<'de> Deserialize<'de>>(
        &self,
        operation: &str,
        variables: &V,
    ) -> Result<D> {
        let url = format!("{}/operations/{}", self.base_url, operation);
        info!("Calling connector operation {}", operation);
        let response = self
            .http
            .post(&url)
            .json(variables)
            .send()
            .await
            .with_context(|| format!("connector operation {operation} failed to send"))?
            .error_for_status()
            .with_context(|| format!("connector operation {operation} returned an error"))?;
        response
            .json()
            .await
            .with_context(|| format!("connector operation {operation} returned bad data"))
    }

    pub async fn create_user(&self) -> Result<UserKey> {
        let data: CreateUserData = self.call("CreateUser", &serde_json::json!({})).await?;
        Ok(data.user_insert)
    }

    pub async fn list_advice(&self) -> Result<Vec<AdviceItem>> {
        let data: ListAdviceData = self.call("ListAdvice", &serde_json::json!({})).await?;
        Ok(data.advices)
    }

    pub async fn save_advice(&self, advice_id: Uuid) -> Result<SavedAdviceKey> {
        let data: SaveAdviceData = self
            .call("SaveAdvice", &SaveAdviceVariables { advice_id })
            .await?;
        Ok(data.savedAdvice_insert)
    }

    pub async fn list_my_mood_logs(&self) -> Result<Vec<MoodLog>> {
        let data: ListMyMoodLogsData =
            self.call("ListMyMoodLogs", &serde_json::json!({})).await?;
        Ok(data.user_mood_logs)
    }
}
