use crate::utils::error::{ApiError, Result};
use reqwest::{Client, Response};
use serde_json::Value;

/// Default base URL, used when `HABIT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "HABIT_API_URL";

/// Stateless client for the habit-tracker REST API.
///
/// Holds only a `reqwest::Client` and the base URL; payloads are opaque
/// `serde_json::Value`s whose shape is owned by the server. Each operation is
/// a single request, a success-status check, and a JSON decode. No retries,
/// no caching, no shared mutable state between calls.
#[derive(Debug, Clone)]
pub struct HabitApi {
    client: Client,
    base_url: String,
}

impl HabitApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from `HABIT_API_URL`, falling back to the default
    /// `http://localhost:8080/api`.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /habits
    pub async fn get_habits(&self) -> Result<Value> {
        let url = format!("{}/habits", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        expect_json(response, "Failed to fetch habits").await
    }

    /// GET /habits/{id}
    pub async fn get_habit(&self, id: u64) -> Result<Value> {
        let url = format!("{}/habits/{}", self.base_url, id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        expect_json(response, "Failed to fetch habit").await
    }

    /// POST /habits
    pub async fn create_habit(&self, habit: &Value) -> Result<Value> {
        let url = format!("{}/habits", self.base_url);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(habit).send().await?;
        expect_json(response, "Failed to create habit").await
    }

    /// PUT /habits/{id}
    pub async fn update_habit(&self, id: u64, habit: &Value) -> Result<Value> {
        let url = format!("{}/habits/{}", self.base_url, id);
        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(habit).send().await?;
        expect_json(response, "Failed to update habit").await
    }

    /// DELETE /habits/{id}
    pub async fn delete_habit(&self, id: u64) -> Result<Value> {
        let url = format!("{}/habits/{}", self.base_url, id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        expect_json(response, "Failed to delete habit").await
    }

    /// GET /habits/{id}/entries
    pub async fn get_habit_entries(&self, habit_id: u64) -> Result<Value> {
        let url = format!("{}/habits/{}/entries", self.base_url, habit_id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        expect_json(response, "Failed to fetch entries").await
    }

    /// POST /habits/{id}/toggle?date={date}
    ///
    /// The date goes into the query string verbatim; the server parses it and
    /// rejects anything that is not YYYY-MM-DD.
    pub async fn toggle_habit_entry(&self, habit_id: u64, date: &str) -> Result<Value> {
        let url = format!("{}/habits/{}/toggle?date={}", self.base_url, habit_id, date);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        expect_json(response, "Failed to toggle entry").await
    }

    /// POST /habits/{id}/entries
    pub async fn create_habit_entry(&self, habit_id: u64, entry: &Value) -> Result<Value> {
        let url = format!("{}/habits/{}/entries", self.base_url, habit_id);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(entry).send().await?;
        expect_json(response, "Failed to create entry").await
    }
}

impl Default for HabitApi {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Decode the JSON body of a successful response, or map any non-2xx status
/// to the operation's fixed failure message.
async fn expect_json(response: Response, failure: &'static str) -> Result<Value> {
    tracing::debug!("API response status: {}", response.status());

    if !response.status().is_success() {
        return Err(ApiError::RequestFailed(failure));
    }
    Ok(response.json().await?)
}
