use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

use crate::models::ScoreRecord;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client for the remote scoring service. Any non-2xx response is an
/// error; there is no retry policy.
pub struct ScoreClient {
    client: Client,
    base: String,
}

#[derive(Debug, Serialize)]
struct SaveScoreBody {
    score: u32,
    total: u32,
}

impl ScoreClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    pub fn from_env() -> Self {
        let base = std::env::var("MONEY_MATH_API").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub async fn fetch_scores(&self) -> Result<Vec<ScoreRecord>> {
        let url = format!("{}/api/scores", self.base);
        let resp = self.client.get(&url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    pub async fn save_score(&self, score: u32, total: u32) -> Result<ScoreRecord> {
        let url = format!("{}/api/scores", self.base);
        let resp = self
            .client
            .post(&url)
            .json(&SaveScoreBody { score, total })
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}
