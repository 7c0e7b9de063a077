use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Store,
    Flashcards,
    Quiz,
}

/// A quiz result persisted by the remote scoring service. The server
/// assigns the timestamp on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub total: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum ScoreRequest {
    Save { score: u32, total: u32 },
    Fetch,
}

#[derive(Debug)]
pub enum ScoreResponse {
    Saved(ScoreRecord),
    SaveFailed(String),
    Fetched(Vec<ScoreRecord>),
    FetchFailed(String),
}
