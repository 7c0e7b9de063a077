use crate::api::ScoreClient;
use crate::logger;
use crate::models::{ScoreRequest, ScoreResponse};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Spawn the background thread that talks to the scoring service.
/// Requests arrive on `rx`; each one blocks the worker (never the UI)
/// and produces exactly one response on `tx`. The worker exits when
/// the request channel disconnects.
pub fn spawn_score_worker(
    tx: Sender<ScoreResponse>,
    rx: Receiver<ScoreRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("money-math::score_worker".to_string())
        .spawn(move || {
            let client = ScoreClient::from_env();
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Failed to build worker runtime: {}", e));
                    return;
                }
            };

            loop {
                match rx.recv() {
                    Ok(ScoreRequest::Save { score, total }) => {
                        logger::log(&format!("Worker saving score {}/{}", score, total));
                        match rt.block_on(client.save_score(score, total)) {
                            Ok(record) => {
                                let _ = tx.send(ScoreResponse::Saved(record));
                            }
                            Err(e) => {
                                logger::log(&format!("Worker save error: {}", e));
                                let _ = tx.send(ScoreResponse::SaveFailed(e.to_string()));
                            }
                        }
                    }
                    Ok(ScoreRequest::Fetch) => {
                        logger::log("Worker fetching score list");
                        match rt.block_on(client.fetch_scores()) {
                            Ok(records) => {
                                let _ = tx.send(ScoreResponse::Fetched(records));
                            }
                            Err(e) => {
                                logger::log(&format!("Worker fetch error: {}", e));
                                let _ = tx.send(ScoreResponse::FetchFailed(e.to_string()));
                            }
                        }
                    }
                    Err(_) => {
                        // Channel disconnected, exit worker
                        logger::log("Worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn score worker thread")
}
