pub mod api;
pub mod flashcards;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod score_worker;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use api::ScoreClient;
pub use flashcards::{Flashcard, FlashcardDeck, FLASHCARDS};
pub use input::{handle_flashcards_input, handle_quiz_input, handle_store_input};
pub use models::{AppState, ScoreRecord, ScoreRequest, ScoreResponse};
pub use quiz::{QuizPhase, QuizQuestion, QuizState, QUIZ_QUESTIONS};
pub use score_worker::spawn_score_worker;
pub use store::{
    CartEntry, Denomination, PricedItem, StoreItem, StoreState, DENOMINATIONS, STORE_ITEMS,
};
pub use ui::{draw_flashcards, draw_menu, draw_quiz, draw_scores_popup, draw_store};
pub use utils::{format_currency, round2, truncate_string};
