use crate::logger;
use crate::models::{ScoreRecord, ScoreRequest, ScoreResponse};

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
}

pub const QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        text: "What is the name of the Indian currency?",
        options: &["Yen", "Rupee", "Dollar", "Euro"],
        answer: 1,
    },
    QuizQuestion {
        text: "Which denomination of Indian banknote features Mahatma Gandhi walking with a stick?",
        options: &["₹10", "₹50", "₹100", "₹500"],
        answer: 3,
    },
    QuizQuestion {
        text: "Who has the signature on a ₹1 Indian note?",
        options: &[
            "Governor of RBI",
            "Finance Secretary",
            "Prime Minister",
            "President",
        ],
        answer: 1,
    },
];

#[derive(Debug, PartialEq)]
pub enum QuizPhase {
    Answering,
    Revealed,
    Finished,
}

/// Multiple-choice quiz state machine. Transition methods that need
/// network work return a `ScoreRequest` for the caller to dispatch, so
/// the state itself stays synchronous and testable.
#[derive(Debug)]
pub struct QuizState {
    questions: &'static [QuizQuestion],
    pub current_index: usize,
    pub selected: Option<usize>,
    pub score: u32,
    pub phase: QuizPhase,
    pub status: String,
    pub scores: Vec<ScoreRecord>,
    pub scores_open: bool,
    pub scores_loading: bool,
}

impl QuizState {
    pub fn new() -> Self {
        Self::with_questions(&QUIZ_QUESTIONS)
    }

    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current_index: 0,
            selected: None,
            score: 0,
            phase: QuizPhase::Answering,
            status: String::new(),
            scores: Vec::new(),
            scores_open: false,
            scores_loading: false,
        }
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Record an answer for the current question. Ignored outside the
    /// answering phase, so a revealed question cannot be re-answered.
    pub fn select_option(&mut self, option_index: usize) {
        if self.phase != QuizPhase::Answering || option_index >= self.current().options.len() {
            return;
        }
        self.selected = Some(option_index);
        if option_index == self.current().answer {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealed;
    }

    pub fn selection_correct(&self) -> bool {
        self.selected == Some(self.current().answer)
    }

    /// Move past a revealed question. Finishing the last question
    /// produces the save request for the scoring service.
    pub fn advance(&mut self) -> Option<ScoreRequest> {
        if self.phase != QuizPhase::Revealed {
            return None;
        }
        self.selected = None;
        if self.current_index < self.questions.len() - 1 {
            self.current_index += 1;
            self.phase = QuizPhase::Answering;
            None
        } else {
            self.phase = QuizPhase::Finished;
            self.status = "Saving score...".to_string();
            Some(ScoreRequest::Save {
                score: self.score,
                total: self.total(),
            })
        }
    }

    /// Open the scores panel. The list is re-fetched on every open.
    pub fn open_scores(&mut self) -> ScoreRequest {
        self.scores_open = true;
        self.scores_loading = true;
        ScoreRequest::Fetch
    }

    pub fn close_scores(&mut self) {
        self.scores_open = false;
        self.scores_loading = false;
    }

    pub fn handle_response(&mut self, response: ScoreResponse) {
        match response {
            ScoreResponse::Saved(record) => {
                self.scores.insert(0, record);
                self.status = "Score saved successfully!".to_string();
            }
            ScoreResponse::SaveFailed(error) => {
                logger::log(&format!("Score save failed: {}", error));
                self.status = "Failed to save score. Backend not reachable.".to_string();
            }
            ScoreResponse::Fetched(records) => {
                self.scores = records;
                self.scores_loading = false;
            }
            ScoreResponse::FetchFailed(error) => {
                logger::log(&format!("Score fetch failed: {}", error));
                self.close_scores();
                self.status = "Could not fetch scores. Is the backend running?".to_string();
            }
        }
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.score = 0;
        self.phase = QuizPhase::Answering;
        self.status.clear();
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(score: u32, total: u32) -> ScoreRecord {
        ScoreRecord {
            score,
            total,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_new_quiz_starts_answering() {
        let quiz = QuizState::new();
        assert_eq!(quiz.current_index, 0);
        assert!(quiz.selected.is_none());
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.phase, QuizPhase::Answering);
        assert!(quiz.status.is_empty());
    }

    #[test]
    fn test_correct_selection_scores_and_reveals() {
        let mut quiz = QuizState::new();
        quiz.select_option(QUIZ_QUESTIONS[0].answer);
        assert_eq!(quiz.score, 1);
        assert_eq!(quiz.phase, QuizPhase::Revealed);
        assert!(quiz.selection_correct());
    }

    #[test]
    fn test_wrong_selection_reveals_without_scoring() {
        let mut quiz = QuizState::new();
        quiz.select_option(0);
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.phase, QuizPhase::Revealed);
        assert!(!quiz.selection_correct());
    }

    #[test]
    fn test_revealed_question_locks_selection() {
        let mut quiz = QuizState::new();
        quiz.select_option(0);
        quiz.select_option(QUIZ_QUESTIONS[0].answer);
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.selected, Some(0));
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut quiz = QuizState::new();
        quiz.select_option(10);
        assert_eq!(quiz.phase, QuizPhase::Answering);
        assert!(quiz.selected.is_none());
    }

    #[test]
    fn test_advance_requires_reveal() {
        let mut quiz = QuizState::new();
        assert!(quiz.advance().is_none());
        assert_eq!(quiz.current_index, 0);
    }

    #[test]
    fn test_advance_moves_to_next_question() {
        let mut quiz = QuizState::new();
        quiz.select_option(1);
        let request = quiz.advance();
        assert!(request.is_none());
        assert_eq!(quiz.current_index, 1);
        assert_eq!(quiz.phase, QuizPhase::Answering);
        assert!(quiz.selected.is_none());
    }

    #[test]
    fn test_finishing_emits_save_request() {
        // Correct on questions 1 and 3 only: final score 2/3.
        let mut quiz = QuizState::new();
        quiz.select_option(QUIZ_QUESTIONS[0].answer);
        assert!(quiz.advance().is_none());
        quiz.select_option(0);
        assert!(quiz.advance().is_none());
        quiz.select_option(QUIZ_QUESTIONS[2].answer);
        let request = quiz.advance();
        assert_eq!(request, Some(ScoreRequest::Save { score: 2, total: 3 }));
        assert_eq!(quiz.phase, QuizPhase::Finished);
        assert_eq!(quiz.status, "Saving score...");
    }

    #[test]
    fn test_score_never_exceeds_question_count() {
        let mut quiz = QuizState::new();
        for _ in 0..QUIZ_QUESTIONS.len() {
            let answer = quiz.current().answer;
            quiz.select_option(answer);
            quiz.advance();
        }
        assert_eq!(quiz.score, quiz.total());
    }

    #[test]
    fn test_saved_response_prepends_record() {
        let mut quiz = QuizState::new();
        quiz.scores.push(record(1, 3));
        quiz.handle_response(ScoreResponse::Saved(record(3, 3)));
        assert_eq!(quiz.scores.len(), 2);
        assert_eq!(quiz.scores[0].score, 3);
        assert_eq!(quiz.status, "Score saved successfully!");
    }

    #[test]
    fn test_save_failure_sets_status_without_record() {
        let mut quiz = QuizState::new();
        quiz.handle_response(ScoreResponse::SaveFailed("connection refused".to_string()));
        assert!(quiz.scores.is_empty());
        assert_eq!(quiz.status, "Failed to save score. Backend not reachable.");
    }

    #[test]
    fn test_open_scores_issues_fetch_each_time() {
        let mut quiz = QuizState::new();
        assert_eq!(quiz.open_scores(), ScoreRequest::Fetch);
        assert!(quiz.scores_open);
        assert!(quiz.scores_loading);
        quiz.close_scores();
        assert_eq!(quiz.open_scores(), ScoreRequest::Fetch);
    }

    #[test]
    fn test_fetched_response_replaces_cached_list() {
        let mut quiz = QuizState::new();
        quiz.open_scores();
        quiz.handle_response(ScoreResponse::Fetched(vec![record(2, 3), record(0, 3)]));
        assert_eq!(quiz.scores.len(), 2);
        assert!(!quiz.scores_loading);
        assert!(quiz.scores_open);
    }

    #[test]
    fn test_fetch_failure_closes_panel() {
        let mut quiz = QuizState::new();
        quiz.open_scores();
        quiz.handle_response(ScoreResponse::FetchFailed("timeout".to_string()));
        assert!(!quiz.scores_open);
        assert!(!quiz.scores_loading);
        assert_eq!(quiz.status, "Could not fetch scores. Is the backend running?");
    }

    #[test]
    fn test_restart_resets_session_but_keeps_cache() {
        let mut quiz = QuizState::new();
        quiz.select_option(QUIZ_QUESTIONS[0].answer);
        quiz.advance();
        quiz.scores.push(record(2, 3));
        quiz.status = "Score saved successfully!".to_string();
        quiz.restart();
        assert_eq!(quiz.current_index, 0);
        assert!(quiz.selected.is_none());
        assert_eq!(quiz.score, 0);
        assert_eq!(quiz.phase, QuizPhase::Answering);
        assert!(quiz.status.is_empty());
        assert_eq!(quiz.scores.len(), 1);
    }
}
