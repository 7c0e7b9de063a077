use crate::flashcards::FlashcardDeck;
use crate::models::{AppState, ScoreRequest};
use crate::quiz::{QuizPhase, QuizState};
use crate::store::{StoreState, DENOMINATIONS};
use crossterm::event::KeyCode;

fn denomination_index(key: char) -> Option<usize> {
    match key {
        '5' => Some(0),
        '6' => Some(1),
        '7' => Some(2),
        '8' => Some(3),
        '9' => Some(4),
        '0' => Some(5),
        _ => None,
    }
}

/// Store view keys: 1-4 add the catalog item, 5-0 tender a
/// denomination, arrows move the cart cursor, Delete/Backspace remove
/// the selected entry, p re-randomizes prices, c checks out, r resets.
pub fn handle_store_input(
    store: &mut StoreState,
    cart_cursor: &mut usize,
    key: KeyCode,
    app_state: &mut AppState,
) {
    match key {
        KeyCode::Char('m') => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            store.add_item(index);
        }
        KeyCode::Char(c @ ('0' | '5'..='9')) => {
            if let Some(index) = denomination_index(c) {
                store.add_currency(DENOMINATIONS[index]);
            }
        }
        KeyCode::Char('p') => {
            store.re_randomize_prices();
        }
        KeyCode::Char('c') => {
            store.checkout();
        }
        KeyCode::Char('r') => {
            store.reset();
        }
        KeyCode::Up => {
            *cart_cursor = cart_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if *cart_cursor + 1 < store.cart.len() {
                *cart_cursor += 1;
            }
        }
        KeyCode::Delete | KeyCode::Backspace => {
            if let Some(entry) = store.cart.get(*cart_cursor) {
                let cart_key = entry.cart_key;
                store.remove_item(cart_key);
            }
        }
        _ => {}
    }
    // Keep the cursor on a valid row after any mutation.
    *cart_cursor = (*cart_cursor).min(store.cart.len().saturating_sub(1));
}

pub fn handle_flashcards_input(deck: &mut FlashcardDeck, key: KeyCode, app_state: &mut AppState) {
    match key {
        KeyCode::Char('m') => {
            *app_state = AppState::Menu;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            deck.next();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            deck.previous();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            deck.toggle_flip();
        }
        _ => {}
    }
}

/// Quiz view keys. Returns a request for the score worker when a
/// transition needs the network (finishing the quiz, opening scores).
pub fn handle_quiz_input(
    quiz: &mut QuizState,
    key: KeyCode,
    app_state: &mut AppState,
) -> Option<ScoreRequest> {
    if quiz.scores_open {
        match key {
            KeyCode::Esc | KeyCode::Char('s') => quiz.close_scores(),
            _ => {}
        }
        return None;
    }

    match key {
        KeyCode::Char('m') => {
            *app_state = AppState::Menu;
            None
        }
        KeyCode::Char('s') => Some(quiz.open_scores()),
        KeyCode::Char('r') if quiz.phase == QuizPhase::Finished => {
            quiz.restart();
            None
        }
        KeyCode::Enter => quiz.advance(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            quiz.select_option(index);
            None
        }
        _ => None,
    }
}
