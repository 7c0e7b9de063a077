use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use money_math::{
    handle_flashcards_input, handle_quiz_input, handle_store_input, logger, spawn_score_worker,
    ui, AppState, FlashcardDeck, QuizState, StoreState,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_score_worker(response_tx, request_rx);

    let mut app_state = AppState::Menu;
    let mut menu_index: usize = 0;
    let mut cart_cursor: usize = 0;
    let mut store = StoreState::new();
    let mut deck = FlashcardDeck::new();
    let mut quiz = QuizState::new();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => ui::draw_menu(f, menu_index),
            AppState::Store => ui::draw_store(f, &store, cart_cursor),
            AppState::Flashcards => ui::draw_flashcards(f, &deck),
            AppState::Quiz => {
                ui::draw_quiz(f, &quiz);
                if quiz.scores_open {
                    ui::draw_scores_popup(f, &quiz);
                }
            }
        })?;

        // Tick work: fire the store's scheduled auto-reset and drain
        // any pending worker responses.
        store.apply_pending_reset(Instant::now());
        while let Ok(response) = response_rx.try_recv() {
            quiz.handle_response(response);
        }

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        menu_index = menu_index.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if menu_index < ui::MENU_ENTRIES.len() - 1 {
                            menu_index += 1;
                        }
                    }
                    KeyCode::Char(c @ '1'..='3') => {
                        menu_index = c as usize - '1' as usize;
                        enter_activity(menu_index, &mut app_state, &mut store, &mut deck, &mut quiz);
                        cart_cursor = 0;
                    }
                    KeyCode::Enter => {
                        enter_activity(menu_index, &mut app_state, &mut store, &mut deck, &mut quiz);
                        cart_cursor = 0;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Store => {
                    handle_store_input(&mut store, &mut cart_cursor, key.code, &mut app_state);
                }
                AppState::Flashcards => {
                    handle_flashcards_input(&mut deck, key.code, &mut app_state);
                }
                AppState::Quiz => {
                    if let Some(request) = handle_quiz_input(&mut quiz, key.code, &mut app_state) {
                        let _ = request_tx.send(request);
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Every activity starts a fresh session on entry; no state survives a
/// trip through the menu.
fn enter_activity(
    menu_index: usize,
    app_state: &mut AppState,
    store: &mut StoreState,
    deck: &mut FlashcardDeck,
    quiz: &mut QuizState,
) {
    match menu_index {
        0 => {
            *store = StoreState::new();
            *app_state = AppState::Store;
        }
        1 => {
            *deck = FlashcardDeck::new();
            *app_state = AppState::Flashcards;
        }
        2 => {
            *quiz = QuizState::new();
            *app_state = AppState::Quiz;
        }
        _ => {}
    }
}
