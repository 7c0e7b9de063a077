mod flashcards;
mod menu;
mod quiz;
mod scores;
mod store;

pub use flashcards::draw_flashcards;
pub use menu::{draw_menu, MENU_ENTRIES};
pub use quiz::draw_quiz;
pub use scores::draw_scores_popup;
pub use store::draw_store;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub(crate) fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
