use super::key_span;
use crate::flashcards::FlashcardDeck;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_flashcards(f: &mut Frame, deck: &FlashcardDeck) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(f.area());

    let progress = format!("🧠 Flashcards - Card {} of {}", deck.current_index + 1, deck.len());
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let card = deck.current();
    let (title, face, hint, color) = if deck.is_flipped {
        (
            "Answer",
            card.back,
            "Press Enter to see the question",
            Color::Green,
        )
    } else {
        (
            "Question",
            card.front,
            "Press Enter to see the answer",
            Color::Cyan,
        )
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        face,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let card_panel = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        );
    f.render_widget(card_panel, chunks[1]);

    let help_text = vec![Line::from(vec![
        key_span("←/→"),
        Span::from(" Previous/Next  "),
        key_span("Enter"),
        Span::from(" Flip  "),
        key_span("m"),
        Span::from(" Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
