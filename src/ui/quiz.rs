use super::key_span;
use crate::quiz::{QuizPhase, QuizState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, quiz: &QuizState) {
    if quiz.phase == QuizPhase::Finished {
        draw_finished(f, quiz);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let progress = format!(
        "Currency Quiz - Question {} of {}  (Score: {})",
        quiz.current_index + 1,
        quiz.total(),
        quiz.score
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let question = Paragraph::new(quiz.current().text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, chunks[1]);

    let revealed = quiz.phase == QuizPhase::Revealed;
    let option_rows: Vec<ListItem> = quiz
        .current()
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if revealed {
                if i == quiz.current().answer {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if Some(i) == quiz.selected {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                }
            } else if Some(i) == quiz.selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}) {}", i + 1, option)).style(style)
        })
        .collect();

    let options_title = if revealed {
        if quiz.selection_correct() {
            "Options - ✅ Correct!"
        } else {
            "Options - ❌ Wrong!"
        }
    } else {
        "Options (1-4 to answer)"
    };
    let options = List::new(option_rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(options_title),
    );
    f.render_widget(options, chunks[2]);

    let mut help_spans = vec![key_span("1-4"), Span::from(" Answer  ")];
    if revealed {
        help_spans.push(key_span("Enter"));
        help_spans.push(Span::from(if quiz.current_index + 1 < quiz.total() as usize {
            " Next Question  "
        } else {
            " Finish Quiz  "
        }));
    }
    help_spans.push(key_span("s"));
    help_spans.push(Span::from(" My Scores  "));
    help_spans.push(key_span("m"));
    help_spans.push(Span::from(" Menu"));

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn draw_finished(f: &mut Frame, quiz: &QuizState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("🎉 Quiz Complete!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let percentage = if quiz.total() > 0 {
        quiz.score as f64 / quiz.total() as f64 * 100.0
    } else {
        0.0
    };
    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("Your final score: {} / {}", quiz.score, quiz.total()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(format!("{:.0}% correct", percentage)));
    if !quiz.status.is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(quiz.status.as_str()));
    }

    let summary = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, chunks[1]);

    let help_text = vec![Line::from(vec![
        key_span("r"),
        Span::from(" Restart Quiz  "),
        key_span("s"),
        Span::from(" My Scores  "),
        key_span("m"),
        Span::from(" Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
