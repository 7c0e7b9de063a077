use crate::quiz::QuizState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Modal over the quiz view listing previously saved scores.
pub fn draw_scores_popup(f: &mut Frame, quiz: &QuizState) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    if quiz.scores_loading {
        lines.push(Line::from(Span::styled(
            "Loading scores...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    } else if quiz.scores.is_empty() {
        lines.push(Line::from(
            "No scores yet. Finish a quiz to save your first score!",
        ));
    } else {
        for record in &quiz.scores {
            let date = record.timestamp.format("%Y-%m-%d %H:%M");
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", date), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("Score: {} / {}", record.score, record.total),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc Close",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Your Previous Scores"),
    );
    f.render_widget(popup, area);
}
