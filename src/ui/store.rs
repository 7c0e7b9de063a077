use super::key_span;
use crate::store::{StoreState, DENOMINATIONS};
use crate::utils::{format_currency, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_store(f: &mut Frame, store: &StoreState, cart_cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("🛒 Money Math Store - practice shopping & making change")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(36),
            Constraint::Percentage(32),
            Constraint::Percentage(32),
        ])
        .split(chunks[1]);

    let item_rows: Vec<ListItem> = store
        .items
        .iter()
        .enumerate()
        .map(|(i, priced)| {
            ListItem::new(format!(
                "{}) {} {} - {}",
                i + 1,
                priced.item.icon,
                priced.item.name,
                format_currency(priced.price)
            ))
        })
        .collect();
    let items_list = List::new(item_rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Items (1-4 to add)"),
    );
    f.render_widget(items_list, columns[0]);

    let cart_rows: Vec<ListItem> = if store.cart.is_empty() {
        vec![ListItem::new("Cart is empty").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        store
            .cart
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = format!(
                    "{} {} - {}",
                    entry.item.icon,
                    truncate_string(entry.item.name, 18),
                    format_currency(entry.price)
                );
                let style = if i == cart_cursor {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect()
    };
    let cart_title = format!("Cart - Total: {}", format_currency(store.subtotal()));
    let cart_list = List::new(cart_rows)
        .block(Block::default().borders(Borders::ALL).title(cart_title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(cart_list, columns[1]);

    let change = store.change();
    let mut payment_lines = vec![
        Line::from(format!("Paid: {}", format_currency(store.payment))),
        Line::from(if change >= 0.0 {
            Span::styled(
                format!("Change: {}", format_currency(change)),
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                format!("Owed: {}", format_currency(-change)),
                Style::default().fg(Color::Red),
            )
        }),
        Line::from(""),
    ];
    for (i, denomination) in DENOMINATIONS.iter().enumerate() {
        let key = if i < 5 { (b'5' + i as u8) as char } else { '0' };
        payment_lines.push(Line::from(format!(
            "{}) {} ({})",
            key, denomination.label, denomination.name
        )));
    }
    let payment = Paragraph::new(payment_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("💵 Payment"));
    f.render_widget(payment, columns[2]);

    let message = Paragraph::new(store.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[2]);

    let help_text = vec![Line::from(vec![
        key_span("1-4"),
        Span::from(" Add  "),
        key_span("5-0"),
        Span::from(" Pay  "),
        key_span("↑/↓"),
        Span::from(" Cart  "),
        key_span("Del"),
        Span::from(" Remove  "),
        key_span("c"),
        Span::from(" Checkout  "),
        key_span("r"),
        Span::from(" Reset  "),
        key_span("p"),
        Span::from(" Prices  "),
        key_span("m"),
        Span::from(" Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
