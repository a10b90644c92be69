//! Input screen: the six health fields and the submit row.

use cardia_core::form::FormField;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
    for _ in FormField::ALL {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // submit
        Constraint::Length(1), // error line
        Constraint::Min(0),
        Constraint::Length(1), // footer
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Cardia",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  heart-disease risk prediction"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    for (row, field) in FormField::ALL.into_iter().enumerate() {
        f.render_widget(field_line(app, field, app.focus == row), chunks[row + 2]);
    }

    let submit_row = 2 + FormField::ALL.len() + 1;
    f.render_widget(submit_line(app), chunks[submit_row]);

    if let Some(error) = &app.error {
        f.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            chunks[submit_row + 1],
        );
    }

    let footer = Paragraph::new("Tab/Up/Down move   Left/Right choose   Enter submit   Esc quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[chunks.len() - 1]);
}

fn field_line(app: &App, field: FormField, focused: bool) -> Paragraph<'static> {
    let cursor = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let value = app.form.get(field);
    let mut spans = vec![
        Span::raw(cursor),
        Span::styled(format!("{:<26}", field.label()), label_style),
    ];
    if value.is_empty() {
        spans.push(Span::styled(hint(field), Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(format!("{value:<10}")));
        if let Some(meaning) = option_meaning(field, value) {
            spans.push(Span::styled(
                format!("({meaning})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Paragraph::new(Line::from(spans))
}

fn submit_line(app: &App) -> Paragraph<'static> {
    let focused = app.focused_field().is_none();
    let cursor = if focused { "> " } else { "  " };
    let text = if app.loading { "[ Predicting... ]" } else { "[ Predict ]" };
    let style = if app.loading {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    Paragraph::new(Line::from(vec![Span::raw(cursor), Span::styled(text, style)]))
}

/// Entry hint shown while a field is empty: the legal choices for the
/// categorical fields, the placeholder for the free-numeric ones.
fn hint(field: FormField) -> String {
    let options = field.options();
    if options.is_empty() {
        field.placeholder().to_string()
    } else {
        options
            .iter()
            .map(|(value, meaning)| format!("{value}={meaning}"))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

fn option_meaning(field: FormField, value: &str) -> Option<&'static str> {
    field
        .options()
        .iter()
        .find(|(candidate, _)| *candidate == value)
        .map(|(_, meaning)| *meaning)
}
