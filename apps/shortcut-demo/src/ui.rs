//! Rendering.

use crate::app::App;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tui_shortcuts::ElementId;

pub fn draw(f: &mut Frame, app: &App) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(3),
    ])
    .areas(f.area());

    f.render_widget(
        Paragraph::new("keyboard shortcuts with hint badges").block(
            Block::default()
                .borders(Borders::ALL)
                .title("shortcut-demo"),
        ),
        header,
    );

    let mut lines: Vec<Line> = app
        .elements
        .iter()
        .map(|&id| element_line(app, id))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "refresh callbacks: {}",
        app.refresh_count.get()
    )));

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("elements")),
        body,
    );

    f.render_widget(
        Paragraph::new(app.status.as_str())
            .block(Block::default().borders(Borders::ALL).title("status")),
        status,
    );
}

fn element_line(app: &App, id: ElementId) -> Line<'static> {
    let Some(binding) = app.registry.binding(id) else {
        return Line::default();
    };

    let badge_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let focused = app.registry.focused() == Some(id);
    let activated = app.activated == Some(id);
    let label_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else if activated {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let mut spans: Vec<Span<'static>> = Vec::new();
    spans.push(Span::raw(if focused { "> " } else { "  " }));

    if let Some(hints) = binding.hints() {
        let badges = hints.spans(badge_style);
        let empty = badges.is_empty();
        spans.extend(badges);
        if !empty {
            spans.push(Span::raw(" "));
        }
    }

    spans.push(Span::styled(app.label_of(id), label_style));

    if binding.element().kind().is_text_input() {
        spans.push(Span::raw(": "));
        spans.push(Span::styled(
            "__________",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}
