//! Contact page: the inquiry form and its status banner

use crate::app::App;
use crate::state::{BannerKind, Form, FormField, Validity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_button, BUTTON_HEIGHT};

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // name + email
            Constraint::Length(3),             // phone + address
            Constraint::Length(3),             // project type
            Constraint::Length(5),             // description (multiline)
            Constraint::Length(3),             // site visit checkbox
            Constraint::Length(BUTTON_HEIGHT), // send button
            Constraint::Min(0),                // status banner
        ])
        .split(area);

    let top = split_half(rows[0]);
    let mid = split_half(rows[1]);
    let active = form.active_field();

    draw_field(frame, top[0], &form.name, active == 0);
    draw_field(frame, top[1], &form.email, active == 1);
    draw_field(frame, mid[0], &form.phone, active == 2);
    draw_field(frame, mid[1], &form.address, active == 3);
    draw_field(frame, rows[2], &form.project_type, active == 4);
    draw_field(frame, rows[3], &form.description, active == 5);
    draw_field(frame, rows[4], &form.site_visit, active == 6);

    let button_area = Rect {
        width: rows[5].width.min(24),
        ..rows[5]
    };
    render_button(
        frame,
        button_area,
        app.state.submission.button_label(),
        form.is_buttons_row_active(),
        app.state.submission.submit_enabled(),
    );

    draw_banner(frame, rows[6], app);
}

fn split_half(area: Rect) -> [Rect; 2] {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [halves[0], halves[1]]
}

/// Draw one form field with its validation mark in the border color
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = match (field.validity, is_active) {
        (Validity::Invalid, _) => Style::default().fg(Color::Red),
        (_, true) => Style::default().fg(Color::Cyan),
        (Validity::Valid, false) => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::DarkGray),
    };

    let cursor = "▌";
    let value = field.display_value();

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    } else {
        let mut spans = vec![Span::raw(value)];
        if is_active {
            spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(spans))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label));

    frame.render_widget(content.block(block), area);
}

/// Draw the submission status banner under the form
fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some(banner) = app.state.submission.banner else {
        return;
    };

    let color = match banner.kind {
        BannerKind::Success => Color::Green,
        BannerKind::Error => Color::Red,
    };

    let paragraph = Paragraph::new(banner.text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
