//! Header, footer and menu overlay

use crate::app::App;
use crate::platform::PHONE_SHORTCUT;
use crate::state::View;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Header rows when visible
pub const HEADER_HEIGHT: u16 = 3;

/// Footer rows
pub const FOOTER_HEIGHT: u16 = 2;

/// Draw the header bar. Compacts (dimmer border, no page label) once the
/// page is scrolled.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let compact = app.state.header.is_scrolled;

    let border_style = if compact {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(
        " Sørhus Bygg AS ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if !compact {
        spans.push(Span::styled(
            format!("— {}", app.state.current_view.label()),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

/// Draw the footer: copyright year, help text, and copy feedback when set
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let year = Utc::now().year();
    let left = format!("© {year} Sørhus Bygg AS");

    let right = if let Some(msg) = &app.copy_message {
        msg.clone()
    } else {
        format!(
            "Esc meny · 1-5 sider · {PHONE_SHORTCUT} ring oss: {}",
            app.config.company_phone()
        )
    };

    let lines = vec![
        Line::from(Span::styled(left, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(right, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the navigation menu overlay centered on the screen
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let width = 26u16.min(area.width);
    let height = (View::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let is_selected = i == app.state.menu_selected;
            let is_active = *view == app.state.current_view;

            let marker = if is_selected { "> " } else { "  " };
            let mut style = Style::default();
            if is_selected {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if is_active {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Line::from(Span::styled(
                format!("{marker}{} {}", i + 1, view.label()),
                style,
            ))
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Meny "),
    );
    frame.render_widget(menu, menu_area);
}
