//! UI rendering module

pub mod components;
mod kontakt;
pub mod layout;
pub mod pages;

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the whole UI for the current frame
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let header_height = if app.state.header.is_hidden {
        0
    } else {
        layout::HEADER_HEIGHT
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(layout::FOOTER_HEIGHT),
        ])
        .split(area);

    if header_height > 0 {
        layout::draw_header(frame, chunks[0], app);
    }

    match app.state.current_view {
        View::Kontakt => kontakt::draw(frame, chunks[1], app),
        _ => pages::draw_page(frame, chunks[1], app),
    }

    layout::draw_footer(frame, chunks[2], app);

    if app.state.menu_open {
        layout::draw_menu(frame, area, app);
    }
}
