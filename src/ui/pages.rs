//! Content pages with scroll-revealed cards

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows one card occupies in the page (title, body, spacer)
pub const CARD_HEIGHT: u16 = 3;

/// A content card that reveals when scrolled into view
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// Static content for one page
pub struct PageContent {
    pub heading: &'static str,
    pub intro: &'static [&'static str],
    pub cards: &'static [Card],
}

const HJEM: PageContent = PageContent {
    heading: "Sørhus Bygg AS",
    intro: &[
        "Byggmester på Sørlandet siden 1998.",
        "Vi bygger, utvider og rehabiliterer boliger langs kysten,",
        "med solid håndverk og korte linjer fra befaring til ferdig bygg.",
        "",
    ],
    cards: &[
        Card {
            title: "Nybygg",
            body: "Eneboliger og hytter fra tegning til nøkkelferdig.",
        },
        Card {
            title: "Tilbygg",
            body: "Mer plass uten å flytte: påbygg, garasjer og terrasser.",
        },
        Card {
            title: "Rehabilitering",
            body: "Skånsom oppgradering av eldre sørlandshus.",
        },
    ],
};

const TJENESTER: PageContent = PageContent {
    heading: "Tjenester",
    intro: &["Alt innen tømrerarbeid, med egne fagfolk på hvert felt.", ""],
    cards: &[
        Card {
            title: "Nybygg",
            body: "Komplette byggeprosjekter med fast kontaktperson.",
        },
        Card {
            title: "Tilbygg",
            body: "Utvidelser tilpasset eksisterende arkitektur.",
        },
        Card {
            title: "Rehabilitering",
            body: "Totalrenovering, etterisolering og vindusskift.",
        },
        Card {
            title: "Tak og fasade",
            body: "Omtekking, kledning og beslag som tåler kystvær.",
        },
        Card {
            title: "Annet",
            body: "Mindre oppdrag, serviceavtaler og forsikringsskader.",
        },
    ],
};

const PROSJEKTER: PageContent = PageContent {
    heading: "Prosjekter",
    intro: &["Et utvalg av arbeid vi er stolte av.", ""],
    cards: &[
        Card {
            title: "Enebolig, Høvåg",
            body: "Nøkkelferdig bolig på 180 m² med sjøutsikt.",
        },
        Card {
            title: "Hyttefelt, Blindleia",
            body: "Fire hytter levert over to sesonger.",
        },
        Card {
            title: "Sveitservilla, Lillesand",
            body: "Full rehabilitering av verneverdig fasade.",
        },
        Card {
            title: "Driftsbygning, Birkenes",
            body: "Ombygging til verksted og kontor.",
        },
    ],
};

const OM_OSS: PageContent = PageContent {
    heading: "Om oss",
    intro: &[
        "Tolv ansatte, sentral godkjenning og mesterbrev i tømrerfaget.",
        "",
    ],
    cards: &[
        Card {
            title: "Kvalitet",
            body: "Vi står for arbeidet vårt, lenge etter overlevering.",
        },
        Card {
            title: "Punktlighet",
            body: "Avtalt tid holdes, også når det blåser.",
        },
        Card {
            title: "Lokalkunnskap",
            body: "Vi kjenner grunnforhold og byggeskikk langs kysten.",
        },
    ],
};

const KONTAKT: PageContent = PageContent {
    heading: "Kontakt",
    intro: &[],
    cards: &[],
};

pub fn page(view: View) -> &'static PageContent {
    match view {
        View::Hjem => &HJEM,
        View::Tjenester => &TJENESTER,
        View::Prosjekter => &PROSJEKTER,
        View::OmOss => &OM_OSS,
        View::Kontakt => &KONTAKT,
    }
}

pub fn card_count(view: View) -> usize {
    page(view).cards.len()
}

/// Absolute page row of each card's first line
pub fn card_rows(view: View) -> Vec<u16> {
    let content = page(view);
    let top = 2 + content.intro.len() as u16; // heading + blank line
    (0..content.cards.len())
        .map(|i| top + i as u16 * CARD_HEIGHT)
        .collect()
}

/// Total page height in rows, the scroll clamp bound
pub fn page_height(view: View) -> u16 {
    let content = page(view);
    2 + content.intro.len() as u16 + content.cards.len() as u16 * CARD_HEIGHT
}

/// Draw a content page, applying the scroll offset and hiding cards that
/// have not yet been revealed
pub fn draw_page(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;
    let content = page(view);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        content.heading,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for intro_line in content.intro {
        lines.push(Line::from(*intro_line));
    }

    for (i, card) in content.cards.iter().enumerate() {
        if app.state.reveal.is_revealed(i) {
            lines.push(Line::from(Span::styled(
                card.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                card.body,
                Style::default().fg(Color::Gray),
            )));
        } else {
            // Placeholder rows keep the page geometry stable until the
            // card scrolls into view
            lines.push(Line::from(Span::styled(
                "·",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0));

    frame.render_widget(paragraph, area);
}
