//! Application state definitions

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use uuid::Uuid;

use super::forms::ContactForm;
use super::header::HeaderState;
use super::reveal::RevealSet;
use super::scroll::ScrollAnimation;
use super::submission::SubmissionState;

/// Current view in the application, one per page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Hjem,
    Tjenester,
    Prosjekter,
    OmOss,
    Kontakt,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Hjem,
        View::Tjenester,
        View::Prosjekter,
        View::OmOss,
        View::Kontakt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Hjem => "Hjem",
            View::Tjenester => "Tjenester",
            View::Prosjekter => "Prosjekter",
            View::OmOss => "Om oss",
            View::Kontakt => "Kontakt",
        }
    }

    /// View bound to a number key (1-5)
    pub fn from_digit(d: u32) -> Option<View> {
        Self::ALL.get((d as usize).wrapping_sub(1)).copied()
    }
}

/// An immutable snapshot of the contact form at submit time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub project_type: String,
    pub description: String,
    pub want_site_visit: bool,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        project_type: &str,
        description: &str,
        want_site_visit: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            project_type: project_type.to_string(),
            description: description.to_string(),
            want_site_visit,
            created_at: Utc::now(),
        }
    }
}

/// Top-level application state
#[derive(Debug)]
pub struct AppState {
    /// Current page
    pub current_view: View,
    /// Whether the navigation menu overlay is open
    pub menu_open: bool,
    /// Highlighted entry while the menu is open
    pub menu_selected: usize,
    /// Scroll offset within the current page, in rows
    pub scroll_offset: u16,
    /// Sticky-header visibility
    pub header: HeaderState,
    /// Reveal state for the current page's cards
    pub reveal: RevealSet,
    /// Eased scroll-to-section animation, when one is running
    pub scroll_animation: Option<ScrollAnimation>,
    /// The contact form
    pub contact_form: ContactForm,
    /// Submission workflow state
    pub submission: SubmissionState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            menu_open: false,
            menu_selected: 0,
            scroll_offset: 0,
            header: HeaderState::default(),
            reveal: RevealSet::default(),
            scroll_animation: None,
            contact_form: ContactForm::new(),
            submission: SubmissionState::default(),
        }
    }
}

impl AppState {
    /// Switch pages: closes the menu and resets scroll, header and reveal
    /// state. `card_count` sizes the reveal set for the new page.
    pub fn navigate(&mut self, view: View, card_count: usize) {
        self.current_view = view;
        self.menu_open = false;
        self.scroll_offset = 0;
        self.scroll_animation = None;
        self.header.reset();
        self.reveal = RevealSet::new(card_count);
    }

    /// Scroll by a signed number of rows, clamped to the page height
    pub fn scroll_by(&mut self, delta: i32, page_height: u16) {
        self.scroll_animation = None;
        let offset = i32::from(self.scroll_offset) + delta;
        self.scroll_offset = offset.clamp(0, i32::from(page_height)) as u16;
        self.header.update(self.scroll_offset);
    }

    /// Start an eased scroll toward a target offset
    pub fn scroll_to(&mut self, target: u16, now: Instant) {
        if target == self.scroll_offset {
            return;
        }
        self.scroll_animation = Some(ScrollAnimation::new(self.scroll_offset, target, now));
    }

    /// Advance a running scroll animation. Returns true while animating.
    pub fn tick_scroll(&mut self, now: Instant) -> bool {
        let Some(anim) = &self.scroll_animation else {
            return false;
        };
        self.scroll_offset = anim.offset_at(now);
        self.header.update(self.scroll_offset);
        if anim.is_complete(now) {
            self.scroll_animation = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    mod view {
        use super::*;

        #[test]
        fn test_default_is_hjem() {
            assert_eq!(View::default(), View::Hjem);
        }

        #[test]
        fn test_from_digit_maps_keys() {
            assert_eq!(View::from_digit(1), Some(View::Hjem));
            assert_eq!(View::from_digit(5), Some(View::Kontakt));
            assert_eq!(View::from_digit(0), None);
            assert_eq!(View::from_digit(6), None);
        }

        #[test]
        fn test_labels_are_norwegian() {
            assert_eq!(View::OmOss.label(), "Om oss");
            assert_eq!(View::Kontakt.label(), "Kontakt");
        }
    }

    mod inquiry {
        use super::*;

        #[test]
        fn test_new_fills_id_and_timestamp() {
            let a = Inquiry::new("Ola", "ola@example.com", "123 45 678", "", "Nybygg", "Tak", true);
            let b = Inquiry::new("Ola", "ola@example.com", "123 45 678", "", "Nybygg", "Tak", true);
            assert_ne!(a.id, b.id);
            assert!(a.want_site_visit);
        }

        #[test]
        fn test_serializes_with_camel_case_keys() {
            let inquiry =
                Inquiry::new("Ola", "ola@example.com", "123 45 678", "", "Nybygg", "Tak", false);
            let json = serde_json::to_string(&inquiry).unwrap();
            assert!(json.contains("\"projectType\":\"Nybygg\""));
            assert!(json.contains("\"wantSiteVisit\":false"));
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_navigate_resets_page_state() {
            let mut state = AppState::default();
            state.scroll_by(20, 60);
            state.menu_open = true;
            state.navigate(View::Kontakt, 3);

            assert_eq!(state.current_view, View::Kontakt);
            assert!(!state.menu_open);
            assert_eq!(state.scroll_offset, 0);
            assert!(!state.header.is_scrolled);
            assert_eq!(state.reveal.revealed_count(), 0);
        }

        #[test]
        fn test_scroll_clamps_to_page() {
            let mut state = AppState::default();
            state.scroll_by(-5, 40);
            assert_eq!(state.scroll_offset, 0);
            state.scroll_by(100, 40);
            assert_eq!(state.scroll_offset, 40);
        }

        #[test]
        fn test_scroll_updates_header() {
            let mut state = AppState::default();
            state.scroll_by(20, 60);
            assert!(state.header.is_scrolled);
            assert!(state.header.is_hidden);
            state.scroll_by(-1, 60);
            assert!(!state.header.is_hidden);
        }

        #[test]
        fn test_scroll_to_same_offset_is_noop() {
            let mut state = AppState::default();
            state.scroll_to(0, Instant::now());
            assert!(state.scroll_animation.is_none());
        }

        #[test]
        fn test_tick_scroll_reaches_target() {
            let mut state = AppState::default();
            let t0 = Instant::now();
            state.scroll_to(24, t0);
            assert!(state.scroll_animation.is_some());

            let done = state.tick_scroll(t0 + Duration::from_millis(500));
            assert!(!done);
            assert_eq!(state.scroll_offset, 24);
            assert!(state.scroll_animation.is_none());
        }

        #[test]
        fn test_manual_scroll_cancels_animation() {
            let mut state = AppState::default();
            state.scroll_to(24, Instant::now());
            state.scroll_by(1, 60);
            assert!(state.scroll_animation.is_none());
        }
    }
}
