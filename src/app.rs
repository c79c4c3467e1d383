//! Application state and core logic

use crate::config::KontaktConfig;
use crate::mailer::{Mailer, SimulatedMailer};
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, Form, RevealSet, SubmissionState, View};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: KontaktConfig,
    /// Transport the contact form submits through
    mailer: Box<dyn Mailer>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback after the copy-phone shortcut
    pub copy_message: Option<String>,
    /// Terminal size for scroll calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance with the simulated transport
    pub fn new(config: KontaktConfig) -> Self {
        let mailer = SimulatedMailer::new(config.mailer_delay(), config.simulate_failure());
        Self::with_mailer(config, Box::new(mailer))
    }

    /// Create an App around an arbitrary transport
    #[allow(clippy::field_reassign_with_default)]
    pub fn with_mailer(config: KontaktConfig, mailer: Box<dyn Mailer>) -> Self {
        let mut state = AppState::default();
        state.submission = SubmissionState::new(config.auto_hide());
        state.reveal = RevealSet::new(ui::pages::card_count(state.current_view));

        Self {
            state,
            config,
            mailer,
            quit: false,
            copy_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state: success-banner auto-hide, the eased
    /// scroll animation and card reveals. Returns true while an animation
    /// is running, so the event loop can poll faster.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.submission.tick(now);
        let animating = self.state.tick_scroll(now);
        self.update_reveal();
        animating
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.copy_message = None;

        // Copy-phone shortcut works on every view
        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('t') {
            self.copy_company_phone();
            return Ok(());
        }

        if self.state.menu_open {
            self.handle_menu_key(key);
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.open_menu();
            return Ok(());
        }

        match self.state.current_view {
            View::Kontakt => self.handle_form_key(key).await?,
            _ => self.handle_page_key(key),
        }
        Ok(())
    }

    /// Switch to another page
    pub fn navigate(&mut self, view: View) {
        self.state.navigate(view, ui::pages::card_count(view));
        tracing::debug!(view = view.label(), "navigated");
    }

    fn open_menu(&mut self) {
        self.state.menu_open = true;
        self.state.menu_selected = View::ALL
            .iter()
            .position(|v| *v == self.state.current_view)
            .unwrap_or(0);
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.state.menu_open = false,
            KeyCode::Up | KeyCode::Char('k') => {
                let count = View::ALL.len();
                self.state.menu_selected = (self.state.menu_selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.menu_selected = (self.state.menu_selected + 1) % View::ALL.len();
            }
            KeyCode::Enter => {
                let view = View::ALL[self.state.menu_selected.min(View::ALL.len() - 1)];
                self.navigate(view);
            }
            KeyCode::Char(c) => {
                if let Some(view) = c.to_digit(10).and_then(View::from_digit) {
                    self.navigate(view);
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let view = self.state.current_view;
        let page_height = ui::pages::page_height(view);
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_by(1, page_height),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_by(-1, page_height),
            KeyCode::PageDown => self.state.scroll_by(10, page_height),
            KeyCode::PageUp => self.state.scroll_by(-10, page_height),
            KeyCode::Char('g') => self.state.scroll_to(0, Instant::now()),
            KeyCode::Char('G') => self.state.scroll_to(page_height, Instant::now()),
            // Smooth-scroll to the next card, like an in-page anchor
            KeyCode::Char(' ') => {
                let next = ui::pages::card_rows(view)
                    .into_iter()
                    .find(|row| *row > self.state.scroll_offset);
                if let Some(target) = next {
                    self.state.scroll_to(target, Instant::now());
                }
            }
            KeyCode::Char(c) => {
                if let Some(target) = c.to_digit(10).and_then(View::from_digit) {
                    self.navigate(target);
                }
            }
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Enter on the send button triggers the workflow
        if key.code == KeyCode::Enter && self.state.contact_form.is_buttons_row_active() {
            return self.submit_contact_form().await;
        }

        let form = &mut self.state.contact_form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left => {
                if let Some(field) = form.get_active_field_mut() {
                    field.prev_option();
                }
                self.state.submission.acknowledge_edit();
            }
            KeyCode::Right => {
                if let Some(field) = form.get_active_field_mut() {
                    field.next_option();
                }
                self.state.submission.acknowledge_edit();
            }
            KeyCode::Backspace => {
                form.backspace();
                self.state.submission.acknowledge_edit();
            }
            KeyCode::Enter => {
                if form
                    .get_field(form.active_field())
                    .is_some_and(|f| f.is_multiline)
                {
                    form.input('\n');
                    self.state.submission.acknowledge_edit();
                } else {
                    form.focus_next();
                }
            }
            KeyCode::Char(c) => {
                form.input(c);
                self.state.submission.acknowledge_edit();
            }
            _ => {}
        }
        Ok(())
    }

    /// Run one submission attempt through the workflow.
    ///
    /// Captures a snapshot, disables the send control for the duration of
    /// the transport call, and resolves into the success banner (fields
    /// cleared, auto-hiding) or the error banner (fields kept, persistent).
    /// The control is re-enabled on both paths.
    pub async fn submit_contact_form(&mut self) -> Result<()> {
        if !self.state.submission.submit_enabled() {
            return Ok(());
        }
        if !self.state.contact_form.validate_all() {
            tracing::debug!("submit blocked: constraint validation failed");
            return Ok(());
        }

        let inquiry = self.state.contact_form.snapshot();
        self.state.submission.begin();
        tracing::info!(id = %inquiry.id, "sending inquiry");

        match self.mailer.send_inquiry(&inquiry).await {
            Ok(()) => {
                self.state.submission.succeed(Instant::now());
                self.state.contact_form.reset();
            }
            Err(err) => {
                tracing::error!(id = %inquiry.id, error = %err, "inquiry submission failed");
                self.state.submission.fail();
            }
        }
        Ok(())
    }

    /// Copy the company phone number to the clipboard (click-to-call)
    pub fn copy_company_phone(&mut self) {
        let phone = self.config.company_phone().to_string();
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(phone.clone())) {
            Ok(()) => {
                tracing::info!("phone number copied");
                self.copy_message = Some(format!("Kopiert: {phone}"));
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.copy_message = Some("Utklippstavlen er utilgjengelig".to_string());
            }
        }
    }

    fn update_reveal(&mut self) {
        let rows = ui::pages::card_rows(self.state.current_view);
        if rows.is_empty() {
            return;
        }
        let height = self.body_height();
        self.state.reveal.update(&rows, self.state.scroll_offset, height);
    }

    /// Rows available to page content below the header and above the footer
    fn body_height(&self) -> u16 {
        let total = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        let header = if self.state.header.is_hidden {
            0
        } else {
            ui::layout::HEADER_HEIGHT
        };
        total.saturating_sub(header + ui::layout::FOOTER_HEIGHT)
    }
}
