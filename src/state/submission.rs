//! Submission workflow state machine
//!
//! One inquiry submission at a time moves through
//! `Idle -> Submitting -> {Success, Error} -> Idle`. While `Submitting`
//! the send control is disabled and shows a sending label; a success
//! banner auto-hides after a fixed delay, an error banner persists until
//! the user edits or resubmits.

use std::time::{Duration, Instant};

/// Fixed confirmation shown after a successful submission
pub const SUCCESS_MESSAGE: &str =
    "Takk for din henvendelse! Vi kontakter deg så snart som mulig, vanligvis innen én arbeidsdag.";

/// Fixed message shown when sending fails
pub const ERROR_MESSAGE: &str =
    "Beklager, noe gikk galt. Vennligst prøv igjen eller ring oss direkte.";

/// Send-button label while idle
pub const SUBMIT_LABEL: &str = "Send henvendelse";

/// Send-button label while a submission is in flight
pub const SENDING_LABEL: &str = "Sender...";

/// How long the success banner stays visible
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_secs(10);

/// Submission lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Banner kind, drives the message styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The status banner shown under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: &'static str,
}

/// State for the contact form's submission workflow
#[derive(Debug)]
pub struct SubmissionState {
    pub status: SubmitStatus,
    pub banner: Option<Banner>,
    /// Success banner deadline; None while no auto-hide is pending
    hide_at: Option<Instant>,
    auto_hide: Duration,
}

impl SubmissionState {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            status: SubmitStatus::Idle,
            banner: None,
            hide_at: None,
            auto_hide,
        }
    }

    /// True while a submission is between trigger and resolution
    pub fn is_in_flight(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// The send control is enabled whenever no submission is in flight
    pub fn submit_enabled(&self) -> bool {
        !self.is_in_flight()
    }

    /// Label for the send control in the current status
    pub fn button_label(&self) -> &'static str {
        if self.is_in_flight() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Enter `Submitting`. Returns false (and changes nothing) if a
    /// submission is already in flight; this is the single-flight guard.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        self.banner = None;
        self.hide_at = None;
        true
    }

    /// Resolve the in-flight submission as successful: show the
    /// confirmation banner and schedule its auto-hide.
    pub fn succeed(&mut self, now: Instant) {
        self.status = SubmitStatus::Success;
        self.banner = Some(Banner {
            kind: BannerKind::Success,
            text: SUCCESS_MESSAGE,
        });
        self.hide_at = Some(now + self.auto_hide);
    }

    /// Resolve the in-flight submission as failed: show the error banner,
    /// which never auto-hides.
    pub fn fail(&mut self) {
        self.status = SubmitStatus::Error;
        self.banner = Some(Banner {
            kind: BannerKind::Error,
            text: ERROR_MESSAGE,
        });
        self.hide_at = None;
    }

    /// Advance time-based state. Hides an expired success banner and
    /// returns to `Idle`. Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.status = SubmitStatus::Idle;
                self.banner = None;
                self.hide_at = None;
                return true;
            }
        }
        false
    }

    /// A field edit after an error clears the banner and returns to `Idle`
    pub fn acknowledge_edit(&mut self) {
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Idle;
            self.banner = None;
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_HIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SubmissionState {
        SubmissionState::new(Duration::from_secs(10))
    }

    #[test]
    fn test_initial_state_is_idle_and_enabled() {
        let s = state();
        assert_eq!(s.status, SubmitStatus::Idle);
        assert!(s.submit_enabled());
        assert!(s.banner.is_none());
        assert_eq!(s.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_begin_disables_control_and_swaps_label() {
        let mut s = state();
        assert!(s.begin());
        assert_eq!(s.status, SubmitStatus::Submitting);
        assert!(!s.submit_enabled());
        assert_eq!(s.button_label(), SENDING_LABEL);
    }

    #[test]
    fn test_begin_is_single_flight() {
        let mut s = state();
        assert!(s.begin());
        assert!(!s.begin());
        assert_eq!(s.status, SubmitStatus::Submitting);
    }

    #[test]
    fn test_success_restores_control_and_shows_banner() {
        let mut s = state();
        s.begin();
        s.succeed(Instant::now());

        assert_eq!(s.status, SubmitStatus::Success);
        assert!(s.submit_enabled());
        assert_eq!(s.button_label(), SUBMIT_LABEL);
        let banner = s.banner.expect("success banner");
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.text, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_failure_restores_control_and_shows_error_banner() {
        let mut s = state();
        s.begin();
        s.fail();

        assert_eq!(s.status, SubmitStatus::Error);
        assert!(s.submit_enabled());
        assert_eq!(s.button_label(), SUBMIT_LABEL);
        let banner = s.banner.expect("error banner");
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, ERROR_MESSAGE);
    }

    #[test]
    fn test_success_banner_hides_after_exactly_the_delay() {
        let mut s = state();
        let t0 = Instant::now();
        s.begin();
        s.succeed(t0);

        // One tick short of the deadline: still visible
        assert!(!s.tick(t0 + Duration::from_millis(9_999)));
        assert!(s.banner.is_some());

        // At the deadline: hidden, back to Idle
        assert!(s.tick(t0 + Duration::from_secs(10)));
        assert!(s.banner.is_none());
        assert_eq!(s.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_error_banner_never_auto_hides() {
        let mut s = state();
        s.begin();
        s.fail();

        assert!(!s.tick(Instant::now() + Duration::from_secs(3600)));
        assert!(s.banner.is_some());
        assert_eq!(s.status, SubmitStatus::Error);
    }

    #[test]
    fn test_edit_after_error_returns_to_idle() {
        let mut s = state();
        s.begin();
        s.fail();
        s.acknowledge_edit();

        assert_eq!(s.status, SubmitStatus::Idle);
        assert!(s.banner.is_none());
    }

    #[test]
    fn test_edit_does_not_disturb_success_banner() {
        let mut s = state();
        let t0 = Instant::now();
        s.begin();
        s.succeed(t0);
        s.acknowledge_edit();

        assert_eq!(s.status, SubmitStatus::Success);
        assert!(s.banner.is_some());
    }

    #[test]
    fn test_resubmit_clears_previous_banner() {
        let mut s = state();
        s.begin();
        s.fail();
        assert!(s.begin());
        assert!(s.banner.is_none());
        assert_eq!(s.status, SubmitStatus::Submitting);
    }

    #[test]
    fn test_tick_is_noop_while_idle() {
        let mut s = state();
        assert!(!s.tick(Instant::now()));
        assert_eq!(s.status, SubmitStatus::Idle);
    }
}
