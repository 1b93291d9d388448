use crate::telemetry::{log_event, LogLevel};
use serde_json::json;

pub const DEFAULT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending…";
pub const SENT_LABEL: &str = "Sent!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Call `advance` again after this many milliseconds.
    Wait(u32),
    Reset,
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    state: SubmissionState,
    draft: ContactDraft,
    sending_ms: u32,
    sent_ms: u32,
}

impl ContactForm {
    pub fn new(sending_ms: u32, sent_ms: u32) -> Self {
        Self {
            state: SubmissionState::Idle,
            draft: ContactDraft::default(),
            sending_ms,
            sent_ms,
        }
    }

    pub fn submit(&mut self) -> Step {
        if self.state != SubmissionState::Idle {
            return Step::Ignored;
        }

        self.state = SubmissionState::Sending;
        log_event(LogLevel::Info, "contact.sending", json!({}));
        Step::Wait(self.sending_ms)
    }

    pub fn advance(&mut self) -> Step {
        match self.state {
            SubmissionState::Sending => {
                self.state = SubmissionState::Sent;
                log_event(LogLevel::Info, "contact.sent", json!({}));
                Step::Wait(self.sent_ms)
            }
            SubmissionState::Sent => {
                self.state = SubmissionState::Idle;
                self.draft = ContactDraft::default();
                Step::Reset
            }
            SubmissionState::Idle => Step::Ignored,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            SubmissionState::Idle => DEFAULT_LABEL,
            SubmissionState::Sending => SENDING_LABEL,
            SubmissionState::Sent => SENT_LABEL,
        }
    }

    pub fn trigger_disabled(&self) -> bool {
        self.state != SubmissionState::Idle
    }

    pub fn succeeded(&self) -> bool {
        self.state == SubmissionState::Sent
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        &mut self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut form = ContactForm::new(900, 1_200);
        form.draft_mut().name = "Ada".to_string();
        form.draft_mut().message = "Hello".to_string();

        assert_eq!(form.submit(), Step::Wait(900));
        assert_eq!(form.state(), SubmissionState::Sending);
        assert_eq!(form.label(), SENDING_LABEL);
        assert!(form.trigger_disabled());

        assert_eq!(form.advance(), Step::Wait(1_200));
        assert_eq!(form.label(), SENT_LABEL);
        assert!(form.succeeded());

        assert_eq!(form.advance(), Step::Reset);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.label(), DEFAULT_LABEL);
        assert!(!form.trigger_disabled());
        assert_eq!(form.draft(), &ContactDraft::default());
    }

    #[test]
    fn resubmitting_while_busy_is_ignored() {
        let mut form = ContactForm::new(900, 1_200);
        form.submit();
        assert_eq!(form.submit(), Step::Ignored);
        assert_eq!(form.state(), SubmissionState::Sending);

        form.advance();
        assert_eq!(form.submit(), Step::Ignored);
        assert_eq!(form.state(), SubmissionState::Sent);
    }

    #[test]
    fn advancing_an_idle_form_does_nothing() {
        let mut form = ContactForm::new(900, 1_200);
        assert_eq!(form.advance(), Step::Ignored);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn draft_survives_until_reset() {
        let mut form = ContactForm::new(0, 0);
        form.draft_mut().email = "ada@example.com".to_string();
        form.submit();
        form.advance();
        assert_eq!(form.draft().email, "ada@example.com");
    }
}
