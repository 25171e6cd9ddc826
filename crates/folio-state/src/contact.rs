//! # Contact Form State
//!
//! ## States
//!
//! ```text
//! Idle ──SubmitStarted──▶ Submitting ──SubmitSucceeded──▶ Succeeded (draft cleared)
//!   ▲                         │
//!   │                         └──────SubmitFailed────▶ Failed (draft kept)
//!   │                                                      │
//!   └─────────── SubmitStarted from Succeeded/Failed ──────┘
//! ```
//!
//! `SubmitStarted` while already `Submitting` is a no-op, and completions
//! only apply while `Submitting`. The banner mirrors the last outcome and
//! stays until the next submission starts.

use std::fmt;

use folio_core::{ContactField, ContactForm};
use serde::{Deserialize, Serialize};

/// Banner text when the server reply carries no message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll be in touch soon.";

/// Banner text when the failure carries no message.
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

// ─── Submission Status ───────────────────────────────────────────────

/// Progress and outcome of the contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("IDLE"),
            Self::Submitting => f.write_str("SUBMITTING"),
            Self::Succeeded(msg) => write!(f, "SUCCEEDED({msg})"),
            Self::Failed(msg) => write!(f, "FAILED({msg})"),
        }
    }
}

// ─── Events ──────────────────────────────────────────────────────────

/// Named transitions of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    FieldChanged(ContactField, String),
    SubmitStarted,
    /// `message` is the server's reply text, if any.
    SubmitSucceeded { message: Option<String> },
    /// `message` is the error's text, if any.
    SubmitFailed { message: Option<String> },
}

// ─── Banner ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Success,
    Error,
}

/// Status banner shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    pub kind: BannerKind,
    pub text: &'a str,
}

// ─── State ───────────────────────────────────────────────────────────

/// Draft plus submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    draft: ContactForm,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event`, producing the next state.
    pub fn reduce(mut self, event: ContactEvent) -> Self {
        match event {
            ContactEvent::FieldChanged(field, value) => self.draft.set(field, value),
            ContactEvent::SubmitStarted => {
                if !self.status.is_submitting() {
                    self.status = SubmissionStatus::Submitting;
                }
            }
            ContactEvent::SubmitSucceeded { message } => {
                if self.status.is_submitting() {
                    self.status = SubmissionStatus::Succeeded(
                        non_empty(message).unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.into()),
                    );
                    self.draft.clear();
                }
            }
            ContactEvent::SubmitFailed { message } => {
                if self.status.is_submitting() {
                    self.status = SubmissionStatus::Failed(
                        non_empty(message).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.into()),
                    );
                }
            }
        }
        self
    }

    /// In-place form of [`reduce`](Self::reduce).
    pub fn dispatch(&mut self, event: ContactEvent) {
        *self = std::mem::take(self).reduce(event);
    }

    pub fn draft(&self) -> &ContactForm {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether a submission would be attempted now.
    pub fn can_submit(&self) -> bool {
        !self.status.is_submitting() && self.draft.is_complete()
    }

    /// Banner for the last outcome. `None` while idle or submitting.
    pub fn banner(&self) -> Option<Banner<'_>> {
        match &self.status {
            SubmissionStatus::Succeeded(text) => Some(Banner {
                kind: BannerKind::Success,
                text,
            }),
            SubmissionStatus::Failed(text) => Some(Banner {
                kind: BannerKind::Error,
                text,
            }),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.status.is_submitting() {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    pub fn button_disabled(&self) -> bool {
        self.status.is_submitting()
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.is_empty())
}
