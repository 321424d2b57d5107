//! Outgoing guest email: the mailer collaborator and the compose panel state.

use regex::Regex;

use crate::core::assistant::{Assistant, DRAFT_FALLBACK, EmailKind, try_email_draft};
use crate::core::request::RequestState;
use crate::errors::{AppError, AppResult};
use crate::models::guest::Guest;
use crate::store::Store;

pub const DEFAULT_SUBJECT: &str = "Message from StaySync Hotel";
pub const QUEUED_MESSAGE: &str = "Email queued successfully via SMTP service.";
pub const SEND_FAILED_NOTICE: &str = "Failed to send email. Please check SMTP configuration.";
pub const NO_DRAFT_NOTICE: &str =
    "Email not sent: the assistant could not write a draft. Try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPayload {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub success: bool,
    pub message: String,
}

pub trait Mailer {
    fn send(&self, payload: &EmailPayload) -> AppResult<SendReceipt>;
}

fn is_plausible_address(addr: &str) -> AppResult<bool> {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_err(|e| AppError::Other(e.to_string()))?;
    Ok(re.is_match(addr))
}

/// Records each message in the internal log instead of talking to SMTP.
pub struct LogMailer<'a> {
    store: &'a Store,
}

impl<'a> LogMailer<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }
}

impl Mailer for LogMailer<'_> {
    fn send(&self, payload: &EmailPayload) -> AppResult<SendReceipt> {
        if !is_plausible_address(&payload.to)? {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid recipient",
                payload.to
            )));
        }

        self.store.audit(
            "email",
            &payload.to,
            &format!("{} ({} chars)", payload.subject, payload.body.chars().count()),
        );

        Ok(SendReceipt {
            success: true,
            message: QUEUED_MESSAGE.to_string(),
        })
    }
}

/// Draft/send panel for one selected guest.
///
/// A successful send clears the draft; a failed one keeps it so nothing typed
/// or generated is lost.
#[derive(Debug, Clone)]
pub struct EmailComposer {
    pub guest: Guest,
    pub draft: String,
    pub drafting: RequestState,
    pub sending: RequestState,
}

impl EmailComposer {
    pub fn new(guest: Guest) -> Self {
        Self {
            guest,
            draft: String::new(),
            drafting: RequestState::Idle,
            sending: RequestState::Idle,
        }
    }

    /// Ask the assistant for a draft. On failure the draft holds the fallback
    /// text and `drafting` records why; such a draft is never sent.
    pub fn generate(&mut self, assistant: &dyn Assistant, kind: EmailKind) -> &str {
        self.drafting = RequestState::Pending;
        let result = try_email_draft(assistant, &self.guest.name, kind);
        self.drafting.settle(&result);
        self.draft = result.unwrap_or_else(|_| DRAFT_FALLBACK.to_string());
        &self.draft
    }

    fn has_usable_draft(&self) -> bool {
        self.drafting.failure().is_none() && self.draft.trim() != DRAFT_FALLBACK
    }

    /// Send the current draft. Returns the user-facing notice.
    pub fn send(&mut self, mailer: &dyn Mailer) -> AppResult<String> {
        if self.draft.trim().is_empty() {
            return Err(AppError::Validation("nothing to send: the draft is empty".into()));
        }

        if !self.has_usable_draft() {
            self.sending = RequestState::Failed("no usable draft".into());
            return Ok(NO_DRAFT_NOTICE.to_string());
        }

        self.sending = RequestState::Pending;
        let payload = EmailPayload {
            to: self.guest.email.clone(),
            subject: DEFAULT_SUBJECT.to_string(),
            body: self.draft.clone(),
        };

        let outcome = match mailer.send(&payload) {
            Ok(receipt) if receipt.success => Ok(receipt),
            Ok(receipt) => Err(AppError::CollaboratorUnavailable(receipt.message)),
            Err(e) => Err(e),
        };
        self.sending.settle(&outcome);

        match outcome {
            Ok(_) => {
                self.draft.clear();
                Ok(format!("Email successfully sent to {}", self.guest.email))
            }
            Err(_) => Ok(SEND_FAILED_NOTICE.to_string()),
        }
    }
}
