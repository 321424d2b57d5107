//! Generative-text collaborator.
//!
//! Callers go through [`generate_assistant_response`] and
//! [`generate_email_draft`], which never fail: any error becomes a fixed
//! human-readable fallback.

use clap::ValueEnum;

use crate::config::AssistantKind;
use crate::errors::{AppError, AppResult};

pub const ASSISTANT_FALLBACK: &str =
    "I am currently offline or unable to process your request. Please check your API configuration.";
pub const DRAFT_FALLBACK: &str = "Service unavailable.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmailKind {
    Welcome,
    Confirmation,
    Apology,
}

pub trait Assistant {
    fn respond(&self, prompt: &str, context: &str) -> AppResult<String>;
    fn draft_email(&self, guest_name: &str, kind: EmailKind) -> AppResult<String>;
}

/// No backend configured: every call is unavailable.
pub struct OfflineAssistant;

impl Assistant for OfflineAssistant {
    fn respond(&self, _prompt: &str, _context: &str) -> AppResult<String> {
        Err(AppError::CollaboratorUnavailable(
            "no assistant backend configured".into(),
        ))
    }

    fn draft_email(&self, _guest_name: &str, _kind: EmailKind) -> AppResult<String> {
        Err(AppError::CollaboratorUnavailable(
            "no assistant backend configured".into(),
        ))
    }
}

/// Local, deterministic drafts. Free-form prompts get a status digest.
pub struct TemplateAssistant {
    pub hotel_name: String,
}

impl Default for TemplateAssistant {
    fn default() -> Self {
        Self {
            hotel_name: "StaySync Hotel".to_string(),
        }
    }
}

impl Assistant for TemplateAssistant {
    fn respond(&self, prompt: &str, context: &str) -> AppResult<String> {
        if prompt.trim().is_empty() {
            return Err(AppError::Validation("empty prompt".into()));
        }
        Ok(format!(
            "Here is the current picture: {}\nFor \"{}\", start with the rooms flagged above and any guests arriving today.",
            context.trim(),
            prompt.trim()
        ))
    }

    fn draft_email(&self, guest_name: &str, kind: EmailKind) -> AppResult<String> {
        let hotel = &self.hotel_name;
        let body = match kind {
            EmailKind::Welcome => format!(
                "Dear {guest_name},\n\nWelcome to {hotel}! Your room is being prepared and our team is looking forward to your arrival. \
                 Do not hesitate to contact the front desk for anything you need during your stay.\n\nWarm regards,\nThe {hotel} team"
            ),
            EmailKind::Confirmation => format!(
                "Dear {guest_name},\n\nThis note confirms your booking at {hotel}. \
                 Please keep it for your records; we will be glad to adjust any details on request.\n\nKind regards,\nThe {hotel} team"
            ),
            EmailKind::Apology => format!(
                "Dear {guest_name},\n\nPlease accept our sincere apologies for the delay you experienced. \
                 We have addressed the issue and appreciate your patience.\n\nWith apologies,\nThe {hotel} team"
            ),
        };
        Ok(body)
    }
}

pub fn from_config(kind: AssistantKind) -> Box<dyn Assistant> {
    match kind {
        AssistantKind::Offline => Box::new(OfflineAssistant),
        AssistantKind::Template => Box::new(TemplateAssistant::default()),
    }
}

pub fn generate_assistant_response(
    assistant: &dyn Assistant,
    prompt: &str,
    context: &str,
) -> String {
    match assistant.respond(prompt, context) {
        Ok(text) if !text.trim().is_empty() => text,
        _ => ASSISTANT_FALLBACK.to_string(),
    }
}

/// A draft, or the reason none could be written. Empty text counts as a failure.
pub fn try_email_draft(
    assistant: &dyn Assistant,
    guest_name: &str,
    kind: EmailKind,
) -> AppResult<String> {
    match assistant.draft_email(guest_name, kind) {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => Err(AppError::CollaboratorUnavailable("empty draft".into())),
        Err(e) => Err(e),
    }
}

pub fn generate_email_draft(
    assistant: &dyn Assistant,
    guest_name: &str,
    kind: EmailKind,
) -> String {
    try_email_draft(assistant, guest_name, kind).unwrap_or_else(|_| DRAFT_FALLBACK.to_string())
}
