mod common;
use common::memory_store;

use staysync::config::AssistantKind;
use staysync::core::assistant::{
    ASSISTANT_FALLBACK, DRAFT_FALLBACK, EmailKind, OfflineAssistant, TemplateAssistant,
    from_config, generate_assistant_response, generate_email_draft,
};
use staysync::core::audit::load_log;
use staysync::core::mail::{
    EmailComposer, EmailPayload, LogMailer, Mailer, NO_DRAFT_NOTICE, SEND_FAILED_NOTICE,
    SendReceipt,
};
use staysync::core::request::RequestState;
use staysync::core::sample;
use staysync::errors::{AppError, AppResult};

struct BrokenMailer;

impl Mailer for BrokenMailer {
    fn send(&self, _payload: &EmailPayload) -> AppResult<SendReceipt> {
        Err(AppError::CollaboratorUnavailable("smtp down".into()))
    }
}

struct RefusingMailer;

impl Mailer for RefusingMailer {
    fn send(&self, _payload: &EmailPayload) -> AppResult<SendReceipt> {
        Ok(SendReceipt {
            success: false,
            message: "quota exceeded".into(),
        })
    }
}

fn alice() -> staysync::models::guest::Guest {
    sample::guests().remove(0)
}

#[test]
fn offline_assistant_falls_back() {
    let offline = OfflineAssistant;
    assert_eq!(
        generate_assistant_response(&offline, "status?", "ctx"),
        ASSISTANT_FALLBACK
    );
    assert_eq!(
        generate_email_draft(&offline, "Alice", EmailKind::Welcome),
        DRAFT_FALLBACK
    );
}

#[test]
fn template_assistant_drafts_addressed_emails() {
    let assistant = from_config(AssistantKind::Template);
    for kind in [EmailKind::Welcome, EmailKind::Confirmation, EmailKind::Apology] {
        let draft = generate_email_draft(assistant.as_ref(), "Alice Freeman", kind);
        assert!(draft.starts_with("Dear Alice Freeman,"));
    }
}

#[test]
fn blank_prompt_gets_the_fallback() {
    let assistant = TemplateAssistant::default();
    assert_eq!(
        generate_assistant_response(&assistant, "   ", "ctx"),
        ASSISTANT_FALLBACK
    );
    assert!(generate_assistant_response(&assistant, "what now?", "All quiet.").contains("All quiet."));
}

#[test]
fn successful_send_clears_the_draft_and_logs() {
    let store = memory_store();
    let mut composer = EmailComposer::new(alice());
    composer.generate(&TemplateAssistant::default(), EmailKind::Welcome);
    assert_eq!(composer.drafting, RequestState::Succeeded);

    let notice = composer.send(&LogMailer::new(&store)).unwrap();

    assert_eq!(notice, "Email successfully sent to alice.f@example.com");
    assert!(composer.draft.is_empty());
    assert_eq!(composer.sending, RequestState::Succeeded);
    assert!(load_log(&store)
        .unwrap()
        .iter()
        .any(|e| e.operation == "email" && e.target == "alice.f@example.com"));
}

#[test]
fn failed_send_keeps_the_draft() {
    for mailer in [&BrokenMailer as &dyn Mailer, &RefusingMailer] {
        let mut composer = EmailComposer::new(alice());
        composer.draft = "Hand-written note".into();

        let notice = composer.send(mailer).unwrap();

        assert_eq!(notice, SEND_FAILED_NOTICE);
        assert_eq!(composer.draft, "Hand-written note");
        assert!(composer.sending.failure().is_some());
    }
}

#[test]
fn fallback_draft_is_never_mailed() {
    let store = memory_store();
    let mut composer = EmailComposer::new(alice());

    let draft = composer.generate(&OfflineAssistant, EmailKind::Welcome).to_string();
    assert_eq!(draft, DRAFT_FALLBACK);
    assert!(composer.drafting.failure().is_some());

    let notice = composer.send(&LogMailer::new(&store)).unwrap();

    assert_eq!(notice, NO_DRAFT_NOTICE);
    assert!(composer.sending.failure().is_some());
    assert_eq!(composer.draft, DRAFT_FALLBACK);
    assert!(!load_log(&store).unwrap().iter().any(|e| e.operation == "email"));
}

#[test]
fn fallback_text_typed_by_hand_is_not_mailed() {
    let store = memory_store();
    let mut composer = EmailComposer::new(alice());
    composer.draft = DRAFT_FALLBACK.into();

    assert_eq!(composer.send(&LogMailer::new(&store)).unwrap(), NO_DRAFT_NOTICE);
}

#[test]
fn empty_draft_is_not_sent() {
    let store = memory_store();
    let mut composer = EmailComposer::new(alice());
    assert!(matches!(
        composer.send(&LogMailer::new(&store)),
        Err(AppError::Validation(_))
    ));
    assert_eq!(composer.sending, RequestState::Idle);
}

#[test]
fn log_mailer_rejects_malformed_recipient() {
    let store = memory_store();
    let payload = EmailPayload {
        to: "not-an-address".into(),
        subject: "s".into(),
        body: "b".into(),
    };
    assert!(LogMailer::new(&store).send(&payload).is_err());
}
