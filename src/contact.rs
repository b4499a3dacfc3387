use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, sync::LazyLock, time::Duration};
use thiserror::Error;

/// How long the success or failure banner stays up before the form returns to idle.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

pub const SUBMISSION_FAILED: &str = "Failed to send message. Please try again later.";
pub const SUBMISSION_SUCCEEDED: &str = "Thank you! Your message has been sent successfully.";

// permissive shape check: something@something.something, no whitespace
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FromName,
    ReplyTo,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FromName, Field::ReplyTo, Field::Subject, Field::Message];

    /// Template parameter name understood by the relay.
    pub fn name(self) -> &'static str {
        match self {
            Self::FromName => "from_name",
            Self::ReplyTo => "reply_to",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FromName => "Full name",
            Self::ReplyTo => "Email address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    RequiredField(Field),
    #[error("Please enter a valid email address")]
    InvalidFormat(Field),
    #[error("{}", SUBMISSION_FAILED)]
    Submission { reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub from_name: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FromName => &self.from_name,
            Field::ReplyTo => &self.reply_to,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FromName => &mut self.from_name,
            Field::ReplyTo => &mut self.reply_to,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

/// Inline error per required field. `subject` is optional and never carries one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    from_name: Option<FormError>,
    reply_to: Option<FormError>,
    message: Option<FormError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FormError> {
        match field {
            Field::FromName => self.from_name.as_ref(),
            Field::ReplyTo => self.reply_to.as_ref(),
            Field::Subject => None,
            Field::Message => self.message.as_ref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::FromName => self.from_name = None,
            Field::ReplyTo => self.reply_to = None,
            Field::Subject => {}
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_name.is_none() && self.reply_to.is_none() && self.message.is_none()
    }
}

/// Validation run when a submission is attempted.
pub fn validate_form(fields: &ContactFields) -> Result<(), FieldErrors> {
    let required = |field: Field| {
        if fields.get(field).trim().is_empty() {
            Some(FormError::RequiredField(field))
        } else {
            None
        }
    };
    let errors = FieldErrors {
        from_name: required(Field::FromName),
        reply_to: required(Field::ReplyTo).or_else(|| {
            if is_valid_email(&fields.reply_to) {
                None
            } else {
                Some(FormError::InvalidFormat(Field::ReplyTo))
            }
        }),
        message: required(Field::Message),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Handed out when a submission starts. Resolving with a ticket from an older
/// submission, or after teardown, does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl From<u64> for Ticket {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: Ticket,
    pub fields: ContactFields,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error("a message is already being sent")]
    InFlight,
    #[error("the form has been torn down")]
    TornDown,
    #[error("the form has validation errors")]
    Invalid,
}

/// Contact form record owned by a single mounted form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    submission: Submission,
    last_error: Option<FormError>,
    generation: u64,
    mounted: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            errors: FieldErrors::default(),
            submission: Submission::Idle,
            last_error: None,
            generation: 0,
            mounted: true,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn last_error(&self) -> Option<&FormError> {
        self.last_error.as_ref()
    }

    pub fn shows_success(&self) -> bool {
        self.submission == Submission::Success
    }

    pub fn shows_error(&self) -> bool {
        self.submission == Submission::Error && self.last_error.is_some()
    }

    /// Updates one field and drops any stale error shown under it.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Drives the submit control. Re-checks the email shape on every render,
    /// unlike [`validate_form`] whose messages only appear on submit.
    pub fn can_submit(&self) -> bool {
        self.submission != Submission::Submitting
            && !self.fields.from_name.trim().is_empty()
            && is_valid_email(&self.fields.reply_to)
            && !self.fields.message.trim().is_empty()
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRefused> {
        if !self.mounted {
            return Err(SubmitRefused::TornDown);
        }
        if self.submission == Submission::Submitting {
            return Err(SubmitRefused::InFlight);
        }
        self.last_error = None;
        if let Err(errors) = validate_form(&self.fields) {
            self.errors = errors;
            return Err(SubmitRefused::Invalid);
        }
        self.errors = FieldErrors::default();
        self.submission = Submission::Submitting;
        self.generation += 1;
        Ok(PendingSubmission {
            ticket: Ticket(self.generation),
            fields: self.fields.clone(),
        })
    }

    /// Applies the relay outcome. Returns the ticket for the banner timer, or
    /// `None` when the outcome arrived for a stale or torn-down submission.
    pub fn finish_submit<E: Display>(
        &mut self,
        ticket: Ticket,
        outcome: Result<(), E>,
    ) -> Option<Ticket> {
        if !self.mounted
            || ticket.0 != self.generation
            || self.submission != Submission::Submitting
        {
            return None;
        }
        match outcome {
            Ok(()) => {
                log::info!("contact message sent");
                self.fields = ContactFields::default();
                self.errors = FieldErrors::default();
                self.submission = Submission::Success;
            }
            Err(e) => {
                log::warn!("contact message failed: {e}");
                self.last_error = Some(FormError::Submission {
                    reason: e.to_string(),
                });
                self.submission = Submission::Error;
            }
        }
        Some(ticket)
    }

    /// Banner timer fired.
    pub fn expire_banner(&mut self, ticket: Ticket) {
        if !self.mounted || ticket.0 != self.generation {
            return;
        }
        if matches!(self.submission, Submission::Success | Submission::Error) {
            self.submission = Submission::Idle;
            self.last_error = None;
        }
    }

    pub fn teardown(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::FromName, "Ada Lovelace");
        form.set_field(Field::ReplyTo, "ada@example.com");
        form.set_field(Field::Subject, "Engines");
        form.set_field(Field::Message, "Hello there");
        form
    }

    fn fields(from_name: &str, reply_to: &str, message: &str) -> ContactFields {
        ContactFields {
            from_name: from_name.to_string(),
            reply_to: reply_to.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_missing_name_is_required_error() {
        let errors = validate_form(&fields("", "a@b.com", "hi")).unwrap_err();
        assert_eq!(
            errors.get(Field::FromName),
            Some(&FormError::RequiredField(Field::FromName))
        );
        assert_eq!(errors.get(Field::ReplyTo), None);
        assert_eq!(errors.get(Field::Message), None);
        assert_eq!(
            errors.get(Field::FromName).unwrap().to_string(),
            "Full name is required"
        );
    }

    #[test]
    fn test_email_shape() {
        let errors = validate_form(&fields("A", "not-an-email", "hi")).unwrap_err();
        assert_eq!(
            errors.get(Field::ReplyTo),
            Some(&FormError::InvalidFormat(Field::ReplyTo))
        );
        assert_eq!(
            errors.get(Field::ReplyTo).unwrap().to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(validate_form(&fields("A", "a@b.co", "hi")), Ok(()));

        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_whitespace_only_fields_are_required_errors() {
        let errors = validate_form(&fields("  ", "\t", "\n ")).unwrap_err();
        assert_eq!(
            errors.get(Field::ReplyTo).unwrap().to_string(),
            "Email address is required"
        );
        assert_eq!(
            errors.get(Field::Message).unwrap().to_string(),
            "Message is required"
        );
        assert!(errors.get(Field::FromName).is_some());
        assert_eq!(errors.get(Field::Subject), None);
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(SubmitRefused::Invalid));
        assert!(form.errors().get(Field::FromName).is_some());
        assert!(form.errors().get(Field::Message).is_some());

        form.set_field(Field::FromName, "A");
        assert_eq!(form.errors().get(Field::FromName), None);
        assert!(form.errors().get(Field::ReplyTo).is_some());
        assert!(form.errors().get(Field::Message).is_some());
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_readiness_rechecks_email_shape() {
        let mut form = filled();
        assert!(form.can_submit());
        form.set_field(Field::ReplyTo, "ada@example");
        assert!(!form.can_submit());
        // errors only show once a submit is attempted
        assert!(form.errors().is_empty());
        form.set_field(Field::ReplyTo, "ada@example.com");
        form.set_field(Field::Subject, "");
        assert!(form.can_submit());
    }

    #[test]
    fn test_successful_submission() {
        let mut form = filled();
        assert_eq!(form.submission(), Submission::Idle);

        let pending = form.begin_submit().expect("form should be valid");
        assert_eq!(form.submission(), Submission::Submitting);
        assert!(!form.can_submit());
        assert_eq!(pending.fields.from_name, "Ada Lovelace");
        assert_eq!(pending.fields.subject, "Engines");

        let banner = form.finish_submit(pending.ticket, Ok::<(), String>(()));
        assert_eq!(banner, Some(pending.ticket));
        assert_eq!(form.submission(), Submission::Success);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.errors().is_empty());
        assert!(form.shows_success());

        form.expire_banner(pending.ticket);
        assert_eq!(form.submission(), Submission::Idle);
        assert!(!form.shows_success());
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        assert_eq!(form.submission(), Submission::Submitting);

        form.finish_submit(pending.ticket, Err("relay returned 502"));
        assert_eq!(form.submission(), Submission::Error);
        assert_eq!(
            form.last_error(),
            Some(&FormError::Submission {
                reason: "relay returned 502".to_string()
            })
        );
        assert_eq!(form.last_error().unwrap().to_string(), SUBMISSION_FAILED);
        assert!(form.shows_error());
        assert_eq!(form.fields().from_name, "Ada Lovelace");
        assert_eq!(form.fields().message, "Hello there");

        form.expire_banner(pending.ticket);
        assert_eq!(form.submission(), Submission::Idle);
        assert_eq!(form.last_error(), None);
        assert!(!form.shows_error());
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRefused::InFlight));
        assert_eq!(
            form.finish_submit(first.ticket, Ok::<(), String>(())),
            Some(first.ticket)
        );
    }

    #[test]
    fn test_resolution_after_teardown_is_ignored() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        form.teardown();
        assert_eq!(form.finish_submit(pending.ticket, Ok::<(), String>(())), None);
        assert_eq!(form.submission(), Submission::Submitting);
        assert_eq!(form.fields().from_name, "Ada Lovelace");
        assert_eq!(form.begin_submit(), Err(SubmitRefused::TornDown));
    }

    #[test]
    fn test_stale_banner_ticket_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.finish_submit(first.ticket, Err("timeout"));

        // the user retries before the first banner expires
        let second = form.begin_submit().unwrap();
        form.finish_submit(second.ticket, Err("timeout"));
        form.expire_banner(first.ticket);
        assert_eq!(form.submission(), Submission::Error);

        form.expire_banner(second.ticket);
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        assert_eq!(
            form.finish_submit(Ticket::from(pending.ticket.id() + 1), Ok::<(), String>(())),
            None
        );
        assert_eq!(form.submission(), Submission::Submitting);
    }

    #[test]
    fn test_banner_stays_up_for_five_seconds() {
        assert_eq!(BANNER_TIMEOUT, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_retry_clears_banner_error_without_new_ticket() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        form.finish_submit(pending.ticket, Err("relay returned 502"));
        assert!(form.shows_error());

        form.set_field(Field::FromName, "");
        assert_eq!(form.begin_submit(), Err(SubmitRefused::Invalid));
        assert_eq!(form.generation, pending.ticket.id());
        assert_eq!(form.last_error(), None);
        assert!(!form.shows_error());
        assert!(form.errors().get(Field::FromName).is_some());

        // the running banner timer still belongs to the current generation
        form.expire_banner(pending.ticket);
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_field_names() {
        let names = Field::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["from_name", "reply_to", "subject", "message"]);
    }
}
