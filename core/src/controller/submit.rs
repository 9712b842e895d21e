//! Consultation request submission.
//!
//! # Design
//! The controller owns the form's field values, an in-flight flag, and an
//! attempt counter. `begin_submit` validates and hands out a `SubmitTicket`;
//! `finish_submit` applies the outcome only if the ticket still belongs to
//! the current attempt. On failure the entered values are kept so the
//! visitor can retry without retyping.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, FormError};
use crate::query::Collection;
use crate::store::{create_record, DataStore};
use crate::types::{ConsultationRequest, ConsultationStatus};

/// Placeholder owner written on every request; visitors are anonymous.
pub const SYSTEM_USER_ID: &str = "system";

pub const SUCCESS_MESSAGE: &str =
    "Consultation request sent successfully! We will contact you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send request. Please try again or contact us via WhatsApp.";

/// `(value, label)` pairs offered by the procedure-of-interest select.
pub const PROCEDURE_INTERESTS: [(&str, &str); 6] = [
    ("rhinoplasty", "Rhinoplasty"),
    ("liposuction", "Liposuction"),
    ("breast-augmentation", "Breast Augmentation"),
    ("tummy-tuck", "Tummy Tuck"),
    ("facelift", "Facelift"),
    ("other", "Other / General Inquiry"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Procedure,
    Message,
}

/// Field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub procedure: String,
    #[serde(default)]
    pub message: String,
}

impl ConsultationForm {
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Procedure => &mut self.procedure,
            Field::Message => &mut self.message,
        };
        *slot = value.to_string();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("procedure", &self.procedure),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if !PROCEDURE_INTERESTS
            .iter()
            .any(|(value, _)| *value == self.procedure)
        {
            return Err(FormError::UnknownProcedure(self.procedure.clone()));
        }
        Ok(())
    }

    /// The record written to `consultations`; a blank message is omitted.
    pub fn to_request(&self) -> ConsultationRequest {
        ConsultationRequest {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            procedure: self.procedure.clone(),
            message: (!self.message.trim().is_empty()).then(|| self.message.clone()),
            user_id: SYSTEM_USER_ID.to_string(),
            status: ConsultationStatus::Pending,
        }
    }
}

/// `local@domain`, one `@`, no whitespace.
fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Transient message shown after a submit settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Success,
    Failure,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::Success => SUCCESS_MESSAGE,
            Notification::Failure => FAILURE_MESSAGE,
        }
    }
}

/// One submit attempt.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    attempt: u64,
    request: ConsultationRequest,
}

impl SubmitTicket {
    pub fn request(&self) -> &ConsultationRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    form: ConsultationForm,
    in_flight: bool,
    attempt: u64,
    notification: Option<Notification>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ConsultationForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &ConsultationForm {
        &self.form
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Validate and mark a submit as in flight. Refused while another
    /// attempt is outstanding.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        self.form.validate()?;
        self.attempt += 1;
        self.in_flight = true;
        self.notification = None;
        Ok(SubmitTicket {
            attempt: self.attempt,
            request: self.form.to_request(),
        })
    }

    /// Apply the create outcome for `ticket`. Returns `false` if the ticket
    /// was superseded (see [`SubmissionController::reset`]).
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<Value, ApiError>) -> bool {
        if !self.in_flight || ticket.attempt != self.attempt {
            tracing::debug!(attempt = ticket.attempt, "dropping stale submit outcome");
            return false;
        }
        self.in_flight = false;
        match result {
            Ok(created) => {
                let id = created.get("id").and_then(Value::as_str).unwrap_or_default();
                tracing::info!(
                    id = id,
                    procedure = %ticket.request.procedure,
                    "consultation request created"
                );
                self.form = ConsultationForm::default();
                self.notification = Some(Notification::Success);
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to submit consultation request");
                self.notification = Some(Notification::Failure);
            }
        }
        true
    }

    /// Run one submit against `store`.
    pub async fn submit(&mut self, store: &dyn DataStore) -> Result<Notification, FormError> {
        let ticket = self.begin_submit()?;
        let result = create_record(store, Collection::Consultations, ticket.request()).await;
        self.finish_submit(ticket, result);
        Ok(self.notification.unwrap_or(Notification::Failure))
    }

    /// Start over: clear every field and forget any attempt in flight.
    pub fn reset(&mut self) {
        self.form = ConsultationForm::default();
        self.in_flight = false;
        self.attempt += 1;
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn filled() -> ConsultationForm {
        ConsultationForm {
            name: "Neema Mushi".to_string(),
            email: "neema@example.com".to_string(),
            phone: "+255 700 000 000".to_string(),
            procedure: "rhinoplasty".to_string(),
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn successful_submit_creates_one_pending_record_and_clears_form() {
        let store = MemoryStore::new();
        let mut controller = SubmissionController::with_form(filled());

        let outcome = controller.submit(&store).await.unwrap();

        assert_eq!(outcome, Notification::Success);
        assert_eq!(store.create_calls(), 1);
        let created = store.records(Collection::Consultations).await;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0]["status"], "pending");
        assert_eq!(created[0]["userId"], "system");
        assert_eq!(created[0]["name"], "Neema Mushi");
        assert!(created[0].get("message").is_none());
        assert!(controller.form().is_empty());
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn failed_submit_keeps_fields_and_allows_retry() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut controller = SubmissionController::with_form(filled());
        controller.set_field(Field::Message, "Evenings only");

        let outcome = controller.submit(&store).await.unwrap();

        assert_eq!(outcome, Notification::Failure);
        assert_eq!(controller.notification(), Some(Notification::Failure));
        assert!(controller.notification().unwrap().message().contains("WhatsApp"));
        assert!(!controller.is_submitting());
        assert_eq!(controller.form().name, "Neema Mushi");
        assert_eq!(controller.form().message, "Evenings only");

        store.set_fail_writes(false);
        let outcome = controller.submit(&store).await.unwrap();
        assert_eq!(outcome, Notification::Success);
        assert_eq!(store.create_calls(), 2);
        let created = store.records(Collection::Consultations).await;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0]["message"], "Evenings only");
    }

    #[test]
    fn repeated_submit_while_in_flight_is_refused() {
        let mut controller = SubmissionController::with_form(filled());
        let ticket = controller.begin_submit().unwrap();
        assert!(controller.is_submitting());
        assert_eq!(controller.begin_submit().unwrap_err(), FormError::InFlight);

        assert!(controller.finish_submit(ticket, Ok(serde_json::json!({"id": "c1"}))));
        assert!(!controller.is_submitting());
    }

    #[test]
    fn created_record_without_string_id_still_succeeds() {
        for created in [serde_json::json!({}), serde_json::json!({"id": 42})] {
            let mut controller = SubmissionController::with_form(filled());
            let ticket = controller.begin_submit().unwrap();
            assert!(controller.finish_submit(ticket, Ok(created)));
            assert_eq!(controller.notification(), Some(Notification::Success));
            assert!(controller.form().is_empty());
        }
    }

    #[test]
    fn outcome_after_reset_is_dropped() {
        let mut controller = SubmissionController::with_form(filled());
        let ticket = controller.begin_submit().unwrap();
        controller.reset();
        controller.set_field(Field::Name, "Someone else");

        assert!(!controller.finish_submit(ticket, Err(ApiError::NotFound)));
        assert_eq!(controller.notification(), None);
        assert_eq!(controller.form().name, "Someone else");
    }

    #[tokio::test]
    async fn invalid_form_issues_no_request() {
        let store = MemoryStore::new();
        let mut controller = SubmissionController::with_form(ConsultationForm {
            phone: "   ".to_string(),
            ..filled()
        });

        let err = controller.submit(&store).await.unwrap_err();

        assert_eq!(err, FormError::MissingField("phone"));
        assert_eq!(store.create_calls(), 0);
        assert!(!controller.is_submitting());
    }

    #[test]
    fn validation_rules() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(
            ConsultationForm {
                name: String::new(),
                ..filled()
            }
            .validate(),
            Err(FormError::MissingField("name"))
        );
        for bad in ["neema", "@example.com", "neema@", "a@b@c", "ne ema@example.com"] {
            assert_eq!(
                ConsultationForm {
                    email: bad.to_string(),
                    ..filled()
                }
                .validate(),
                Err(FormError::InvalidEmail),
                "{bad}"
            );
        }
        assert_eq!(
            ConsultationForm {
                procedure: "brow-lift".to_string(),
                ..filled()
            }
            .validate(),
            Err(FormError::UnknownProcedure("brow-lift".to_string()))
        );
    }
}
