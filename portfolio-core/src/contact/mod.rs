//! Contact form state machine.
//!
//! [`ContactForm::handle`] is the whole transition table: it takes one
//! event, updates the form, and returns the effects the host must perform.
//! It never touches the network or the DOM itself.
//!
//! ```text
//! Idle --Submit(valid)--> Submitting --Delivered--> Submitted --SendAnother--> Idle
//!   ^                         |
//!   +----DeliveryFailed-------+
//! ```

mod request;
mod validate;

use std::fmt;

use log::{debug, info, warn};

use crate::config::EmailConfig;
use crate::error::{DeliveryError, ValidationError};

pub use request::{EmailRequest, TemplateParams, mailto_link};
pub use validate::{is_valid_email, validate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Toast payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    /// Alternative contact link offered after a delivery failure.
    pub fallback: Option<String>,
}

impl Notification {
    fn error(title: &str, description: &str) -> Self {
        Notification {
            kind: NoticeKind::Error,
            title: title.to_string(),
            description: description.to_string(),
            fallback: None,
        }
    }

    fn for_validation(err: &ValidationError) -> Self {
        match err {
            ValidationError::MissingField(_) => {
                Notification::error("Validation Error", "Please fill in all fields.")
            }
            ValidationError::InvalidEmail(_) => {
                Notification::error("Invalid Email", "Please enter a valid email address.")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactEvent {
    Input(Field, String),
    Submit,
    Delivered,
    DeliveryFailed(DeliveryError),
    /// "Send another message" on the confirmation panel.
    SendAnother,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Send(EmailRequest),
    Notify(Notification),
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    config: EmailConfig,
    fallback_address: Option<String>,
    fields: FormFields,
    status: Status,
    last_notice: Option<Notification>,
}

impl ContactForm {
    pub fn new(config: EmailConfig) -> Self {
        ContactForm {
            config,
            fallback_address: None,
            fields: FormFields::default(),
            status: Status::Idle,
            last_notice: None,
        }
    }

    /// Address offered as a `mailto:` fallback when delivery fails.
    pub fn with_fallback(mut self, address: impl Into<String>) -> Self {
        self.fallback_address = Some(address.into());
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn last_notice(&self) -> Option<&Notification> {
        self.last_notice.as_ref()
    }

    pub fn handle(&mut self, event: ContactEvent) -> Vec<Effect> {
        let effects = match (self.status, event) {
            (Status::Idle | Status::Submitting, ContactEvent::Input(field, value)) => {
                self.fields.set(field, value);
                Vec::new()
            }
            (Status::Idle, ContactEvent::Submit) => self.submit(),
            (Status::Submitting, ContactEvent::Submit) => {
                debug!("submit ignored: a message is already being sent");
                Vec::new()
            }
            (Status::Submitting, ContactEvent::Delivered) => {
                info!("contact message delivered");
                self.status = Status::Submitted;
                self.fields = FormFields::default();
                vec![Effect::Notify(Notification {
                    kind: NoticeKind::Success,
                    title: "Message Sent!".into(),
                    description: "Thank you for your message. I'll get back to you soon!".into(),
                    fallback: None,
                })]
            }
            (Status::Submitting, ContactEvent::DeliveryFailed(err)) => {
                warn!("contact message failed: {err}");
                self.status = Status::Idle;
                let mut notice = Notification::error(
                    "Error",
                    "Failed to send message. Please try again or contact me directly.",
                );
                notice.fallback = self.fallback_address.as_deref().map(|to| {
                    mailto_link(
                        to,
                        &format!("Message from {}", self.fields.name),
                        &self.fields.message,
                    )
                });
                vec![Effect::Notify(notice)]
            }
            (Status::Submitted, ContactEvent::SendAnother) => {
                self.status = Status::Idle;
                self.fields = FormFields::default();
                Vec::new()
            }
            (status, event) => {
                debug!("contact event {event:?} ignored in {status:?}");
                Vec::new()
            }
        };
        for effect in &effects {
            if let Effect::Notify(n) = effect {
                self.last_notice = Some(n.clone());
            }
        }
        effects
    }

    fn submit(&mut self) -> Vec<Effect> {
        self.status = Status::Submitting;
        if let Err(err) = validate(&self.fields) {
            debug!("contact form rejected: {err}");
            self.status = Status::Idle;
            return vec![Effect::Notify(Notification::for_validation(&err))];
        }
        vec![Effect::Send(EmailRequest::new(&self.config, &self.fields))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_round_trip() {
        for f in Field::ALL {
            assert_eq!(Field::from_key(f.key()), Some(f));
        }
        assert_eq!(Field::from_key("phone"), None);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = ContactForm::new(EmailConfig::default());
        assert!(form.handle(ContactEvent::Delivered).is_empty());
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn input_is_ignored_on_confirmation_panel() {
        let mut form = ContactForm::new(EmailConfig::default());
        for (f, v) in [(Field::Name, "A"), (Field::Email, "a@b.com"), (Field::Message, "hi")] {
            form.handle(ContactEvent::Input(f, v.into()));
        }
        form.handle(ContactEvent::Submit);
        form.handle(ContactEvent::Delivered);
        form.handle(ContactEvent::Input(Field::Name, "late".into()));
        assert_eq!(form.fields().name, "");
    }
}
