use std::{future::Future, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL.into_iter().find(|f| f.name() == s).ok_or(())
    }
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Fields that are empty or only whitespace.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&f| self.get(f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay credential {0} was not set at build time")]
    MissingConfig(&'static str),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Credentials for the hosted email relay, baked in when the bundle is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_build_env() -> Result<Self, RelayError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        let require = |value: Option<&str>, var: &'static str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(RelayError::MissingConfig(var))
        };
        Ok(Self {
            service_id: require(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: require(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: require(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}

/// Hands a completed form to an outside email-sending service.
pub trait EmailRelay {
    fn send(&self, form: &ContactForm) -> impl Future<Output = Result<(), RelayError>>;
}

/// Sends `form` through `relay` exactly once.
pub async fn deliver<R: EmailRelay>(relay: &R, form: &ContactForm) -> Result<(), RelayError> {
    match relay.send(form).await {
        Ok(()) => {
            log::info!("contact message from {} relayed", form.email);
            Ok(())
        }
        Err(e) => {
            log::error!("contact message failed: {e}");
            Err(e)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Sent => "Message sent successfully!",
            Notice::Failed => "Failed to send message. Please try again.",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Notice::Sent)
    }
}

/// Form contents plus the in-flight flag that guards against double submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDesk {
    form: ContactForm,
    submitting: bool,
}

impl ContactDesk {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Starts a submission, returning the payload to relay.
    ///
    /// Returns `None` without changing state if a submission is already in
    /// flight or any field is blank.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.submitting {
            log::debug!("contact submit ignored: already sending");
            return None;
        }
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            log::debug!("contact submit withheld, missing {missing:?}");
            return None;
        }
        self.submitting = true;
        Some(self.form.clone())
    }

    /// Ends the in-flight submission and returns the notice to show.
    pub fn finish(&mut self, result: Result<(), RelayError>) -> Notice {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                Notice::Sent
            }
            Err(_) => Notice::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // Records every payload and answers with a canned result
    struct RecordingRelay {
        calls: RefCell<Vec<ContactForm>>,
        result: Result<(), RelayError>,
    }

    impl RecordingRelay {
        fn answering(result: Result<(), RelayError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl EmailRelay for RecordingRelay {
        async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
            self.calls.borrow_mut().push(form.clone());
            self.result.clone()
        }
    }

    fn filled_desk() -> ContactDesk {
        let mut desk = ContactDesk::default();
        desk.set(Field::Name, "Ada Lovelace");
        desk.set(Field::Email, "ada@example.com");
        desk.set(Field::Subject, "Engines");
        desk.set(Field::Message, "Shall we compute Bernoulli numbers?");
        desk
    }

    // Mirrors what the contact view does on submit
    async fn submit(desk: &mut ContactDesk, relay: &RecordingRelay) -> Option<Notice> {
        let payload = desk.begin()?;
        let result = deliver(relay, &payload).await;
        Some(desk.finish(result))
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let mut form = ContactForm::default();
        assert_eq!(form.missing_fields(), Field::ALL.to_vec());

        form.set(Field::Name, "Ada");
        form.set(Field::Email, "   ");
        form.set(Field::Subject, "Hi");
        assert_eq!(form.missing_fields(), vec![Field::Email, Field::Message]);
        assert!(!form.is_complete());

        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "hello");
        assert!(form.is_complete());
    }

    #[tokio::test]
    async fn test_complete_form_sends_once() {
        let relay = RecordingRelay::answering(Ok(()));
        let mut desk = filled_desk();
        let expected = desk.form().clone();

        let notice = submit(&mut desk, &relay).await;
        assert_eq!(notice, Some(Notice::Sent));
        assert_eq!(relay.calls.borrow().as_slice(), &[expected]);
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        for field in Field::ALL {
            let relay = RecordingRelay::answering(Ok(()));
            let mut desk = filled_desk();
            desk.set(field, "");

            assert_eq!(submit(&mut desk, &relay).await, None);
            assert!(relay.calls.borrow().is_empty(), "{field:?} empty");
            assert!(!desk.is_submitting());
        }
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let relay = RecordingRelay::answering(Ok(()));
        let mut desk = filled_desk();

        let notice = submit(&mut desk, &relay).await;
        assert_eq!(notice.map(Notice::message), Some("Message sent successfully!"));
        assert_eq!(desk.form(), &ContactForm::default());
        assert!(!desk.is_submitting());
    }

    #[tokio::test]
    async fn test_failure_keeps_form() {
        let relay = RecordingRelay::answering(Err(RelayError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        }));
        let mut desk = filled_desk();
        let before = desk.form().clone();

        let notice = submit(&mut desk, &relay).await;
        assert_eq!(notice, Some(Notice::Failed));
        assert!(!notice.is_some_and(Notice::is_success));
        assert_eq!(desk.form(), &before);
        assert!(!desk.is_submitting());
        assert_eq!(relay.calls.borrow().len(), 1);
    }

    #[test]
    fn test_begin_blocks_while_submitting() {
        let mut desk = filled_desk();
        assert!(desk.begin().is_some());
        assert!(desk.is_submitting());
        assert!(desk.begin().is_none());

        desk.finish(Err(RelayError::Transport("offline".to_string())));
        assert!(desk.begin().is_some());
    }

    #[test]
    fn test_relay_config_requires_every_value() {
        let config = RelayConfig::from_values(Some("service_x"), Some("template_y"), Some("key"))
            .expect("all values present");
        assert_eq!(config.service_id, "service_x");

        assert_eq!(
            RelayConfig::from_values(None, Some("t"), Some("k")),
            Err(RelayError::MissingConfig("EMAILJS_SERVICE_ID"))
        );
        assert_eq!(
            RelayConfig::from_values(Some("s"), Some(" "), Some("k")),
            Err(RelayError::MissingConfig("EMAILJS_TEMPLATE_ID"))
        );
        assert_eq!(
            RelayConfig::from_values(Some("s"), Some("t"), None),
            Err(RelayError::MissingConfig("EMAILJS_PUBLIC_KEY"))
        );
    }
}
