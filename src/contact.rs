use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name, also the key sent to the form endpoint.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "👤 Your Name",
            Self::Email => "📧 Your Email",
            Self::Subject => "💡 Subject",
            Self::Message => "💭 Your Message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("contact form is not configured")]
    MissingAccessKey,
    #[error("couldn't reach the form service: {0}")]
    Transport(String),
    #[error("form service rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
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
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Request body accepted by the Web3Forms submit endpoint.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub access_key: &'a str,
    #[serde(flatten)]
    pub form: &'a ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl SubmitResponse {
    pub fn into_result(self) -> Result<(), ContactError> {
        if self.success {
            Ok(())
        } else {
            Err(ContactError::Rejected(self.message))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(_) => Self::Error,
        }
    }

    pub fn is_busy(self) -> bool {
        self == Self::Submitting
    }

    /// A new submission may only start when nothing is in flight.
    pub fn can_submit(self) -> bool {
        !self.is_busy()
    }

    /// Status once the post-submit reset delay elapses. A submission in
    /// flight is never cleared by a stale reset.
    pub fn after_reset(self) -> Self {
        match self {
            Self::Submitting => Self::Submitting,
            Self::Idle | Self::Success | Self::Error => Self::Idle,
        }
    }

    pub fn button_icon(self) -> &'static str {
        match self {
            Self::Submitting => "🚀",
            Self::Success => "✅",
            Self::Idle | Self::Error => "💌",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending Magic...",
            Self::Success => "Message Sent!",
            Self::Error => "Try Again",
        }
    }
}

/// Posts the form once. No retries.
#[cfg(feature = "hydrate")]
pub async fn submit(
    endpoint: &str,
    access_key: Option<&str>,
    form: &ContactForm,
) -> Result<(), ContactError> {
    form.validate()?;
    let access_key = access_key.ok_or(ContactError::MissingAccessKey)?;
    let response = reqwest::Client::new()
        .post(endpoint)
        .header("Accept", "application/json")
        .json(&Submission { access_key, form })
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;
    let body = response
        .json::<SubmitResponse>()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;
    body.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField(Field::Name))
        );
        let mut form = filled();
        form.set(Field::Subject, "   ");
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Subject)));
        assert_eq!(form.validate().unwrap_err().to_string(), "subject is required");
    }

    #[test]
    fn test_email_checks() {
        let mut form = filled();
        for bad in ["ada", "@example.com", "ada@", "ada@example", "a b@example.com", "a@b@c.io"] {
            form.set(Field::Email, bad);
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        form.set(Field::Email, "  ada@mail.example.org ");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_submission_body() {
        let form = filled();
        let body = serde_json::to_value(Submission {
            access_key: "key-123",
            form: &form,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "access_key": "key-123",
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Let's build something.",
            })
        );
    }

    #[test]
    fn test_response_mapping() {
        let ok: SubmitResponse =
            serde_json::from_str(r#"{"success":true,"message":"Email sent"}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(()));

        let rejected: SubmitResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(rejected.into_result(), Err(ContactError::Rejected(String::new())));
    }

    #[test]
    fn test_status_labels() {
        let ok: Result<(), ContactError> = Ok(());
        let err: Result<(), ContactError> = Err(ContactError::InvalidEmail);
        assert_eq!(SubmitStatus::from_result(&ok), SubmitStatus::Success);
        assert_eq!(SubmitStatus::from_result(&err), SubmitStatus::Error);

        assert!(SubmitStatus::Idle.can_submit());
        assert!(!SubmitStatus::Submitting.can_submit());
        assert_eq!(SubmitStatus::Submitting.button_label(), "Sending Magic...");
        assert_eq!(SubmitStatus::Error.button_label(), "Try Again");
        assert_eq!(SubmitStatus::Success.button_icon(), "✅");
    }

    #[test]
    fn test_reset_returns_finished_submissions_to_idle() {
        assert_eq!(SubmitStatus::Success.after_reset(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Error.after_reset(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Idle.after_reset(), SubmitStatus::Idle);
    }

    #[test]
    fn test_stale_reset_keeps_submission_in_flight() {
        // failed attempt schedules a reset, then a retry starts before it fires
        let failed = SubmitStatus::from_result(&Err(ContactError::MissingField(Field::Name)));
        assert_eq!(failed, SubmitStatus::Error);
        assert!(failed.can_submit());

        let retrying = SubmitStatus::Submitting;
        let after_stale_reset = retrying.after_reset();
        assert_eq!(after_stale_reset, SubmitStatus::Submitting);
        assert!(after_stale_reset.is_busy());
        assert!(!after_stale_reset.can_submit());
        assert_eq!(after_stale_reset.button_label(), "Sending Magic...");
    }
}
