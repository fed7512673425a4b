use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Email address looks invalid")]
    InvalidEmail,
}

/// Local state of the contact form. Nothing here leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Validates and takes the current state, leaving an empty form behind.
    pub fn submit(&mut self) -> Result<ContactForm, ContactError> {
        self.validate()?;
        Ok(std::mem::take(self))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_field_isolation() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "a@b.c");
        assert_eq!(form.get(Field::Email), "a@b.c");
        assert_eq!(form.get(Field::Name), "");
        assert_eq!(form.get(Field::Message), "");

        form.set(Field::Name, "A");
        form.set(Field::Name, "Ada");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.set(Field::Message, "   ");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Message))
        );
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField(Field::Name))
        );
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        for bad in ["ada", "@example.com", "ada@"] {
            form.set(Field::Email, bad);
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_submit_clears_form() {
        let mut form = filled();
        let sent = form.submit().expect("filled form should submit");
        assert_eq!(sent, filled());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_rejected_submit_keeps_state() {
        let mut form = filled();
        form.set(Field::Email, "nope");
        assert!(form.submit().is_err());
        assert_eq!(form.email, "nope");
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_json_payload() {
        let json = filled().to_json();
        let parsed: ContactForm = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed, filled());
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }
}
