use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::refer::is_budget;

const MAX_FIELD_LEN: usize = 200;
const MAX_TEXT_LEN: usize = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),
    #[error("{0} is too long")]
    TooLong(&'static str),
    #[error("{0} must be one of the listed options")]
    InvalidChoice(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralForm {
    pub your_name: String,
    pub your_email: String,
    pub your_phone: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub client_company: String,
    pub project_details: String,
    pub estimated_budget: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ReferralForm {
    pub fn trimmed(&self) -> Self {
        Self {
            your_name: self.your_name.trim().to_string(),
            your_email: self.your_email.trim().to_string(),
            your_phone: self.your_phone.trim().to_string(),
            client_name: self.client_name.trim().to_string(),
            client_email: self.client_email.trim().to_string(),
            client_phone: self.client_phone.trim().to_string(),
            client_company: self.client_company.trim().to_string(),
            project_details: self.project_details.trim().to_string(),
            estimated_budget: self.estimated_budget.trim().to_string(),
        }
    }

    /// Expects a [`trimmed`](Self::trimmed) form.
    pub fn validate(&self) -> Result<(), FormError> {
        required("Your Name", &self.your_name)?;
        email("Your Email", &self.your_email)?;
        required("Your Phone", &self.your_phone)?;
        required("Client Name", &self.client_name)?;
        email("Client Email", &self.client_email)?;
        required("Client Phone", &self.client_phone)?;
        max_len("Client Company", &self.client_company, MAX_FIELD_LEN)?;
        required("Project Details", &self.project_details)?;
        max_len("Project Details", &self.project_details, MAX_TEXT_LEN)?;
        required("Estimated Budget", &self.estimated_budget)?;
        if !is_budget(&self.estimated_budget) {
            return Err(FormError::InvalidChoice("Estimated Budget"));
        }
        Ok(())
    }
}

impl ContactForm {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required("Name", &self.name)?;
        email("Email", &self.email)?;
        max_len("Phone", &self.phone, MAX_FIELD_LEN)?;
        required("Message", &self.message)?;
        max_len("Message", &self.message, MAX_TEXT_LEN)
    }
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    max_len(field, value, MAX_FIELD_LEN)
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    if value.chars().count() > max {
        return Err(FormError::TooLong(field));
    }
    Ok(())
}

fn email(field: &'static str, value: &str) -> Result<(), FormError> {
    required(field, value)?;
    if !looks_like_email(value) {
        return Err(FormError::InvalidEmail(field));
    }
    Ok(())
}

// local@domain.tld, no whitespace
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_referral() -> ReferralForm {
        ReferralForm {
            your_name: "John Doe".to_string(),
            your_email: "john@example.com".to_string(),
            your_phone: "+1 555 0100".to_string(),
            client_name: "Jane Roe".to_string(),
            client_email: "jane@acme.io".to_string(),
            client_phone: "+1 555 0101".to_string(),
            client_company: "Acme".to_string(),
            project_details: "A booking app for clinics".to_string(),
            estimated_budget: "1l-3l".to_string(),
        }
    }

    #[test]
    fn valid_referral_passes() {
        assert_eq!(valid_referral().validate(), Ok(()));
    }

    #[test]
    fn client_company_may_be_empty() {
        let form = ReferralForm {
            client_company: String::new(),
            ..valid_referral()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn budget_is_required() {
        let form = ReferralForm {
            estimated_budget: String::new(),
            ..valid_referral()
        };
        assert_eq!(form.validate(), Err(FormError::Missing("Estimated Budget")));
    }

    #[test]
    fn budget_must_be_a_listed_range() {
        let form = ReferralForm {
            estimated_budget: "anything I like".to_string(),
            ..valid_referral()
        };
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidChoice("Estimated Budget"))
        );
        for budget in ["under-50k", "50k-1l", "3l-5l", "5l-plus"] {
            let form = ReferralForm {
                estimated_budget: budget.to_string(),
                ..valid_referral()
            };
            assert_eq!(form.validate(), Ok(()), "{budget}");
        }
    }

    #[test]
    fn whitespace_only_is_missing_after_trim() {
        let form = ReferralForm {
            client_name: "   ".to_string(),
            ..valid_referral()
        };
        assert_eq!(
            form.trimmed().validate(),
            Err(FormError::Missing("Client Name"))
        );
    }

    #[test]
    fn bad_emails_are_rejected() {
        for bad in ["jane", "jane@", "@acme.io", "jane@acme", "ja ne@acme.io", "a@b@c.io"] {
            let form = ReferralForm {
                client_email: bad.to_string(),
                ..valid_referral()
            };
            assert_eq!(
                form.validate(),
                Err(FormError::InvalidEmail("Client Email")),
                "{bad}"
            );
        }
    }

    #[test]
    fn overlong_details_are_rejected() {
        let form = ReferralForm {
            project_details: "x".repeat(MAX_TEXT_LEN + 1),
            ..valid_referral()
        };
        assert_eq!(form.validate(), Err(FormError::TooLong("Project Details")));
    }

    #[test]
    fn contact_form_validation() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            phone: String::new(),
            message: "Need a website".to_string(),
        }
        .trimmed();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.validate(), Ok(()));

        let empty = ContactForm::default();
        assert_eq!(empty.validate(), Err(FormError::Missing("Name")));
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            FormError::InvalidEmail("Your Email").to_string(),
            "Your Email must be a valid email address"
        );
    }
}
