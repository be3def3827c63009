mod form;
mod transport;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use form::{ContactForm, ReferralForm};
pub use transport::LeadTransport;

#[cfg(test)]
pub(crate) use form::tests::valid_referral;

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeadKind {
    Referral(ReferralForm),
    Contact(ContactForm),
}

/// A validated form submission.
#[derive(Clone, Debug, Serialize)]
pub struct Lead {
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: LeadKind,
}

impl Lead {
    pub fn new(kind: LeadKind) -> Self {
        Self {
            received_at: Utc::now(),
            kind,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            LeadKind::Referral(_) => "referral",
            LeadKind::Contact(_) => "contact",
        }
    }
}
