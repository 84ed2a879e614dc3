use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::Coercion;
use crate::errors::FieldViolation;

/// Contact form body as submitted from the website.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContactRequest")]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
    #[serde(skip)]
    pub type_violations: Vec<FieldViolation>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawContactRequest {
    name: Option<Value>,
    email: Option<Value>,
    phone: Option<Value>,
    company: Option<Value>,
    service: Option<Value>,
    budget: Option<Value>,
    message: Option<Value>,
}

impl From<RawContactRequest> for ContactRequest {
    fn from(raw: RawContactRequest) -> Self {
        let mut coercion = Coercion::default();
        Self {
            name: coercion.text("name", raw.name),
            email: coercion.text("email", raw.email),
            phone: coercion.text("phone", raw.phone),
            company: coercion.text("company", raw.company),
            service: coercion.text("service", raw.service),
            budget: coercion.text("budget", raw.budget),
            message: coercion.text("message", raw.message),
            type_violations: coercion.into_violations(),
        }
    }
}

/// A contact submission whose fields have been trimmed and validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub budget: Option<String>,
    pub message: String,
}

impl Lead {
    /// Email domain only, for log lines.
    pub fn email_domain(&self) -> &str {
        self.email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("unknown")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadAcknowledgement {
    pub reference: String,
    pub message: String,
}
