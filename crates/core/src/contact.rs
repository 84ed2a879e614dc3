//! Contact form intake.

use uuid::Uuid;

use crate::domain::contact::{ContactRequest, Lead, LeadAcknowledgement};
use crate::errors::DomainError;
use crate::lookup::lookup;
use crate::validation::{validate_contact_request, CONTACT_SERVICES};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactIntake {
    pub lead: Lead,
    pub acknowledgement: LeadAcknowledgement,
}

pub fn accept_contact(request: &ContactRequest) -> Result<ContactIntake, DomainError> {
    let lead = validate_contact_request(request)?;
    let acknowledgement = acknowledge(&lead, &lead_reference());
    Ok(ContactIntake { lead, acknowledgement })
}

pub fn acknowledge(lead: &Lead, reference: &str) -> LeadAcknowledgement {
    let service = lookup(CONTACT_SERVICES, &lead.service, &"our services");
    LeadAcknowledgement {
        reference: reference.to_string(),
        message: format!(
            "Thanks {}, we received your enquiry about {service}. A strategist will reach out \
             within one business day.",
            lead.name
        ),
    }
}

fn lead_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("LEAD-{}", id[..12].to_ascii_uppercase())
}
