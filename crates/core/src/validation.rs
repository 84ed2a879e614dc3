//! Request validation for the public form endpoints.
//!
//! Each validator walks every field and collects all violations before
//! returning, so a client can correct a submission in a single round trip.

use crate::domain::{
    contact::{ContactRequest, Lead},
    roi::{RoiInput, RoiRequest},
    survey::{HealthSurvey, HealthSurveyRequest},
};
use crate::errors::{DomainError, FieldViolation};
use crate::lookup::{contains, Table};

pub const MIN_CONVERSION_RATE: f64 = 0.1;
pub const MAX_CONVERSION_RATE: f64 = 50.0;

/// Upper bounds keep every projected figure an exactly representable
/// integer: 1e9 visitors at the 25% ceiling and 1e7 per order is 2.5e15.
pub const MAX_CURRENT_REVENUE: f64 = 1e12;
pub const MAX_AVERAGE_ORDER_VALUE: f64 = 1e7;
pub const MAX_MONTHLY_TRAFFIC: f64 = 1e9;

/// Services a contact submission may ask about, with their display names.
pub const CONTACT_SERVICES: &Table<&str> = &[
    ("digital-marketing", "Digital Marketing"),
    ("seo", "Search Engine Optimization"),
    ("social-media", "Social Media Marketing"),
    ("content-marketing", "Content Marketing"),
    ("ppc", "Pay-Per-Click Advertising"),
    ("web-development", "Web Development"),
    ("branding", "Branding"),
    ("other", "Other"),
];

#[derive(Debug)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn seeded(type_violations: &[FieldViolation]) -> Self {
        Self(type_violations.to_vec())
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn has(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }

    fn missing(&mut self, field: &str) {
        if !self.has(field) {
            self.push(field, format!("{field} is required"));
        }
    }

    fn into_error(self) -> DomainError {
        DomainError::Validation(self.0)
    }

    fn required_number(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        match value {
            None => {
                self.missing(field);
                None
            }
            Some(number) if !number.is_finite() => {
                self.push(field, format!("{field} must be a finite number"));
                None
            }
            Some(number) => Some(number),
        }
    }

    fn bounded_number(&mut self, field: &str, value: Option<f64>, max: f64) -> Option<f64> {
        let number = self.required_number(field, value)?;
        if number <= 0.0 {
            self.push(field, format!("{field} must be greater than 0"));
            return None;
        }
        if number > max {
            self.push(field, format!("{field} must be at most {max}"));
            return None;
        }
        Some(number)
    }

    fn required_text(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() => Some(text.to_string()),
            _ => {
                self.missing(field);
                None
            }
        }
    }

    fn max_length(&mut self, field: &str, text: &str, max_len: usize) {
        if text.chars().count() > max_len {
            self.push(field, format!("{field} must be at most {max_len} characters"));
        }
    }

    fn text_length(&mut self, field: &str, text: &str, min: usize, max: usize) {
        let length = text.chars().count();
        if length < min || length > max {
            self.push(field, format!("{field} must be between {min} and {max} characters"));
        }
    }

    fn channel_list(&mut self, field: &str, value: Option<&[String]>) -> Option<Vec<String>> {
        let Some(channels) = value else {
            self.missing(field);
            return None;
        };

        if channels.is_empty() {
            self.push(field, format!("{field} must contain at least one channel"));
            return None;
        }

        let mut cleaned = Vec::with_capacity(channels.len());
        for (index, channel) in channels.iter().enumerate() {
            let trimmed = channel.trim();
            if trimmed.is_empty() {
                self.push(field, format!("{field}[{index}] must not be blank"));
                continue;
            }
            cleaned.push(trimmed.to_string());
        }
        Some(cleaned)
    }
}

pub fn validate_roi_request(request: &RoiRequest) -> Result<RoiInput, DomainError> {
    let mut violations = Violations::seeded(&request.type_violations);

    let current_revenue = violations.bounded_number(
        "currentRevenue",
        request.current_revenue,
        MAX_CURRENT_REVENUE,
    );

    let conversion_rate =
        violations.required_number("conversionRate", request.conversion_rate).and_then(|rate| {
            if (MIN_CONVERSION_RATE..=MAX_CONVERSION_RATE).contains(&rate) {
                Some(rate)
            } else {
                violations.push(
                    "conversionRate",
                    format!(
                        "conversionRate must be between {MIN_CONVERSION_RATE} and {MAX_CONVERSION_RATE}"
                    ),
                );
                None
            }
        });

    let average_order_value = violations.bounded_number(
        "averageOrderValue",
        request.average_order_value,
        MAX_AVERAGE_ORDER_VALUE,
    );

    let monthly_traffic = violations
        .bounded_number("monthlyTraffic", request.monthly_traffic, MAX_MONTHLY_TRAFFIC)
        .and_then(|traffic| {
            if traffic.fract() != 0.0 {
                violations.push("monthlyTraffic", "monthlyTraffic must be a whole number of visitors");
                None
            } else {
                Some(traffic as u64)
            }
        });

    let industry = violations.required_text("industry", request.industry.as_deref());
    let marketing_channels =
        violations.channel_list("marketingChannels", request.marketing_channels.as_deref());

    match (
        current_revenue,
        conversion_rate,
        average_order_value,
        monthly_traffic,
        industry,
        marketing_channels,
    ) {
        (
            Some(current_revenue),
            Some(conversion_rate),
            Some(average_order_value),
            Some(monthly_traffic),
            Some(industry),
            Some(marketing_channels),
        ) if violations.is_empty() => Ok(RoiInput {
            current_revenue,
            conversion_rate,
            average_order_value,
            monthly_traffic,
            industry,
            marketing_channels,
        }),
        _ => Err(violations.into_error()),
    }
}

pub fn validate_survey_request(request: &HealthSurveyRequest) -> Result<HealthSurvey, DomainError> {
    let mut violations = Violations::seeded(&request.type_violations);

    let business_age = violations.required_text("businessAge", request.business_age.as_deref());
    let marketing_budget =
        violations.required_text("marketingBudget", request.marketing_budget.as_deref());
    let current_channels =
        violations.channel_list("currentChannels", request.current_channels.as_deref());
    let content_strategy =
        violations.required_text("contentStrategy", request.content_strategy.as_deref());
    let customer_feedback =
        violations.required_text("customerFeedback", request.customer_feedback.as_deref());
    let competitor_analysis =
        violations.required_text("competitorAnalysis", request.competitor_analysis.as_deref());
    let data_analysis = violations.required_text("dataAnalysis", request.data_analysis.as_deref());

    match (
        business_age,
        marketing_budget,
        current_channels,
        content_strategy,
        customer_feedback,
        competitor_analysis,
        data_analysis,
    ) {
        (
            Some(business_age),
            Some(marketing_budget),
            Some(current_channels),
            Some(content_strategy),
            Some(customer_feedback),
            Some(competitor_analysis),
            Some(data_analysis),
        ) if violations.is_empty() => Ok(HealthSurvey {
            business_age,
            marketing_budget,
            current_channels,
            content_strategy,
            customer_feedback,
            competitor_analysis,
            data_analysis,
        }),
        _ => Err(violations.into_error()),
    }
}

pub fn validate_contact_request(request: &ContactRequest) -> Result<Lead, DomainError> {
    let mut violations = Violations::seeded(&request.type_violations);

    let name = violations.required_text("name", request.name.as_deref());
    if let Some(name) = &name {
        violations.text_length("name", name, 2, 100);
    }

    let email = violations.required_text("email", request.email.as_deref());
    if let Some(email) = &email {
        if !looks_like_email(email) {
            violations.push("email", "email must be a valid email address");
        }
    }

    let phone = optional_text(request.phone.as_deref());
    if let Some(phone) = &phone {
        if !looks_like_phone(phone) {
            violations.push("phone", "phone must be 7 to 20 characters of digits, spaces or +-()");
        }
    }

    let company = optional_text(request.company.as_deref());
    if let Some(company) = &company {
        violations.max_length("company", company, 100);
    }

    let service = violations.required_text("service", request.service.as_deref());
    if let Some(service) = &service {
        if !contains(CONTACT_SERVICES, service) {
            let allowed =
                CONTACT_SERVICES.iter().map(|(key, _)| *key).collect::<Vec<_>>().join(", ");
            violations.push("service", format!("service must be one of: {allowed}"));
        }
    }

    let budget = optional_text(request.budget.as_deref());
    if let Some(budget) = &budget {
        violations.max_length("budget", budget, 50);
    }

    let message = violations.required_text("message", request.message.as_deref());
    if let Some(message) = &message {
        violations.text_length("message", message, 10, 2000);
    }

    match (name, email, service, message) {
        (Some(name), Some(email), Some(service), Some(message)) if violations.is_empty() => {
            Ok(Lead {
                name,
                email: email.to_ascii_lowercase(),
                phone,
                company,
                service: service.to_ascii_lowercase(),
                budget,
                message,
            })
        }
        _ => Err(violations.into_error()),
    }
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|text| !text.is_empty()).map(str::to_string)
}

fn looks_like_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn looks_like_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '+' | '-' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=20).contains(&phone.chars().count()) && digits >= 7
}

#[cfg(test)]
mod tests {
    use super::{validate_contact_request, validate_roi_request, validate_survey_request};
    use crate::domain::{
        contact::ContactRequest, roi::RoiRequest, survey::HealthSurveyRequest,
    };
    use crate::errors::DomainError;
    use serde_json::json;

    fn fields(error: DomainError) -> Vec<String> {
        match error {
            DomainError::Validation(violations) => {
                violations.into_iter().map(|violation| violation.field).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn roi_request() -> RoiRequest {
        RoiRequest {
            current_revenue: Some(150_000.0),
            conversion_rate: Some(2.5),
            average_order_value: Some(2_000.0),
            monthly_traffic: Some(15_000.0),
            industry: Some("fashion".to_string()),
            marketing_channels: Some(vec!["google-ads".to_string()]),
            ..RoiRequest::default()
        }
    }

    fn messages(error: DomainError) -> Vec<String> {
        match error {
            DomainError::Validation(violations) => {
                violations.into_iter().map(|violation| violation.message).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_roi_request_passes_through() {
        let input = validate_roi_request(&roi_request()).expect("request should validate");

        assert_eq!(input.monthly_traffic, 15_000);
        assert_eq!(input.industry, "fashion");
        assert_eq!(input.marketing_channels, vec!["google-ads".to_string()]);
    }

    #[test]
    fn empty_roi_request_reports_every_missing_field() {
        let error = validate_roi_request(&RoiRequest::default()).expect_err("should fail");

        assert_eq!(
            fields(error),
            vec![
                "currentRevenue",
                "conversionRate",
                "averageOrderValue",
                "monthlyTraffic",
                "industry",
                "marketingChannels"
            ]
        );
    }

    #[test]
    fn roi_range_violations_are_collected_together() {
        let request = RoiRequest {
            current_revenue: Some(0.0),
            conversion_rate: Some(75.0),
            monthly_traffic: Some(1_500.5),
            marketing_channels: Some(Vec::new()),
            ..roi_request()
        };

        let error = validate_roi_request(&request).expect_err("should fail");
        assert_eq!(
            fields(error),
            vec!["currentRevenue", "conversionRate", "monthlyTraffic", "marketingChannels"]
        );
    }

    #[test]
    fn conversion_rate_bounds_are_inclusive() {
        for rate in [0.1, 50.0] {
            let request = RoiRequest { conversion_rate: Some(rate), ..roi_request() };
            assert!(validate_roi_request(&request).is_ok(), "rate {rate} should be accepted");
        }

        let request = RoiRequest { conversion_rate: Some(0.09), ..roi_request() };
        assert!(validate_roi_request(&request).is_err());
    }

    #[test]
    fn unknown_industry_is_not_a_validation_error() {
        let request = RoiRequest { industry: Some("aerospace".to_string()), ..roi_request() };
        assert!(validate_roi_request(&request).is_ok());
    }

    #[test]
    fn blank_channel_entries_are_rejected_by_position() {
        let request = RoiRequest {
            marketing_channels: Some(vec!["seo".to_string(), "  ".to_string()]),
            ..roi_request()
        };

        match validate_roi_request(&request) {
            Err(DomainError::Validation(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].message, "marketingChannels[1] must not be blank");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn survey_requires_every_categorical_field_and_a_channel() {
        let request = HealthSurveyRequest {
            business_age: Some("1-3-years".to_string()),
            current_channels: Some(Vec::new()),
            data_analysis: Some("   ".to_string()),
            ..HealthSurveyRequest::default()
        };

        let error = validate_survey_request(&request).expect_err("should fail");
        assert_eq!(
            fields(error),
            vec![
                "marketingBudget",
                "currentChannels",
                "contentStrategy",
                "customerFeedback",
                "competitorAnalysis",
                "dataAnalysis"
            ]
        );
    }

    #[test]
    fn survey_accepts_unrecognized_categorical_values() {
        let request = HealthSurveyRequest {
            business_age: Some("decades".to_string()),
            marketing_budget: Some("unlimited".to_string()),
            current_channels: Some(vec!["seo".to_string()]),
            content_strategy: Some("vibes".to_string()),
            customer_feedback: Some("none".to_string()),
            competitor_analysis: Some("sometimes".to_string()),
            data_analysis: Some("hourly".to_string()),
            ..HealthSurveyRequest::default()
        };

        let survey = validate_survey_request(&request).expect("should validate");
        assert_eq!(survey.business_age, "decades");
    }

    #[test]
    fn contact_request_normalizes_and_validates() {
        let request = ContactRequest {
            name: Some("  Priya Shah ".to_string()),
            email: Some("Priya@Example.COM".to_string()),
            phone: Some("+91 98765-43210".to_string()),
            company: Some(String::new()),
            service: Some("SEO".to_string()),
            budget: None,
            message: Some("We need help growing organic traffic.".to_string()),
            ..ContactRequest::default()
        };

        let lead = validate_contact_request(&request).expect("should validate");
        assert_eq!(lead.name, "Priya Shah");
        assert_eq!(lead.email, "priya@example.com");
        assert_eq!(lead.company, None);
        assert_eq!(lead.service, "seo");
        assert_eq!(lead.email_domain(), "example.com");
    }

    #[test]
    fn contact_request_collects_all_violations() {
        let request = ContactRequest {
            name: Some("A".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("call me".to_string()),
            service: Some("astrology".to_string()),
            message: Some("short".to_string()),
            ..ContactRequest::default()
        };

        let error = validate_contact_request(&request).expect_err("should fail");
        assert_eq!(fields(error), vec!["name", "email", "phone", "service", "message"]);
    }

    #[test]
    fn wrongly_typed_field_does_not_hide_other_violations() {
        let request: RoiRequest = serde_json::from_value(json!({
            "currentRevenue": "lots",
            "conversionRate": 80,
            "averageOrderValue": -1
        }))
        .expect("lenient body");

        let error = validate_roi_request(&request).expect_err("should fail");
        assert_eq!(
            messages(error),
            vec![
                "currentRevenue must be a number",
                "conversionRate must be between 0.1 and 50",
                "averageOrderValue must be greater than 0",
                "monthlyTraffic is required",
                "industry is required",
                "marketingChannels is required"
            ]
        );
    }

    #[test]
    fn numeric_strings_validate_like_numbers() {
        let request: RoiRequest = serde_json::from_value(json!({
            "currentRevenue": "150000",
            "conversionRate": "2.5",
            "averageOrderValue": 2000,
            "monthlyTraffic": "15000",
            "industry": "fashion",
            "marketingChannels": ["google-ads"]
        }))
        .expect("lenient body");

        let input = validate_roi_request(&request).expect("should validate");
        assert_eq!(input.current_revenue, 150_000.0);
        assert_eq!(input.monthly_traffic, 15_000);
    }

    #[test]
    fn survey_reports_wrongly_typed_channel_entry_once() {
        let request: HealthSurveyRequest = serde_json::from_value(json!({
            "businessAge": "1-3-years",
            "marketingBudget": "2l-5l",
            "currentChannels": ["seo", {"name": "email"}],
            "contentStrategy": "planned-content",
            "customerFeedback": "regular-surveys",
            "competitorAnalysis": "monthly",
            "dataAnalysis": ["weekly"]
        }))
        .expect("lenient body");

        let error = validate_survey_request(&request).expect_err("should fail");
        assert_eq!(
            messages(error),
            vec!["currentChannels[1] must be text", "dataAnalysis must be text"]
        );
    }

    #[test]
    fn oversized_amounts_are_rejected_before_projection() {
        let request = RoiRequest { average_order_value: Some(1e300), ..roi_request() };
        let error = validate_roi_request(&request).expect_err("should fail");
        assert_eq!(messages(error), vec!["averageOrderValue must be at most 10000000"]);

        let request = RoiRequest {
            current_revenue: Some(2e12),
            monthly_traffic: Some(5e9),
            ..roi_request()
        };
        let error = validate_roi_request(&request).expect_err("should fail");
        assert_eq!(fields(error), vec!["currentRevenue", "monthlyTraffic"]);
    }

    #[test]
    fn overlong_phone_gets_a_single_message() {
        let request = ContactRequest {
            name: Some("Priya Shah".to_string()),
            email: Some("priya@example.com".to_string()),
            phone: Some("+91 98765 43210 98765 43".to_string()),
            service: Some("seo".to_string()),
            message: Some("We need help growing organic traffic.".to_string()),
            ..ContactRequest::default()
        };

        let error = validate_contact_request(&request).expect_err("should fail");
        assert_eq!(
            messages(error),
            vec!["phone must be 7 to 20 characters of digits, spaces or +-()"]
        );
    }
}
