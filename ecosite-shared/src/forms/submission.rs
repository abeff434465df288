//! Simulated newsletter submission.
//!
//! Nothing leaves the page: a valid request is logged and acknowledged with
//! a receipt.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::validation::{SubscriptionRequest, ValidationError, validate};

/// Name of the event logged for every accepted submission.
pub const SUBMITTED_EVENT: &str = "subscription_form_submitted";

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReceipt {
    pub email: String,
    pub name: String,
    pub language: String,
    pub submitted_at: DateTime<Utc>,
}

/// Validate `request` and record it as submitted.
///
/// # Errors
/// Every failing field, in form order. Nothing is logged as submitted.
pub fn submit(
    request: &SubscriptionRequest,
    language: &str,
) -> Result<SubscriptionReceipt, Vec<ValidationError>> {
    if let Err(errors) = validate(request) {
        debug!(failures = errors.len(), "subscription rejected");
        return Err(errors);
    }

    let receipt = SubscriptionReceipt {
        email: request.email.trim().to_string(),
        name: request.name.trim().to_string(),
        language: language.to_string(),
        submitted_at: Utc::now(),
    };
    info!(
        event = SUBMITTED_EVENT,
        email = %receipt.email,
        name = %receipt.name,
        language = %receipt.language,
        timestamp = %receipt.submitted_at.to_rfc3339(),
        "subscription submitted"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubscriptionRequest {
        SubscriptionRequest {
            email: " user@example.com ".to_string(),
            name: "  Layla Haddad ".to_string(),
            agreed: true,
        }
    }

    #[test]
    fn test_submit_valid_request_returns_trimmed_receipt() {
        let before = Utc::now();
        let receipt = submit(&valid_request(), "ar").expect("request is valid");

        assert_eq!(receipt.email, "user@example.com");
        assert_eq!(receipt.name, "Layla Haddad");
        assert_eq!(receipt.language, "ar");
        assert!(receipt.submitted_at >= before);
    }

    #[test]
    fn test_submit_invalid_request_reports_errors() {
        let request = SubscriptionRequest {
            agreed: false,
            ..valid_request()
        };
        assert_eq!(
            submit(&request, "en"),
            Err(vec![ValidationError::AgreementRequired])
        );
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = submit(&valid_request(), "en").unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["email"], "user@example.com");
        assert!(json["submittedAt"].is_string());
    }
}
