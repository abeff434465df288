//! # Subscription form
//!
//! Validation rules and the simulated submission of the newsletter form.

mod submission;
mod validation;

pub use submission::{SUBMITTED_EVENT, SubscriptionReceipt, submit};
pub use validation::{
    Field, SubscriptionRequest, ValidationError, validate, validate_agreement, validate_email,
    validate_name,
};
