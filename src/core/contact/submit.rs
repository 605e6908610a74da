//! Submission state machine
//!
//! The form lives in `Idle` until submit, passes through `Submitting`, lands
//! in `Success` or `Error`, and always returns to `Idle` (the UI restores the
//! submit control regardless of outcome). `run_submission` performs the
//! single `Submitting → (Success | Error)` transition; it never panics and
//! never escapes an error to the caller.

use serde::Deserialize;

use super::capabilities::{AnalyticsSink, CaptchaProvider};
use super::gateway::LeadGateway;
use super::lead::LeadSubmission;

/// Shown when the backend succeeds without supplying its own text.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you! We'll be in touch within 24 hours.";

/// Shown when the backend reports failure without an explanation.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the request never completed or the response could not be read.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Shown when mandatory fields are empty; no request is made in that case.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Analytics event recorded on a successful submission.
pub const SUBMIT_EVENT: &str = "form_submit";

/// Where the contact form is in its submit lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success {
        message: String,
        lead_score: Option<f64>,
    },
    Error {
        message: String,
    },
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// Expected backend response body for `/api/contact`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    /// FastAPI-style error explanation (`HTTPException` bodies).
    pub detail: Option<String>,
    pub data: Option<ContactResponseData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactResponseData {
    pub lead_score: Option<f64>,
}

/// Map an HTTP status and body to the terminal state.
///
/// An unparseable body counts as a network-class failure: the response could
/// not be read, so the generic network message is shown.
pub fn interpret_response(status: u16, body: &str) -> SubmitState {
    let Ok(response) = serde_json::from_str::<ContactResponse>(body) else {
        return SubmitState::Error {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        };
    };

    if (200..300).contains(&status) && response.success {
        SubmitState::Success {
            message: response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            lead_score: response.data.and_then(|d| d.lead_score),
        }
    } else {
        SubmitState::Error {
            message: response
                .message
                .or(response.detail)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Drive one submission: validate, attach the captcha token, POST once, and
/// interpret the outcome. Returns the terminal state; never errors.
pub async fn run_submission<G, C, A>(
    gateway: &G,
    captcha: &C,
    analytics: &A,
    endpoint: &str,
    lead: &LeadSubmission,
) -> SubmitState
where
    G: LeadGateway,
    C: CaptchaProvider,
    A: AnalyticsSink,
{
    if lead.missing_required() {
        return SubmitState::Error {
            message: MISSING_FIELDS_MESSAGE.to_string(),
        };
    }

    let mut lead = lead.clone();
    lead.recaptcha_token = captcha.response_token();

    match gateway.post_lead(endpoint, &lead).await {
        Ok(response) => {
            let state = interpret_response(response.status, &response.body);
            if let SubmitState::Success { lead_score, .. } = &state {
                analytics.record_event(SUBMIT_EVENT, lead_score.unwrap_or(0.0));
            }
            state
        }
        Err(err) => {
            leptos::logging::error!("contact form submission failed: {err}");
            SubmitState::Error {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
