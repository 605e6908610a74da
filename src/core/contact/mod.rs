//! Contact form domain logic
//!
//! Everything the widget needs that isn't rendering: input hygiene, the lead
//! record, the submission state machine, the HTTP seam, and the optional
//! third-party capabilities. The UI layer in `crate::ui::contact_form` only
//! wires signals to this module.

#[cfg(feature = "ssr")]
pub mod api;
pub mod capabilities;
pub mod format;
pub mod gateway;
pub mod lead;
pub mod submit;

#[cfg(feature = "ssr")]
pub use api::{ContactApiState, contact_api_router};
pub use capabilities::{AnalyticsSink, CaptchaProvider, NoopAnalytics, NoopCaptcha};
#[cfg(not(feature = "ssr"))]
pub use capabilities::{Grecaptcha, Gtag};
pub use format::{format_phone, is_valid_email, normalize_website};
#[cfg(not(feature = "ssr"))]
pub use gateway::FetchGateway;
pub use gateway::{GatewayError, GatewayResponse, LeadGateway};
pub use lead::{LeadSubmission, UtmParams};
pub use submit::{
    DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE, MISSING_FIELDS_MESSAGE, NETWORK_ERROR_MESSAGE,
    SUBMIT_EVENT, SubmitState, interpret_response, run_submission,
};
