//! HTTP seam for lead submission
//!
//! The submit state machine talks to the backend through [`LeadGateway`] so
//! it can be driven by a fake transport in tests. The real implementation
//! uses the browser fetch API and only exists in the client build.

use thiserror::Error;

use super::lead::LeadSubmission;

/// Raw HTTP outcome handed back to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised before a response could be read.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("failed to encode lead submission: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Transport used to post a lead to the contact endpoint.
pub trait LeadGateway {
    /// Issue exactly one POST of the lead as a JSON body.
    async fn post_lead(
        &self,
        endpoint: &str,
        lead: &LeadSubmission,
    ) -> Result<GatewayResponse, GatewayError>;
}

/// Browser fetch transport.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchGateway;

#[cfg(not(feature = "ssr"))]
impl LeadGateway for FetchGateway {
    async fn post_lead(
        &self,
        endpoint: &str,
        lead: &LeadSubmission,
    ) -> Result<GatewayResponse, GatewayError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, Response};

        let window =
            web_sys::window().ok_or_else(|| GatewayError::Transport("no window".to_string()))?;

        let body =
            serde_json::to_string(lead).map_err(|e| GatewayError::Encode(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&body.into());

        let req = Request::new_with_str_and_init(endpoint, &opts)
            .map_err(|e| GatewayError::Transport(format!("{:?}", e)))?;

        req.headers()
            .set("Content-Type", "application/json")
            .map_err(|e| GatewayError::Transport(format!("{:?}", e)))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| GatewayError::Transport(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| GatewayError::Transport(format!("{:?}", e)))?;

        let status = resp.status();

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| GatewayError::Transport(format!("{:?}", e)))?,
        )
        .await
        .map_err(|e| GatewayError::Transport(format!("{:?}", e)))?;

        Ok(GatewayResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
