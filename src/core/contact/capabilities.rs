//! Optional third-party collaborators consumed as opaque capabilities
//!
//! The CAPTCHA widget and the analytics collector are injected so the submit
//! flow can run (and be tested) without either script present. Absence of the
//! corresponding browser global degrades to a no-op, never an error.

/// A CAPTCHA widget exposing its current response token.
pub trait CaptchaProvider {
    /// Current response token, or an empty string when no challenge has been
    /// solved or no widget exists.
    fn response_token(&self) -> String;

    /// Reset the challenge after a successful submission.
    fn reset(&self);
}

/// An analytics collector that records named events.
pub trait AnalyticsSink {
    fn record_event(&self, name: &str, lead_score: f64);
}

/// Default capability when no CAPTCHA script is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCaptcha;

impl CaptchaProvider for NoopCaptcha {
    fn response_token(&self) -> String {
        String::new()
    }

    fn reset(&self) {}
}

/// Default capability when no analytics script is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn record_event(&self, _name: &str, _lead_score: f64) {}
}

/// Look up a global function-bearing object on `window` without assuming the
/// third-party script loaded.
#[cfg(not(feature = "ssr"))]
fn window_global(name: &str) -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// The Google reCAPTCHA widget, reached through the `grecaptcha` global.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Grecaptcha;

#[cfg(not(feature = "ssr"))]
impl Grecaptcha {
    fn call_method(&self, method: &str) -> Option<wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast;

        let widget = window_global("grecaptcha")?;
        let func = js_sys::Reflect::get(&widget, &method.into())
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        func.call0(&widget).ok()
    }
}

#[cfg(not(feature = "ssr"))]
impl CaptchaProvider for Grecaptcha {
    fn response_token(&self) -> String {
        self.call_method("getResponse")
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn reset(&self) {
        let _ = self.call_method("reset");
    }
}

/// Google Analytics, reached through the `gtag` global.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Gtag;

#[cfg(not(feature = "ssr"))]
impl AnalyticsSink for Gtag {
    fn record_event(&self, name: &str, lead_score: f64) {
        use wasm_bindgen::JsCast;

        let Some(gtag) = window_global("gtag") else {
            return;
        };
        let Ok(func) = gtag.clone().dyn_into::<js_sys::Function>() else {
            return;
        };

        let params = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&params, &"event_category".into(), &"Contact".into());
        let _ = js_sys::Reflect::set(&params, &"event_label".into(), &"Contact Form".into());
        let _ = js_sys::Reflect::set(&params, &"value".into(), &lead_score.into());

        let _ = func.call3(
            &wasm_bindgen::JsValue::NULL,
            &"event".into(),
            &name.into(),
            &params,
        );
    }
}
