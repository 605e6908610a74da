//! Contact form widget
//!
//! Owns the form lifecycle: field-level input hygiene, the submit state
//! machine, and outcome rendering. Configuration is passed at construction;
//! the HTTP transport and the optional CAPTCHA/analytics collaborators are
//! reached through the seams in `crate::core::contact`, so none of the logic
//! here depends on third-party scripts being present.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::contact::{
    LeadSubmission, SubmitState, UtmParams, format_phone, is_valid_email, normalize_website,
};
use crate::ui::common::{ErrorMessage, MessageKind, StatusMessage};
use crate::ui::icon::{Icon, icons};

/// Widget configuration, fixed at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormConfig {
    /// Endpoint the lead is posted to.
    pub endpoint: &'static str,
    /// Attribution constant sent with every lead.
    pub lead_source: &'static str,
    /// Hidden-field UTM defaults, overridden by the page query string.
    pub utm_defaults: UtmParams,
    /// How long an outcome message stays visible before auto-clearing.
    pub message_clear_ms: u32,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/contact",
            lead_source: "website",
            utm_defaults: UtmParams::default(),
            message_clear_ms: 10_000,
        }
    }
}

/// Contact form component
#[component]
pub fn ContactForm(
    /// Widget configuration; defaults mirror the production deployment.
    #[prop(optional)]
    config: Option<ContactFormConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let endpoint = config.endpoint;
    let lead_source = config.lead_source;
    let message_clear_ms = config.message_clear_ms;
    let utm_defaults = StoredValue::new(config.utm_defaults);

    // Field state
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let company_website = RwSignal::new(String::new());
    let company_size = RwSignal::new(String::new());
    let industry = RwSignal::new(String::new());
    let service_interested = RwSignal::new("other".to_string());
    let project_timeline = RwSignal::new(String::new());
    let budget_range = RwSignal::new(String::new());
    let preferred_contact_method = RwSignal::new("email".to_string());
    let message = RwSignal::new(String::new());

    let email_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let form_message = RwSignal::new(None::<(MessageKind, String)>);
    let message_epoch = RwSignal::new(0u64);

    // Advisory only; the backend performs the authoritative validation.
    let validate_email = move || {
        let value = email.get();
        if !value.is_empty() && !is_valid_email(&value) {
            email_error.set(Some("Please enter a valid email address".to_string()));
        } else {
            email_error.set(None);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Disabling the submit control is the sole duplicate-submission gate.
        submitting.set(true);

        spawn_local(async move {
            let utm = UtmParams::merge_query(&page_query(), utm_defaults.get_value());
            let lead = LeadSubmission {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                company_name: company_name.get_untracked(),
                company_website: company_website.get_untracked(),
                company_size: company_size.get_untracked(),
                industry: industry.get_untracked(),
                service_interested: service_interested.get_untracked(),
                project_timeline: project_timeline.get_untracked(),
                budget_range: budget_range.get_untracked(),
                preferred_contact_method: preferred_contact_method.get_untracked(),
                message: message.get_untracked(),
                lead_source: lead_source.to_string(),
                ..Default::default()
            }
            .with_utm(utm);

            let state = drive_submission(endpoint, &lead).await;

            // Restore the submit control first; outcome rendering must not
            // be able to leave the form stuck in Submitting.
            submitting.set(false);

            match state {
                SubmitState::Success {
                    message: text,
                    lead_score: _,
                } => {
                    for field in [
                        first_name,
                        last_name,
                        email,
                        phone,
                        company_name,
                        company_website,
                        company_size,
                        industry,
                        project_timeline,
                        budget_range,
                        message,
                    ] {
                        field.set(String::new());
                    }
                    service_interested.set("other".to_string());
                    preferred_contact_method.set("email".to_string());
                    email_error.set(None);
                    reset_captcha();
                    display_outcome(
                        form_message,
                        message_epoch,
                        message_clear_ms,
                        MessageKind::Success,
                        text,
                    );
                }
                SubmitState::Error { message: text } => {
                    display_outcome(
                        form_message,
                        message_epoch,
                        message_clear_ms,
                        MessageKind::Error,
                        text,
                    );
                }
                SubmitState::Idle | SubmitState::Submitting => {}
            }
        });
    };

    view! {
        <form id="contact-form" class="contact-form" on:submit=on_submit>
            // Outcome message region
            <StatusMessage message=form_message />

            <div class="form-row">
                <div class="form-group">
                    <label for="first_name">"First Name *"</label>
                    <input
                        type="text"
                        id="first_name"
                        name="first_name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="last_name">"Last Name *"</label>
                    <input
                        type="text"
                        id="last_name"
                        name="last_name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="email">"Email *"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class:field-invalid=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| validate_email()
                    />
                    <ErrorMessage error=email_error />
                </div>
                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        placeholder="(555) 123-4567"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(format_phone(&event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="company_name">"Company Name"</label>
                    <input
                        type="text"
                        id="company_name"
                        name="company_name"
                        prop:value=move || company_name.get()
                        on:input=move |ev| company_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="company_website">"Company Website"</label>
                    <input
                        type="text"
                        id="company_website"
                        name="company_website"
                        placeholder="www.example.com"
                        prop:value=move || company_website.get()
                        on:input=move |ev| company_website.set(event_target_value(&ev))
                        on:blur=move |_| {
                            company_website.update(|value| *value = normalize_website(value));
                        }
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="company_size">"Company Size"</label>
                    <select
                        id="company_size"
                        name="company_size"
                        prop:value=move || company_size.get()
                        on:change=move |ev| company_size.set(event_target_value(&ev))
                    >
                        <option value="">"Select size..."</option>
                        <option value="1-5">"1-5 employees"</option>
                        <option value="5-10">"5-10 employees"</option>
                        <option value="10-50">"10-50 employees"</option>
                        <option value="50-100">"50-100 employees"</option>
                        <option value="100+">"100+ employees"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="industry">"Industry"</label>
                    <input
                        type="text"
                        id="industry"
                        name="industry"
                        placeholder="e.g., E-commerce, Healthcare, Construction"
                        prop:value=move || industry.get()
                        on:input=move |ev| industry.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="service_interested">"Service Interested In"</label>
                    <select
                        id="service_interested"
                        name="service_interested"
                        prop:value=move || service_interested.get()
                        on:change=move |ev| service_interested.set(event_target_value(&ev))
                    >
                        <option value="other">"Select a service..."</option>
                        <option value="ai_audit">"AI Opportunity Audit"</option>
                        <option value="chatbot_llm">"Custom AI Chatbots & LLM"</option>
                        <option value="data_strategy">"Data Strategy & Architecture"</option>
                        <option value="process_automation">"Process Automation"</option>
                        <option value="ai_training">"AI Training & Change Management"</option>
                        <option value="ongoing_support">"Ongoing AI Support"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="project_timeline">"Project Timeline"</label>
                    <select
                        id="project_timeline"
                        name="project_timeline"
                        prop:value=move || project_timeline.get()
                        on:change=move |ev| project_timeline.set(event_target_value(&ev))
                    >
                        <option value="">"Select timeline..."</option>
                        <option value="Immediate">"Immediate (ASAP)"</option>
                        <option value="1-3 months">"1-3 months"</option>
                        <option value="3-6 months">"3-6 months"</option>
                        <option value="6-12 months">"6-12 months"</option>
                        <option value="Planning stage">"Just planning"</option>
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="budget_range">"Budget Range"</label>
                    <select
                        id="budget_range"
                        name="budget_range"
                        prop:value=move || budget_range.get()
                        on:change=move |ev| budget_range.set(event_target_value(&ev))
                    >
                        <option value="">"Select budget..."</option>
                        <option value="Under $5k">"Under $5,000"</option>
                        <option value="$5k-$10k">"$5,000 - $10,000"</option>
                        <option value="$10k-$25k">"$10,000 - $25,000"</option>
                        <option value="$25k-$50k">"$25,000 - $50,000"</option>
                        <option value="$50k-$100k">"$50,000 - $100,000"</option>
                        <option value="$100k+">"$100,000+"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="preferred_contact_method">"Preferred Contact Method"</label>
                    <select
                        id="preferred_contact_method"
                        name="preferred_contact_method"
                        prop:value=move || preferred_contact_method.get()
                        on:change=move |ev| preferred_contact_method.set(event_target_value(&ev))
                    >
                        <option value="email">"Email"</option>
                        <option value="phone">"Phone"</option>
                        <option value="text">"Text Message"</option>
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="message">"How can we help you? *"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Tell us about your business challenges and what you'd like to achieve with AI..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" id="submit-btn" class="btn-primary" disabled=move || submitting.get()>
                {move || {
                    if submitting.get() {
                        view! {
                            <span class="btn-submitting">
                                <Icon name=icons::LOADER class="icon-spin" />
                                "Sending..."
                            </span>
                        }
                        .into_any()
                    } else {
                        view! { <span>"Get Your Free Consultation"</span> }.into_any()
                    }
                }}
            </button>
        </form>
    }
}

/// Render the latest outcome and schedule its auto-clear. A newer outcome
/// bumps the epoch so a stale timer never clears it.
fn display_outcome(
    form_message: RwSignal<Option<(MessageKind, String)>>,
    message_epoch: RwSignal<u64>,
    clear_after_ms: u32,
    kind: MessageKind,
    text: String,
) {
    let epoch = message_epoch.get_untracked() + 1;
    message_epoch.set(epoch);
    form_message.set(Some((kind, text)));
    schedule_message_clear(form_message, message_epoch, epoch, clear_after_ms);
}

#[cfg(not(feature = "ssr"))]
fn schedule_message_clear(
    form_message: RwSignal<Option<(MessageKind, String)>>,
    message_epoch: RwSignal<u64>,
    epoch: u64,
    delay_ms: u32,
) {
    use gloo_timers::future::TimeoutFuture;

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if message_epoch.get_untracked() == epoch {
            form_message.set(None);
        }
    });
}

#[cfg(feature = "ssr")]
fn schedule_message_clear(
    _form_message: RwSignal<Option<(MessageKind, String)>>,
    _message_epoch: RwSignal<u64>,
    _epoch: u64,
    _delay_ms: u32,
) {
}

/// Current page query string, used for UTM attribution.
#[cfg(not(feature = "ssr"))]
fn page_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(feature = "ssr")]
fn page_query() -> String {
    String::new()
}

/// Run the submission against the browser transport and collaborators.
#[cfg(not(feature = "ssr"))]
async fn drive_submission(endpoint: &str, lead: &LeadSubmission) -> SubmitState {
    use crate::core::contact::{FetchGateway, Grecaptcha, Gtag, run_submission};

    run_submission(&FetchGateway, &Grecaptcha, &Gtag, endpoint, lead).await
}

#[cfg(feature = "ssr")]
async fn drive_submission(_endpoint: &str, _lead: &LeadSubmission) -> SubmitState {
    SubmitState::Error {
        message: "Submission is not available during server rendering".to_string(),
    }
}

#[cfg(not(feature = "ssr"))]
fn reset_captcha() {
    use crate::core::contact::{CaptchaProvider, Grecaptcha};

    Grecaptcha.reset();
}

#[cfg(feature = "ssr")]
fn reset_captcha() {}
