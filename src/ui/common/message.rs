//! Reusable message components for form feedback.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Styling class of a form outcome message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Inline field error
/// Displays an error message with an alert icon when the signal is Some
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Form outcome message region
/// Renders the latest submission outcome with success or error styling.
/// The region keeps a stable id so assistive tech can announce updates.
#[component]
pub fn StatusMessage(
    /// Outcome signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<(MessageKind, String)>>,
) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|(kind, text)| {
                let (class, icon) = match kind {
                    MessageKind::Success => ("form-message form-message-success", icons::CHECK),
                    MessageKind::Error => ("form-message form-message-error", icons::ALERT_CIRCLE),
                };
                view! {
                    <div id="form-message" class=class role="status">
                        <Icon name=icon class="icon-text" />
                        <span>{text}</span>
                    </div>
                }
            })
        }}
    }
}
