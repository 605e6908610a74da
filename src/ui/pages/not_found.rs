//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-content">
                // 404 icon
                <div class="not-found-icon">
                    <Icon name=icons::SEARCH class="icon-lg" />
                </div>

                // Error code
                <h1>"404"</h1>

                // Title
                <h2>"Page Not Found"</h2>

                // Description
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                // Actions
                <div class="not-found-actions">
                    <A href="/" attr:class="btn-primary">
                        "Go Home"
                    </A>
                    <a href="/#contact" class="btn-secondary">
                        "Contact Us"
                    </a>
                </div>
            </div>

            // Footer
            <div class="not-found-footer">
                <p>"© 2025 Chuco AI"</p>
            </div>
        </div>
    }
}
