//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external contact backend that same-origin
    /// `POST /api/contact` requests are forwarded to.
    /// Example: https://leads.example.com/api/contact
    pub contact_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            contact_api_url: std::env::var("CONTACT_API_URL").ok(),
        }
    }

    /// Check if the contact backend is configured
    pub fn has_contact_api(&self) -> bool {
        self.contact_api_url.is_some()
    }
}
