//! The Lead Submission record and UTM attribution handling
//!
//! A lead is built fresh from the form fields at the moment of submit,
//! serialized once, and discarded after the request resolves. Empty optional
//! fields are omitted from the JSON body; only the mandatory identity fields,
//! the message, and the lead-source constant are always present.

use serde::{Deserialize, Serialize};

/// UTM attribution parameters carried on the lead.
///
/// Defaults come from the form's hidden fields; values present in the page
/// query string take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
}

impl UtmParams {
    /// Merge the page URL query string over hidden-field defaults.
    pub fn merge_query(query: &str, defaults: UtmParams) -> UtmParams {
        let mut merged = defaults;
        for (key, value) in parse_query_pairs(query) {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "utm_source" => merged.source = value,
                "utm_medium" => merged.medium = value,
                "utm_campaign" => merged.campaign = value,
                _ => {}
            }
        }
        merged
    }
}

/// Parse a form-urlencoded query string (with or without the leading `?`)
/// into decoded key/value pairs.
fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Decode a form-urlencoded component: `+` becomes a space, `%XX` becomes the
/// byte it names. Malformed escapes are kept literally rather than rejected.
fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                match bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// A contact inquiry as posted to `/api/contact`.
///
/// Field names match the backend's contact schema. All fields are strings;
/// optional ones are skipped when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_website: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_size: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub industry: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub annual_revenue: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_interested: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_timeline: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub budget_range: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub preferred_contact_method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub best_time_to_contact: String,
    pub message: String,
    pub lead_source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_medium: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub utm_campaign: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recaptcha_token: String,
}

impl LeadSubmission {
    /// Apply merged UTM attribution to the record.
    pub fn with_utm(mut self, utm: UtmParams) -> Self {
        self.utm_source = utm.source;
        self.utm_medium = utm.medium;
        self.utm_campaign = utm.campaign;
        self
    }

    /// True when any mandatory field (first name, last name, email, message)
    /// is empty or whitespace-only.
    pub fn missing_required(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}
