//! Core domain logic for the marketing site and contact-form widget

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
#[cfg(test)]
mod tests;
