pub mod common;
pub mod contact_form;
pub mod icon;
pub mod pages;

pub use contact_form::{ContactForm, ContactFormConfig};
pub use icon::{Icon, icons};
