pub mod message;

pub use message::{ErrorMessage, MessageKind, StatusMessage};
