//! Output formatting and response generation.

mod response;

pub use response::{deny_message, format_response};
