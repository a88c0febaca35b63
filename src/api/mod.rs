//! Backend collaborator: JSON client, typed records, and error normalisation.

mod client;
mod endpoints;
mod envelope;
mod error;
pub mod types;

pub use client::ApiClient;
pub use envelope::{enveloped, Envelope};
pub use error::{extract_api_message, ApiError, REJECTED_FALLBACK, UNKNOWN_ERROR};
