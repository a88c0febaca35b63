use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Discriminated success/failure wrapper every controller operation returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            success: true,
            message: None,
        }
    }

    pub fn rejected(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: false,
            message: Some(message.into()),
        }
    }

    /// Converts into the payload, turning `success = false` into [`ApiError::Rejected`].
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

/// Adapts a raw client call into the enveloped shape the controllers expect.
pub async fn enveloped<T, F>(call: F) -> Result<Envelope<T>, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    call.await.map(Envelope::ok)
}
