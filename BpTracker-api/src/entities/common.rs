use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::ReadingServiceError;

/// Standardized error response format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicErrorResponse {
    /// Error message
    pub message: String,

    /// Machine-readable error code for client-side handling
    pub code: String,
}

impl From<&ReadingServiceError> for PublicErrorResponse {
    fn from(error: &ReadingServiceError) -> Self {
        let code = match error {
            ReadingServiceError::Validation(_) => "validation_error".to_string(),
            ReadingServiceError::VoiceParse(failure) => failure.kind().to_string(),
            ReadingServiceError::Repository(_) => "internal_error".to_string(),
        };

        Self {
            message: error.to_string(),
            code,
        }
    }
}
