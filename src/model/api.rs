use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-message error body, e.g. `{"error": "Restaurant not found"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error-list body returned for rejected writes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<String>,
}
