use thiserror::Error;

// Failures reported by a cart gateway when no usable response came back.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("cart request did not complete: {0}")]
    Transport(String),
    #[error("cart response body could not be read: {0}")]
    Body(String),
}

// Domain-level errors for the add-to-cart workflow.
// Authentication problems are not errors here; they end in a redirect.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidItem { field: &'static str, value: String },
    #[error(transparent)]
    Transport(#[from] GatewayError),
}
