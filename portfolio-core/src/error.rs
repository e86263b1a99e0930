use thiserror::Error;

use crate::contact::Field;

/// Local, synchronous rejection of the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// The email provider rejected the request or it never arrived.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("email provider returned status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// No drawing context could be obtained for a background canvas.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("rendering context unavailable for '{0}'")]
pub struct RenderingUnavailable(pub String);
