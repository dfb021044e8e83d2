use thiserror::Error;

/// Failure modes of one submission, from raw form text to decoded response.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("payload is not valid JSON: {detail}")]
    Syntax { detail: String },
    #[error("payload must be an object with a `data` array")]
    Shape,
    #[error("filter endpoint request failed: {detail}")]
    Transport { detail: String },
}

impl SubmitError {
    pub fn syntax(detail: impl Into<String>) -> Self {
        Self::Syntax {
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    /// Fixed text shown in the form's single error slot. The full error is
    /// only logged; users see one of two messages.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Shape => "Invalid JSON format",
            Self::Syntax { .. } | Self::Transport { .. } => "Invalid JSON format or API error",
        }
    }
}
