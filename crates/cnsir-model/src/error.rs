use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid year selector {input:?}: {reason}")]
    InvalidYears { input: String, reason: String },
    #[error("unknown {kind} {value:?} (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl ModelError {
    pub(crate) fn invalid_years(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidYears {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
