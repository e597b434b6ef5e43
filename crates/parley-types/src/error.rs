use thiserror::Error;

/// Errors raised when input does not satisfy the data model's rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid message role")]
    UnknownRole(String),

    #[error("prompt template references '{0}' but no value was supplied")]
    MissingPlaceholder(String),

    #[error("malformed prompt template: {0}")]
    MalformedTemplate(String),

    #[error("message content must not be empty")]
    EmptyContent,
}

/// Errors reported by an embedding collaborator.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding failed: {0}")]
    Failed(String),

    #[error("embedding service unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_display() {
        let err = ValidationError::UnknownRole("moderator".to_string());
        assert_eq!(err.to_string(), "'moderator' is not a valid message role");
    }

    #[test]
    fn test_missing_placeholder_display() {
        let err = ValidationError::MissingPlaceholder("name".to_string());
        assert!(err.to_string().contains("'name'"));
    }
}
