use thiserror::Error;

/// Errors raised when a parsed calendar cannot be traversed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("{kind} has no name")]
    MissingName { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_display() {
        assert_eq!(
            TransformError::MissingName { kind: "component" }.to_string(),
            "component has no name"
        );
    }
}
