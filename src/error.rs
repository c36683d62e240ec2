/// Failures reported by class operations.
///
/// Precondition violations are detected before any element is touched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassError {
    #[error("class name is empty")]
    EmptyClassName,
    #[error("class name {0:?} contains whitespace")]
    WhitespaceInClassName(String),
    #[error("invalid class pattern: {0}")]
    Pattern(#[from] regex::Error),
    // DOMException raised by a native token list call
    #[error("dom: {0}")]
    Dom(String),
}

/// Check that `class_name` is a single non-empty token.
pub fn validate_class_name(class_name: &str) -> Result<(), ClassError> {
    if class_name.is_empty() {
        return Err(ClassError::EmptyClassName);
    }
    if class_name.chars().any(char::is_whitespace) {
        return Err(ClassError::WhitespaceInClassName(class_name.to_string()));
    }
    Ok(())
}
