//! Parse error types.

/// Error produced when instruction text does not fit the grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Text is not a block, not empty, and not `<known-op> <arg>`.
    ///
    /// Unknown operation names land here too, so they fail before dispatch.
    #[error("invalid syntax: {text}")]
    InvalidSyntax { text: String },
}

impl ParseError {
    pub fn invalid_syntax(text: impl Into<String>) -> Self {
        ParseError::InvalidSyntax { text: text.into() }
    }
}
