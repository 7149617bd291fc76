use thiserror::Error;

/// Fatal parse failures. Malformed headers, unknown flags and surplus URLs
/// are absorbed during the walk and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is empty or contains no tokens at all.
    #[error("input is empty or not a command")]
    InvalidInput,

    /// A `'` or `"` region was opened and never closed.
    #[error("unterminated quote in command")]
    UnterminatedQuote,

    /// A dangling `\` at the very end of the input.
    #[error("trailing escape at end of command")]
    TrailingEscape,

    /// The first token is not `curl`.
    #[error("command does not invoke curl")]
    NotACurlCommand,

    /// A value-taking flag appeared as the last token.
    #[error("flag `{0}` requires an argument")]
    MissingFlagArgument(String),
}

impl ParseError {
    /// Short stable identifier for boundary layers that must not leak
    /// internal error detail.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidInput => "invalid_input",
            ParseError::UnterminatedQuote => "unterminated_quote",
            ParseError::TrailingEscape => "trailing_escape",
            ParseError::NotACurlCommand => "not_a_curl_command",
            ParseError::MissingFlagArgument(_) => "missing_flag_argument",
        }
    }
}
