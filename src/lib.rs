//! shellcurl turns a pasted cURL command line into a structured HTTP
//! request description.
//!
//! Two stages: [`shell::tokenize`] splits the raw string into shell words
//! with quoting and escapes resolved, then [`curl::build`] walks the words
//! with a constant flag table and assembles a [`ParsedRequest`]. The whole
//! pipeline is a pure function of its input: no shared state, no I/O,
//! linear in the input length, safe to call from any thread.
//!
//! ```
//! use shellcurl::parse;
//!
//! let req = parse(r#"curl -d 'x=1' -H 'Accept: */*' https://example.com"#).unwrap();
//! assert_eq!(req.method, "POST");
//! assert_eq!(req.url, "https://example.com");
//! assert_eq!(req.headers.get("Accept"), Some("*/*"));
//! ```

pub mod curl;
pub mod error;
pub mod shell;
pub mod url;

pub use curl::{Headers, ParsedRequest};
pub use error::ParseError;

/// Parse a full curl invocation into a [`ParsedRequest`].
///
/// Fatal conditions (empty input, unterminated quote, trailing escape,
/// wrong program name, value-taking flag with no value) return a
/// [`ParseError`]; everything else degrades to a best-effort request.
pub fn parse(input: &str) -> Result<ParsedRequest, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::InvalidInput);
    }
    let tokens = shell::tokenize(input)?;
    curl::build(&tokens)
}
