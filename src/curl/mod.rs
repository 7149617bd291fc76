pub mod builder;
pub mod flags;
pub mod headers;

use serde::Serialize;

pub use builder::build;
pub use headers::Headers;

/// Structured description of the HTTP request a curl command line asks for.
///
/// Serializes to the `{method, url, headers, body}` shape consumed by the
/// HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    /// Uppercased HTTP verb. `GET` unless `-X` set it or a body flag
    /// inferred `POST`.
    pub method: String,
    /// Target URL; empty when the command named none.
    pub url: String,
    /// Request headers, insertion order preserved, name case as given.
    pub headers: Headers,
    /// Request body accumulated from `-d`/`-F` style flags.
    pub body: Option<String>,
}
