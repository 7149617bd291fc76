//! Walks the token sequence produced by the shell lexer and assembles a
//! [`ParsedRequest`]. One forward cursor: each step consumes the token
//! itself plus, for value-taking flags, the token after it. Irregularities
//! a pasted real-world command routinely contains (unknown flags,
//! malformed headers, surplus URLs) degrade gracefully instead of failing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::curl::flags::{self, Arity, FlagAction};
use crate::curl::{Headers, ParsedRequest};
use crate::error::ParseError;

const PROGRAM: &str = "curl";

#[derive(Default)]
struct RequestDraft {
    method: Option<String>,
    explicit_url: Option<String>,
    positional_url: Option<String>,
    headers: Headers,
    body: Option<String>,
}

impl RequestDraft {
    /// Repeated body flags accumulate with a `&` joiner, mirroring how
    /// curl concatenates multiple `-d` values.
    fn append_body(&mut self, data: &str) {
        match &mut self.body {
            Some(body) => {
                body.push('&');
                body.push_str(data);
            }
            None => self.body = Some(data.to_owned()),
        }
    }

    /// `Name: Value` split on the first colon, both sides trimmed. A token
    /// with no colon or an empty name contributes nothing.
    fn add_header(&mut self, raw: &str) {
        if let Some((name, value)) = raw.split_once(':') {
            let name = name.trim();
            if !name.is_empty() {
                self.headers.insert(name, value.trim());
            }
        }
    }

    fn finish(self) -> ParsedRequest {
        let method = self.method.unwrap_or_else(|| {
            if self.body.is_some() { "POST" } else { "GET" }.to_owned()
        });
        ParsedRequest {
            method,
            url: self
                .explicit_url
                .or(self.positional_url)
                .unwrap_or_default(),
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Build a request from shell words. The first word must be `curl`
/// (case-insensitively); everything after it is flags and at most one URL.
pub fn build(tokens: &[String]) -> Result<ParsedRequest, ParseError> {
    let mut cursor = tokens.iter();
    let program = cursor.next().ok_or(ParseError::InvalidInput)?;
    if !program.eq_ignore_ascii_case(PROGRAM) {
        return Err(ParseError::NotACurlCommand);
    }

    let mut draft = RequestDraft::default();
    while let Some(token) = cursor.next() {
        let Some(spec) = flags::lookup(token) else {
            if token.starts_with('-') && token.len() > 1 {
                // Unknown flag: skipped, cursor advances one.
                continue;
            }
            // First bare word is the URL, later ones are surplus.
            if draft.positional_url.is_none() {
                draft.positional_url = Some(token.clone());
            }
            continue;
        };

        let arg = match spec.action.arity() {
            Arity::Zero => None,
            Arity::One => Some(
                cursor
                    .next()
                    .ok_or_else(|| ParseError::MissingFlagArgument(token.clone()))?,
            ),
        };

        match (spec.action, arg) {
            (FlagAction::SetMethod, Some(arg)) => draft.method = Some(arg.to_uppercase()),
            (FlagAction::AddHeader, Some(arg)) => draft.add_header(arg),
            (FlagAction::AddNamedHeader(name), Some(arg)) => draft.headers.insert(name, arg),
            (FlagAction::AppendBody(_), Some(arg)) => draft.append_body(arg),
            (FlagAction::SetUrl, Some(arg)) => draft.explicit_url = Some(arg.clone()),
            (FlagAction::BasicAuth, Some(arg)) => {
                let encoded = BASE64.encode(arg.as_bytes());
                draft.headers.insert("Authorization", &format!("Basic {encoded}"));
            }
            (FlagAction::Ignore(_), _) => {}
            // Arity::One actions always carry an argument at this point.
            (_, None) => unreachable!("value-taking action without argument"),
        }
    }

    Ok(draft.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn build_str(tokens: &[&str]) -> Result<ParsedRequest, ParseError> {
        let owned: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        build(&owned)
    }

    #[test]
    fn bare_url_defaults() {
        let req = build_str(&["curl", "https://example.com"]).unwrap();
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "https://example.com");
        assert!(req.headers.is_empty());
        assert_eq!(req.body, None);
    }

    #[test]
    fn program_name_is_case_insensitive() {
        assert!(build_str(&["Curl", "https://example.com"]).is_ok());
    }

    #[test]
    fn not_a_curl_command() {
        assert_eq!(
            build_str(&["wget", "http://x"]),
            Err(ParseError::NotACurlCommand)
        );
    }

    #[test]
    fn data_infers_post() {
        let req = build_str(&["curl", "-d", "x=1", "https://example.com"]).unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.body.as_deref(), Some("x=1"));
        assert_eq!(req.url, "https://example.com");
    }

    #[test]
    fn explicit_method_wins_over_inference() {
        let req = build_str(&["curl", "-X", "put", "-d", "x=1", "https://example.com"]).unwrap();
        assert_eq!(req.method, "PUT");
    }

    #[test]
    fn repeated_data_joins_with_ampersand() {
        let req = build_str(&["curl", "-d", "a=1", "--data-raw", "b=2", "http://x"]).unwrap();
        assert_eq!(req.body.as_deref(), Some("a=1&b=2"));
    }

    #[test]
    fn form_flag_infers_post_too() {
        let req = build_str(&["curl", "-F", "file=@x.txt", "http://x"]).unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.body.as_deref(), Some("file=@x.txt"));
    }

    #[test]
    fn header_name_and_value_are_trimmed() {
        let req = build_str(&["curl", "-H", "Content-Type:   application/json", "http://x"])
            .unwrap();
        assert_eq!(req.headers.get("Content-Type"), Some("application/json"));
    }

    #[test]
    fn duplicate_header_replaces_in_place() {
        let req = build_str(&[
            "curl", "-H", "A: 1", "-H", "B: b", "-H", "A: 2", "http://x",
        ])
        .unwrap();
        let entries: Vec<(&str, &str)> = req.headers.iter().collect();
        assert_eq!(entries, vec![("A", "2"), ("B", "b")]);
    }

    #[rstest]
    #[case("NoColonHere")]
    #[case(": value-without-name")]
    #[case("   : also-empty-name")]
    fn malformed_header_is_dropped_silently(#[case] header: &str) {
        let req = build_str(&["curl", "-H", header, "http://x"]).unwrap();
        assert!(req.headers.is_empty());
        assert_eq!(req.url, "http://x");
    }

    #[rstest]
    #[case(&["curl", "-X"])]
    #[case(&["curl", "http://x", "-H"])]
    #[case(&["curl", "--url"])]
    #[case(&["curl", "-o"])]
    fn missing_flag_argument_is_fatal(#[case] tokens: &[&str]) {
        let err = build_str(tokens).unwrap_err();
        assert!(matches!(err, ParseError::MissingFlagArgument(_)));
    }

    #[test]
    fn explicit_url_overrides_positional() {
        let req = build_str(&["curl", "http://first", "--url", "http://second"]).unwrap();
        assert_eq!(req.url, "http://second");
    }

    #[test]
    fn surplus_positional_url_is_ignored() {
        let req = build_str(&["curl", "http://first", "http://second"]).unwrap();
        assert_eq!(req.url, "http://first");
    }

    #[test]
    fn basic_auth_synthesizes_authorization_header() {
        let req = build_str(&["curl", "-u", "user:pass", "http://x"]).unwrap();
        assert_eq!(
            req.headers.get("Authorization"),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn user_agent_cookie_and_referer_become_headers() {
        let req = build_str(&[
            "curl", "-A", "agent/1.0", "-e", "http://ref", "-b", "k=v", "http://x",
        ])
        .unwrap();
        assert_eq!(req.headers.get("User-Agent"), Some("agent/1.0"));
        assert_eq!(req.headers.get("Referer"), Some("http://ref"));
        assert_eq!(req.headers.get("Cookie"), Some("k=v"));
    }

    #[test]
    fn ignored_flags_keep_the_cursor_aligned() {
        // -o consumes its file argument, so out.html must not become the URL.
        let req = build_str(&["curl", "-s", "-o", "out.html", "http://x", "-k"]).unwrap();
        assert_eq!(req.url, "http://x");
        assert_eq!(req.method, "GET");
    }

    #[test]
    fn unknown_flag_is_skipped_without_eating_the_url() {
        let req = build_str(&["curl", "--no-such-flag", "http://x"]).unwrap();
        assert_eq!(req.url, "http://x");
    }

    #[test]
    fn empty_token_list_is_invalid_input() {
        assert_eq!(build(&[]), Err(ParseError::InvalidInput));
    }
}
