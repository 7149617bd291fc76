//! Shell-word tokenizer for pasted command lines.
//!
//! Splits the raw string the way a POSIX shell would for this restricted
//! grammar: whitespace separates words, `'...'` is a literal region,
//! `"..."` honors the double-quote escape set (`\`, `"`, `$`, backtick),
//! and an unquoted `\` makes the next character literal. Quote regions
//! adjacent with no separating whitespace concatenate into one token.

use winnow::ascii::multispace0;
use winnow::combinator::{alt, cut_err, preceded, repeat, terminated};
use winnow::error::{ContextError, StrContext};
use winnow::token::{any, none_of, take_until, take_while};
use winnow::{ModalResult, Parser};

use crate::error::ParseError;

const UNTERMINATED_QUOTE: &str = "unterminated quote";
const TRAILING_ESCAPE: &str = "trailing escape";

/// `'...'`: everything literal up to the closing quote. No escapes inside.
fn single_quoted(s: &mut &str) -> ModalResult<String> {
    preceded(
        '\'',
        cut_err(terminated(take_until(0.., '\''), '\''))
            .context(StrContext::Label(UNTERMINATED_QUOTE)),
    )
    .map(str::to_owned)
    .parse_next(s)
}

/// One escape inside `"..."`. Only `\`, `"`, `$` and backtick drop the
/// backslash; for anything else the backslash itself is kept.
fn double_quoted_escape(s: &mut &str) -> ModalResult<String> {
    preceded('\\', any)
        .map(|c: char| match c {
            '\\' | '"' | '$' | '`' => c.to_string(),
            other => format!("\\{other}"),
        })
        .parse_next(s)
}

fn double_quoted(s: &mut &str) -> ModalResult<String> {
    preceded(
        '"',
        cut_err(terminated(
            repeat(
                0..,
                alt((
                    double_quoted_escape,
                    none_of(['"', '\\']).map(|c: char| c.to_string()),
                )),
            )
            .fold(String::new, |mut text, piece: String| {
                text.push_str(&piece);
                text
            }),
            '"',
        ))
        .context(StrContext::Label(UNTERMINATED_QUOTE)),
    )
    .parse_next(s)
}

/// Unquoted `\`: the next character is taken literally, whitespace and
/// quotes included. Backslash-newline (and CRLF) is a line continuation
/// and contributes nothing, so multi-line pastes join cleanly.
fn unquoted_escape(s: &mut &str) -> ModalResult<String> {
    preceded(
        '\\',
        cut_err(any).context(StrContext::Label(TRAILING_ESCAPE)),
    )
    .map(|c: char| match c {
        '\n' | '\r' => String::new(),
        other => other.to_string(),
    })
    .parse_next(s)
}

fn plain_run(s: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, '\'' | '"' | '\\')
    })
    .map(str::to_owned)
    .parse_next(s)
}

/// One shell word: adjacent quoted and unquoted segments, no separating
/// whitespace, folded into a single token. The bool records whether any
/// segment was quoted, so a bare line continuation can be told apart from
/// a deliberately empty `''` argument.
fn word(s: &mut &str) -> ModalResult<(String, bool)> {
    repeat(
        1..,
        alt((
            single_quoted.map(|t| (t, true)),
            double_quoted.map(|t| (t, true)),
            unquoted_escape.map(|t| (t, false)),
            plain_run.map(|t| (t, false)),
        )),
    )
    .fold(
        || (String::new(), false),
        |(mut text, quoted), (piece, piece_quoted): (String, bool)| {
            text.push_str(&piece);
            (text, quoted || piece_quoted)
        },
    )
    .parse_next(s)
}

fn words(s: &mut &str) -> ModalResult<Vec<(String, bool)>> {
    preceded(multispace0, repeat(0.., terminated(word, multispace0))).parse_next(s)
}

fn classify(err: ContextError) -> ParseError {
    for ctx in err.context() {
        if let StrContext::Label(label) = ctx {
            match *label {
                UNTERMINATED_QUOTE => return ParseError::UnterminatedQuote,
                TRAILING_ESCAPE => return ParseError::TrailingEscape,
                _ => {}
            }
        }
    }
    ParseError::InvalidInput
}

/// Split `input` into shell words with quotes and escapes resolved.
///
/// Never emits empty tokens from whitespace or line continuations alone;
/// a quoted empty region (`''`) does survive as an empty token.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let tokens = words
        .parse(input)
        .map_err(|e| classify(e.into_inner()))?;
    Ok(tokens
        .into_iter()
        .filter(|(text, quoted)| *quoted || !text.is_empty())
        .map(|(text, _)| text)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("curl 'a b' \"c d\"", vec!["curl", "a b", "c d"])]
    #[case("curl   https://example.com", vec!["curl", "https://example.com"])]
    #[case("\t curl \n -v \r\n", vec!["curl", "-v"])]
    fn splits_on_whitespace(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenize(input).unwrap(), expected);
    }

    #[rstest]
    #[case(r#"'it'"'"'s'"#, "it's")]
    #[case(r#"a'b'"c"d"#, "abcd")]
    #[case("''", "")]
    fn adjacent_regions_share_one_token(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(tokenize(input).unwrap(), vec![expected.to_string()]);
    }

    #[test]
    fn escaped_quote_inside_double_quotes() {
        let tokens = tokenize("curl -H \"X-Test: a\\\"b\"").unwrap();
        assert_eq!(tokens, vec!["curl", "-H", "X-Test: a\"b"]);
    }

    #[test]
    fn double_quote_escape_set() {
        // \$ and \` drop the backslash; \n (the letter) keeps it.
        assert_eq!(tokenize(r#""\$HOME \` \n""#).unwrap(), vec!["$HOME ` \\n"]);
    }

    #[test]
    fn no_escape_processing_inside_single_quotes() {
        assert_eq!(tokenize(r"'a\nb'").unwrap(), vec![r"a\nb"]);
    }

    #[test]
    fn unquoted_escape_keeps_literal_space() {
        assert_eq!(tokenize(r"a\ b c").unwrap(), vec!["a b", "c"]);
    }

    #[test]
    fn backslash_newline_joins_continuation_lines() {
        let input = "curl 'http://x' \\\n  -H 'A: 1' \\\r\n  -v";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens, vec!["curl", "http://x", "-H", "A: 1", "-v"]);
    }

    #[rstest]
    #[case("curl 'abc")]
    #[case("curl \"abc")]
    fn unterminated_quote_is_fatal(#[case] input: &str) {
        assert_eq!(tokenize(input), Err(ParseError::UnterminatedQuote));
    }

    #[test]
    fn trailing_escape_is_fatal() {
        assert_eq!(tokenize("curl abc\\"), Err(ParseError::TrailingEscape));
    }

    #[test]
    fn deterministic_over_repeated_calls() {
        let input = "curl -X POST 'http://x' -d 'a=1'";
        assert_eq!(tokenize(input).unwrap(), tokenize(input).unwrap());
    }
}
