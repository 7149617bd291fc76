//! The flag dispatch table: constant data mapping every recognized flag
//! spelling to its semantic action. Built once, never mutated, so the
//! builder walk is a plain table lookup per token.

/// How body-contributing flags were spelled. `-F` values are already
/// `name=value` pairs, so both modes accumulate with a `&` joiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Raw,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Zero,
    One,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAction {
    /// `-X PUT`: the argument is the method, uppercased.
    SetMethod,
    /// `-H "Name: Value"`: the argument is split on the first `:`.
    AddHeader,
    /// `-A`, `-e`, `-b`: the argument becomes the value of a fixed header.
    AddNamedHeader(&'static str),
    /// `-d`/`-F` family: the argument joins the body, inferring `POST`.
    AppendBody(BodyKind),
    /// `--url`: the argument is the target, overriding a positional URL.
    SetUrl,
    /// `-u user:pass`: synthesized into `Authorization: Basic ...`.
    BasicAuth,
    /// Recognized but irrelevant here; consumed per its arity so the
    /// cursor stays aligned.
    Ignore(Arity),
}

impl FlagAction {
    pub fn arity(&self) -> Arity {
        match self {
            FlagAction::Ignore(arity) => *arity,
            _ => Arity::One,
        }
    }
}

pub struct FlagSpec {
    pub spellings: &'static [&'static str],
    pub action: FlagAction,
}

/// Flag spellings are case-sensitive, as in curl itself.
pub const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        spellings: &["-X", "--request"],
        action: FlagAction::SetMethod,
    },
    FlagSpec {
        spellings: &["-H", "--header"],
        action: FlagAction::AddHeader,
    },
    FlagSpec {
        spellings: &[
            "-d",
            "--data",
            "--data-raw",
            "--data-binary",
            "--data-urlencode",
            "--data-ascii",
        ],
        action: FlagAction::AppendBody(BodyKind::Raw),
    },
    FlagSpec {
        spellings: &["-F", "--form"],
        action: FlagAction::AppendBody(BodyKind::Form),
    },
    FlagSpec {
        spellings: &["--url"],
        action: FlagAction::SetUrl,
    },
    FlagSpec {
        spellings: &["-u", "--user"],
        action: FlagAction::BasicAuth,
    },
    FlagSpec {
        spellings: &["-A", "--user-agent"],
        action: FlagAction::AddNamedHeader("User-Agent"),
    },
    FlagSpec {
        spellings: &["-e", "--referer"],
        action: FlagAction::AddNamedHeader("Referer"),
    },
    FlagSpec {
        spellings: &["-b", "--cookie"],
        action: FlagAction::AddNamedHeader("Cookie"),
    },
    FlagSpec {
        spellings: &["-o", "--output"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["-x", "--proxy"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["-m", "--max-time"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["--connect-timeout"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["--retry"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["-c", "--cookie-jar"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["--cacert"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["-T", "--upload-file"],
        action: FlagAction::Ignore(Arity::One),
    },
    FlagSpec {
        spellings: &["-k", "--insecure"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-L", "--location"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-s", "--silent"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-v", "--verbose"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-i", "--include"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-I", "--head"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-f", "--fail"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["--compressed"],
        action: FlagAction::Ignore(Arity::Zero),
    },
    FlagSpec {
        spellings: &["-g", "--globoff"],
        action: FlagAction::Ignore(Arity::Zero),
    },
];

pub fn lookup(flag: &str) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.spellings.contains(&flag))
}
