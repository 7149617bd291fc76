pub mod parser;
pub mod protocol;

pub use parser::{UrlParts, parse_url, with_query_param};
pub use protocol::Scheme;
