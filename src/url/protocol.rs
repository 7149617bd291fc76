/// Scheme classification for a parsed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    Http,
    Ws,
    Wss,
    Ftp,
    Unknown,
}

impl Scheme {
    pub fn is_http(&self) -> bool {
        matches!(self, Scheme::Http | Scheme::Https)
    }
}

impl From<&str> for Scheme {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "https" => Scheme::Https,
            "http" => Scheme::Http,
            "ws" => Scheme::Ws,
            "wss" => Scheme::Wss,
            "ftp" => Scheme::Ftp,
            _ => Scheme::Unknown,
        }
    }
}
