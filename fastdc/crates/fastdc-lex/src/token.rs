//! Token definitions and the keyword table.
//!
//! Every pull from the lexer yields a [`Token`]: a [`TokenKind`] plus the
//! [`Span`] it was read from. Keyword kinds live in their own [`Keyword`]
//! enum so they can be matched without touching payload-carrying variants.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use fastdc_util::Span;
use static_assertions::assert_impl_all;

/// Reserved words of the configuration language.
///
/// Each variant is named after its text; see [`Keyword::as_str`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    Addresses,
    Any,
    As,
    Auto,
    Bind,
    Capabilities,
    Crypto,
    Debug,
    Default,
    Disestablish,
    Down,
    Drop,
    Early,
    Error,
    Establish,
    Fatal,
    Float,
    Forward,
    From,
    Group,
    Hide,
    Include,
    Info,
    Interface,
    Ip,
    Ipv4,
    Ipv6,
    Key,
    Level,
    Limit,
    Log,
    Mac,
    Method,
    Mode,
    Mtu,
    No,
    On,
    Peer,
    Peers,
    Pmtu,
    Port,
    PostDown,
    PreUp,
    Protocol,
    Remote,
    Secret,
    Stderr,
    Syslog,
    Tap,
    To,
    Tun,
    Up,
    Use,
    User,
    Verbose,
    Verify,
    Warn,
    Yes,
}

/// Keyword text to kind. Must stay sorted by text: lookup is a binary search.
static KEYWORDS: [(&str, Keyword); 58] = [
    ("addresses", Keyword::Addresses),
    ("any", Keyword::Any),
    ("as", Keyword::As),
    ("auto", Keyword::Auto),
    ("bind", Keyword::Bind),
    ("capabilities", Keyword::Capabilities),
    ("crypto", Keyword::Crypto),
    ("debug", Keyword::Debug),
    ("default", Keyword::Default),
    ("disestablish", Keyword::Disestablish),
    ("down", Keyword::Down),
    ("drop", Keyword::Drop),
    ("early", Keyword::Early),
    ("error", Keyword::Error),
    ("establish", Keyword::Establish),
    ("fatal", Keyword::Fatal),
    ("float", Keyword::Float),
    ("forward", Keyword::Forward),
    ("from", Keyword::From),
    ("group", Keyword::Group),
    ("hide", Keyword::Hide),
    ("include", Keyword::Include),
    ("info", Keyword::Info),
    ("interface", Keyword::Interface),
    ("ip", Keyword::Ip),
    ("ipv4", Keyword::Ipv4),
    ("ipv6", Keyword::Ipv6),
    ("key", Keyword::Key),
    ("level", Keyword::Level),
    ("limit", Keyword::Limit),
    ("log", Keyword::Log),
    ("mac", Keyword::Mac),
    ("method", Keyword::Method),
    ("mode", Keyword::Mode),
    ("mtu", Keyword::Mtu),
    ("no", Keyword::No),
    ("on", Keyword::On),
    ("peer", Keyword::Peer),
    ("peers", Keyword::Peers),
    ("pmtu", Keyword::Pmtu),
    ("port", Keyword::Port),
    ("post-down", Keyword::PostDown),
    ("pre-up", Keyword::PreUp),
    ("protocol", Keyword::Protocol),
    ("remote", Keyword::Remote),
    ("secret", Keyword::Secret),
    ("stderr", Keyword::Stderr),
    ("syslog", Keyword::Syslog),
    ("tap", Keyword::Tap),
    ("to", Keyword::To),
    ("tun", Keyword::Tun),
    ("up", Keyword::Up),
    ("use", Keyword::Use),
    ("user", Keyword::User),
    ("verbose", Keyword::Verbose),
    ("verify", Keyword::Verify),
    ("warn", Keyword::Warn),
    ("yes", Keyword::Yes),
];

assert_impl_all!(Keyword: Copy, Send, Sync);

impl Keyword {
    /// All keywords, in the order of their text.
    pub fn all() -> impl Iterator<Item = Keyword> {
        KEYWORDS.iter().map(|&(_, keyword)| keyword)
    }

    /// Looks up the keyword spelled exactly `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use fastdc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::lookup(b"post-down"), Some(Keyword::PostDown));
    /// assert_eq!(Keyword::lookup(b"postdown"), None);
    /// ```
    pub fn lookup(text: &[u8]) -> Option<Keyword> {
        KEYWORDS
            .binary_search_by(|(word, _)| word.as_bytes().cmp(text))
            .ok()
            .map(|index| KEYWORDS[index].1)
    }

    /// Returns the keyword as written in configuration files.
    pub fn as_str(self) -> &'static str {
        // Variants are declared in table order.
        KEYWORDS[self as usize].0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification and payload of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// A reserved word.
    Keyword(Keyword),
    /// A quoted string, with escapes removed. Not necessarily UTF-8.
    String(Vec<u8>),
    /// An unsigned decimal integer.
    UInt(u64),
    /// A dotted-quad IPv4 address.
    Addr4(Ipv4Addr),
    /// A bracketed IPv6 address.
    Addr6(Ipv6Addr),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns true for tokens that need a separator before the next one of
    /// their kind: strings, integers, addresses and keywords.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(_)
                | TokenKind::String(_)
                | TokenKind::UInt(_)
                | TokenKind::Addr4(_)
                | TokenKind::Addr6(_)
        )
    }

    /// Short category name, used for machine-readable output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Semicolon | TokenKind::Colon | TokenKind::LBrace | TokenKind::RBrace => {
                "punct"
            },
            TokenKind::Keyword(_) => "keyword",
            TokenKind::String(_) => "string",
            TokenKind::UInt(_) => "uint",
            TokenKind::Addr4(_) => "addr4",
            TokenKind::Addr6(_) => "addr6",
            TokenKind::Eof => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    /// Renders the token close to how it is written in a configuration
    /// file. Strings are re-quoted; bytes outside printable ASCII are shown
    /// as `\xNN` for readability and do not round-trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::Keyword(keyword) => write!(f, "{}", keyword),
            TokenKind::String(bytes) => {
                f.write_str("\"")?;
                for &byte in bytes {
                    match byte {
                        b'"' | b'\\' => write!(f, "\\{}", byte as char)?,
                        b' '..=b'~' => write!(f, "{}", byte as char)?,
                        _ => write!(f, "\\x{:02x}", byte)?,
                    }
                }
                f.write_str("\"")
            },
            TokenKind::UInt(value) => write!(f, "{}", value),
            TokenKind::Addr4(addr) => write!(f, "{}", addr),
            TokenKind::Addr6(addr) => write!(f, "[{}]", addr),
            TokenKind::Eof => f.write_str("<eof>"),
        }
    }
}

/// A token together with its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was read.
    pub kind: TokenKind,
    /// Where it was read from.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
