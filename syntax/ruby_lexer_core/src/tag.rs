//! Raw token tags produced by the scanner.
//!
//! `RawTag` is the scanner's vocabulary: it distinguishes literal forms the
//! classification layer folds together (all string-like tags render as one
//! "string" style) but keeps bracket identity, which the fold extractor
//! needs. Discriminants are grouped into semantic ranges so a tag's class
//! is visible from its byte value.

/// Classification tag for a raw token.
///
/// `repr(u8)` with grouped discriminant ranges:
///
/// - `0..=15` — words and literals
/// - `24..=26` — variables (sigil forms)
/// - `80..=86` — delimiters and operators
/// - `112..=114` — trivia
/// - `240` — unknown input
/// - `255` — end of input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // ─── Words & Literals: 0-15 ─────────────────────────────────────────
    /// Identifier-shaped run, unresolved. The classification layer decides
    /// keyword / builtin-function / identifier.
    Word = 0,
    /// Decimal integer (with `_` separators, optional sign, `r`/`i` suffix).
    Int = 1,
    /// Float (decimal point and/or exponent, optional `r`/`i` suffix).
    Float = 2,
    /// Hex integer (`0x` prefix).
    HexInt = 3,
    /// Binary integer (`0b` prefix).
    BinInt = 4,
    /// Octal integer (`0o` prefix).
    OctInt = 5,
    /// Character-code literal (`?c`).
    CharCode = 6,
    /// Single- or double-quoted string.
    String = 7,
    /// Backtick command substitution.
    Command = 8,
    /// Heredoc (`<<IDENT` through its terminator line).
    Heredoc = 9,
    /// Percent literal (`%q(...)`, `%w[...]`, bare `%|...|`, ...).
    PercentLiteral = 10,
    /// Regex literal (`/.../ ` or `%r{...}`), including trailing flags.
    Regex = 11,
    /// Symbol (`:name`, `:"quoted"`).
    Symbol = 12,

    // ─── Variables: 24-26 ───────────────────────────────────────────────
    /// Global variable (`$name`, `$!`, `$1`, `$-a`).
    GlobalVar = 24,
    /// Class variable (`@@name`).
    ClassVar = 25,
    /// Instance variable (`@name`).
    InstanceVar = 26,

    // ─── Delimiters & Operators: 80-86 ──────────────────────────────────
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    /// Any other single punctuation character from the operator set.
    Op = 86,

    // ─── Trivia: 112-114 ────────────────────────────────────────────────
    /// Horizontal whitespace run (spaces/tabs).
    Whitespace = 112,
    /// Line break (`\n` or `\r\n`).
    Newline = 113,
    /// `#` comment through end of line.
    Comment = 114,

    // ─── Unknown: 240 ───────────────────────────────────────────────────
    /// A character outside every rule, consumed to preserve forward
    /// progress. One code point per token.
    Unknown = 240,

    // ─── Control: 255 ───────────────────────────────────────────────────
    /// End of input. Always `len == 0`.
    Eof = 255,
}

impl RawTag {
    /// Human-readable description, for debugging and test output.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Word => "word",
            RawTag::Int => "integer literal",
            RawTag::Float => "float literal",
            RawTag::HexInt => "hex integer literal",
            RawTag::BinInt => "binary integer literal",
            RawTag::OctInt => "octal integer literal",
            RawTag::CharCode => "character-code literal",
            RawTag::String => "string literal",
            RawTag::Command => "command substitution",
            RawTag::Heredoc => "heredoc",
            RawTag::PercentLiteral => "percent literal",
            RawTag::Regex => "regex literal",
            RawTag::Symbol => "symbol",
            RawTag::GlobalVar => "global variable",
            RawTag::ClassVar => "class variable",
            RawTag::InstanceVar => "instance variable",
            RawTag::LeftParen => "`(`",
            RawTag::RightParen => "`)`",
            RawTag::LeftBracket => "`[`",
            RawTag::RightBracket => "`]`",
            RawTag::LeftBrace => "`{`",
            RawTag::RightBrace => "`}`",
            RawTag::Op => "operator",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::Comment => "comment",
            RawTag::Unknown => "unknown character",
            RawTag::Eof => "end of input",
        }
    }

    /// Returns `true` for tags that carry no styling content of their own
    /// beyond layout (whitespace and newlines).
    ///
    /// Comments are NOT trivia here: the host styles them.
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Newline)
    }

    /// Returns `true` for the string-like literal tags that all render with
    /// the host's string style.
    pub fn is_string_like(self) -> bool {
        matches!(
            self,
            RawTag::String | RawTag::Command | RawTag::Heredoc | RawTag::PercentLiteral
        )
    }
}

/// Raw token: a tag plus the byte length of its span.
///
/// Positions are implicit: tokens tile the input, so a token's start is the
/// sum of all preceding lengths. The classification layer materializes
/// absolute offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// Classification tag.
    pub tag: RawTag,
    /// Byte length of the token's span.
    pub len: u32,
}
