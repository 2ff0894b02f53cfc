//! Classification of raw tokens into host-facing styles.
//!
//! The raw scanner distinguishes literal forms the host styles identically
//! (heredocs, percent literals, and quoted strings all render as "string").
//! This layer folds those together, materializes absolute byte offsets, and
//! resolves word tokens into keyword / builtin-function / identifier.

use ruby_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::trace;

use crate::keywords;

/// Host-facing style classification.
///
/// One variant per visual style. Distinctions the raw scanner makes but the
/// host does not (e.g. hex vs. decimal integers) are folded together here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Spaces, tabs, and line breaks.
    Whitespace,
    /// `#` comment through end of line.
    Comment,
    /// Any string-like literal: quoted strings, commands, heredocs,
    /// percent literals, and `?c` character codes.
    String,
    /// Regex literal, including trailing flags.
    Regex,
    /// Numeric literal in any base.
    Number,
    /// Reserved keyword (`def`, `end`, `if`, ...).
    Keyword,
    /// Builtin kernel function (`puts`, `require`, ...).
    Function,
    /// Plain identifier or constant.
    Identifier,
    /// Sigil-prefixed variable (`$g`, `@iv`, `@@cv`).
    Variable,
    /// Symbol (`:name`, `:"quoted"`).
    Symbol,
    /// Operators, delimiters, and punctuation.
    Operator,
    /// A character no rule accepts; always one code point.
    Unknown,
}

/// A classified token with absolute byte offsets.
///
/// Tokens tile the source: each token's `start` equals the previous token's
/// `end`, the first starts at the scan origin, and the last ends at the
/// source length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first byte of the span.
    pub start: u32,
    /// Byte offset one past the last byte of the span.
    pub end: u32,
}

/// Tokenize a full source string into classified tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_from(source, 0)
}

/// Tokenize from a byte offset, for partial re-lex after an edit.
///
/// `start` should sit on a line boundary for exact agreement with a full
/// lex; the scanner re-seeds its per-line lookbehind from the bytes before
/// `start`, so mid-line starts still resolve regex-vs-division correctly.
/// Offsets past the end of the source yield an empty stream.
pub fn tokenize_from(source: &str, start: u32) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let start = start.min(buf.len());
    cursor.advance_n(start);

    let mut scanner = RawScanner::new(cursor);
    let mut tokens = Vec::new();
    let mut pos = start;
    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        let end = pos + raw.len;
        let kind = match raw.tag {
            RawTag::Word => resolve_word(source, pos, end),
            RawTag::Whitespace | RawTag::Newline => TokenKind::Whitespace,
            RawTag::Comment => TokenKind::Comment,
            RawTag::String
            | RawTag::Command
            | RawTag::Heredoc
            | RawTag::PercentLiteral
            | RawTag::CharCode => TokenKind::String,
            RawTag::Regex => TokenKind::Regex,
            RawTag::Int | RawTag::Float | RawTag::HexInt | RawTag::BinInt | RawTag::OctInt => {
                TokenKind::Number
            }
            RawTag::Symbol => TokenKind::Symbol,
            RawTag::GlobalVar | RawTag::ClassVar | RawTag::InstanceVar => TokenKind::Variable,
            RawTag::LeftParen
            | RawTag::RightParen
            | RawTag::LeftBracket
            | RawTag::RightBracket
            | RawTag::LeftBrace
            | RawTag::RightBrace
            | RawTag::Op => TokenKind::Operator,
            RawTag::Unknown | RawTag::Eof => TokenKind::Unknown,
        };
        tokens.push(Token { kind, start: pos, end });
        pos = end;
    }
    trace!(start, tokens = tokens.len(), "classified source");
    tokens
}

/// Classified tokens with adjacent same-kind spans merged.
///
/// Convenient for hosts that apply one style attribute per contiguous run
/// (`a::B` styles its `::` as a single operator span).
pub fn styled_spans(source: &str) -> Vec<Token> {
    let mut spans: Vec<Token> = Vec::new();
    for tok in tokenize(source) {
        match spans.last_mut() {
            Some(prev) if prev.kind == tok.kind && prev.end == tok.start => {
                prev.end = tok.end;
            }
            _ => spans.push(tok),
        }
    }
    spans
}

/// Resolve a word token: keyword, builtin function, or plain identifier.
///
/// The lookup strips one trailing `!`/`?` so bang/predicate spellings
/// resolve through the same stem (`exit!`, `defined?`). A builtin
/// immediately followed by `.`, `:`, or `|` is in receiver or hash-key
/// position (`loop.each`, `catch:`) and stays an identifier.
fn resolve_word(source: &str, start: u32, end: u32) -> TokenKind {
    let word = &source[start as usize..end as usize];
    let stem = word
        .strip_suffix(['!', '?'])
        .unwrap_or(word);
    if keywords::is_keyword(stem) {
        return TokenKind::Keyword;
    }
    let follower = source.as_bytes().get(end as usize).copied().unwrap_or(0);
    if !matches!(follower, b'.' | b':' | b'|') && keywords::is_builtin(stem) {
        return TokenKind::Function;
    }
    TokenKind::Identifier
}
