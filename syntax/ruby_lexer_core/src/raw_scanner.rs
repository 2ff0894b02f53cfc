//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or builtin names — those are deferred to the classification
//! layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`. Every arm consumes at least
//! one byte, so scanning terminates in at most `len(source)` steps for any
//! input.
//!
//! # Disambiguation
//!
//! The hard cases share leading characters:
//!
//! - `/` is a regex opener only when the last significant byte on the
//!   current line is an operator-like trigger (or the line has none so far);
//!   otherwise it is the division operator.
//! - `:` starts a symbol only when not preceded by `:` (scope resolution
//!   `::` lexes as two operator tokens) and followed by a word or a quote.
//! - `<<` starts a heredoc only when the full header shape
//!   (`<<` + optional `-`/`~` + optional quote + identifier) is present.
//! - `%` starts a percent literal only when its delimiter is neither
//!   alphanumeric nor whitespace.
//!
//! Speculative matches (heredoc and percent headers) run on a copied
//! [`Cursor`] and commit by assignment, so a declined match consumes
//! nothing beyond the single operator byte.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Malformed input is encoded as `RawTag` variants (`Unknown`, literals
/// running to end of input), never as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// Last significant (non-whitespace, non-comment) byte emitted on the
    /// current line; `0` when the line has none so far. Drives the
    /// regex-vs-division decision.
    line_sig: u8,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    ///
    /// The cursor may start mid-buffer (partial re-lex): the constructor
    /// back-scans the current line's prefix to re-seed the regex lookbehind
    /// state, so a re-lex from a line boundary agrees with a full lex.
    pub fn new(cursor: Cursor<'a>) -> Self {
        let mut line_sig = 0u8;
        let mut p = cursor.pos();
        while p > 0 {
            let b = cursor.byte_at(p - 1);
            if b == b'\n' {
                break;
            }
            if !matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C) {
                line_sig = b;
                break;
            }
            p -= 1;
        }
        Self { cursor, line_sig }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let tok = self.dispatch();
        // Maintain the per-line significant-byte state for the regex gate.
        match tok.tag {
            RawTag::Newline => self.line_sig = 0,
            RawTag::Whitespace | RawTag::Comment | RawTag::Eof => {}
            _ => self.line_sig = self.cursor.prev(),
        }
        tok
    }

    fn dispatch(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'#' => self.comment(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(start),
            b'0'..=b'9' => self.number(start),
            b'+' | b'-' => self.sign_or_op(start),
            b'?' => self.char_code_or_op(start),
            b'"' => self.quoted(start, b'"', RawTag::String),
            b'\'' => self.quoted(start, b'\'', RawTag::String),
            b'`' => self.quoted(start, b'`', RawTag::Command),
            b'%' => self.percent(start),
            b'/' => self.regex_or_op(start),
            b'<' => self.heredoc_or_op(start),
            b'$' => self.global_var(start),
            b'@' => self.instance_or_class_var(start),
            b':' => self.symbol_or_op(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'!' | b'&' | b'*' | b',' | b'.' | b';' | b'=' | b'>' | b'\\' | b'^' | b'|'
            | b'~' => self.single(start, RawTag::Op),
            // Control characters (excluding whitespace forms), DEL, and
            // non-ASCII lead bytes.
            1..=8 | 14..=31 | 127..=255 => self.unknown(start),
        }
    }

    /// Build a token spanning from `start` to the current position.
    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    // ─── EOF ────────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte — consume it as unknown input so the
            // token stream still tiles the source.
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(start, RawTag::Unknown)
        }
    }

    // ─── Whitespace & Newlines ──────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // CRLF: single Newline with len=2
            self.cursor.advance();
            self.token(start, RawTag::Newline)
        } else {
            // Lone \r: horizontal whitespace
            self.token(start, RawTag::Whitespace)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ───────────────────────────────────────────────────────

    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '#'
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::Comment)
    }

    // ─── Words ──────────────────────────────────────────────────────────

    /// Identifier-shaped run: `(letter|_)(letter|digit|_)*` plus one
    /// optional trailing `!`/`?`.
    ///
    /// The trailing byte is not taken when `=` follows, so `a != b` keeps
    /// `!=` out of the word.
    fn word(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_word_continue);
        if matches!(self.cursor.current(), b'!' | b'?') && self.cursor.peek() != b'=' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Word)
    }

    // ─── Numeric Literals ───────────────────────────────────────────────

    /// Leading `+`/`-`: part of a numeric literal when a digit follows,
    /// otherwise a plain operator.
    fn sign_or_op(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume sign
            return self.number(start);
        }
        self.single(start, RawTag::Op)
    }

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            // Radix prefixes. The second-byte peek keeps a bare `0x` from
            // swallowing a following word.
            match self.cursor.current() {
                b'x' | b'X' if self.cursor.peek().is_ascii_hexdigit() || self.cursor.peek() == b'_' => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
                    return self.token(start, RawTag::HexInt);
                }
                b'b' | b'B' if matches!(self.cursor.peek(), b'0' | b'1' | b'_') => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| matches!(b, b'0' | b'1' | b'_'));
                    return self.token(start, RawTag::BinInt);
                }
                b'o' | b'O' if matches!(self.cursor.peek(), b'0'..=b'7' | b'_') => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| matches!(b, b'0'..=b'7' | b'_'));
                    return self.token(start, RawTag::OctInt);
                }
                _ => {}
            }
        }

        self.eat_decimal_digits();

        // Float: dot followed by digit (a bare `1.` stays Int + Op, for
        // `1..2` ranges and `1.upto` method calls).
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_decimal_digits();
            self.eat_exponent();
            self.eat_numeric_suffix();
            return self.token(start, RawTag::Float);
        }

        // Exponent without dot (1e5, 2E-3)
        if matches!(self.cursor.current(), b'e' | b'E') && self.exponent_follows() {
            self.eat_exponent();
            self.eat_numeric_suffix();
            return self.token(start, RawTag::Float);
        }

        self.eat_numeric_suffix();
        self.token(start, RawTag::Int)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    /// Is the byte after the current `e`/`E` a valid exponent start?
    fn exponent_follows(&self) -> bool {
        self.cursor.peek().is_ascii_digit()
            || (matches!(self.cursor.peek(), b'+' | b'-') && self.cursor.peek2().is_ascii_digit())
    }

    fn eat_exponent(&mut self) {
        if matches!(self.cursor.current(), b'e' | b'E') && self.exponent_follows() {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
    }

    /// Rational/imaginary suffixes on decimal forms: `1r`, `1i`, `1ri`.
    ///
    /// A suffix letter is only taken when it does not begin a longer word
    /// (`1re` is `1` + word `re`).
    fn eat_numeric_suffix(&mut self) {
        if self.cursor.current() == b'r'
            && (!is_word_continue(self.cursor.peek())
                || (self.cursor.peek() == b'i' && !is_word_continue(self.cursor.peek2())))
        {
            self.cursor.advance();
        }
        if self.cursor.current() == b'i' && !is_word_continue(self.cursor.peek()) {
            self.cursor.advance();
        }
    }

    /// `?c` character-code literal: `?` followed by one non-space character
    /// that does not begin a longer word run (`?a` yes, `?ab` is a ternary
    /// branch). Falls back to the `?` operator.
    fn char_code_or_op(&mut self, start: u32) -> RawToken {
        let next = self.cursor.peek();
        let is_char_code = next != 0
            && !matches!(next, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
            && !(is_word_continue(next) && is_word_continue(self.cursor.peek2()));
        if is_char_code {
            self.cursor.advance(); // consume '?'
            self.cursor.advance_char();
            return self.token(start, RawTag::CharCode);
        }
        self.single(start, RawTag::Op)
    }

    // ─── Quoted & Percent Literals ──────────────────────────────────────

    /// Quote-delimited literal: `"..."`, `'...'`, `` `...` ``.
    fn quoted(&mut self, start: u32, delim: u8, tag: RawTag) -> RawToken {
        self.cursor.advance(); // consume opening delimiter
        self.delimited_body(delim);
        self.eat_literal_flag();
        self.token(start, tag)
    }

    /// Scan a literal body up to and including its closing delimiter.
    ///
    /// Paired brackets maintain a nesting counter (same-pair nesting is
    /// honored: `%w(a (b) c)` closes at the final `)`); all other
    /// delimiters self-match with backslash escapes. A missing closer
    /// extends the literal to end of input.
    fn delimited_body(&mut self, open: u8) {
        let close = matching_close(open);

        if close != open {
            // Paired bracket: count nesting, no escape handling.
            let mut depth = 1u32;
            loop {
                let b = self.cursor.skip_to_delim2(open, close);
                if b == 0 {
                    return; // unterminated: extend to end of input
                } else if b == open {
                    depth += 1;
                    self.cursor.advance();
                } else {
                    depth -= 1;
                    self.cursor.advance();
                    if depth == 0 {
                        return;
                    }
                }
            }
        }

        // Self-matching delimiter: next unescaped occurrence.
        loop {
            match self.cursor.skip_to_delim2(close, b'\\') {
                0 => return, // unterminated: extend to end of input
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance(); // escaped char is content
                    }
                }
                _ => {
                    self.cursor.advance(); // consume closing delimiter
                    return;
                }
            }
        }
    }

    /// Percent literal: `%` + optional type letter + delimiter.
    ///
    /// `%r` is a regex; `q Q w W i I x s` (and no letter) are string-like.
    /// Declines — leaving a single `%` operator — when the would-be
    /// delimiter is alphanumeric or whitespace, or the type letter is not
    /// recognized.
    fn percent(&mut self, start: u32) -> RawToken {
        let mut la = self.cursor; // speculative
        la.advance(); // consume '%'

        let mut tag = RawTag::PercentLiteral;
        if la.current().is_ascii_alphabetic() {
            match la.current() {
                b'r' => tag = RawTag::Regex,
                b'q' | b'Q' | b'w' | b'W' | b'i' | b'I' | b'x' | b's' => {}
                _ => return self.single(start, RawTag::Op),
            }
            la.advance();
        }

        let open = la.current();
        if open == 0
            || open.is_ascii_alphanumeric()
            || matches!(open, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
        {
            return self.single(start, RawTag::Op);
        }
        la.advance(); // consume opening delimiter

        self.cursor = la; // commit
        self.delimited_body(open);
        if tag == RawTag::Regex {
            self.eat_regex_flags();
        } else {
            self.eat_literal_flag();
        }
        self.token(start, tag)
    }

    /// Optional `f` suffix flag after a string-like literal.
    fn eat_literal_flag(&mut self) {
        if self.cursor.current() == b'f' && !is_word_continue(self.cursor.peek()) {
            self.cursor.advance();
        }
    }

    /// Trailing regex option flags, eaten greedily.
    fn eat_regex_flags(&mut self) {
        self.cursor
            .eat_while(|b| matches!(b, b'i' | b'o' | b'm' | b'x'));
    }

    // ─── Regex vs. Division ─────────────────────────────────────────────

    /// `/` opens a regex only in operator position: the last significant
    /// byte on this line is in the trigger set, or the line has none so
    /// far. Otherwise it is the division operator.
    fn regex_or_op(&mut self, start: u32) -> RawToken {
        if self.line_sig != 0 && !is_regex_trigger(self.line_sig) {
            return self.single(start, RawTag::Op);
        }
        self.cursor.advance(); // consume '/'
        self.delimited_body(b'/');
        self.eat_regex_flags();
        self.token(start, RawTag::Regex)
    }

    // ─── Heredocs ───────────────────────────────────────────────────────

    /// `<<` heredoc header, or a single `<` operator.
    ///
    /// Header shape: `<<` + optional indent flag (`-` or `~`) + optional
    /// quote + identifier (+ matching close quote). The token spans from
    /// `<<` through the end of the terminator line; with no terminator it
    /// extends to end of input.
    fn heredoc_or_op(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() != b'<' {
            return self.single(start, RawTag::Op);
        }

        let mut la = self.cursor; // speculative
        la.advance_n(2); // consume '<<'

        let indented = matches!(la.current(), b'-' | b'~');
        if indented {
            la.advance();
        }

        let quote = match la.current() {
            q @ (b'"' | b'\'') => {
                la.advance();
                Some(q)
            }
            _ => None,
        };

        if !is_word_start(la.current()) {
            return self.single(start, RawTag::Op);
        }
        let ident_start = la.pos();
        la.advance();
        la.eat_while(is_word_continue);
        let ident_end = la.pos();

        if let Some(q) = quote {
            if la.current() != q {
                return self.single(start, RawTag::Op);
            }
            la.advance();
        }

        let end = find_heredoc_end(&la, ident_start, ident_end, indented);
        self.cursor.advance_n(end - start);
        self.token(start, RawTag::Heredoc)
    }

    // ─── Variables (sigils) ─────────────────────────────────────────────

    /// `$` global variable: word shape, digit run, `$-x` flag form, or a
    /// single special-punctuation name. Falls back to the `$` operator.
    fn global_var(&mut self, start: u32) -> RawToken {
        let next = self.cursor.peek();
        if is_word_start(next) {
            self.cursor.advance_n(2);
            self.cursor.eat_while(is_word_continue);
            return self.token(start, RawTag::GlobalVar);
        }
        if next.is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return self.token(start, RawTag::GlobalVar);
        }
        if next == b'-' && is_word_continue(self.cursor.peek2()) {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::GlobalVar);
        }
        if is_special_global(next) {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::GlobalVar);
        }
        self.single(start, RawTag::Op)
    }

    /// `@@` class variable or `@` instance variable; longest sigil prefix
    /// wins. Falls back to the `@` operator.
    fn instance_or_class_var(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'@' && is_word_start(self.cursor.peek2()) {
            self.cursor.advance_n(3);
            self.cursor.eat_while(is_word_continue);
            return self.token(start, RawTag::ClassVar);
        }
        if is_word_start(self.cursor.peek()) {
            self.cursor.advance_n(2);
            self.cursor.eat_while(is_word_continue);
            return self.token(start, RawTag::InstanceVar);
        }
        self.single(start, RawTag::Op)
    }

    // ─── Symbols ────────────────────────────────────────────────────────

    /// `:` symbol: a word run or quoted string after the colon, unless the
    /// colon is preceded by `:` (scope resolution `::` is two operator
    /// tokens).
    fn symbol_or_op(&mut self, start: u32) -> RawToken {
        if self.cursor.prev() == b':' {
            return self.single(start, RawTag::Op);
        }
        let next = self.cursor.peek();
        if is_word_start(next) {
            self.cursor.advance_n(2);
            self.cursor.eat_while(is_word_continue);
            if matches!(self.cursor.current(), b'!' | b'?') && self.cursor.peek() != b'=' {
                self.cursor.advance();
            }
            return self.token(start, RawTag::Symbol);
        }
        if matches!(next, b'"' | b'\'') {
            self.cursor.advance(); // consume ':'
            self.cursor.advance(); // consume quote
            self.delimited_body(next);
            return self.token(start, RawTag::Symbol);
        }
        self.single(start, RawTag::Op)
    }

    // ─── Unknown input ──────────────────────────────────────────────────

    /// Consume one full code point so the token stream stays on UTF-8
    /// character boundaries.
    fn unknown(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::Unknown)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Locate the end of a heredoc: the end of the first line at or after the
/// next line break whose content is the terminator identifier.
///
/// With the indent flag the identifier may be preceded by horizontal
/// whitespace; otherwise it must sit at column zero. Trailing horizontal
/// whitespace (and a CR before LF) is tolerated after the identifier.
/// Returns `source_len` when no terminator line exists.
fn find_heredoc_end(la: &Cursor<'_>, ident_start: u32, ident_end: u32, indented: bool) -> u32 {
    let len = la.source_len();
    let mut line_start = match la.next_newline(la.pos()) {
        Some(nl) => nl + 1,
        None => return len,
    };
    loop {
        let line_end = la.next_newline(line_start).unwrap_or(len);
        if is_terminator_line(la, line_start, line_end, ident_start, ident_end, indented) {
            return line_end;
        }
        if line_end >= len {
            return len;
        }
        line_start = line_end + 1;
    }
}

/// Does `[line_start, line_end)` hold exactly the terminator identifier?
fn is_terminator_line(
    la: &Cursor<'_>,
    line_start: u32,
    line_end: u32,
    ident_start: u32,
    ident_end: u32,
    indented: bool,
) -> bool {
    let mut p = line_start;
    if indented {
        while p < line_end && matches!(la.byte_at(p), b' ' | b'\t') {
            p += 1;
        }
    }
    let ident_len = ident_end - ident_start;
    if line_end - p < ident_len {
        return false;
    }
    for k in 0..ident_len {
        if la.byte_at(p + k) != la.byte_at(ident_start + k) {
            return false;
        }
    }
    p += ident_len;
    while p < line_end && matches!(la.byte_at(p), b' ' | b'\t' | b'\r') {
        p += 1;
    }
    p == line_end
}

/// Closing delimiter for an opener: the three bracket pairs map to their
/// counterparts, everything else self-matches.
fn matching_close(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        other => other,
    }
}

/// 256-byte lookup table for word continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_WORD_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` can continue a word run.
#[inline]
fn is_word_continue(b: u8) -> bool {
    IS_WORD_CONTINUE_TABLE[b as usize]
}

/// Returns `true` if `b` can start a word run.
#[inline]
fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// 256-byte lookup table for the regex trigger set: the operator-like
/// bytes after which `/` opens a regex rather than division.
static IS_REGEX_TRIGGER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let triggers = b"!%^&*([{-=+|:;,?<>~";
    let mut i = 0;
    while i < triggers.len() {
        table[triggers[i] as usize] = true;
        i += 1;
    }
    table
};

/// Returns `true` if `b` is in the regex trigger set.
#[inline]
fn is_regex_trigger(b: u8) -> bool {
    IS_REGEX_TRIGGER_TABLE[b as usize]
}

/// Special one-character global variable names (`$!`, `$~`, `$0`, ...).
fn is_special_global(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'@'
            | b'&'
            | b'`'
            | b'\''
            | b'+'
            | b'~'
            | b'='
            | b'/'
            | b'\\'
            | b','
            | b';'
            | b'.'
            | b'<'
            | b'>'
            | b'_'
            | b'*'
            | b'$'
            | b'?'
            | b':'
            | b'"'
            | b'0'
    )
}

/// Convenience function: tokenize a source string and collect all raw
/// tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize_raw(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

#[cfg(test)]
mod tests;
