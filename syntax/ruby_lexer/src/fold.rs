//! Per-line fold-level deltas for code folding.
//!
//! A line's delta is the net number of fold regions it opens (positive) or
//! closes (negative): block keywords and opening brackets count `+1`, `end`
//! and closing brackets count `-1`. The host turns the running sum into
//! fold levels.
//!
//! Brackets inside string-like literals, regexes, and comments never count:
//! deltas are computed over the classified token stream, so such brackets
//! are literal content, not `Operator` tokens.

use memchr::memchr_iter;
use tracing::trace;

use crate::classify::{tokenize, TokenKind};

/// Effect a block keyword has on the fold level of its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldEffect {
    /// Always opens a region (`def`, `class`, `do`, ...).
    Open,
    /// Always closes a region (`end`).
    Close,
    /// Opens a region only in statement position; as a trailing modifier
    /// (`x if y`) it has no `end` and folds nothing.
    OpenUnlessModifier,
}

impl FoldEffect {
    /// Fold effect of a keyword, or `None` for keywords that never fold
    /// (`else`, `return`, `nil`, ...).
    pub fn of(keyword: &str) -> Option<FoldEffect> {
        match keyword {
            "begin" | "case" | "class" | "def" | "do" | "for" | "module" => {
                Some(FoldEffect::Open)
            }
            "end" => Some(FoldEffect::Close),
            "if" | "unless" | "until" | "while" => Some(FoldEffect::OpenUnlessModifier),
            _ => None,
        }
    }
}

/// Compute the fold-level delta of every line.
///
/// Returns one entry per line, in order; a source with no line breaks has
/// exactly one. The deltas of a well-formed program sum to zero.
pub fn fold_deltas(source: &str) -> Vec<i32> {
    let bytes = source.as_bytes();

    // Byte offset of the first byte of each line.
    let mut line_starts: Vec<u32> = Vec::new();
    line_starts.push(0);
    for nl in memchr_iter(b'\n', bytes) {
        line_starts.push(u32::try_from(nl).unwrap_or(u32::MAX).saturating_add(1));
    }

    let mut deltas = vec![0i32; line_starts.len()];
    for tok in tokenize(source) {
        let delta = match tok.kind {
            TokenKind::Keyword => {
                let word = &source[tok.start as usize..tok.end as usize];
                match FoldEffect::of(word) {
                    Some(FoldEffect::Open) => 1,
                    Some(FoldEffect::Close) => -1,
                    Some(FoldEffect::OpenUnlessModifier) => {
                        let line = line_of(&line_starts, tok.start);
                        i32::from(opens_block(bytes, line_starts[line], tok.start))
                    }
                    None => 0,
                }
            }
            // Brackets are single-byte Operator tokens; other operators
            // (`::`, `=`, ...) fall through the byte check.
            TokenKind::Operator if tok.end - tok.start == 1 => {
                match bytes[tok.start as usize] {
                    b'(' | b'[' | b'{' => 1,
                    b')' | b']' | b'}' => -1,
                    _ => 0,
                }
            }
            _ => 0,
        };
        if delta != 0 {
            deltas[line_of(&line_starts, tok.start)] += delta;
        }
    }
    trace!(lines = deltas.len(), "computed fold deltas");
    deltas
}

/// Index of the line containing byte offset `pos`.
fn line_of(line_starts: &[u32], pos: u32) -> usize {
    line_starts.partition_point(|&s| s <= pos).saturating_sub(1)
}

/// Is a conditional keyword at `tok_start` in statement position?
///
/// Statement position means only horizontal whitespace precedes it on its
/// line, and the previous line does not end with a `\` continuation (a
/// continued `x \ if y` is still the modifier form).
fn opens_block(bytes: &[u8], line_start: u32, tok_start: u32) -> bool {
    let prefix = &bytes[line_start as usize..tok_start as usize];
    if !prefix.iter().all(|&b| b == b' ' || b == b'\t') {
        return false;
    }
    if line_start == 0 {
        return true;
    }
    // line_start - 1 is the '\n' ending the previous line; step over an
    // optional '\r' before checking for the continuation backslash.
    let mut j = (line_start - 1) as usize;
    if j > 0 && bytes[j - 1] == b'\r' {
        j -= 1;
    }
    !(j > 0 && bytes[j - 1] == b'\\')
}
