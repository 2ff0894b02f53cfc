//! Low-level tokenizer for a Ruby-family scripting language.
//!
//! This crate is the scanning core of the syntax engine: it turns raw source
//! text into an ordered, gapless sequence of `(RawTag, len)` pairs. It does
//! not resolve keywords or builtin names — that is the job of the
//! classification layer (`ruby_lexer`), which editor hosts consume.
//!
//! # Guarantees
//!
//! - **Tiling**: token lengths sum to the source length exactly; no gaps,
//!   no overlaps.
//! - **Termination**: every dispatch step consumes at least one byte, so
//!   scanning finishes in at most `len(source)` steps for any input,
//!   including unterminated literals and arbitrary binary garbage.
//! - **No errors**: malformed input is classified, never rejected. An
//!   unterminated string extends to end of input; an unrecognized byte
//!   becomes a one-character `Unknown` token.
//!
//! # Architecture
//!
//! - [`SourceBuffer`] — sentinel-terminated byte buffer (cache-line padded).
//! - [`Cursor`] — `Copy` cursor with memchr-accelerated skip helpers.
//! - [`RawScanner`] — byte-dispatch scanner producing [`RawToken`]s.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize_raw, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
