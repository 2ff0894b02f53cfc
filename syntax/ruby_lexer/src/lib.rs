//! Classified token stream and fold levels for a Ruby-family scripting
//! language.
//!
//! This crate sits between the raw scanner (`ruby_lexer_core`) and an
//! editor host. It produces the two artifacts a host needs from a single
//! pass over the source:
//!
//! - a **gapless classified token stream** ([`tokenize`], [`styled_spans`])
//!   for syntax coloring, and
//! - **per-line fold deltas** ([`fold_deltas`]) for code folding.
//!
//! No input is rejected: malformed source yields `Unknown` tokens and
//! literals extended to end of input, never an error. Editors re-style on
//! every keystroke, so both passes are allocation-light and linear in the
//! source length.
//!
//! # Example
//!
//! ```
//! use ruby_lexer::{fold_deltas, tokenize, TokenKind};
//!
//! let source = "def greet\n  puts :hi\nend\n";
//! let tokens = tokenize(source);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword); // `def`
//!
//! let deltas = fold_deltas(source);
//! assert_eq!(&deltas[..3], &[1, 0, -1]);
//! ```

mod classify;
mod fold;
mod keywords;

pub use classify::{styled_spans, tokenize, tokenize_from, Token, TokenKind};
pub use fold::{fold_deltas, FoldEffect};
