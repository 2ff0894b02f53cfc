#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::SourceBuffer;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
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

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

// ─── Properties ──────────────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "def greet(name)\n  puts \"hi #{name}\"\nend\n",
        "\"unterminated",
        "%w(a (b) c) %r{x}i <<~EOT\nbody\nEOT",
        ":sym a::B $! @@cv @iv ?c 1_000 3.14e-2",
        "  \t\n  \r\n  # comment",
        "a / b = /regex/iox",
    ];
    for source in sources {
        let tokens = scan(source);
        let total_len: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(
            total_len,
            u32::try_from(source.len()).unwrap_or(u32::MAX),
            "total token length mismatch for {source:?}",
        );
    }
}

#[test]
fn every_token_has_positive_length() {
    let sources = ["def x; end", "+-*/%", "\"str\" 'c' `cmd`", ":s $g @i", "\0\0"];
    for source in sources {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor());
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

#[test]
fn retokenizing_is_idempotent() {
    let source = "class Foo\n  def bar?\n    x = /re/ if y\n  end\nend\n";
    assert_eq!(scan(source), scan(source));
}

#[test]
fn all_printable_ascii_produce_valid_tokens() {
    for byte in 32u8..=126 {
        let bytes = [byte];
        let source = std::str::from_utf8(&bytes).unwrap_or(" ");
        let tokens = scan(source);
        let total_len: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(
            total_len, 1,
            "byte {:?} produced total_len={}, tokens={:?}",
            byte as char, total_len, tokens
        );
    }
}

// ─── Whitespace, Newlines, Comments ──────────────────────────────────────

#[test]
fn whitespace_and_newlines() {
    assert_eq!(scan_tags("  \t "), vec![RawTag::Whitespace]);
    assert_eq!(scan_tags("\n"), vec![RawTag::Newline]);
    assert_eq!(scan_tags("\r\n"), vec![RawTag::Newline]);
    assert_eq!(scan("\r\n")[0].len, 2);
    assert_eq!(scan_tags("\r"), vec![RawTag::Whitespace]);
}

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(scan_tags("# hi"), vec![RawTag::Comment]);
    assert_eq!(
        scan_tags("# hi\nx"),
        vec![RawTag::Comment, RawTag::Newline, RawTag::Word]
    );
}

// ─── Words ───────────────────────────────────────────────────────────────

#[test]
fn word_shapes() {
    assert_eq!(scan_tags("foo"), vec![RawTag::Word]);
    assert_eq!(scan_tags("_private"), vec![RawTag::Word]);
    assert_eq!(scan_tags("Const1"), vec![RawTag::Word]);
    assert_eq!(scan("empty?")[0].len, 6);
    assert_eq!(scan("save!")[0].len, 5);
}

#[test]
fn word_suffix_not_taken_before_equals() {
    // `a != b` keeps `!=` out of the word
    let toks = scan("a != b");
    assert_eq!(toks[0], RawToken { tag: RawTag::Word, len: 1 });
    assert_eq!(toks[2].tag, RawTag::Op);
}

#[test]
fn keywords_are_plain_words_here() {
    // The raw scanner does not resolve keywords
    assert_eq!(scan_tags("if"), vec![RawTag::Word]);
    assert_eq!(scan_tags("end"), vec![RawTag::Word]);
    assert_eq!(scan_tags("puts"), vec![RawTag::Word]);
}

// ─── Numbers ─────────────────────────────────────────────────────────────

#[test]
fn integer_literals() {
    assert_eq!(scan_tags("42"), vec![RawTag::Int]);
    assert_eq!(scan_tags("1_000"), vec![RawTag::Int]);
    assert_eq!(scan("1_000")[0].len, 5);
    assert_eq!(scan_tags("0"), vec![RawTag::Int]);
}

#[test]
fn radix_literals() {
    assert_eq!(scan_tags("0xDEAD_BEEF"), vec![RawTag::HexInt]);
    assert_eq!(scan_tags("0b1010_0101"), vec![RawTag::BinInt]);
    assert_eq!(scan_tags("0o777"), vec![RawTag::OctInt]);
}

#[test]
fn bare_radix_prefix_is_not_swallowed() {
    // `0x` with no digit: Int `0` then word `x`
    assert_eq!(scan_tags("0x"), vec![RawTag::Int, RawTag::Word]);
    assert_eq!(scan_tags("0b"), vec![RawTag::Int, RawTag::Word]);
}

#[test]
fn float_literals() {
    assert_eq!(scan_tags("3.14"), vec![RawTag::Float]);
    assert_eq!(scan_tags("1e5"), vec![RawTag::Float]);
    assert_eq!(scan_tags("2.5E-3"), vec![RawTag::Float]);
    assert_eq!(scan("6.022e23")[0].len, 8);
}

#[test]
fn dot_after_int_is_not_float() {
    // `42..` is Int then two dots; `42.foo` is a method call
    assert_eq!(
        scan_tags("42.."),
        vec![RawTag::Int, RawTag::Op, RawTag::Op]
    );
    assert_eq!(
        scan_tags("42.foo"),
        vec![RawTag::Int, RawTag::Op, RawTag::Word]
    );
}

#[test]
fn rational_imaginary_suffixes() {
    assert_eq!(scan("1r")[0], RawToken { tag: RawTag::Int, len: 2 });
    assert_eq!(scan("2i")[0], RawToken { tag: RawTag::Int, len: 2 });
    assert_eq!(scan("3ri")[0], RawToken { tag: RawTag::Int, len: 3 });
    assert_eq!(scan("1.5i")[0], RawToken { tag: RawTag::Float, len: 4 });
    // `1re` is Int then word
    assert_eq!(scan_tags("1re"), vec![RawTag::Int, RawTag::Word]);
}

#[test]
fn signed_numbers() {
    assert_eq!(scan("-1"), vec![RawToken { tag: RawTag::Int, len: 2 }]);
    assert_eq!(scan("+2.5"), vec![RawToken { tag: RawTag::Float, len: 4 }]);
    // Sign without a digit stays an operator
    assert_eq!(
        scan_tags("a - b"),
        vec![
            RawTag::Word,
            RawTag::Whitespace,
            RawTag::Op,
            RawTag::Whitespace,
            RawTag::Word
        ]
    );
}

#[test]
fn char_code_literals() {
    assert_eq!(scan("?a"), vec![RawToken { tag: RawTag::CharCode, len: 2 }]);
    assert_eq!(scan("?λ")[0].len, 3); // full code point
    // `?` before a longer word run is the ternary operator
    assert_eq!(scan_tags("?ab"), vec![RawTag::Op, RawTag::Word]);
    assert_eq!(scan_tags("? x"), vec![RawTag::Op, RawTag::Whitespace, RawTag::Word]);
}

// ─── Strings & Commands ──────────────────────────────────────────────────

#[test]
fn quoted_strings() {
    assert_eq!(scan("\"hello\""), vec![RawToken { tag: RawTag::String, len: 7 }]);
    assert_eq!(scan("'it'"), vec![RawToken { tag: RawTag::String, len: 4 }]);
    assert_eq!(scan("`ls -l`"), vec![RawToken { tag: RawTag::Command, len: 7 }]);
}

#[test]
fn escaped_delimiter_is_content() {
    assert_eq!(
        scan(r#""a\"b""#),
        vec![RawToken { tag: RawTag::String, len: 6 }]
    );
    assert_eq!(
        scan(r"'a\'b'"),
        vec![RawToken { tag: RawTag::String, len: 6 }]
    );
}

#[test]
fn unterminated_string_extends_to_eof() {
    assert_eq!(scan("\"abc"), vec![RawToken { tag: RawTag::String, len: 4 }]);
    assert_eq!(scan("'"), vec![RawToken { tag: RawTag::String, len: 1 }]);
}

#[test]
fn strings_span_lines() {
    assert_eq!(
        scan("\"a\nb\""),
        vec![RawToken { tag: RawTag::String, len: 5 }]
    );
}

#[test]
fn string_frozen_flag() {
    assert_eq!(scan("\"abc\"f"), vec![RawToken { tag: RawTag::String, len: 6 }]);
    // `f` beginning a longer word is not a flag
    assert_eq!(
        scan_tags("\"abc\"fx"),
        vec![RawTag::String, RawTag::Word]
    );
}

// ─── Percent Literals ────────────────────────────────────────────────────

#[test]
fn percent_word_array_nests_same_pair() {
    assert_eq!(
        scan("%w(a (b) c)"),
        vec![RawToken { tag: RawTag::PercentLiteral, len: 11 }]
    );
}

#[test]
fn percent_literal_forms() {
    assert_eq!(scan_tags("%q[one]"), vec![RawTag::PercentLiteral]);
    assert_eq!(scan_tags("%Q{two}"), vec![RawTag::PercentLiteral]);
    assert_eq!(scan_tags("%i(a b)"), vec![RawTag::PercentLiteral]);
    assert_eq!(scan_tags("%(bare)"), vec![RawTag::PercentLiteral]);
    assert_eq!(scan_tags("%|pipe|"), vec![RawTag::PercentLiteral]);
}

#[test]
fn percent_regex_with_flags() {
    assert_eq!(scan("%r{ab}im"), vec![RawToken { tag: RawTag::Regex, len: 8 }]);
}

#[test]
fn modulo_operator_declines_percent_literal() {
    // Whitespace or alphanumeric delimiter: plain `%` operator
    assert_eq!(
        scan_tags("a % b"),
        vec![
            RawTag::Word,
            RawTag::Whitespace,
            RawTag::Op,
            RawTag::Whitespace,
            RawTag::Word
        ]
    );
    assert_eq!(scan_tags("a%5"), vec![RawTag::Word, RawTag::Op, RawTag::Int]);
    // `b` is not a percent type letter
    assert_eq!(
        scan_tags("a %b"),
        vec![RawTag::Word, RawTag::Whitespace, RawTag::Op, RawTag::Word]
    );
}

#[test]
fn unterminated_percent_literal_extends_to_eof() {
    assert_eq!(
        scan("%w(a b"),
        vec![RawToken { tag: RawTag::PercentLiteral, len: 6 }]
    );
}

// ─── Regex vs. Division ──────────────────────────────────────────────────

#[test]
fn slash_after_value_is_division() {
    let toks = scan("a / b");
    assert_eq!(toks[2], RawToken { tag: RawTag::Op, len: 1 });
    assert_eq!(scan_tags("10 / 2")[2], RawTag::Op);
}

#[test]
fn slash_after_trigger_is_regex() {
    let toks = scan("= /abc/");
    assert_eq!(toks[2], RawToken { tag: RawTag::Regex, len: 5 });
    assert_eq!(scan_tags("x =~ /re/")[4], RawTag::Regex);
    assert_eq!(scan_tags("[/re/]")[1], RawTag::Regex);
}

#[test]
fn slash_at_line_start_is_regex() {
    assert_eq!(scan_tags("/abc/"), vec![RawTag::Regex]);
    let toks = scan_tags("x = 1\n/re/");
    assert_eq!(toks[toks.len() - 1], RawTag::Regex);
}

#[test]
fn regex_flags_are_greedy() {
    assert_eq!(scan("/ab/iox"), vec![RawToken { tag: RawTag::Regex, len: 7 }]);
}

#[test]
fn escaped_slash_in_regex() {
    assert_eq!(
        scan(r"/a\/b/"),
        vec![RawToken { tag: RawTag::Regex, len: 6 }]
    );
}

#[test]
fn closing_bracket_does_not_trigger_regex() {
    // `)` is not in the trigger set: a `/` after it is division
    assert_eq!(
        scan_tags("f(x) / 2")[4..],
        [RawTag::Whitespace, RawTag::Op, RawTag::Whitespace, RawTag::Int]
    );
}

// ─── Heredocs ────────────────────────────────────────────────────────────

#[test]
fn squiggly_heredoc_spans_through_terminator() {
    let source = "<<~EOT\nhi\nEOT";
    assert_eq!(
        scan(source),
        vec![RawToken {
            tag: RawTag::Heredoc,
            len: u32::try_from(source.len()).unwrap_or(0),
        }]
    );
}

#[test]
fn plain_heredoc_requires_column_zero_terminator() {
    // The indented ` EOT` line is not a terminator without the flag
    let source = "<<EOT\nx\n EOT\nEOT";
    assert_eq!(
        scan(source),
        vec![RawToken { tag: RawTag::Heredoc, len: 16 }]
    );
}

#[test]
fn dash_heredoc_accepts_indented_terminator() {
    let source = "<<-EOT\nx\n  EOT\n";
    let toks = scan(source);
    assert_eq!(toks[0], RawToken { tag: RawTag::Heredoc, len: 14 });
    assert_eq!(toks[1].tag, RawTag::Newline);
}

#[test]
fn quoted_heredoc_header() {
    let source = "<<'EOT'\nraw\nEOT";
    assert_eq!(scan_tags(source), vec![RawTag::Heredoc]);
    // Mismatched close quote declines the heredoc
    assert_eq!(scan_tags("<<'EOT\"")[0], RawTag::Op);
}

#[test]
fn unterminated_heredoc_extends_to_eof() {
    let source = "<<EOT\nnever closed";
    assert_eq!(
        scan(source),
        vec![RawToken { tag: RawTag::Heredoc, len: 18 }]
    );
}

#[test]
fn shift_operator_is_not_a_heredoc() {
    assert_eq!(
        scan_tags("a << b"),
        vec![
            RawTag::Word,
            RawTag::Whitespace,
            RawTag::Op,
            RawTag::Op,
            RawTag::Whitespace,
            RawTag::Word
        ]
    );
}

#[test]
fn heredoc_swallows_rest_of_header_line() {
    // Everything between the header and the terminator is one token
    let source = "<<EOT.strip\nbody\nEOT";
    assert_eq!(scan_tags(source), vec![RawTag::Heredoc]);
}

// ─── Variables ───────────────────────────────────────────────────────────

#[test]
fn global_variables() {
    assert_eq!(scan("$stdout"), vec![RawToken { tag: RawTag::GlobalVar, len: 7 }]);
    assert_eq!(scan("$!"), vec![RawToken { tag: RawTag::GlobalVar, len: 2 }]);
    assert_eq!(scan("$1"), vec![RawToken { tag: RawTag::GlobalVar, len: 2 }]);
    assert_eq!(scan("$-a"), vec![RawToken { tag: RawTag::GlobalVar, len: 3 }]);
    assert_eq!(scan_tags("$ x"), vec![RawTag::Op, RawTag::Whitespace, RawTag::Word]);
}

#[test]
fn instance_and_class_variables() {
    assert_eq!(scan("@name"), vec![RawToken { tag: RawTag::InstanceVar, len: 5 }]);
    assert_eq!(scan("@@count"), vec![RawToken { tag: RawTag::ClassVar, len: 7 }]);
    assert_eq!(scan_tags("@ x"), vec![RawTag::Op, RawTag::Whitespace, RawTag::Word]);
}

// ─── Symbols ─────────────────────────────────────────────────────────────

#[test]
fn symbol_spans_whole_input() {
    assert_eq!(scan(":foo"), vec![RawToken { tag: RawTag::Symbol, len: 4 }]);
    assert_eq!(scan(":valid?"), vec![RawToken { tag: RawTag::Symbol, len: 7 }]);
    assert_eq!(scan(":\"a b\""), vec![RawToken { tag: RawTag::Symbol, len: 6 }]);
}

#[test]
fn scope_resolution_is_two_operators() {
    assert_eq!(
        scan_tags("a::B"),
        vec![RawTag::Word, RawTag::Op, RawTag::Op, RawTag::Word]
    );
}

#[test]
fn bare_colon_is_operator() {
    assert_eq!(
        scan_tags("a : b"),
        vec![
            RawTag::Word,
            RawTag::Whitespace,
            RawTag::Op,
            RawTag::Whitespace,
            RawTag::Word
        ]
    );
}

// ─── Delimiters & Unknown ────────────────────────────────────────────────

#[test]
fn brackets_get_distinct_tags() {
    assert_eq!(
        scan_tags("([{}])"),
        vec![
            RawTag::LeftParen,
            RawTag::LeftBracket,
            RawTag::LeftBrace,
            RawTag::RightBrace,
            RawTag::RightBracket,
            RawTag::RightParen
        ]
    );
}

#[test]
fn unknown_consumes_one_code_point() {
    assert_eq!(scan("é"), vec![RawToken { tag: RawTag::Unknown, len: 2 }]);
    assert_eq!(scan("\u{1}"), vec![RawToken { tag: RawTag::Unknown, len: 1 }]);
    assert_eq!(scan("\0x")[0], RawToken { tag: RawTag::Unknown, len: 1 });
}

// ─── Partial re-lex ──────────────────────────────────────────────────────

#[test]
fn mid_buffer_start_reseeds_regex_state() {
    // Starting at the `/` of `a = /x/`: the back-scan sees `=` and lexes
    // a regex, matching the full lex.
    let buf = SourceBuffer::new("a = /x/");
    let mut cursor = buf.cursor();
    cursor.advance_n(4);
    let mut scanner = RawScanner::new(cursor);
    assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Regex, len: 3 });

    // Starting at the `/` of `a / b`: the back-scan sees `a` and lexes
    // division.
    let buf = SourceBuffer::new("a / b");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    let mut scanner = RawScanner::new(cursor);
    assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Op, len: 1 });
}

// ─── Property tests ──────────────────────────────────────────────────────

#[allow(
    clippy::arc_with_non_send_sync,
    reason = "proptest macros internally use Arc"
)]
mod proptest_tiling {
    use super::scan;
    use proptest::prelude::*;

    proptest! {
        /// Token spans tile arbitrary inputs exactly.
        #[test]
        fn tokens_tile_arbitrary_input(source in ".*") {
            let tokens = scan(&source);
            let total: u64 = tokens.iter().map(|t| u64::from(t.len)).sum();
            prop_assert_eq!(total, source.len() as u64);
            for tok in &tokens {
                prop_assert!(tok.len > 0);
            }
        }

        /// Ruby-flavored fragments also tile and re-lex identically.
        #[test]
        fn ruby_flavored_input_is_deterministic(
            source in "[ \\t\\na-z0-9#\"'`%/<>:$@?!=({\\[\\]})~.\\\\-]{0,80}"
        ) {
            let first = scan(&source);
            let second = scan(&source);
            prop_assert_eq!(first, second);
        }
    }
}
