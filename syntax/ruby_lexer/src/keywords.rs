//! Keyword and builtin-function resolution.
//!
//! Two length-bucketed tables:
//! 1. **Reserved keywords** — control-flow and definition words, always
//!    resolved as keywords.
//! 2. **Builtin functions** — kernel methods (`puts`, `require`, ...),
//!    styled as function calls unless they appear in receiver position.
//!
//! Both lookups take the word's *stem*: the caller strips one trailing
//! `!`/`?` first, so `exit!` resolves through the `exit` bucket and
//! `defined?` through `defined`.
//!
//! The word's length is a first-pass filter, then the match compares only
//! against the words of that length. Words outside the table's length
//! range are rejected without any string comparison.

/// Is `stem` a reserved keyword?
#[inline]
pub(crate) fn is_keyword(stem: &str) -> bool {
    let len = stem.len();
    if !(2..=7).contains(&len) {
        return false;
    }
    match len {
        2 => matches!(stem, "do" | "if" | "in" | "or"),
        3 => matches!(stem, "END" | "and" | "def" | "end" | "for" | "nil" | "not"),
        4 => matches!(
            stem,
            "case" | "else" | "next" | "redo" | "self" | "then" | "true" | "when"
        ),
        5 => matches!(
            stem,
            "BEGIN"
                | "alias"
                | "begin"
                | "break"
                | "class"
                | "elsif"
                | "false"
                | "retry"
                | "super"
                | "undef"
                | "until"
                | "while"
                | "yield"
        ),
        6 => matches!(stem, "ensure" | "module" | "rescue" | "return" | "unless"),
        7 => stem == "defined",
        _ => false,
    }
}

/// Is `stem` a builtin kernel function?
#[inline]
pub(crate) fn is_builtin(stem: &str) -> bool {
    let len = stem.len();
    if !(1..=16).contains(&len) {
        return false;
    }
    match len {
        1 => stem == "p",
        3 => stem == "sub",
        4 => matches!(
            stem,
            "chop"
                | "eval"
                | "exec"
                | "exit"
                | "fail"
                | "fork"
                | "gets"
                | "gsub"
                | "load"
                | "loop"
                | "open"
                | "proc"
                | "putc"
                | "puts"
                | "rand"
                | "test"
                | "trap"
        ),
        5 => matches!(
            stem,
            "catch" | "chomp" | "print" | "raise" | "sleep" | "split" | "srand"
        ),
        6 => matches!(
            stem,
            "caller" | "format" | "lambda" | "printf" | "system"
        ),
        7 => matches!(
            stem,
            "at_exit" | "binding" | "require" | "sprintf" | "syscall"
        ),
        8 => matches!(stem, "autoload" | "iterator" | "readline"),
        9 => matches!(stem, "readlines" | "trace_var"),
        11 => stem == "untrace_var",
        16 => stem == "require_relative",
        _ => false,
    }
}
