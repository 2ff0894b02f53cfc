use super::*;

#[test]
fn sentinel_follows_content() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"abc");
    assert_eq!(buf.as_sentinel_bytes()[3], 0);
}

#[test]
fn padding_is_zero_filled() {
    let buf = SourceBuffer::new("xy");
    let bytes = buf.as_sentinel_bytes();
    assert_eq!(bytes.len() % 64, 0);
    assert!(bytes[2..].iter().all(|&b| b == 0));
}

#[test]
fn buffer_rounds_to_cache_line() {
    // 63 bytes + sentinel fits exactly in one cache line
    let buf = SourceBuffer::new(&"a".repeat(63));
    assert_eq!(buf.as_sentinel_bytes().len(), 64);

    // 64 bytes + sentinel needs a second line
    let buf = SourceBuffer::new(&"a".repeat(64));
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
}

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_sentinel_bytes().len(), 64);
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hi");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
    assert_eq!(cursor.source_len(), 2);
}

#[test]
fn interior_nulls_are_preserved() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
}

#[test]
fn non_ascii_content() {
    let buf = SourceBuffer::new("λ = 1");
    assert_eq!(buf.len(), 6); // λ is 2 bytes
    assert_eq!(&buf.as_bytes()[..2], "λ".as_bytes());
}
