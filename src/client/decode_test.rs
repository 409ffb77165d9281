use super::*;

#[test]
fn ascii_passes_through() {
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(b"hello"), "hello");
    assert_eq!(decoder.pending(), 0);
}

#[test]
fn three_byte_char_split_one_plus_two() {
    // "€" is E2 82 AC.
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(&[0xE2]), "");
    assert_eq!(decoder.pending(), 1);
    assert_eq!(decoder.push(&[0x82, 0xAC]), "€");
    assert_eq!(decoder.pending(), 0);
}

#[test]
fn three_byte_char_split_two_plus_one() {
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(&[0xE2, 0x82]), "");
    assert_eq!(decoder.push(&[0xAC]), "€");
}

#[test]
fn four_byte_char_split_two_plus_two() {
    // "😀" is F0 9F 98 80.
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(&[0xF0, 0x9F]), "");
    assert_eq!(decoder.push(&[0x98, 0x80]), "😀");
}

#[test]
fn split_char_inside_mixed_chunks() {
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(b"caf\xC3"), "caf");
    assert_eq!(decoder.push(b"\xA9 au lait"), "é au lait");
}

#[test]
fn invalid_byte_becomes_replacement() {
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(&[0xFF]), "\u{FFFD}");
    assert_eq!(decoder.pending(), 0);
}

#[test]
fn interrupted_sequence_becomes_replacement() {
    // A lead byte followed by a non-continuation byte is invalid, not incomplete.
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(&[0xE2]), "");
    assert_eq!(decoder.push(&[0x41]), "\u{FFFD}A");
}

#[test]
fn truncated_tail_is_held_not_replaced() {
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(b"ok\xE2\x82"), "ok");
    assert_eq!(decoder.pending(), 2);
}

#[test]
fn empty_chunk_is_noop() {
    let mut decoder = Utf8Accumulator::new();
    assert_eq!(decoder.push(&[0xE2]), "");
    assert_eq!(decoder.push(&[]), "");
    assert_eq!(decoder.pending(), 1);
}
