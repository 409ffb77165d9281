use super::*;

fn events(parser: &mut SseParser, input: &str) -> Vec<SseEvent> {
    parser.push(input.as_bytes())
}

#[test]
fn parses_single_event() {
    let mut parser = SseParser::new();
    let out = events(&mut parser, "event: message_start\ndata: {\"a\":1}\n\n");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].event.as_deref(), Some("message_start"));
    assert_eq!(out[0].data, "{\"a\":1}");
}

#[test]
fn event_split_across_chunks() {
    let mut parser = SseParser::new();
    assert!(events(&mut parser, "data: {\"text\":").is_empty());
    assert!(events(&mut parser, "\"hi\"}").is_empty());
    let out = events(&mut parser, "\n\n");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data, "{\"text\":\"hi\"}");
}

#[test]
fn multibyte_character_split_across_chunks() {
    // "é" (0xC3 0xA9) split between two transport chunks inside a data line.
    let mut parser = SseParser::new();
    assert!(parser.push(b"data: caf\xC3").is_empty());
    let out = parser.push(b"\xA9\n\n");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data, "caf\u{e9}");
}

#[test]
fn crlf_line_endings() {
    let mut parser = SseParser::new();
    let out = events(&mut parser, "data: one\r\n\r\ndata: two\r\n\r\n");
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].data, "one");
    assert_eq!(out[1].data, "two");
}

#[test]
fn comments_and_blank_runs_ignored() {
    let mut parser = SseParser::new();
    let out = events(&mut parser, ": keep-alive\n\n\n\ndata: x\n\n");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data, "x");
}

#[test]
fn multiline_data_joined_with_newline() {
    let mut parser = SseParser::new();
    let out = events(&mut parser, "data: first\ndata: second\n\n");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data, "first\nsecond");
}

#[test]
fn data_without_space_after_colon() {
    let mut parser = SseParser::new();
    let out = events(&mut parser, "data:[DONE]\n\n");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data, "[DONE]");
}

#[test]
fn byte_at_a_time_feed() {
    let mut parser = SseParser::new();
    let input = "event: delta\ndata: ok\n\n";
    let mut out = Vec::new();
    for byte in input.as_bytes() {
        out.extend(parser.push(&[*byte]));
    }
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].event.as_deref(), Some("delta"));
    assert_eq!(out[0].data, "ok");
}
