use super::*;

type DefaultParser = Parser<3, 8>;

/// Feed `input` one character at a time, collecting the argv of every
/// completed line.
fn feed_all<const A: usize, const L: usize>(
    parser: &mut Parser<A, L>,
    input: &[u8],
) -> std::vec::Vec<std::vec::Vec<std::string::String>> {
    let mut lines = std::vec::Vec::new();
    for &c in input {
        if parser.feed(c) == Step::Complete {
            lines.push(
                parser.argv()[..parser.argc()]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            );
            parser.finish();
        }
    }
    lines
}

#[test]
fn test_new_parser_is_idle() {
    let parser = DefaultParser::new();
    assert_eq!(parser.state(), State::Start);
    assert_eq!(parser.argc(), 0);
    assert_eq!(parser.argv(), ["", "", ""]);
}

#[test]
fn test_simple_line() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"cmd arg1 arg2\r\n");
    assert_eq!(lines, [["cmd", "arg1", "arg2"]]);
}

#[test]
fn test_irregular_spacing_collapses() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"  cmd   arg1  \t arg2 \r\n");
    assert_eq!(lines, [["cmd", "arg1", "arg2"]]);

    let lines = feed_all(&mut parser, b"  cmd   arg1  \r\n");
    assert_eq!(lines, [["cmd", "arg1"]]);
}

#[test]
fn test_line_endings() {
    for input in [&b"led on\r"[..], b"led on\n", b"led on\r\n", b"led on\n\r"] {
        let mut parser = DefaultParser::new();
        let lines = feed_all(&mut parser, input);
        assert_eq!(lines, [["led", "on"]], "input {:?}", input);
    }
}

#[test]
fn test_empty_lines_never_complete() {
    let mut parser = DefaultParser::new();
    for &c in b"\r\n\r\n  \t \r\n" {
        assert_eq!(parser.feed(c), Step::Pending);
    }
    assert_eq!(parser.state(), State::SkipLeadingSpace);
}

#[test]
fn test_consecutive_lines() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"a 1\rb 2\nc 3\r\n");
    assert_eq!(lines, [["a", "1"], ["b", "2"], ["c", "3"]]);
}

#[test]
fn test_unused_slots_are_empty() {
    let mut parser = DefaultParser::new();
    feed_all(&mut parser, b"one two three\r");
    for &c in b"x\r" {
        parser.feed(c);
    }
    assert_eq!(parser.argc(), 1);
    assert_eq!(parser.argv(), ["x", "", ""]);
}

#[test]
fn test_long_token_truncated() {
    let mut parser = Parser::<2, 8>::new();
    // ARG_LEN + 5 characters
    let lines = feed_all(&mut parser, b"abcdefghijklm\r");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0][0], "abcdefg");
    assert_eq!(lines[0][0].len(), 7);
}

#[test]
fn test_truncation_drops_overflow_char() {
    let mut parser = DefaultParser::new();
    // 'h' closes the full token and is lost; the rest starts a new token
    let lines = feed_all(&mut parser, b"abcdefghijklm\r");
    assert_eq!(lines, [["abcdefg", "ijklm"]]);
}

#[test]
fn test_full_token_then_line_end() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"abcdefg\r");
    assert_eq!(lines, [["abcdefg"]]);

    let lines = feed_all(&mut parser, b"set abcdefg\r");
    assert_eq!(lines, [["set", "abcdefg"]]);
}

#[test]
fn test_buffers_never_overrun() {
    let mut parser = Parser::<3, 4>::new();
    let long = [b'x'; 64];
    for &c in long.iter() {
        parser.feed(c);
        assert!(parser.arg(0).len() <= 3);
        assert!(parser.arg(1).len() <= 3);
        assert!(parser.arg(2).len() <= 3);
    }
    assert_eq!(parser.feed(b'\r'), Step::Complete);
    assert_eq!(parser.argc(), 3);
    assert_eq!(parser.argv(), ["xxx", "xxx", "xxx"]);
}

#[test]
fn test_extra_tokens_dropped() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"debug wifi warn extra ignored\r\n");
    assert_eq!(lines, [["debug", "wifi", "warn"]]);
    assert_eq!(parser.state(), State::SkipLeadingSpace);
}

#[test]
fn test_control_and_non_ascii_ignored() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"\x01le\x1bd \xc3\xa9on\x00\r");
    assert_eq!(lines, [["led", "on"]]);
}

#[test]
fn test_del_is_stored() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"ab\x7f \x7f\r");
    assert_eq!(lines, [["ab\x7f", "\x7f"]]);
}

#[test]
fn test_case_preserved() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"LeD On\r");
    assert_eq!(lines, [["LeD", "On"]]);
}

#[test]
fn test_evaluate_until_finish() {
    let mut parser = DefaultParser::new();
    for &c in b"led" {
        assert_eq!(parser.feed(c), Step::Pending);
    }
    assert_eq!(parser.state(), State::CaptureToken);
    assert_eq!(parser.feed(b'\r'), Step::Complete);
    assert_eq!(parser.state(), State::Evaluate);
    assert_eq!(parser.arg(0), "led");

    parser.finish();
    assert_eq!(parser.state(), State::Start);
    // contents survive until the next character
    assert_eq!(parser.arg(0), "led");

    assert_eq!(parser.feed(b'\n'), Step::Pending);
    assert_eq!(parser.argc(), 0);
    assert_eq!(parser.arg(0), "");
}

#[test]
fn test_first_char_of_line_not_lost() {
    let mut parser = DefaultParser::new();
    let lines = feed_all(&mut parser, b"a\rb\r");
    assert_eq!(lines, [["a"], ["b"]]);
}

#[test]
fn test_reset() {
    let mut parser = DefaultParser::new();
    for &c in b"half a li" {
        parser.feed(c);
    }
    parser.reset();
    assert_eq!(parser.state(), State::Start);
    assert_eq!(parser.argc(), 0);
    let lines = feed_all(&mut parser, b"ne\r");
    assert_eq!(lines, [["ne"]]);
}
