use crate::source::*;

fn read_all(text: &str) -> Vec<(usize, String)> {
    let mut source = source_from_text(text);
    let mut lines = vec![];
    while let Some(line) = source.next_line().unwrap() {
        let line = line.to_owned();
        lines.push((source.line_no, line));
    }
    lines
}

#[test]
fn read_empty() {
    assert!(read_all("").is_empty());
}

#[test]
fn read_lines_strips_terminators() {
    let lines = read_all("a\r\nb\n\nc");
    assert_eq!(
        lines,
        vec![
            (1, "a".to_owned()),
            (2, "b".to_owned()),
            (3, "".to_owned()),
            (4, "c".to_owned()),
        ]
    );
}

#[test]
fn current_line_is_tracked() {
    let mut source = source_from_text("first\nsecond\n");
    assert_eq!(source.get_current_line(), None);
    source.next_line().unwrap();
    assert_eq!(source.get_current_line(), Some("first"));
    assert_eq!(source.loc(), Location::new(1, 1));
    source.next_line().unwrap();
    assert_eq!(source.get_current_line(), Some("second"));
    assert!(source.next_line().unwrap().is_none());
    assert_eq!(source.get_current_line(), None);
    assert_eq!(source.line_no, 2);
}

#[test]
fn invalid_utf8_is_an_error() {
    let mut source = source_from_bytes(&[0x66, 0xff, 0xfe, b'\n']);
    let result = source.next_line();
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn location_display() {
    assert_eq!(Location::new(3, 7).to_string(), "3:7");
}

#[test]
fn line_length_limit() {
    let limit = MAX_LINE_LENGTH as usize;

    // Exactly at the limit, counting the terminator
    let text = format!("{}\nnext\n", "a".repeat(limit - 1));
    let mut source = source_from_text(&text);
    assert_eq!(source.next_line().unwrap().map(str::len), Some(limit - 1));
    assert_eq!(source.next_line().unwrap(), Some("next"));

    let text = format!("ok\n{}\n", "a".repeat(limit));
    let mut source = source_from_text(&text);
    assert_eq!(source.next_line().unwrap(), Some("ok"));
    let err = source.next_line().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(source.line_no, 2);
    assert_eq!(source.get_current_line(), None);
}
