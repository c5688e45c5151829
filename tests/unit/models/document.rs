use super::*;

fn id(s: &str) -> NodeId {
    NodeId::new(s)
}

#[test]
fn test_line_count_splits_on_newline_only() {
    assert_eq!(line_count(""), 1);
    assert_eq!(line_count("a"), 1);
    assert_eq!(line_count("a\nb"), 2);
    assert_eq!(line_count("a\nb\n"), 3);
    assert_eq!(line_count("\n\n"), 3);
    assert_eq!(line_count("a\r\nb"), 2);
    assert_eq!(line_count("a\rb"), 1);
}

#[test]
fn test_line_count_matches_split() {
    for text in ["", "x", "x\n", "\nx", "a\r\n\r\nb", "один\nдва\nтри"] {
        assert_eq!(line_count(text), text.split('\n').count(), "{text:?}");
    }
}

#[test]
fn test_empty_session() {
    let session = DocumentSession::empty();
    assert!(session.active_file_id().is_none());
    assert_eq!(session.buffer(), "");
    assert_eq!(session.line_count(), 1);
    assert!(session.last_flushed_at().is_none());
    assert!(!session.is_dirty());
}

#[test]
fn test_open_seeds_buffer_and_line_count() {
    let session = DocumentSession::open(
        id("6"),
        "// Header.tsx\nexport default function Header() {\n  return <header>Header Component</header>;\n}"
            .to_string(),
    );
    assert_eq!(session.active_file_id(), Some(&id("6")));
    assert_eq!(session.line_count(), 4);
    assert!(!session.is_dirty());
}

#[test]
fn test_edit_recomputes_line_count_and_keeps_cr() {
    let mut session = DocumentSession::open(id("2"), "a\nb\nc".to_string());
    session.edit("x\r\n".to_string());

    assert_eq!(session.buffer(), "x\r\n");
    assert_eq!(session.line_count(), 2);
    assert_eq!(session.revision(), 1);
    assert!(session.is_dirty());
}

#[test]
fn test_mark_flushed_does_not_touch_buffer() {
    let mut session = DocumentSession::open(id("2"), "abc".to_string());
    session.edit("abcd".to_string());
    let at = Instant::now();
    session.mark_flushed(at);

    assert_eq!(session.buffer(), "abcd");
    assert_eq!(session.last_flushed_at(), Some(at));
    assert!(!session.is_dirty());

    session.edit("abcde".to_string());
    assert!(session.is_dirty());
}

#[test]
fn test_close_resets_everything() {
    let mut session = DocumentSession::open(id("2"), "a\nb".to_string());
    session.mark_flushed(Instant::now());
    session.close();

    assert_eq!(session, DocumentSession::empty());
    assert_eq!(session.line_count(), 1);
}
