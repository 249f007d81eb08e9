use super::*;

#[test]
fn peek_does_not_consume() {
    let cur = Cursor::new("ab");
    assert_eq!(cur.peek(), Some('a'));
    assert_eq!(cur.peek(), Some('a'));
}

#[test]
fn bump_advances_one_character() {
    let mut cur = Cursor::new("ab");
    assert_eq!(cur.bump(), Some('a'));
    assert_eq!(cur.peek(), Some('b'));
    assert_eq!(cur.bump(), Some('b'));
    assert_eq!(cur.bump(), None);
}

#[test]
fn at_end_tracks_remaining_input() {
    let mut cur = Cursor::new("x");
    assert!(!cur.at_end());
    cur.bump();
    assert!(cur.at_end());
    assert_eq!(cur.peek(), None);
}
