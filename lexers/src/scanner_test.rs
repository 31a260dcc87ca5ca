use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("just a test buffer@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('j'));
    assert_eq!(s.curr(), Some('j'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert!(s.set_pos(s.pos() - 1));
    assert_eq!(s.curr(), Some('r'));
    assert_eq!(s.next(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert!(!s.set_pos(100));
    assert!(!s.set_pos(-2));
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("just a test buffer@".chars());
    for _ in 0..4 { assert!(s.next().is_some()); }
    assert_eq!(s.extract().iter().cloned().collect::<String>(), "just");
    assert_eq!(s.offset(), 4);
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some(' '));
    for _ in 0..6 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), " a test");
    assert_eq!(s.offset(), 11);
    assert_eq!(s.next(), Some(' '));
}

#[test]
fn test_extract_past_end() {
    let mut s = Scanner::new("ab".chars());
    while s.next().is_some() {}
    assert_eq!(s.view(), &['a', 'b']);
    assert_eq!(s.extract_string(), "ab");
    assert_eq!(s.offset(), 2);
    assert_eq!(s.next(), None);
    s.ignore();
    assert_eq!(s.offset(), 2);
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("heey  you!".chars());
    assert!(!s.skip_ws());
    assert_eq!(s.curr(), None);
    assert_eq!(s.accept_any(&['h', 'e']), Some('h'));
    assert_eq!(s.curr(), Some('h'));
    assert_eq!(s.accept_any(&['h', 'e']), Some('e'));
    assert_eq!(s.curr(), Some('e'));
    assert_eq!(s.accept_if(|c| *c == 'e'), Some('e'));
    assert_eq!(s.accept_if(|c| *c == 'e'), None);
    assert_eq!(s.accept_if(|c| c.is_alphabetic()), Some('y'));
    assert!(s.skip_ws());
    assert!(!s.skip_ws());
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.next(), Some('y'));
    assert_eq!(s.next(), Some('o'));
}

#[test]
fn test_skips() {
    let mut s = Scanner::new("heey  you!".chars());
    assert_eq!(s.accept_any(&['h']), Some('h'));
    assert!(s.skip_all(&['h', 'e', 'y']));
    assert!(!s.skip_all(&['h', 'e', 'y']));
    assert_eq!(s.curr(), Some('y'));
    assert_eq!(s.extract_string(), "heey");
    assert!(s.skip_ws());
    s.ignore();
    assert_eq!(s.offset(), 6);
    assert!(s.skip_all(&['y', 'o', 'u', '!']));
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), None);
}
