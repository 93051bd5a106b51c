use std::io::Cursor;

use super::*;

fn prompter(input: &str) -> TermPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TermPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_confirm_accepts_yes_variants() {
    for answer in ["y\n", "Y\n", "yes\n", " YES \r\n"] {
        let p = prompter(answer);
        assert!(p.confirm("Continue?").unwrap(), "answer: {answer:?}");
    }
}

#[test]
fn test_confirm_declines_everything_else() {
    for answer in ["\n", "n\n", "no\n", "sure\n", ""] {
        let p = prompter(answer);
        assert!(!p.confirm("Continue?").unwrap(), "answer: {answer:?}");
    }
}

#[test]
fn test_confirm_writes_question() {
    let p = prompter("y\n");
    p.confirm("Are you sure you want to clear the entire list?")
        .unwrap();

    let written = String::from_utf8(p.into_writer()).unwrap();
    assert_eq!(
        written,
        "Are you sure you want to clear the entire list? [y/N]: "
    );
}

#[test]
fn test_input_reads_lines_until_closed() {
    let p = prompter("add Rice\r\n\nshow");

    assert_eq!(p.input("> ").unwrap(), Some("add Rice".to_string()));
    assert_eq!(p.input("> ").unwrap(), Some(String::new()));
    assert_eq!(p.input("> ").unwrap(), Some("show".to_string()));
    assert_eq!(p.input("> ").unwrap(), None);
}

#[test]
fn test_input_with_default() {
    let p = prompter("\nBeans\n");

    assert_eq!(p.input_with_default("Name", "Rice").unwrap(), "Rice");
    assert_eq!(p.input_with_default("Name", "Rice").unwrap(), "Beans");
    // closed input keeps the default
    assert_eq!(p.input_with_default("Name", "Rice").unwrap(), "Rice");

    let written = String::from_utf8(p.into_writer()).unwrap();
    assert_eq!(written, "Name [Rice]: ".repeat(3));
}
