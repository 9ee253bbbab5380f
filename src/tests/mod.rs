/*! End-to-end tests covering the whole pipeline. */

use pretty_assertions::assert_eq;

use crate::errors::CompileError;
use crate::{compile, Scanner};

/// (pattern, candidate, expected match result)
const MATCH_CORPUS: &[(&str, &str, bool)] = &[
    ("a", "a", true),
    ("a", "b", false),
    ("^abcd$", "abcd", true),
    ("^abcd$", "abc", false),
    ("^abc$", "abcd", false),
    ("^abcd$", "bcd", false),
    ("^bcd$", "abcd", false),
    ("a*", "a", true),
    ("a*", "aaaa", true),
    ("a*", "", true),
    ("a*", "b", true),
    ("a*b", "aaaab", true),
    ("^(a|b|c)$", "a", true),
    ("^(a|b|c)$", "b", true),
    ("^(a|b|c)$", "c", true),
    ("^(a|b|c)$", "d", false),
    ("^(a|b|c)$", "ab", false),
    ("car|boat|jet", "ab", false),
    ("car|boat|jet", "caoaret", false),
    ("car|boat|jet", "car", true),
    ("car|boat|jet", "boat", true),
    ("car|boat|jet", "jet", true),
    ("^((abc)+)$", "abc", true),
    ("^((abc)+)$", "abcabc", true),
    ("^((abc)+)$", "abcabcabc", true),
    ("^((abc)+)$", "abcabcab", false),
    ("^((abc)+)$", "abcabcaba", false),
    ("^((abc)+)$", "", false),
    ("^((abc)*)$", "", true),
    ("^((abc)?)$", "", true),
    ("^((abc)?)$", "abc", true),
    ("^(abc)?$", "z", false),
    ("^((a*)*)$", "a", true),
    ("^((a*)*)$", "b", false),
    ("^abc", "abcd", true),
    ("^bcd", "abcd", false),
    ("^bcd$", "bcd", true),
    ("^bcd$", "bcde", false),
    ("", "sdgsa", true),
    ("", "", true),
    ("^$", "", true),
    ("^$", "a", false),
    ("abc", "abc", true),
    ("abc", "xbc", false),
    ("abc", "axc", false),
    ("abc", "abx", false),
    ("abc", "xabcy", true),
    ("abc", "ababc", true),
    ("ab*c", "abc", true),
    ("ab*bc", "abc", true),
    ("ab*bc", "abbc", true),
    ("ab*bc", "abbbbc", true),
    ("ab+bc", "abbc", true),
    ("ab+bc", "abc", false),
    ("ab+bc", "abq", false),
    ("ab+bc", "abbbbc", true),
    ("ab?bc", "abbc", true),
    ("ab?bc", "abc", true),
    ("ab?bc", "abbbbc", false),
    ("ab?c", "abc", true),
    ("^abc$", "abc", true),
    ("^abc$", "abcc", false),
    ("^abc", "abcc", true),
    ("^abc$", "aabc", false),
    ("abc$", "aabc", true),
    ("^", "abc", true),
    ("$", "abc", true),
    ("ab|cd", "abc", true),
    ("ab|cd", "abcd", true),
    ("()ef", "def", true),
    ("((a))", "abc", true),
    ("(a)b(c)", "abc", true),
    ("a+b+c", "aabbabc", true),
    ("(a+|b)*", "ab", true),
    ("(a+|b)+", "ab", true),
    ("(a+|b)?", "ab", true),
    ("abc", "", false),
    ("a|b|c|d|e", "e", true),
    ("(a|b|c|d|e)f", "ef", true),
    ("abcd*efg", "abcdefg", true),
    ("ab*", "xabyabbbz", true),
    ("ab*", "xayabbbz", true),
    ("(ab|cd)e", "abcde", true),
    ("^(ab|cd)e", "abcde", false),
    ("(abc|)ef", "abcdef", true),
    ("(a|b)c*d", "abcd", true),
    ("(ab|ab*)bc", "abc", true),
    ("(ab|a)b*c", "abc", true),
    ("((a)(b)c)(d)", "abcd", true),
    ("(((((((((a)))))))))", "a", true),
    ("multiple words of text", "uh-uh", false),
    ("multiple words", "multiple words, yeah", true),
    ("(a)(b)c|ab", "ab", true),
    ("(a)+x", "aaax", true),
    ("(a)+b|aac", "aac", true),
    (r"\+", "+", true),
    (r"\+", "a", false),
    (r"\+\?\*", "+?*", true),
    (r"^((a)c)?(ab)$", "ab", true),
];

#[test]
fn match_corpus() {
    for (pattern, candidate, expected) in MATCH_CORPUS {
        let nfa = compile(pattern).unwrap_or_else(|err| {
            panic!("pattern {pattern:?} failed to compile: {err}")
        });
        let mut scanner = Scanner::new(&nfa);
        // Run each case twice through the same scanner; results must not
        // depend on leftovers from a previous scan.
        for _ in 0..2 {
            assert_eq!(
                scanner.matches(candidate),
                *expected,
                "pattern: {pattern:?}, candidate: {candidate:?}"
            );
        }
    }
}

#[test]
fn compilation_is_deterministic() {
    // Two compilations of the same pattern accept the same language, even
    // though state identities may differ.
    for (pattern, candidate, _) in MATCH_CORPUS {
        let first = compile(pattern).unwrap();
        let second = compile(pattern).unwrap();
        assert_eq!(
            Scanner::new(&first).matches(candidate),
            Scanner::new(&second).matches(candidate),
            "pattern: {pattern:?}, candidate: {candidate:?}"
        );
    }
}

#[test]
fn compile_errors() {
    use CompileError::*;

    let cases: &[(&str, fn(&CompileError) -> bool)] = &[
        ("(a", |e| matches!(e, SyntaxError(_))),
        ("(a|b", |e| matches!(e, SyntaxError(_))),
        ("(", |e| matches!(e, SyntaxError(_))),
        (")", |e| matches!(e, SyntaxError(_))),
        ("a)", |e| matches!(e, SyntaxError(_))),
        ("*", |e| matches!(e, SyntaxError(_))),
        ("+a", |e| matches!(e, SyntaxError(_))),
        ("a|*", |e| matches!(e, SyntaxError(_))),
        ("a\\", |e| matches!(e, UnterminatedEscape(_))),
        ("\\", |e| matches!(e, UnterminatedEscape(_))),
    ];

    for (pattern, is_expected) in cases {
        match compile(pattern) {
            Err(err) => assert!(
                is_expected(&err),
                "pattern {pattern:?} failed with unexpected error: {err}"
            ),
            Ok(_) => panic!("pattern {pattern:?} compiled but should fail"),
        }
    }
}

#[test]
fn error_positions() {
    assert_eq!(compile("ab)").unwrap_err().position(), 2);
    assert_eq!(compile("abc\\").unwrap_err().position(), 3);
    assert_eq!(compile("(ab").unwrap_err().position(), 3);
}

#[test]
fn error_display() {
    assert_eq!(
        compile("ab)").unwrap_err().to_string(),
        "syntax error at [2..3]"
    );
    assert_eq!(
        compile("a\\").unwrap_err().to_string(),
        "unterminated escape sequence at [1..2]"
    );
}
