//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and numbers
//! - String literals and their offsets
//! - Punctuation
//! - Line and column tracking
//! - Error cases

use std::{io, rc::Rc};

use super::{
    lexer::{tokenize, Lexer},
    source::{CharReader, Loadable},
    tokens::TokenKind,
};
use crate::errors::errors::ErrorImpl;

const PROGRAM: &str = "
import foo;

func main() {
  print(\"hello world\");
}
";

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM, Some("test.apl".to_string())).unwrap();

    let expected = [
        (TokenKind::Import, "import", 1),
        (TokenKind::Text, "foo", 8),
        (TokenKind::Semicolon, ";", 11),
        (TokenKind::Func, "func", 14),
        (TokenKind::Text, "main", 19),
        (TokenKind::ParensOpen, "(", 23),
        (TokenKind::ParensClose, ")", 24),
        (TokenKind::BraceOpen, "{", 26),
        (TokenKind::Text, "print", 30),
        (TokenKind::ParensOpen, "(", 35),
        (TokenKind::String, "hello world", 37),
        (TokenKind::ParensClose, ")", 49),
        (TokenKind::Semicolon, ";", 50),
        (TokenKind::BraceClose, "}", 52),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value, offset)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
        assert_eq!(token.value, *value);
        assert_eq!(token.position.offset, *offset);
    }
}

#[test]
fn test_token_offsets_slice_the_input() {
    let tokens = tokenize(PROGRAM, Some("test.apl".to_string())).unwrap();
    let chars: Vec<char> = PROGRAM.chars().collect();

    for token in tokens {
        let start = token.position.offset as usize;
        let end = start + token.value.chars().count();
        let slice: String = chars[start..end].iter().collect();
        assert_eq!(slice, token.value);
    }
}

#[test]
fn test_tokenize_lines_and_columns() {
    let tokens = tokenize(PROGRAM, Some("test.apl".to_string())).unwrap();

    // import
    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 0));
    // func
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (3, 0));
    // print
    assert_eq!((tokens[8].position.line, tokens[8].position.column), (4, 2));
    // "hello world", after the opening quote
    assert_eq!((tokens[10].position.line, tokens[10].position.column), (4, 9));
    assert_eq!(tokens[13].position.line, 5);
    assert_eq!(tokens[0].position.file.as_str(), "test.apl");
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("if else func type import return", None).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Func,
            TokenKind::Type,
            TokenKind::Import,
            TokenKind::Return,
        ]
    );
    assert_eq!(tokens[0].position.file.as_str(), "shell");
}

#[test]
fn test_tokenize_identifiers_and_numbers() {
    let tokens = tokenize("foo baz_123 _under 12345 12ab true", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[1].kind, TokenKind::Text);
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].kind, TokenKind::Text);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "12345");
    assert_eq!(tokens[4].kind, TokenKind::Text);
    assert_eq!(tokens[5].kind, TokenKind::Text);
}

#[test]
fn test_word_stops_at_punctuation() {
    let tokens = tokenize("main(x,y)=z;", None).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Text,
            TokenKind::ParensOpen,
            TokenKind::Text,
            TokenKind::Comma,
            TokenKind::Text,
            TokenKind::ParensClose,
            TokenKind::Assign,
            TokenKind::Text,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[4].position.offset, 7);
}

#[test]
fn test_string_keeps_whitespace_and_newlines() {
    let tokens = tokenize("\"a b\nc\" x", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a b\nc");
    assert_eq!(tokens[1].position.offset, 8);
    assert_eq!(tokens[1].position.line, 1);
    assert_eq!(tokens[1].position.column, 3);
}

#[test]
fn test_empty_string_literal() {
    let tokens = tokenize("\"\"", None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[0].position.offset, 1);
}

#[test]
fn test_empty_and_whitespace_sources() {
    assert!(tokenize("", None).unwrap().is_empty());
    assert!(tokenize(" \t\r\n  ", None).unwrap().is_empty());
}

#[test]
fn test_unicode_offsets_count_characters() {
    let tokens = tokenize("é ünï", None).unwrap();

    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].value, "ünï");
    assert_eq!(tokens[1].position.offset, 2);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("\"foo", None).unwrap_err();

    assert_eq!(error.get_internal(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().offset, 0);
    assert_eq!(error.get_literal(), Some("\"foo"));
    assert_eq!(error.to_string(), "unexpected eof");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("main @", None).unwrap_err();

    assert_eq!(error.get_internal(), &ErrorImpl::UnrecognisedToken { token: '@' });
    assert_eq!(error.get_position().offset, 5);
    assert_eq!(error.to_string(), "unrecognised token: '@'");
}

#[test]
fn test_pushback_across_newlines() {
    let tokens = tokenize("foo\nbar\n  baz(", None).unwrap();

    let places: Vec<(&str, u32, u32, u32)> = tokens
        .iter()
        .map(|token| {
            (
                token.value.as_str(),
                token.position.offset,
                token.position.line,
                token.position.column,
            )
        })
        .collect();
    assert_eq!(
        places,
        vec![
            ("foo", 0, 0, 0),
            ("bar", 4, 1, 0),
            ("baz", 10, 2, 2),
            ("(", 13, 2, 5),
        ]
    );
}

#[test]
fn test_pushback_restores_cursor_after_newline() {
    let mut lexer = Lexer::new(
        CharReader::new("a\nb".as_bytes()),
        Rc::new("test.apl".to_string()),
    );

    let first = lexer.next().unwrap().unwrap();
    assert_eq!(first.value, "a");
    let after_word = lexer.current_position();
    assert_eq!((after_word.offset, after_word.line, after_word.column), (1, 0, 1));

    let second = lexer.next().unwrap().unwrap();
    assert_eq!((second.position.line, second.position.column), (1, 0));
    let end = lexer.current_position();
    assert_eq!((end.offset, end.line, end.column), (3, 1, 1));
}

#[test]
fn test_lexer_yields_error_once_then_stops() {
    let mut lexer = Lexer::new(
        CharReader::new("foo \"bar".as_bytes()),
        Rc::new("test.apl".to_string()),
    );

    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_lexer_is_lazy() {
    // A stream that fails after its first word: the first token must still
    // come out before the failure is observed.
    struct Failing {
        chars: Vec<char>,
    }

    impl Loadable for Failing {
        fn read_char(&mut self) -> io::Result<Option<char>> {
            if self.chars.is_empty() {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            } else {
                Ok(Some(self.chars.remove(0)))
            }
        }
    }

    let mut lexer = Lexer::new(
        Failing {
            chars: "func ".chars().collect(),
        },
        Rc::new("test.apl".to_string()),
    );

    let first = lexer.next().unwrap().unwrap();
    assert_eq!(first.kind, TokenKind::Func);

    let error = lexer.next().unwrap().unwrap_err();
    assert_eq!(
        error.get_internal(),
        &ErrorImpl::Io {
            message: "disk on fire".to_string()
        }
    );
    assert!(lexer.next().is_none());
}
