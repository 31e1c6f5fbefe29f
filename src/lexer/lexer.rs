use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    source::{CharReader, Loadable},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    offset: u32,
    line: u32,
    column: u32,
}

impl Cursor {
    fn advance(self, c: char) -> Cursor {
        if c == '\n' {
            Cursor {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Cursor {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

/// Turns a character stream into tokens, one token per `next()` call.
///
/// Yields `Err` at most once, as its final item, when the stream ends inside a
/// token or cannot be read. A clean end of stream just ends the iteration.
pub struct Lexer<S> {
    source: S,
    file: Rc<String>,
    cursor: Cursor,
    /// The last character read and the cursor from before reading it.
    last: Option<(char, Cursor)>,
    /// A character handed back by `unread`.
    pending: Option<char>,
    finished: bool,
}

impl<S: Loadable> Lexer<S> {
    pub fn new(source: S, file: Rc<String>) -> Self {
        Lexer {
            source,
            file,
            cursor: Cursor::default(),
            last: None,
            pending: None,
            finished: false,
        }
    }

    pub fn current_position(&self) -> Position {
        Position::new(
            Rc::clone(&self.file),
            self.cursor.offset,
            self.cursor.line,
            self.cursor.column,
        )
    }

    fn read(&mut self) -> Result<Option<char>, Error> {
        let next = match self.pending.take() {
            Some(c) => Some(c),
            None => self.source.read_char().map_err(|err| {
                Error::new(
                    ErrorImpl::Io {
                        message: err.to_string(),
                    },
                    self.current_position(),
                )
            })?,
        };

        if let Some(c) = next {
            self.last = Some((c, self.cursor));
            self.cursor = self.cursor.advance(c);
        }
        Ok(next)
    }

    /// Hands the last character back to the stream. Only one character can be
    /// pending at a time.
    fn unread(&mut self) {
        let (c, before) = match (self.pending, self.last.take()) {
            (None, Some(last)) => last,
            _ => panic!("cannot unread the character stream twice"),
        };
        self.cursor = before;
        self.pending = Some(c);
    }

    /// Returns false once the stream is exhausted.
    fn skip_whitespace(&mut self) -> Result<bool, Error> {
        loop {
            match self.read()? {
                None => return Ok(false),
                Some(c) if c.is_whitespace() => {}
                Some(_) => {
                    self.unread();
                    return Ok(true);
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let start = self.current_position();
        let Some(c) = self.read()? else {
            return Ok(None);
        };

        if let Some(kind) = TokenKind::for_symbol(c) {
            return Ok(Some(MK_TOKEN!(kind, c.to_string(), start)));
        }

        if c == '"' {
            return self.lex_string(start).map(Some);
        }

        self.unread();
        self.lex_word(start).map(Some)
    }

    fn lex_string(&mut self, quote: Position) -> Result<Token, Error> {
        let start = self.current_position();
        let mut value = String::new();

        loop {
            match self.read()? {
                None => {
                    return Err(Error::with_literal(
                        ErrorImpl::UnterminatedString,
                        quote,
                        format!("\"{}", value),
                    ))
                }
                Some('"') => break,
                Some(c) => value.push(c),
            }
        }

        Ok(MK_TOKEN!(TokenKind::String, value, start))
    }

    fn lex_word(&mut self, start: Position) -> Result<Token, Error> {
        let mut value = String::new();

        loop {
            match self.read()? {
                Some(c) if c.is_alphanumeric() || c == '_' => value.push(c),
                Some(c) if value.is_empty() => {
                    return Err(Error::with_literal(
                        ErrorImpl::UnrecognisedToken { token: c },
                        start,
                        c.to_string(),
                    ));
                }
                Some(_) => {
                    self.unread();
                    break;
                }
                None => break,
            }
        }

        Ok(MK_TOKEN!(TokenKind::classify(&value), value, start))
    }
}

impl<S: Loadable> Iterator for Lexer<S> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenizes an in-memory source eagerly.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    Lexer::new(CharReader::new(source.as_bytes()), file_name).collect()
}
