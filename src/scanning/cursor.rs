use crate::scanning::{Lexer, TokenType};

/// Byte range of a token within the source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// An in-memory stand-in for the host lexer, walking over a string slice the
/// way tree-sitter walks over a document.
#[derive(Debug, Clone)]
pub struct SourceCursor<'i> {
    source: &'i str,
    start: usize,
    offset: usize,
    column: u32,
    end: Option<usize>,
    result: Option<TokenType>,
    advanced: usize,
}

impl<'i> SourceCursor<'i> {
    pub fn new(source: &'i str) -> SourceCursor<'i> {
        SourceCursor::at(source, 0)
    }

    /// Begin a token at the given byte offset, which must lie on a character
    /// boundary.
    pub fn at(source: &'i str, offset: usize) -> SourceCursor<'i> {
        let before = &source[..offset];
        let column = match before.rfind('\n') {
            Some(i) => before[i + 1..]
                .chars()
                .count(),
            None => before
                .chars()
                .count(),
        };

        SourceCursor {
            source,
            start: offset,
            offset,
            column: column as u32,
            end: None,
            result: None,
            advanced: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn token_start(&self) -> usize {
        self.start
    }

    /// Where mark_end() was last called. Without a call the token ends where
    /// it started.
    pub fn token_end(&self) -> usize {
        self.end
            .unwrap_or(self.start)
    }

    pub fn token(&self) -> Span {
        Span {
            start: self.token_start(),
            end: self.token_end(),
        }
    }

    pub fn result(&self) -> Option<TokenType> {
        self.result
    }

    /// How many characters have been advanced over since the token began.
    pub fn advanced(&self) -> usize {
        self.advanced
    }

    /// Return to the start of the token, discarding any lookahead and any
    /// recognized result, as the host does when a scan declines.
    pub fn rewind(&mut self) {
        *self = SourceCursor::at(self.source, self.start);
    }
}

impl<'i> Lexer for SourceCursor<'i> {
    fn lookahead(&self) -> Option<char> {
        // the runtime cannot tell a NUL apart from end of input
        self.source[self.offset..]
            .chars()
            .next()
            .filter(|c| *c != '\0')
    }

    fn advance(&mut self, skip: bool) {
        let c = match self.lookahead() {
            Some(c) => c,
            None => return,
        };

        self.offset += c.len_utf8();
        self.advanced += 1;

        if c == '\n' {
            self.column = 0;
        } else {
            self.column += 1;
        }

        // skipped characters precede the token, so it starts after them
        if skip && self.end.is_none() {
            self.start = self.offset;
        }
    }

    fn mark_end(&mut self) {
        self.end = Some(self.offset);
    }

    fn column(&mut self) -> u32 {
        self.column
    }

    fn set_result(&mut self, token: TokenType) {
        self.result = Some(token);
    }
}
