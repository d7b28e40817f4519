use crate::scanning::TokenType;

/// The capabilities the host lexer lends to the scanner for the duration of
/// a single call. This mirrors the function table in tree-sitter's `TSLexer`
/// so that the same scanning code can run against the C runtime or against
/// an in-memory source.
pub trait Lexer {
    /// The character under the cursor, or None at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Move forward one character. When `skip` is true the character is
    /// treated as whitespace preceding the token rather than as part of it.
    fn advance(&mut self, skip: bool);

    /// Fix the end of the token about to be emitted at the current position.
    fn mark_end(&mut self);

    /// Number of characters since the last line break.
    fn column(&mut self) -> u32;

    /// Record which kind of token was recognized.
    fn set_result(&mut self, token: TokenType);
}
