use tracing::{debug, trace};

use crate::scanning::boundary::is_procedure_declaration;
use crate::scanning::Lexer;

/// The kinds of token this scanner can produce, in the order they are listed
/// among the grammar's externals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum TokenType {
    Boundary = 0,
}

impl TokenType {
    pub fn symbol(self) -> u16 {
        self as u16
    }
}

/// Which external tokens the host is prepared to accept at the current
/// position.
#[derive(Debug, Copy, Clone)]
pub struct ValidSymbols<'a>(&'a [bool]);

impl<'a> ValidSymbols<'a> {
    pub fn new(valid: &'a [bool]) -> ValidSymbols<'a> {
        ValidSymbols(valid)
    }

    pub fn contains(&self, token: TokenType) -> bool {
        self.0
            .get(token.symbol() as usize)
            .copied()
            .unwrap_or(false)
    }
}

/// External scanner emitting a zero-width boundary token ahead of each
/// procedure declaration. It carries no state between calls.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Scanner {
        Scanner
    }

    pub fn reset(&mut self) {}

    /// Write the scanner's state into the buffer, returning the number of
    /// bytes used. There is no state, so this is always zero.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restore state previously written by serialize(). Whatever is in the
    /// buffer is ignored.
    pub fn deserialize(&mut self, _buffer: &[u8]) {}

    pub fn scan(&mut self, lexer: &mut impl Lexer, valid: &ValidSymbols) -> bool {
        if !valid.contains(TokenType::Boundary) {
            return false;
        }

        // leading whitespace must already have been taken by other rules
        if lexer.column() != 0 {
            trace!("not at start of line");
            return false;
        }

        // the token ends here regardless of how far the lookahead travels
        lexer.mark_end();

        if is_procedure_declaration(lexer) {
            debug!("procedure boundary");
            lexer.set_result(TokenType::Boundary);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::scanning::SourceCursor;

    const ALL: [bool; 1] = [true];
    const NONE: [bool; 1] = [false];

    fn scan_at(source: &str, offset: usize) -> (bool, SourceCursor<'_>) {
        let mut scanner = Scanner::new();
        let mut cursor = SourceCursor::at(source, offset);
        let result = scanner.scan(&mut cursor, &ValidSymbols::new(&ALL));
        (result, cursor)
    }

    #[test]
    fn recognized_declarations() {
        for source in [
            "go: step\n",
            "go(x, y): step\n",
            "go(x, (y, z)): step\n",
            "go(x, y\n): step\n",
        ] {
            let (result, cursor) = scan_at(source, 0);
            assert!(result, "expected boundary before {:?}", source);
            assert_eq!(cursor.result(), Some(TokenType::Boundary));
        }
    }

    #[test]
    fn declined_declarations() {
        for source in ["Go: step\n", "go(x, y) step\n", "", "\n", "  go: step\n"] {
            let (result, cursor) = scan_at(source, 0);
            assert!(!result, "unexpected boundary before {:?}", source);
            assert_eq!(cursor.result(), None);
        }
    }

    #[test]
    fn boundary_is_zero_width() {
        let source = "preamble\nmake_coffee(beans,\n  (milk, sugar)) : Beans -> Coffee\n";
        let (result, cursor) = scan_at(source, 9);

        assert!(result);
        assert_eq!(cursor.token_start(), 9);
        assert_eq!(cursor.token_end(), 9);
        assert!(cursor.advanced() > 0);
        assert!(cursor.offset() > 9);
    }

    #[test]
    fn not_at_start_of_line() {
        let source = "  go: step\n";
        let (result, cursor) = scan_at(source, 2);

        assert!(!result);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.advanced(), 0);
        assert_eq!(cursor.result(), None);
    }

    #[test]
    fn respects_valid_symbols() {
        let mut scanner = Scanner::new();
        let mut cursor = SourceCursor::new("go: step\n");

        assert!(!scanner.scan(&mut cursor, &ValidSymbols::new(&NONE)));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.advanced(), 0);
        assert_eq!(cursor.result(), None);

        assert!(!scanner.scan(&mut cursor, &ValidSymbols::new(&[])));
        assert_eq!(cursor.advanced(), 0);

        assert!(scanner.scan(&mut cursor, &ValidSymbols::new(&ALL)));
    }

    #[test]
    fn repeated_scans_agree() {
        let source = "go(x, y): step\nGo: step\n";
        let mut scanner = Scanner::new();

        for (offset, expected) in [(0, true), (15, false)] {
            let mut first = SourceCursor::at(source, offset);
            let mut second = SourceCursor::at(source, offset);

            let a = scanner.scan(&mut first, &ValidSymbols::new(&ALL));
            let b = scanner.scan(&mut second, &ValidSymbols::new(&ALL));

            assert_eq!(a, expected);
            assert_eq!(a, b);
            assert_eq!(first.token(), second.token());
            assert_eq!(first.offset(), second.offset());

            first.rewind();
            assert_eq!(scanner.scan(&mut first, &ValidSymbols::new(&ALL)), expected);
        }
    }

    #[test]
    fn state_round_trip() {
        let scanner = Scanner::new();
        let mut buffer = [0xffu8; 16];
        assert_eq!(scanner.serialize(&mut buffer), 0);
        assert_eq!(buffer, [0xffu8; 16]);

        for data in [&b""[..], &b"\x00"[..], &b"garbage that is ignored"[..]] {
            let mut restored = Scanner::new();
            restored.deserialize(data);
            assert_eq!(restored, Scanner::new());

            let mut cursor = SourceCursor::new("go: step\n");
            assert!(restored.scan(&mut cursor, &ValidSymbols::new(&ALL)));
        }

        let mut scanner = Scanner::default();
        scanner.reset();
        assert_eq!(scanner, Scanner::new());
    }
}
