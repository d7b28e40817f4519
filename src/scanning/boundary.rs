//! Lookahead detection of procedure declarations.

use tracing::trace;

use crate::scanning::Lexer;

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn is_horizontal_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Advance past spaces and tabs, returning the character now under the
/// cursor. Line breaks are not skipped.
fn skip_horizontal_whitespace(lexer: &mut impl Lexer) -> Option<char> {
    let mut c = lexer.lookahead();
    while matches!(c, Some(w) if is_horizontal_whitespace(w)) {
        lexer.advance(false);
        c = lexer.lookahead();
    }
    c
}

/// Declarations begin at the left margin and are of the form
///
/// ```text
/// name :
/// ```
///
/// or
///
/// ```text
/// name(parameters) :
/// ```
///
/// where the parameter list may run across several lines. Only the shape
/// matters here; whatever follows the colon (signature, title, steps) is the
/// grammar's business.
///
/// This scans ahead without producing token content, so the caller must
/// already have called mark_end() if it intends to emit a zero-width token.
pub fn is_procedure_declaration(lexer: &mut impl Lexer) -> bool {
    if lexer.column() != 0 {
        return false;
    }

    match lexer.lookahead() {
        Some(c) if is_identifier_start(c) => {}
        _ => return false,
    }

    let mut c = lexer.lookahead();
    while matches!(c, Some(i) if is_identifier_continue(i)) {
        lexer.advance(false);
        c = lexer.lookahead();
    }

    c = skip_horizontal_whitespace(lexer);

    if c == Some('(') {
        lexer.advance(false);
        c = lexer.lookahead();
        let mut depth = 1;

        // newlines are ordinary characters here, which lets a parameter list
        // continue onto following lines.
        while depth > 0 {
            match c {
                Some('(') => depth += 1,
                Some(')') => depth -= 1,
                Some(_) => {}
                None => break,
            }
            lexer.advance(false);
            c = lexer.lookahead();
        }

        if depth > 0 {
            trace!("parameter list not closed before end of input");
        }
    }

    c = skip_horizontal_whitespace(lexer);

    c == Some(':')
}
