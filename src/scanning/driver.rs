use serde::Serialize;
use tracing::debug;

use crate::scanning::{Scanner, SourceCursor, TokenType, ValidSymbols};

/// A procedure boundary found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundary<'i> {
    /// byte offset of the (zero width) token
    pub offset: usize,
    /// line number, counting from 1
    pub line: usize,
    pub name: &'i str,
}

/// Run the scanner at the start of every line in the document, the way the
/// host lexer would when its grammar permits a boundary there, and collect
/// the positions where one was emitted.
///
/// Line starts that fall inside a parameter list already scanned for an
/// earlier boundary are skipped, since the grammar is inside that
/// declaration there and would not ask for a boundary.
///
/// Scanner state is passed from each call to the next through
/// serialize() and deserialize(), exactly as happens when tree-sitter
/// resumes lexing after an edit.
pub fn find_boundaries(content: &str) -> Vec<Boundary<'_>> {
    let valid = [true];
    let valid = ValidSymbols::new(&valid);

    let mut boundaries = Vec::new();
    let mut buffer = [0u8; 64];
    let mut scanner = Scanner::new();
    let mut length = scanner.serialize(&mut buffer);

    let starts = std::iter::once(0).chain(
        content
            .match_indices('\n')
            .map(|(i, _)| i + 1),
    );

    let mut within = 0;

    for (i, offset) in starts.enumerate() {
        if offset < within {
            continue;
        }

        let mut cursor = SourceCursor::at(content, offset);

        scanner = Scanner::new();
        scanner.deserialize(&buffer[..length]);

        if scanner.scan(&mut cursor, &valid) {
            let token = cursor.token();
            debug_assert_eq!(token.start, token.end);

            if cursor.result() == Some(TokenType::Boundary) {
                let name = identifier_at(content, token.start);
                debug!(line = i + 1, offset, procedure = name, "boundary");
                boundaries.push(Boundary {
                    offset: token.start,
                    line: i + 1,
                    name,
                });

                // the lookahead stops on the colon ending the declaration
                within = cursor.offset();
            }
        }

        length = scanner.serialize(&mut buffer);
    }

    boundaries
}

fn identifier_at(content: &str, offset: usize) -> &str {
    let rest = &content[offset..];
    let width = rest
        .find(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
        .unwrap_or(rest.len());
    &rest[..width]
}

#[cfg(test)]
mod check {
    use super::*;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn single_procedure() {
        let content = trim(
            r#"
make_coffee : Beans -> Coffee

    1. Grind the beans
    2. Brew
            "#,
        );

        let result = find_boundaries(content);
        assert_eq!(
            result,
            vec![Boundary {
                offset: 0,
                line: 1,
                name: "make_coffee"
            }]
        );
    }

    #[test]
    fn several_procedures() {
        let content = trim(
            r#"
% technique v1
! MIT; (c) ACME, Inc.

make_coffee :
brew_tea(leaves) : Leaves -> Tea

# Brewing tea

  indented_name: is not at the margin
steep(leaves,
      water) :
    a. Wait: patiently
            "#,
        );

        let result = find_boundaries(content);
        let names: Vec<_> = result
            .iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["make_coffee", "brew_tea", "steep"]);

        let lines: Vec<_> = result
            .iter()
            .map(|b| b.line)
            .collect();
        assert_eq!(lines, vec![4, 5, 10]);

        for boundary in &result {
            assert!(content[boundary.offset..].starts_with(boundary.name));
        }
    }

    #[test]
    fn declarations_inside_parameters() {
        let content = "go(x,\nstep(y): z\n): w\nnext:\n";

        let result = find_boundaries(content);
        let names: Vec<_> = result
            .iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["go", "next"]);
        assert_eq!(result[1].line, 4);
    }

    #[test]
    fn nothing_to_find() {
        assert!(find_boundaries("").is_empty());
        assert!(find_boundaries("\n\n").is_empty());
        assert!(find_boundaries("Just a description.\n").is_empty());
        assert!(find_boundaries("unclosed(a, b\n: step\n").is_empty());
    }
}
