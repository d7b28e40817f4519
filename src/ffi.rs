//! Entry points called by the tree-sitter runtime. The generated parser.c
//! for the Technique grammar declares these functions and links against
//! them in place of a hand-written scanner.c: build this crate as a static
//! library (`libtechnique_scanner.a`) and pass it to the linker alongside the
//! compiled parser.c. A Rust binding crate can instead depend on this crate
//! and compile parser.c with `cc` from its build script.

use std::ffi::{c_char, c_void};

use crate::scanning::{Lexer, Scanner, TokenType, ValidSymbols};

/// Number of entries in the grammar's `externals` list.
const EXTERNAL_TOKEN_COUNT: usize = 1;

/// Layout-compatible with `TSLexer` from tree_sitter/parser.h.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

impl Lexer for TSLexer {
    fn lookahead(&self) -> Option<char> {
        // the runtime reports end of input as 0
        if self.lookahead == 0 {
            return None;
        }
        char::from_u32(self.lookahead as u32)
    }

    fn advance(&mut self, skip: bool) {
        let advance = self.advance;
        unsafe { advance(self, skip) }
    }

    fn mark_end(&mut self) {
        let mark_end = self.mark_end;
        unsafe { mark_end(self) }
    }

    fn column(&mut self) -> u32 {
        let get_column = self.get_column;
        unsafe { get_column(self) }
    }

    fn set_result(&mut self, token: TokenType) {
        self.result_symbol = token.symbol();
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_technique_external_scanner_create() -> *mut c_void {
    std::ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn tree_sitter_technique_external_scanner_destroy(_payload: *mut c_void) {}

#[no_mangle]
pub extern "C" fn tree_sitter_technique_external_scanner_reset(_payload: *mut c_void) {}

#[no_mangle]
pub extern "C" fn tree_sitter_technique_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> u32 {
    0
}

#[no_mangle]
pub extern "C" fn tree_sitter_technique_external_scanner_deserialize(
    _payload: *mut c_void,
    _buffer: *const c_char,
    _length: u32,
) {
}

/// # Safety
///
/// `lexer` must point to a live TSLexer supplied by the tree-sitter runtime
/// and `valid_symbols` to an array with one entry per external token. Both
/// are only borrowed for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_technique_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    if lexer.is_null() || valid_symbols.is_null() {
        return false;
    }

    let lexer = &mut *lexer;
    let valid = std::slice::from_raw_parts(valid_symbols, EXTERNAL_TOKEN_COUNT);

    Scanner::new().scan(lexer, &ValidSymbols::new(valid))
}
