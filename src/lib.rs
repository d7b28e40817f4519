pub mod error;
pub mod ffi;
pub mod output;
pub mod scanning;
