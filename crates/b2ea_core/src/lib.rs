//! Core encoding library for bin2ea.
//!
//! Turns a raw byte buffer into assembler data statements: a unit keyword
//! (`BYTE`/`SHORT`/`WORD`) followed by fixed-width `$`-prefixed uppercase hex
//! literals, with any unaligned leftover bytes appended as their own `BYTE`
//! section. The pipeline is a single lazy pass: split the buffer into an
//! aligned main run and a short tail, pack each window into an integer under
//! the selected byte order, and render the integers as fixed-width digits
//! into a caller-provided sink.
//!
//! File reading, argument handling and document wrapping live in the CLI
//! crate; nothing here performs I/O.

// Re-export commonly used types and functions
pub use align::{split_runs, Runs};
pub use cursor::PackedValues;
pub use emit::{emit_code, encode_to_string, Encoding, SizePolicy};
pub use error::{EncodeError, EncodeResult};
pub use hex::{digit_count, hex_digit, push_digits, push_digits_min};
pub use pack::{pack_bytes, unpack_bytes, Endianness};
pub use unit::UnitWidth;

// Public modules
pub mod align;
pub mod cursor;
pub mod emit;
pub mod error;
pub mod hex;
pub mod pack;
pub mod unit;
