//! Code emission.
//!
//! Drives the splitter, the packing cursor and the digit writer to render a
//! byte buffer as one line of assembler data: the unit keyword, a
//! space-separated `$`-literal per packed window, and a `;BYTE` section for
//! any unaligned tail. The sink is any `fmt::Write`, so callers decide
//! whether the text lands in a `String`, a formatter or something else.

use std::fmt::Write;

use crate::align::split_runs;
use crate::cursor::PackedValues;
use crate::error::{EncodeError, EncodeResult};
use crate::hex::push_digits;
use crate::pack::Endianness;
use crate::unit::UnitWidth;

/// How input lengths that do not divide into whole units are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// Encode the aligned prefix at full width and the leftover bytes as a
    /// `BYTE` tail section.
    #[default]
    SplitTail,
    /// Refuse the buffer with [`EncodeError::MisalignedInput`].
    Exact,
}

/// Parameters fixed for one encoding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoding {
    pub width: UnitWidth,
    pub endianness: Endianness,
    pub policy: SizePolicy,
}

impl Encoding {
    pub fn new(width: UnitWidth) -> Self {
        Encoding {
            width,
            ..Encoding::default()
        }
    }
}

fn emit_run<W: Write>(
    out: &mut W,
    run: &[u8],
    width: UnitWidth,
    endianness: Endianness,
) -> EncodeResult<()> {
    out.write_str(width.keyword())?;

    for value in PackedValues::new(run, width, endianness) {
        out.write_str(" $")?;
        push_digits(out, value, width.digits())?;
    }

    Ok(())
}

/// Renders `data` as keyword-tagged hex literals into `out`.
///
/// The buffer must be non-empty. Under [`SizePolicy::Exact`] its length
/// must also be a whole number of units; the default policy instead splits
/// off the unaligned tail and appends it as its own `BYTE` section, so no
/// input byte is ever dropped.
pub fn emit_code<W: Write>(out: &mut W, data: &[u8], encoding: &Encoding) -> EncodeResult<()> {
    if data.is_empty() {
        return Err(EncodeError::EmptyInput);
    }

    let runs = split_runs(data, encoding.width);

    if encoding.policy == SizePolicy::Exact && !runs.tail.is_empty() {
        return Err(EncodeError::MisalignedInput {
            len: data.len(),
            width: encoding.width.bytes(),
        });
    }

    emit_run(out, runs.main, encoding.width, encoding.endianness)?;

    if !runs.tail.is_empty() {
        out.write_char(';')?;
        emit_run(out, runs.tail, UnitWidth::Byte, encoding.endianness)?;
    }

    Ok(())
}

/// [`emit_code`] into a freshly reserved `String`.
pub fn encode_to_string(data: &[u8], encoding: &Encoding) -> EncodeResult<String> {
    let units = data.len() / encoding.width.bytes();
    let tail = data.len() % encoding.width.bytes();

    // Keyword plus " $XXXX" per token for both sections, rounded up a bit.
    let mut out = String::with_capacity(
        16 + units * (encoding.width.digits() + 2) + tail * 4,
    );

    emit_code(&mut out, data, encoding)?;

    Ok(out)
}
