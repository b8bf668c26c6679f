//! Byte window packing.
//!
//! Assembles a window of up to four bytes into a `u32` under a selectable
//! byte order, and takes such a value apart again. These are the only
//! functions that know how byte offsets map to bit positions; everything
//! above them deals in whole packed values.

/// Byte order used when assembling or splitting multi-byte values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    /// Byte at window offset `i` lands at bits `8*i`.
    #[default]
    Little,
    /// Byte at window offset `i` lands at bits `8*(len-1-i)`.
    Big,
}

impl Endianness {
    const fn shift(self, index: usize, len: usize) -> usize {
        match self {
            Endianness::Little => 8 * index,
            Endianness::Big => 8 * (len - 1 - index),
        }
    }
}

/// Packs `window` into an unsigned integer.
///
/// The window must hold at most four bytes; the emitted value occupies
/// exactly `window.len()` bytes of the result, high bytes zero.
pub fn pack_bytes(window: &[u8], endianness: Endianness) -> u32 {
    debug_assert!(window.len() <= 4, "window wider than a packed value");

    let mut value = 0u32;
    for (i, byte) in window.iter().enumerate() {
        value |= u32::from(*byte) << endianness.shift(i, window.len());
    }
    value
}

/// Exact inverse of [`pack_bytes`]: writes each byte of `value` back to its
/// window offset.
pub fn unpack_bytes(value: u32, window: &mut [u8], endianness: Endianness) {
    debug_assert!(window.len() <= 4, "window wider than a packed value");

    let len = window.len();
    for (i, slot) in window.iter_mut().enumerate() {
        *slot = ((value >> endianness.shift(i, len)) & 0xFF) as u8;
    }
}
