//! Core bit-packing arithmetic over caller-owned byte slices.
//!
//! Each value occupies virtual bit positions `i*w .. (i+1)*w` of the packed
//! stream; virtual bit `8k + j` is bit `j` of byte `k`, MSB-first (`j = 0` is
//! the most significant bit). A field whose start offset plus width exceeds 8
//! straddles a byte boundary: its low `spillage = (offset + w) % 8` bits land
//! left-aligned in the next byte.

use crate::PackedIntsError;

#[cfg(all(not(feature = "std"), any(feature = "buf", test)))]
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, PackedIntsError>;

/// Returns the number of bytes needed to pack `count` values of
/// `bit_width` bits each, i.e. `ceil(bit_width * count / 8)`.
///
/// Total arithmetic: zero inputs yield 0, no width validation here.
///
/// # Examples
///
/// ```
/// use packed_ints::bytes_needed;
///
/// assert_eq!(bytes_needed(7, 10), 9);
/// assert_eq!(bytes_needed(8, 4), 4);
/// assert_eq!(bytes_needed(3, 8), 3);
/// assert_eq!(bytes_needed(5, 0), 0);
/// ```
pub const fn bytes_needed(bit_width: usize, count: usize) -> usize {
    (bit_width * count).div_ceil(8)
}

/// Validates the bit width and that `have` bytes cover `count` fields.
#[inline]
fn validate(bit_width: usize, count: usize, have: usize) -> Result<()> {
    if !(1..=8).contains(&bit_width) {
        return Err(PackedIntsError::InvalidBitWidth(bit_width));
    }
    let needed = bytes_needed(bit_width, count);
    if have < needed {
        return Err(PackedIntsError::InsufficientBytes { needed, have });
    }
    Ok(())
}

/// OR-writes the low `bit_width` bits of `masked` at `bit_pos`.
///
/// Callers guarantee `masked < 1 << bit_width` and that the slice covers
/// `bytes_needed` for the field's end position.
#[inline]
pub(crate) fn write_field(out: &mut [u8], bit_pos: usize, bit_width: usize, masked: u32) {
    let byte_index = bit_pos / 8;
    let offset = bit_pos % 8;

    if offset + bit_width > 8 {
        let spillage = (offset + bit_width) % 8;
        out[byte_index] |= (masked >> spillage) as u8;
        out[byte_index + 1] |= ((masked & ((1 << spillage) - 1)) << (8 - spillage)) as u8;
    } else {
        out[byte_index] |= (masked << (8 - offset - bit_width)) as u8;
    }
}

/// Reads the `bit_width`-bit field at `bit_pos`.
#[inline]
pub(crate) fn read_field(packed: &[u8], bit_pos: usize, bit_width: usize) -> u32 {
    let mask = (1u32 << bit_width) - 1;
    let byte_index = bit_pos / 8;
    let offset = bit_pos % 8;

    if offset + bit_width > 8 {
        let spillage = (offset + bit_width) % 8;
        let high = ((packed[byte_index] as u32) << spillage) & mask;
        let low = ((packed[byte_index + 1] as u32) >> (8 - spillage)) & mask;
        high | low
    } else {
        ((packed[byte_index] as u32) >> (8 - offset - bit_width)) & mask
    }
}

/// Packs `values` into `out` at `bit_width` bits per value.
///
/// Each value is masked to its low `bit_width` bits; out-of-range high bits
/// are silently dropped (use [`pack_strict_into`] to reject them instead).
/// Bits are OR-ed into `out`, never cleared, so the first
/// `bytes_needed(bit_width, values.len())` bytes of `out` must be zero before
/// the call.
///
/// Width and buffer length are validated before any write.
///
/// # Errors
///
/// - [`PackedIntsError::InvalidBitWidth`] if `bit_width` is not in 1..=8.
/// - [`PackedIntsError::InsufficientBytes`] if `out` is shorter than
///   `bytes_needed(bit_width, values.len())`.
///
/// # Examples
///
/// ```
/// use packed_ints::pack_into;
///
/// let values = [1u32, 0, 1, 1, 0, 1, 0, 1];
/// let mut out = [0u8; 1];
/// pack_into(&values, 1, &mut out).unwrap();
/// assert_eq!(out, [0b1011_0101]);
/// ```
pub fn pack_into(values: &[u32], bit_width: usize, out: &mut [u8]) -> Result<()> {
    validate(bit_width, values.len(), out.len())?;

    let mask = (1u32 << bit_width) - 1;
    let mut bit_pos = 0;
    for &value in values {
        write_field(out, bit_pos, bit_width, value & mask);
        bit_pos += bit_width;
    }
    Ok(())
}

/// Like [`pack_into`], but rejects values that do not fit in `bit_width`
/// bits instead of masking them.
///
/// All preconditions (width, buffer length, every value) are checked before
/// the first write: on error, `out` is left untouched.
///
/// # Errors
///
/// As [`pack_into`], plus [`PackedIntsError::ValueOverflow`] for the first
/// value exceeding `2^bit_width - 1`.
pub fn pack_strict_into(values: &[u32], bit_width: usize, out: &mut [u8]) -> Result<()> {
    validate(bit_width, values.len(), out.len())?;

    let mask = (1u32 << bit_width) - 1;
    for &value in values {
        if value > mask {
            return Err(PackedIntsError::ValueOverflow(value, bit_width));
        }
    }

    let mut bit_pos = 0;
    for &value in values {
        write_field(out, bit_pos, bit_width, value);
        bit_pos += bit_width;
    }
    Ok(())
}

/// Unpacks `out.len()` values of `bit_width` bits each from `packed`.
///
/// Exact dual of [`pack_into`]: for any zeroed buffer of sufficient length,
/// `pack_into` followed by `unpack_into` reproduces the input sequence.
///
/// # Errors
///
/// - [`PackedIntsError::InvalidBitWidth`] if `bit_width` is not in 1..=8.
/// - [`PackedIntsError::InsufficientBytes`] if `packed` is shorter than
///   `bytes_needed(bit_width, out.len())`.
pub fn unpack_into(packed: &[u8], bit_width: usize, out: &mut [u32]) -> Result<()> {
    validate(bit_width, out.len(), packed.len())?;

    let mut bit_pos = 0;
    for slot in out.iter_mut() {
        *slot = read_field(packed, bit_pos, bit_width);
        bit_pos += bit_width;
    }
    Ok(())
}

/// Allocating convenience over [`unpack_into`].
///
/// # Examples
///
/// ```
/// use packed_ints::unpack;
///
/// let packed = [0b1011_0101u8];
/// assert_eq!(unpack(&packed, 1, 8).unwrap(), [1, 0, 1, 1, 0, 1, 0, 1]);
/// ```
#[cfg(any(feature = "std", feature = "buf", test))]
pub fn unpack(packed: &[u8], bit_width: usize, count: usize) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    out.resize(count, 0);
    unpack_into(packed, bit_width, &mut out)?;
    Ok(out)
}
