//! Owned, growable packed buffer over the core bit ops.
//!
//! Unlike the raw [`pack_into`](crate::pack_into) surface, [`PackedBuf`] owns
//! and zero-extends its byte store, so callers never deal with the
//! zeroed-destination precondition. Its raw bytes are exactly the headerless
//! packed stream: width and length live only in memory and must be supplied
//! again when adopting bytes with [`PackedBuf::from_bytes`].
//!
//! # Examples
//!
//! ```rust
//! use packed_ints::PackedBuf;
//!
//! let mut buf = PackedBuf::new(7).expect("valid width");
//! buf.push(100).unwrap();
//! buf.push(50).unwrap();
//!
//! assert_eq!(buf.get(0), Some(100));
//! assert_eq!(buf.len(), 2);
//! assert_eq!(buf.as_bytes().len(), 2); // 14 bits fit in 2 bytes
//! ```

use crate::PackedIntsError;
use crate::pack::{bytes_needed, read_field, write_field};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, PackedIntsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuf {
    bytes: Vec<u8>,
    bit_width: usize,
    len: usize,
}

impl PackedBuf {
    /// Creates an empty buffer storing `bit_width`-bit values.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ints::PackedBuf;
    ///
    /// let buf = PackedBuf::new(5).expect("valid width");
    /// assert_eq!(buf.len(), 0);
    /// assert!(PackedBuf::new(9).is_err());
    /// ```
    pub fn new(bit_width: usize) -> Result<Self> {
        if !(1..=8).contains(&bit_width) {
            return Err(PackedIntsError::InvalidBitWidth(bit_width));
        }
        Ok(Self {
            bytes: Vec::new(),
            bit_width,
            len: 0,
        })
    }

    /// Creates an empty buffer pre-sized for `capacity` values.
    pub fn with_capacity(bit_width: usize, capacity: usize) -> Result<Self> {
        let mut buf = Self::new(bit_width)?;
        buf.bytes.reserve(bytes_needed(bit_width, capacity));
        Ok(buf)
    }

    /// Adopts a packed byte stream produced elsewhere.
    ///
    /// The stream is not self-describing, so the caller supplies the same
    /// `(bit_width, len)` it used when packing.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::InvalidBitWidth`] for widths outside 1..=8,
    /// [`PackedIntsError::InsufficientBytes`] if `bytes` cannot hold `len`
    /// values.
    pub fn from_bytes(bytes: &[u8], bit_width: usize, len: usize) -> Result<Self> {
        if !(1..=8).contains(&bit_width) {
            return Err(PackedIntsError::InvalidBitWidth(bit_width));
        }
        let needed = bytes_needed(bit_width, len);
        if bytes.len() < needed {
            return Err(PackedIntsError::InsufficientBytes {
                needed,
                have: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes[..needed].to_vec(),
            bit_width,
            len,
        })
    }

    /// Appends a value that must fit in the buffer's bit width.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::ValueOverflow`] if `value` exceeds
    /// `2^bit_width - 1`; the buffer is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ints::{PackedBuf, PackedIntsError};
    ///
    /// let mut buf = PackedBuf::new(4).expect("valid width");
    /// buf.push(15).unwrap(); // 15 = 0b1111, fits in 4 bits
    /// assert_eq!(buf.push(16), Err(PackedIntsError::ValueOverflow(16, 4)));
    /// assert_eq!(buf.get(0), Some(15));
    /// ```
    pub fn push(&mut self, value: u32) -> Result<()> {
        let mask = (1u32 << self.bit_width) - 1;
        if value > mask {
            return Err(PackedIntsError::ValueOverflow(value, self.bit_width));
        }

        let bit_pos = self.len * self.bit_width;
        let needed = bytes_needed(self.bit_width, self.len + 1);
        if self.bytes.len() < needed {
            self.bytes.resize(needed, 0);
        }

        write_field(&mut self.bytes, bit_pos, self.bit_width, value);
        self.len += 1;
        Ok(())
    }

    /// Returns the value at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }
        Some(read_field(&self.bytes, index * self.bit_width, self.bit_width))
    }

    /// The fixed width in bits of every stored value.
    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all values, keeping the bit width.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.len = 0;
    }

    /// The raw packed stream, exactly `bytes_needed(bit_width, len)` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over the stored values in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buf: self,
            index: 0,
        }
    }
}

/// Iterator over the values of a [`PackedBuf`], created by
/// [`PackedBuf::iter`].
pub struct Iter<'a> {
    buf: &'a PackedBuf,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.buf.len() {
            None
        } else {
            let val = self.buf.get(self.index);
            self.index += 1;
            val
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a PackedBuf {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
