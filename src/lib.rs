//! # packed_ints
//!
//! A `no_std` compatible fixed-width integer packer for bit widths 1..=8.
//!
//! Values that fit in `w` bits are stored back to back in a byte buffer with
//! no padding between them, MSB-first, and unpacked back exactly. The packed
//! buffer carries no header: the caller keeps `(bit_width, count)` out of
//! band, e.g. in a container format's column metadata.
//!
//! ```rust
//! use packed_ints::{bytes_needed, pack_into, unpack};
//!
//! let values: [u32; 10] = [2, 4, 1, 1, 1, 100, 2, 3, 3, 3];
//!
//! let mut packed = vec![0u8; bytes_needed(7, values.len())];
//! pack_into(&values, 7, &mut packed).unwrap();
//! assert_eq!(packed.len(), 9);
//!
//! let restored = unpack(&packed, 7, values.len()).unwrap();
//! assert_eq!(restored, values);
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use packed_ints::PackedBuf;
//!
//! // Standard Vec<u32>: 1000 elements × 4 bytes = 4000 bytes
//! let standard: Vec<u32> = (0..1000).collect();
//!
//! // 5-bit packing: 1000 elements × 5 bits = 625 bytes
//! let mut packed = PackedBuf::new(5).expect("valid width");
//! for i in 0..1000 {
//!     packed.push(i % 32).unwrap(); // values 0-31 fit in 5 bits
//! }
//! assert_eq!(packed.as_bytes().len(), 625);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), any(feature = "buf", test)))]
extern crate alloc;

pub mod error;
pub use error::PackedIntsError;

mod pack;
pub use pack::{bytes_needed, pack_into, pack_strict_into, unpack_into};

#[cfg(any(feature = "std", feature = "buf"))]
pub use pack::unpack;

#[cfg(feature = "buf")]
pub mod buf;

#[cfg(feature = "buf")]
pub use buf::PackedBuf;
