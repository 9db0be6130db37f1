// tests/proptest.rs

// The whole file exercises the alloc-backed surface.
#![cfg(feature = "buf")]

use packed_ints::{PackedBuf, bytes_needed, pack_into, pack_strict_into, unpack, unpack_into};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Generate a width in 1..=8 together with values that fit in it.
fn width_and_values() -> impl Strategy<Value = (usize, Vec<u32>)> {
    (1usize..=8).prop_flat_map(|w| {
        let max = (1u32 << w) - 1;
        (Just(w), prop::collection::vec(0..=max, 0..200))
    })
}

fn pack_to_vec(values: &[u32], w: usize) -> Vec<u8> {
    let mut out = vec![0u8; bytes_needed(w, values.len())];
    pack_into(values, w, &mut out).unwrap();
    out
}

//
// -----------------------------------------------------------------------------
// Round-Trip Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_pack_unpack_roundtrip((w, values) in width_and_values()) {
        let packed = pack_to_vec(&values, w);
        prop_assert_eq!(packed.len(), bytes_needed(w, values.len()));

        let mut restored = vec![0u32; values.len()];
        unpack_into(&packed, w, &mut restored).unwrap();
        prop_assert_eq!(restored, values);
    }
}

proptest! {
    #[test]
    fn prop_unpack_vec_matches_unpack_into((w, values) in width_and_values()) {
        let packed = pack_to_vec(&values, w);
        prop_assert_eq!(unpack(&packed, w, values.len()).unwrap(), values);
    }
}

proptest! {
    #[test]
    fn prop_w1_boolean_roundtrip(values in prop::collection::vec(any::<bool>(), 0..1000)) {
        let bits: Vec<u32> = values.iter().map(|&b| b as u32).collect();
        let packed = pack_to_vec(&bits, 1);
        prop_assert_eq!(unpack(&packed, 1, bits.len()).unwrap(), bits);
    }
}

//
// -----------------------------------------------------------------------------
// Masking and Strict Mode
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_masking_idempotent(
        w in 1usize..=8,
        values in prop::collection::vec(any::<u32>(), 0..200)
    ) {
        let mask = (1u32 << w) - 1;
        let masked: Vec<u32> = values.iter().map(|&v| v & mask).collect();

        // High bits beyond w never affect the packed bytes.
        prop_assert_eq!(pack_to_vec(&values, w), pack_to_vec(&masked, w));
    }
}

proptest! {
    #[test]
    fn prop_strict_matches_default_for_in_range((w, values) in width_and_values()) {
        let mut strict = vec![0u8; bytes_needed(w, values.len())];
        pack_strict_into(&values, w, &mut strict).unwrap();
        prop_assert_eq!(strict, pack_to_vec(&values, w));
    }
}

//
// -----------------------------------------------------------------------------
// Buffer Hygiene
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_no_writes_past_packed_range(
        (w, values) in width_and_values(),
        canary in any::<u8>()
    ) {
        let needed = bytes_needed(w, values.len());
        let mut out = vec![0u8; needed + 3];
        for b in &mut out[needed..] {
            *b = canary;
        }

        pack_into(&values, w, &mut out).unwrap();
        prop_assert!(out[needed..].iter().all(|&b| b == canary));

        let mut restored = vec![0u32; values.len()];
        unpack_into(&out[..needed], w, &mut restored).unwrap();
        prop_assert_eq!(restored, values);
    }
}

//
// -----------------------------------------------------------------------------
// PackedBuf Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_packed_buf_matches_raw_pack((w, values) in width_and_values()) {
        let mut buf = PackedBuf::new(w).unwrap();
        for &v in &values {
            buf.push(v).unwrap();
        }

        prop_assert_eq!(buf.len(), values.len());
        prop_assert_eq!(buf.as_bytes(), &pack_to_vec(&values, w)[..]);

        for (i, &expected) in values.iter().enumerate() {
            prop_assert_eq!(buf.get(i), Some(expected));
        }
    }
}

proptest! {
    #[test]
    fn prop_packed_buf_bytes_roundtrip((w, values) in width_and_values()) {
        let mut buf = PackedBuf::new(w).unwrap();
        for &v in &values {
            buf.push(v).unwrap();
        }

        let restored = PackedBuf::from_bytes(buf.as_bytes(), w, buf.len()).unwrap();
        let collected: Vec<u32> = restored.iter().collect();
        prop_assert_eq!(collected, values);
    }
}

//
// -----------------------------------------------------------------------------
// Fixed Patterns
// -----------------------------------------------------------------------------

#[test]
fn pattern_coverage_per_width() {
    for w in 2usize..=8 {
        let max = (1u32 << w) - 1;

        let zeros = vec![0u32; 35];
        let maxed = vec![max; 35];
        let increments: Vec<u32> = (0..35u32).map(|i| i % (max + 1)).collect();

        for values in [&zeros, &maxed, &increments] {
            let packed = pack_to_vec(values, w);
            assert_eq!(unpack(&packed, w, values.len()).unwrap(), *values, "w={w}");
        }
    }
}

#[test]
fn all_max_fills_every_packed_bit() {
    // 35 values never end on a byte boundary for w=3: the last partial byte
    // keeps its padding bits zero.
    let maxed = vec![0b111u32; 35];
    let packed = pack_to_vec(&maxed, 3);
    assert_eq!(packed.len(), 14); // 105 bits
    assert!(packed[..13].iter().all(|&b| b == 0xFF));
    assert_eq!(packed[13], 0b1000_0000);
}
