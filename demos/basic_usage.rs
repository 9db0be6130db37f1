use packed_ints::{PackedBuf, bytes_needed, pack_into, unpack};

fn main() {
    println!("=== Packed Ints Examples ===\n");

    // Example 1: Raw pack/unpack over a caller-owned buffer
    let _ = example_raw_buffers();

    // Example 2: Owned push/get buffer
    let _ = example_packed_buf();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_raw_buffers() -> Result<(), packed_ints::PackedIntsError> {
    println!("Example 1: Packing 7-bit values into a byte buffer");

    let values = [2u32, 4, 1, 1, 1, 100, 2, 3, 3, 3];
    let mut packed = vec![0u8; bytes_needed(7, values.len())];
    pack_into(&values, 7, &mut packed)?;

    println!("  {} values x 7 bits -> {} bytes", values.len(), packed.len());
    for (i, byte) in packed.iter().enumerate() {
        println!("  byte {} = {:3} (0b{:08b})", i, byte, byte);
    }

    let restored = unpack(&packed, 7, values.len())?;
    println!("  restored: {:?}", restored);
    println!();

    Ok(())
}

fn example_packed_buf() -> Result<(), packed_ints::PackedIntsError> {
    println!("Example 2: Storing palette indices (5 bits each)");

    let mut colors = PackedBuf::new(5)?;

    // Store palette indices (0-31)
    colors.push(15)?; // Red shade
    colors.push(8)?; // Green shade
    colors.push(23)?; // Blue shade

    println!("  Stored {} colors in {} bytes", colors.len(), colors.as_bytes().len());
    for (i, color) in colors.iter().enumerate() {
        println!("  Color {}: {}", i, color);
    }
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    // Standard Vec<u32>
    let standard_bytes = count * 4;

    // 6-bit packing (values 0-63)
    let mut packed = PackedBuf::new(6).expect("valid width");
    for i in 0..count {
        packed.push(i as u32 % 64).unwrap();
    }
    let packed_bytes = packed.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 6-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);
}
