use crate::types::StrainKey;

/// Raw hash outputs lie in `0..HASH_MODULUS`.
pub const HASH_MODULUS: u32 = 100_000;

/// Rolling hash in the FNV-1a family, with the multiply replaced by the
/// shift-add sum `acc + (acc<<1) + (acc<<4) + (acc<<7) + (acc<<8) + (acc<<24)`.
///
/// All arithmetic is two's-complement i32 with wraparound. Widening any step
/// changes the output, so every operation goes through `wrapping_*`.
pub fn rolling_hash(key: &StrainKey, seed: u32) -> u32 {
    let mut acc = seed as i32;

    for unit in key.code_units() {
        acc ^= i32::from(unit);
        acc = acc
            .wrapping_add(acc.wrapping_shl(1))
            .wrapping_add(acc.wrapping_shl(4))
            .wrapping_add(acc.wrapping_shl(7))
            .wrapping_add(acc.wrapping_shl(8))
            .wrapping_add(acc.wrapping_shl(24));
    }

    // i32::MIN has no positive i32 counterpart
    acc.unsigned_abs() % HASH_MODULUS
}
