use crate::derivation::hash::HASH_MODULUS;
use crate::types::{ThcPercent, ThcRange};

/// Width of the target interval, in hundredths (26.50 - 20.50).
const SPAN_HUNDREDTHS: u32 = 600;

/// Maps a raw hash value onto [20.50, 26.50].
///
/// `20.5 + (raw / 100000) * 6.0` rounded half away from zero to two digits,
/// evaluated in integer hundredths so no float rounding leaks in:
/// `raw * 600 / 100000` reduces to `raw * 3 / 500`.
///
/// Inputs at or above `HASH_MODULUS` clamp to the ceiling.
pub fn interpolate(raw: u32) -> ThcPercent {
    let raw = raw.min(HASH_MODULUS - 1);
    let numerator = raw * SPAN_HUNDREDTHS;
    let offset = (numerator + HASH_MODULUS / 2) / HASH_MODULUS;
    // offset <= 600, fits comfortably
    ThcPercent::from_hundredths(ThcRange::FLOOR.hundredths() + offset as u16)
}

/// Midpoint of the range in tenths, rounded half away from zero.
///
/// Rounding is on the exact decimal midpoint, not on its f64 approximation:
/// 20.52 and 20.58 average to 20.55, which rounds to 20.6 here. A float
/// renderer computing `Math.round((lo + hi) / 2 * 10) / 10` sees 20.549999...
/// and shows 20.5. The two disagree only on such exact halves.
pub fn average_tenths(range: &ThcRange) -> u16 {
    let sum = u32::from(range.low().hundredths()) + u32::from(range.high().hundredths());
    // sum / 2 hundredths -> sum / 20 tenths
    ((sum + 10) / 20) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(interpolate(0), ThcRange::FLOOR);
        // 99999 -> 26.49994 -> 26.50
        assert_eq!(interpolate(HASH_MODULUS - 1), ThcRange::CEILING);
    }

    #[test]
    fn out_of_range_raw_clamps_to_ceiling() {
        assert_eq!(interpolate(HASH_MODULUS), ThcRange::CEILING);
        assert_eq!(interpolate(u32::MAX), ThcRange::CEILING);
    }

    #[test]
    fn average_uses_exact_decimal_halves() {
        let range = ThcRange::from_unordered(
            ThcPercent::from_hundredths(2052),
            ThcPercent::from_hundredths(2058),
        );
        // 20.55 -> 20.6
        assert_eq!(average_tenths(&range), 206);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 250 -> 0.015 -> 20.515 -> 20.52
        assert_eq!(interpolate(250).hundredths(), 2052);
        // 249 -> 0.01494 -> 20.51
        assert_eq!(interpolate(249).hundredths(), 2051);
    }

    #[test]
    fn average_rounds_half_up() {
        let range = ThcRange::from_unordered(
            ThcPercent::from_hundredths(2236),
            ThcPercent::from_hundredths(2305),
        );
        // 22.705 -> 22.7
        assert_eq!(average_tenths(&range), 227);

        let range = ThcRange::from_unordered(
            ThcPercent::from_hundredths(2100),
            ThcPercent::from_hundredths(2110),
        );
        // 21.05 -> 21.1
        assert_eq!(average_tenths(&range), 211);
    }
}
