//! Numeric transcoding between application values and 64-bit words.
//!
//! A word stores exactly one of: a raw unsigned 64-bit integer, a signed
//! 64-bit integer reinterpreted bit-for-bit, or a float in [0, 1) scaled
//! into the word's value space. The word carries no kind metadata; which
//! decoding applies is selected by the typed accessor that reads it.

use fairdice_core::error::RngError;
use fairdice_core::rng::EXP2_63;

/// Decodes a word as a non-negative 63-bit integer by clearing bit 63.
///
/// Lossy by exactly one bit for words at or above `2^63`; reading the word
/// back as unsigned (the identity) is the lossless path for those.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn decode_i63(word: u64) -> i64 {
    (word & (u64::MAX >> 1)) as i64
}

/// Decodes a word as a float in [0, 1): `decode_i63(word) / 2^63`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decode_f64(word: u64) -> f64 {
    decode_i63(word) as f64 / EXP2_63
}

/// Encodes a float in [0, 1) as the word `floor(f * 2^63)`.
///
/// Scaling by a power of two is exact, so the round trip through
/// [`decode_f64`] returns `f` unchanged whenever `f * 2^63` is an integer
/// (any `f >= 2^-11`). Below that the floor truncates low-order mantissa
/// bits; that truncation is the documented precision boundary, not a bug.
///
/// # Errors
///
/// Returns [`RngError::SeedOutOfRange`] unless `0.0 <= f < 1.0` (NaN
/// included).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_f64(f: f64) -> Result<u64, RngError> {
    if !(0.0..1.0).contains(&f) {
        return Err(RngError::SeedOutOfRange(f));
    }
    Ok((f * EXP2_63) as u64)
}

#[cfg(test)]
mod tests {
    // Exact float equality is the property under test.
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn i63_fold_clears_only_the_top_bit() {
        assert_eq!(decode_i63(u64::MAX), i64::MAX);
        assert_eq!(
            decode_i63(0xFEED_FACE_BAAD_F00D),
            0x7EED_FACE_BAAD_F00D_i64
        );
        // Words below 2^63 pass through unchanged.
        assert_eq!(decode_i63(0x7FFF_FFFF_FFFF_FFFF), i64::MAX);
        assert_eq!(decode_i63(42), 42);
    }

    #[test]
    fn half_encodes_to_bit_62() {
        assert_eq!(encode_f64(0.5), Ok(1_u64 << 62));
        assert_eq!(decode_f64(1_u64 << 62), 0.5);
    }

    #[test]
    fn zero_is_a_valid_seed() {
        assert_eq!(encode_f64(0.0), Ok(0));
        assert_eq!(decode_f64(0), 0.0);
    }

    #[test]
    fn round_trip_is_exact_for_dyadic_and_ordinary_floats() {
        for f in [0.1, 0.25, 0.42, std::f64::consts::PI / 10.0, 0.999_999] {
            let word = encode_f64(f).unwrap();
            assert_eq!(decode_f64(word), f, "round trip of {f}");
        }
    }

    #[test]
    fn round_trip_truncates_below_the_precision_boundary() {
        // 2^-64 scales to one half, which floors to word 0.
        let word = encode_f64(2.0_f64.powi(-64)).unwrap();
        assert_eq!(word, 0);
        assert_eq!(decode_f64(word), 0.0);
    }

    #[test]
    fn out_of_range_floats_are_rejected() {
        assert_eq!(encode_f64(1.0), Err(RngError::SeedOutOfRange(1.0)));
        assert_eq!(encode_f64(1.5), Err(RngError::SeedOutOfRange(1.5)));
        assert_eq!(encode_f64(-0.1), Err(RngError::SeedOutOfRange(-0.1)));
        assert!(encode_f64(f64::NAN).is_err());
        assert!(encode_f64(f64::INFINITY).is_err());
    }
}
