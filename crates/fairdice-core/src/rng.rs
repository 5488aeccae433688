//! Random number generator abstraction for determinism.
//!
//! In production, implementations wrap a real RNG. In tests and replays, a
//! sequence-backed implementation is injected so downstream assertions
//! become exact rather than statistical.

use crate::error::RngError;

/// Scale factor relating the 63-bit integer primitive to the unit interval:
/// a uniform float is `next_i63() as f64 / EXP2_63`.
pub const EXP2_63: f64 = 9_223_372_036_854_775_808.0;

/// Abstraction over random number generation.
///
/// Only four operations are required; every typed accessor is a provided
/// method derived from `next_u64` by the standard composition (narrowing
/// casts of one 64-bit word per call). Implementations that need per-call
/// control — such as a replay source decoding each word by the accessor
/// that reads it — override the provided methods.
///
/// A single instance is not safe for concurrent use: accessors take
/// `&mut self` and callers needing concurrent determinism must construct
/// one instance per thread or serialize access externally.
// Narrowing and reinterpreting casts below are the decoding contract, not
// accidents.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub trait RandomSource: Send + Sync {
    /// Returns the next raw 64-bit word.
    ///
    /// This is the foundational primitive; every provided accessor consumes
    /// exactly one word through it.
    fn next_u64(&mut self) -> u64;

    /// Reseeds the generator.
    ///
    /// Implementations with a fixed sequence treat this as a no-op so they
    /// can be substituted into code paths that reseed for hygiene.
    fn reseed(&mut self, seed: u64);

    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Replay implementations return [`RngError::FillBytesUnsupported`]
    /// because the word consumption of a bulk fill is ambiguous.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError>;

    /// Shuffles `n` elements by calling `swap(i, j)` for each exchange.
    ///
    /// # Errors
    ///
    /// Replay implementations return [`RngError::ShuffleUnsupported`]
    /// because a Fisher-Yates pass consumes an unpredictable word count.
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize)) -> Result<(), RngError>;

    /// Returns a non-negative `i64` in `[0, 2^63)`: the low 63 bits of the
    /// next word. Words at or above `2^63` lose their top bit here; use
    /// [`RandomSource::next_u64`] for the lossless path.
    fn next_i63(&mut self) -> i64 {
        (self.next_u64() & (u64::MAX >> 1)) as i64
    }

    /// Returns the next word reinterpreted bit-for-bit as `i64`.
    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Returns the low 32 bits of the next word as `i32`.
    fn next_i32(&mut self) -> i32 {
        self.next_u64() as i32
    }

    /// Returns the low 16 bits of the next word as `i16`.
    fn next_i16(&mut self) -> i16 {
        self.next_u64() as i16
    }

    /// Returns the low 8 bits of the next word as `i8`.
    fn next_i8(&mut self) -> i8 {
        self.next_u64() as i8
    }

    /// Returns the low 32 bits of the next word.
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Returns the low 16 bits of the next word.
    fn next_u16(&mut self) -> u16 {
        self.next_u64() as u16
    }

    /// Returns the low 8 bits of the next word.
    fn next_u8(&mut self) -> u8 {
        self.next_u64() as u8
    }

    /// Returns `next_i63() % n`. The result is always non-negative because
    /// the dividend is.
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    fn next_i63n(&mut self, n: i64) -> i64 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_i63() % n
    }

    /// Returns `next_i64() % n`. Rust truncated remainder: the result takes
    /// the sign of the decoded value, so a word with its top bit set can
    /// yield a negative result.
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    fn next_i64n(&mut self, n: i64) -> i64 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_i64() % n
    }

    /// Returns `next_i32() % n` (truncated remainder, sign of the dividend).
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    fn next_i32n(&mut self, n: i32) -> i32 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_i32() % n
    }

    /// Returns `next_i16() % n` (truncated remainder, sign of the dividend).
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    fn next_i16n(&mut self, n: i16) -> i16 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_i16() % n
    }

    /// Returns `next_i8() % n` (truncated remainder, sign of the dividend).
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    fn next_i8n(&mut self, n: i8) -> i8 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_i8() % n
    }

    /// Returns `next_u64() % n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    fn next_u64n(&mut self, n: u64) -> u64 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_u64() % n
    }

    /// Returns `next_u32() % n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    fn next_u32n(&mut self, n: u32) -> u32 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_u32() % n
    }

    /// Returns `next_u16() % n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    fn next_u16n(&mut self, n: u16) -> u16 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_u16() % n
    }

    /// Returns `next_u8() % n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    fn next_u8n(&mut self, n: u8) -> u8 {
        assert!(n > 0, "bound must be positive, got {n}");
        self.next_u8() % n
    }

    /// Returns a uniform `f64` in `[0.0, 1.0)`, derived from the 63-bit
    /// primitive as `next_i63() as f64 / 2^63`.
    fn next_f64(&mut self) -> f64 {
        self.next_i63() as f64 / EXP2_63
    }

    /// Returns a uniform `f32` in `[0.0, 1.0)`, narrowed from
    /// [`RandomSource::next_f64`].
    fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    /// Exponential-distribution accessor. Replay implementations return the
    /// uniform float unchanged: exact replay, not distribution fidelity.
    fn exp_f64(&mut self) -> f64 {
        self.next_f64()
    }

    /// Normal-distribution accessor. Replay implementations return the
    /// uniform float unchanged: exact replay, not distribution fidelity.
    fn norm_f64(&mut self) -> f64 {
        self.next_f64()
    }

    /// Returns `n` values in `[0, n)`, each drawn independently via
    /// `next_i32n(n)` and consuming one word.
    ///
    /// This is NOT a true permutation: duplicates are possible. A real
    /// Fisher-Yates construction would consume a different number of words
    /// per call and desynchronize replay expectations, so the independent
    /// draws are kept deliberately.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds `i32::MAX`.
    fn perm(&mut self, n: usize) -> Vec<usize> {
        let bound = i32::try_from(n).expect("permutation length exceeds i32::MAX");
        (0..n).map(|_| self.next_i32n(bound) as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    // Exact float equality is the property under test.
    #![allow(clippy::float_cmp)]

    use super::*;

    /// Minimal source yielding a fixed word forever; exercises the provided
    /// derivations without any replay machinery.
    struct FixedWord(u64);

    impl RandomSource for FixedWord {
        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn reseed(&mut self, _seed: u64) {}

        fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), RngError> {
            Err(RngError::FillBytesUnsupported)
        }

        fn shuffle(
            &mut self,
            _n: usize,
            _swap: &mut dyn FnMut(usize, usize),
        ) -> Result<(), RngError> {
            Err(RngError::ShuffleUnsupported)
        }
    }

    #[test]
    fn i63_masks_off_the_sign_bit() {
        let mut src = FixedWord(u64::MAX);
        assert_eq!(src.next_i63(), i64::MAX);
        assert_eq!(src.next_i64(), -1);
    }

    #[test]
    fn narrowing_accessors_truncate_low_bits() {
        let mut src = FixedWord(0x0123_4567_89AB_CDEF);
        assert_eq!(src.next_u32(), 0x89AB_CDEF);
        assert_eq!(src.next_u16(), 0xCDEF);
        assert_eq!(src.next_u8(), 0xEF);
        assert_eq!(src.next_i8(), -17); // 0xEF reinterpreted
    }

    #[test]
    fn f64_is_i63_over_two_pow_63() {
        let mut src = FixedWord(1_u64 << 62);
        assert_eq!(src.next_f64(), 0.5);
        assert_eq!(src.next_f32(), 0.5_f32);
    }

    #[test]
    fn bounded_accessors_apply_modulus() {
        let mut src = FixedWord(52);
        assert_eq!(src.next_i63n(42), 10);
        assert_eq!(src.next_u8n(50), 2);
    }

    #[test]
    fn negative_dividend_keeps_its_sign() {
        // Word reinterprets to -1 as i64; truncated remainder stays negative.
        let mut src = FixedWord(u64::MAX);
        assert_eq!(src.next_i64n(10), -1);
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn zero_bound_panics() {
        let mut src = FixedWord(1);
        let _ = src.next_i63n(0);
    }

    #[test]
    fn perm_draws_independently() {
        let mut src = FixedWord(2);
        assert_eq!(src.perm(3), vec![2, 2, 2]);
        assert!(src.perm(0).is_empty());
    }
}
