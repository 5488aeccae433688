//! Cyclic replay of a fixed sequence of 64-bit words.

use fairdice_core::error::RngError;
use fairdice_core::rng::RandomSource;
use rand::TryRngCore;

/// A [`RandomSource`] that replays a fixed, caller-supplied sequence of
/// 64-bit words, wrapping back to the start once exhausted.
///
/// The cursor is the only mutable state in the crate: every draw returns
/// the word at the cursor and advances it modulo the sequence length. One
/// instance must not be shared across threads without external
/// serialization; construct one per thread when concurrent determinism is
/// needed.
///
/// Callers holding typed seed values should use
/// [`Replay`](crate::Replay) instead, which transcodes them into words up
/// front.
#[derive(Debug, Clone)]
pub struct Sequence {
    words: Box<[u64]>,
    pos: usize,
}

impl Sequence {
    /// Creates a source that cycles over `words`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EmptySequence`] if `words` is empty; cycling
    /// over zero words is undefined.
    pub fn new(words: impl Into<Vec<u64>>) -> Result<Self, RngError> {
        let words = words.into().into_boxed_slice();
        if words.is_empty() {
            return Err(RngError::EmptySequence);
        }
        tracing::debug!(len = words.len(), "sequence source created");
        Ok(Self { words, pos: 0 })
    }

    /// Index of the word the next draw will return.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the word at the cursor and advances it, wrapping after the
    /// last element. The single state mutation in the crate.
    fn next_word(&mut self) -> u64 {
        let word = self.words[self.pos];
        self.pos = (self.pos + 1) % self.words.len();
        if self.pos == 0 {
            tracing::trace!(len = self.words.len(), "sequence wrapped");
        }
        word
    }
}

impl RandomSource for Sequence {
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    // The sequence is fixed at construction; reseed requests are ignored so
    // this source can stand in for generators that reseed for hygiene.
    fn reseed(&mut self, _seed: u64) {
        tracing::trace!("reseed ignored: sequence is fixed at construction");
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), RngError> {
        Err(RngError::FillBytesUnsupported)
    }

    fn shuffle(&mut self, _n: usize, _swap: &mut dyn FnMut(usize, usize)) -> Result<(), RngError> {
        Err(RngError::ShuffleUnsupported)
    }
}

/// Bridge into the rand ecosystem. `try_fill_bytes` surfaces the
/// unsupported-operation error instead of guessing a word count.
impl TryRngCore for Sequence {
    type Error = RngError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Ok(self.next_u32())
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok(self.next_word())
    }

    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(RngError::FillBytesUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_words_cyclically() {
        let mut seq = Sequence::new(vec![1, 2, 3]).unwrap();
        let drawn: Vec<u64> = (0..7).map(|_| seq.next_u64()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn single_word_repeats_forever() {
        let mut seq = Sequence::new(vec![9]).unwrap();
        for _ in 0..5 {
            assert_eq!(seq.next_u64(), 9);
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            Sequence::new(Vec::new()).unwrap_err(),
            RngError::EmptySequence
        );
    }

    #[test]
    fn i63_primitive_folds_the_top_bit() {
        let mut seq = Sequence::new(vec![0xFEED_FACE_BAAD_F00D, 7]).unwrap();
        assert_eq!(seq.next_i63(), 0x7EED_FACE_BAAD_F00D);
        assert_eq!(seq.next_i63(), 7);
    }

    #[test]
    fn reseed_leaves_cursor_and_values_untouched() {
        let mut seq = Sequence::new(vec![1, 2]).unwrap();
        assert_eq!(seq.next_u64(), 1);
        seq.reseed(999);
        assert_eq!(seq.position(), 1);
        assert_eq!(seq.next_u64(), 2);
    }

    #[test]
    fn unsupported_operations_fail_without_consuming() {
        let mut seq = Sequence::new(vec![5, 6]).unwrap();
        let mut buf = [0_u8; 4];
        assert_eq!(
            seq.fill_bytes(&mut buf).unwrap_err(),
            RngError::FillBytesUnsupported
        );
        assert_eq!(
            seq.shuffle(3, &mut |_, _| {}).unwrap_err(),
            RngError::ShuffleUnsupported
        );
        // First word is still at the cursor.
        assert_eq!(seq.next_u64(), 5);
    }

    #[test]
    fn try_rng_core_bridge_draws_words() {
        let mut seq = Sequence::new(vec![0xAAAA_BBBB_CCCC_DDDD]).unwrap();
        assert_eq!(seq.try_next_u64(), Ok(0xAAAA_BBBB_CCCC_DDDD));
        assert_eq!(seq.try_next_u32(), Ok(0xCCCC_DDDD));
        let mut buf = [0_u8; 8];
        assert_eq!(
            seq.try_fill_bytes(&mut buf),
            Err(RngError::FillBytesUnsupported)
        );
    }

    #[test]
    fn clone_forks_the_cursor() {
        let mut seq = Sequence::new(vec![1, 2, 3]).unwrap();
        let _ = seq.next_u64();
        let mut fork = seq.clone();
        assert_eq!(seq.next_u64(), fork.next_u64());
    }
}
