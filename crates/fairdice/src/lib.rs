//! Fairdice — a deterministic, replayable random source for tests.
//!
//! Instead of drawing from an entropy source, a fairdice generator replays
//! a fixed, caller-supplied tape of values, cycling back to the start when
//! exhausted. Code under test depends on the
//! [`RandomSource`] capability; tests hand it a [`Replay`] built from the
//! exact values each accessor should return, so assertions on downstream
//! behavior become exact rather than statistical.
//!
//! Two layers, each independently usable:
//!
//! - [`Sequence`] replays raw 64-bit words through the base primitives.
//! - [`Replay`] accepts heterogeneous typed seeds ([`Seed`]) and decodes
//!   each word according to the typed accessor that reads it.
//!
//! The [`word`] module holds the pure encode/decode functions shared by
//! both.

pub mod replay;
pub mod seed;
pub mod sequence;
pub mod word;

pub use fairdice_core::error::RngError;
pub use fairdice_core::rng::{EXP2_63, RandomSource};
pub use replay::Replay;
pub use seed::{Seed, SeedKind};
pub use sequence::Sequence;
