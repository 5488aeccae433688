//! Fairdice Core — base random-generator capability.
//!
//! This crate defines the `RandomSource` trait that randomness-dependent
//! code programs against, plus the error taxonomy shared by all
//! implementations. It contains no replay machinery; the sequence-backed
//! implementations live in the `fairdice` crate.

pub mod error;
pub mod rng;
