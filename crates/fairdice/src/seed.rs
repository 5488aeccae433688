//! The closed set of seed kinds accepted by the typed facade.

use std::fmt;

use fairdice_core::error::RngError;
use serde::{Deserialize, Serialize};

use crate::word;

/// One typed value on a [`Replay`](crate::Replay) tape.
///
/// The supported kinds form a closed enumeration: a seed of any other type
/// is unrepresentable rather than rejected at runtime. `From` impls exist
/// for all ten primitives, so tapes read naturally:
///
/// ```
/// use fairdice::Seed;
///
/// let tape: Vec<Seed> = vec![0.5_f64.into(), 42_i32.into(), 7_u8.into()];
/// ```
///
/// Serde derives let tapes live in JSON fixtures alongside the tests that
/// replay them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Seed {
    /// 8-bit signed integer.
    I8(i8),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit signed integer.
    I16(i16),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit signed integer.
    I32(i32),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit signed integer.
    I64(i64),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 32-bit float in [0, 1).
    F32(f32),
    /// 64-bit float in [0, 1).
    F64(f64),
}

impl Seed {
    /// Returns the kind tag recorded for strict-mode verification.
    #[must_use]
    pub fn kind(self) -> SeedKind {
        match self {
            Seed::I8(_) => SeedKind::I8,
            Seed::U8(_) => SeedKind::U8,
            Seed::I16(_) => SeedKind::I16,
            Seed::U16(_) => SeedKind::U16,
            Seed::I32(_) => SeedKind::I32,
            Seed::U32(_) => SeedKind::U32,
            Seed::I64(_) => SeedKind::I64,
            Seed::U64(_) => SeedKind::U64,
            Seed::F32(_) => SeedKind::F32,
            Seed::F64(_) => SeedKind::F64,
        }
    }

    /// Transcodes the value into its 64-bit word representation.
    ///
    /// Signed integers sign-extend, unsigned integers zero-extend, floats
    /// scale into the word's value space via [`word::encode_f64`]. Integer
    /// encodings are lossless; the matching accessor recovers the value
    /// bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::SeedOutOfRange`] for a float outside [0, 1).
    #[allow(clippy::cast_sign_loss)]
    pub fn encode(self) -> Result<u64, RngError> {
        match self {
            Seed::I8(v) => Ok(i64::from(v) as u64),
            Seed::U8(v) => Ok(u64::from(v)),
            Seed::I16(v) => Ok(i64::from(v) as u64),
            Seed::U16(v) => Ok(u64::from(v)),
            Seed::I32(v) => Ok(i64::from(v) as u64),
            Seed::U32(v) => Ok(u64::from(v)),
            Seed::I64(v) => Ok(v as u64),
            Seed::U64(v) => Ok(v),
            Seed::F32(v) => word::encode_f64(f64::from(v)),
            Seed::F64(v) => word::encode_f64(v),
        }
    }
}

impl From<i8> for Seed {
    fn from(v: i8) -> Self {
        Seed::I8(v)
    }
}

impl From<u8> for Seed {
    fn from(v: u8) -> Self {
        Seed::U8(v)
    }
}

impl From<i16> for Seed {
    fn from(v: i16) -> Self {
        Seed::I16(v)
    }
}

impl From<u16> for Seed {
    fn from(v: u16) -> Self {
        Seed::U16(v)
    }
}

impl From<i32> for Seed {
    fn from(v: i32) -> Self {
        Seed::I32(v)
    }
}

impl From<u32> for Seed {
    fn from(v: u32) -> Self {
        Seed::U32(v)
    }
}

impl From<i64> for Seed {
    fn from(v: i64) -> Self {
        Seed::I64(v)
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        Seed::U64(v)
    }
}

impl From<f32> for Seed {
    fn from(v: f32) -> Self {
        Seed::F32(v)
    }
}

impl From<f64> for Seed {
    fn from(v: f64) -> Self {
        Seed::F64(v)
    }
}

/// Kind tag for a seed, retained per word for strict-mode checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedKind {
    /// 8-bit signed integer.
    I8,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit signed integer.
    I16,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit signed integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit signed integer.
    I64,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedKind::I8 => "i8",
            SeedKind::U8 => "u8",
            SeedKind::I16 => "i16",
            SeedKind::U16 => "u16",
            SeedKind::I32 => "i32",
            SeedKind::U32 => "u32",
            SeedKind::I64 => "i64",
            SeedKind::U64 => "u64",
            SeedKind::F32 => "f32",
            SeedKind::F64 => "f64",
        };
        f.write_str(name)
    }
}
