//! Minimal 256-bit unsigned integer used as the codec's word and input type.
//!
//! Only the operations the codec needs are provided: shifts, bitwise AND/OR,
//! low-bit masking and big-endian byte conversion. There is no arithmetic.

use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Shl, Shr};
use std::str::FromStr;

/// A 256-bit unsigned integer stored as two u128 halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct U256 {
    // Field order matters for the derived Ord: high half compares first.
    hi: u128,
    lo: u128,
}

/// All-ones mask of `bits` low bits for a u128 half.
fn mask128(bits: u32) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

impl U256 {
    /// Width of the word in bits.
    pub const BITS: u32 = 256;
    pub const ZERO: Self = Self { hi: 0, lo: 0 };
    pub const ONE: Self = Self { hi: 0, lo: 1 };
    /// `2^256 - 1`, every bit set.
    pub const MAX: Self = Self {
        hi: u128::MAX,
        lo: u128::MAX,
    };

    /// Word whose upper 128 bits are `hi` and lower 128 bits are `lo`.
    pub const fn from_halves(hi: u128, lo: u128) -> Self {
        Self { hi, lo }
    }

    /// Bits 128..256.
    pub const fn hi(&self) -> u128 {
        self.hi
    }

    /// Bits 0..128.
    pub const fn lo(&self) -> u128 {
        self.lo
    }

    pub fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// `self mod 2^width`.
    pub fn low_bits(self, width: u32) -> Self {
        if width >= Self::BITS {
            self
        } else if width >= 128 {
            Self {
                hi: self.hi & mask128(width - 128),
                lo: self.lo,
            }
        } else {
            Self {
                hi: 0,
                lo: self.lo & mask128(width),
            }
        }
    }

    /// `2^width - 1`.
    pub fn ones(width: u32) -> Self {
        Self::MAX.low_bits(width)
    }

    /// Number of significant bits (0 for zero).
    pub fn bit_len(&self) -> u32 {
        if self.hi != 0 {
            256 - self.hi.leading_zeros()
        } else {
            128 - self.lo.leading_zeros()
        }
    }

    /// Low 128 bits; higher bits are discarded.
    pub fn low_u128(&self) -> u128 {
        self.lo
    }

    /// The 32-byte big-endian encoding stored for a packed record.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..16].copy_from_slice(&self.hi.to_be_bytes());
        out[16..].copy_from_slice(&self.lo.to_be_bytes());
        out
    }

    /// Inverse of [`U256::to_be_bytes`].
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut hi = [0u8; 16];
        let mut lo = [0u8; 16];
        hi.copy_from_slice(&bytes[..16]);
        lo.copy_from_slice(&bytes[16..]);
        Self {
            hi: u128::from_be_bytes(hi),
            lo: u128::from_be_bytes(lo),
        }
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        match n {
            0 => self,
            n if n >= 256 => Self::ZERO,
            n if n >= 128 => Self {
                hi: self.lo << (n - 128),
                lo: 0,
            },
            n => Self {
                hi: (self.hi << n) | (self.lo >> (128 - n)),
                lo: self.lo << n,
            },
        }
    }
}

impl Shr<u32> for U256 {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        match n {
            0 => self,
            n if n >= 256 => Self::ZERO,
            n if n >= 128 => Self {
                hi: 0,
                lo: self.hi >> (n - 128),
            },
            n => Self {
                hi: self.hi >> n,
                lo: (self.lo >> n) | (self.hi << (128 - n)),
            },
        }
    }
}

impl BitOr for U256 {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            hi: self.hi | rhs.hi,
            lo: self.lo | rhs.lo,
        }
    }
}

impl BitAnd for U256 {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            hi: self.hi & rhs.hi,
            lo: self.lo & rhs.lo,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(v: $t) -> Self {
                    Self { hi: 0, lo: v as u128 }
                }
            }
        )*
    };
}

impl_from_unsigned!(bool, u8, u16, u32, u64, u128);

impl fmt::Display for U256 {
    /// `0x` followed by 64 lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:032x}{:032x}", self.hi, self.lo)
    }
}

impl FromStr for U256 {
    type Err = CodecError;

    /// Parse up to 64 hex digits, with or without `0x`. Shorter inputs are
    /// left-padded with zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(CodecError::Empty);
        }
        if digits.len() > 64 {
            return Err(CodecError::TooLong(digits.len()));
        }
        let padded = format!("{digits:0>64}");
        let bytes = hex::decode(&padded).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self::from_be_bytes(arr))
    }
}
