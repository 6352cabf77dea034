// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use ethereum_types::U256;
use std::fmt;

const U96_BITS: usize = 96;

/// An unsigned integer of 96 bits, stored in the low bits of a `u128`.
///
/// Zero is reserved by the ranking structures to mean "absent". Values can
/// only be built through the checked conversions below, so the high 32 bits
/// of the inner `u128` are always clear.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U96(u128);

/// Returned when a magnitude does not fit in 96 bits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value {value} exceeds the 96-bit range")]
pub struct RangeOverflow {
    pub value: U256,
}

impl U96 {
    pub const MAX: U96 = U96((1u128 << U96_BITS) - 1);

    #[inline]
    pub const fn zero() -> Self { U96(0) }

    #[inline]
    pub fn is_zero(&self) -> bool { self.0 == 0 }

    #[inline]
    pub fn as_u128(&self) -> u128 { self.0 }
}

impl TryFrom<U256> for U96 {
    type Error = RangeOverflow;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.bits() > U96_BITS {
            return Err(RangeOverflow { value });
        }
        Ok(U96(value.low_u128()))
    }
}

impl TryFrom<u128> for U96 {
    type Error = RangeOverflow;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(RangeOverflow {
                value: U256::from(value),
            });
        }
        Ok(U96(value))
    }
}

impl From<u64> for U96 {
    fn from(value: u64) -> Self { U96(value as u128) }
}

impl From<U96> for U256 {
    fn from(value: U96) -> Self { U256::from(value.0) }
}

impl From<U96> for u128 {
    fn from(value: U96) -> Self { value.0 }
}

impl fmt::Display for U96 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for U96 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_u256() {
        assert_eq!(U96::try_from(U256::zero()), Ok(U96::zero()));
        assert_eq!(U96::try_from(U256::from(42u64)), Ok(U96::from(42u64)));

        let max = (U256::one() << 96) - 1;
        assert_eq!(U96::try_from(max), Ok(U96::MAX));

        let overflow = U256::one() << 96;
        assert_eq!(
            U96::try_from(overflow),
            Err(RangeOverflow { value: overflow })
        );
        assert!(U96::try_from(U256::MAX).is_err());
    }

    #[test]
    fn test_narrow_u128() {
        assert_eq!(
            U96::try_from(u128::from(u64::MAX)),
            Ok(U96::from(u64::MAX))
        );
        assert_eq!(U96::try_from((1u128 << 96) - 1), Ok(U96::MAX));
        assert!(U96::try_from(1u128 << 96).is_err());
        assert!(U96::try_from(u128::MAX).is_err());
    }

    #[test]
    fn test_widen() {
        assert_eq!(U256::from(U96::MAX), (U256::one() << 96) - 1);
        assert_eq!(U96::MAX.as_u128(), (1u128 << 96) - 1);
        assert_eq!(format!("{}", U96::from(1234u64)), "1234");
        assert!(U96::zero().is_zero());
        assert!(U96::from(1u64) > U96::zero());
    }
}
