use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tokens for the phases i^0, i^1, i^2 and i^3.
const PHASE_TOKENS: [&str; 4] = ["+", "i", "-", "-i"];

/// A complex phase of the form i^q, stored through its exponent q in {0, 1, 2, 3}.
///
/// Arithmetic acts on the exponent modulo 4, i.e., adding phases multiplies the
/// corresponding complex numbers.
///
/// # Examples
/// ```
/// # fn main() { #![cfg_attr(coverage_nightly, coverage(off))]
/// # use qe::BinaryPhase;
/// let i = BinaryPhase::new(1);
/// assert_eq!(i + i, BinaryPhase::new(2));
/// assert_eq!(BinaryPhase::new(-1).to_int(), 3);
/// assert_eq!(BinaryPhase::new(3).to_string(), "-i");
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryPhase(u8);

impl BinaryPhase {
    /// The phase +1.
    pub const ONE: Self = Self(0);

    /// Reduce an exponent modulo 4; negative exponents wrap around.
    pub const fn new(exponent: i64) -> Self {
        Self((exponent & 0b11) as u8)
    }

    pub const fn to_int(self) -> u8 {
        self.0
    }

    /// Whether the phase is +1 or -1.
    pub const fn is_real(self) -> bool {
        self.0 & 1 == 0
    }

    /// Multiply by i.
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Multiply by -i.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Parse one of the phase prefixes "", "+", "i", "-", "-i".
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "" | "+" => Some(Self(0)),
            "i" => Some(Self(1)),
            "-" => Some(Self(2)),
            "-i" => Some(Self(3)),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        PHASE_TOKENS[self.0 as usize]
    }
}

impl fmt::Display for BinaryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AddAssign<i64> for BinaryPhase {
    fn add_assign(&mut self, rhs: i64) {
        *self = Self::new((self.0 as i64).wrapping_add(rhs));
    }
}

impl SubAssign<i64> for BinaryPhase {
    fn sub_assign(&mut self, rhs: i64) {
        *self = Self::new((self.0 as i64).wrapping_sub(rhs));
    }
}

impl AddAssign for BinaryPhase {
    fn add_assign(&mut self, rhs: Self) {
        *self += rhs.0 as i64;
    }
}

impl SubAssign for BinaryPhase {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= rhs.0 as i64;
    }
}

impl Add for BinaryPhase {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for BinaryPhase {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Neg for BinaryPhase {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-(self.0 as i64))
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(BinaryPhase::new(0).to_int(), 0);
        assert_eq!(BinaryPhase::new(1).to_int(), 1);
        assert_eq!(BinaryPhase::new(2).to_int(), 2);
        assert_eq!(BinaryPhase::new(3).to_int(), 3);
        assert_eq!(BinaryPhase::new(-1).to_int(), 3);
        assert_eq!(BinaryPhase::new(10).to_int(), 2);
    }

    #[test]
    fn arithmetic() {
        let p = BinaryPhase::new;
        assert_eq!(p(0) + p(0), p(0));
        assert_eq!(p(0) + p(1), p(1));
        assert_eq!(p(3) + p(0), p(3));
        assert_eq!(p(1) + p(3), p(0));
        assert_eq!(p(1) - p(3), p(2));
        assert_eq!(-p(1), p(3));

        assert_eq!(*p(3).increment(), p(0));
        assert_eq!(*p(0).decrement(), p(3));

        assert!(p(0).is_real());
        assert!(p(2).is_real());
        assert!(!p(1).is_real());
        assert!(!p(3).is_real());

        let mut phase = p(2);
        phase += 3;
        assert_eq!(phase, p(1));
    }

    #[test]
    fn display() {
        let rendered: Vec<String> = (0..4).map(|q| BinaryPhase::new(q).to_string()).collect();
        assert_eq!(rendered, ["+", "i", "-", "-i"]);
    }

    #[test]
    fn prefixes() {
        for q in 0..4 {
            let phase = BinaryPhase::new(q);
            assert_eq!(BinaryPhase::from_prefix(phase.as_str()), Some(phase));
        }
        assert_eq!(BinaryPhase::from_prefix(""), Some(BinaryPhase::ONE));
        assert_eq!(BinaryPhase::from_prefix("+i"), None);
    }

    proptest! {
        #[test]
        fn group_laws(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let (a, b, c) = (BinaryPhase::new(a), BinaryPhase::new(b), BinaryPhase::new(c));
            prop_assert_eq!(a + BinaryPhase::new(4 - a.to_int() as i64), BinaryPhase::ONE);
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!((a + b) + c, a + (b + c));
            prop_assert_eq!(a - b + b, a);
        }
    }
}
