use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Mul, MulAssign, Not, Sub,
    SubAssign,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element of GF(2), i.e., a bit with modulo 2 arithmetic where 1 + 1 = 0.
///
/// Addition and subtraction are both XOR, multiplication is AND.
///
/// # Examples
/// ```
/// # fn main() { #![cfg_attr(coverage_nightly, coverage(off))]
/// # use qe::Binary;
/// let one = Binary::ONE;
/// assert_eq!(one + one, Binary::ZERO);
/// assert_eq!(one * Binary::ZERO, Binary::ZERO);
/// assert_eq!(!one, Binary::ZERO);
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary(bool);

impl Binary {
    pub const ZERO: Self = Self(false);
    pub const ONE: Self = Self(true);

    /// Reduce an integer modulo 2.
    pub const fn new(value: i64) -> Self {
        Self(value & 1 == 1)
    }

    pub const fn to_int(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_one(self) -> bool {
        self.0
    }

    /// Flip the bit in place.
    pub fn negate(&mut self) -> &mut Self {
        self.0 = !self.0;
        self
    }
}

impl From<bool> for Binary {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Binary> for bool {
    fn from(value: Binary) -> Self {
        value.0
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_int())
    }
}

macro_rules! binary_op {
    ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt),)*) => {$(
        impl $assign_trait for Binary {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0 $op rhs.0;
            }
        }

        impl $trait for Binary {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                self.$assign_method(rhs);
                self
            }
        }
    )*};
}

binary_op!(
    (Add, add, AddAssign, add_assign, ^),
    (Sub, sub, SubAssign, sub_assign, ^),
    (Mul, mul, MulAssign, mul_assign, &),
    (BitAnd, bitand, BitAndAssign, bitand_assign, &),
    (BitOr, bitor, BitOrAssign, bitor_assign, |),
);

impl Not for Binary {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Binary::new(0).to_int(), 0);
        assert_eq!(Binary::new(1).to_int(), 1);
        assert_eq!(Binary::new(6), Binary::ZERO);
        assert_eq!(Binary::new(-3), Binary::ONE);
        assert_eq!(Binary::from(true), Binary::ONE);
        assert!(!bool::from(Binary::ZERO));
    }

    #[test]
    fn arithmetic() {
        let (o, l) = (Binary::ZERO, Binary::ONE);
        assert_eq!(o + o, o);
        assert_eq!(o + l, l);
        assert_eq!(l + o, l);
        assert_eq!(l + l, o);

        assert_eq!(o * o, o);
        assert_eq!(o * l, o);
        assert_eq!(l * o, o);
        assert_eq!(l * l, l);

        assert_eq!(l | o, l);
        assert_eq!(o | o, o);
        assert_eq!(l & o, o);

        assert_eq!(*Binary::new(0).negate(), l);
        assert_eq!(*Binary::new(1).negate(), o);
        assert_eq!(!o, l);
        assert_eq!(!l, o);
    }

    #[test]
    fn display() {
        assert_eq!(Binary::ZERO.to_string(), "0");
        assert_eq!(Binary::ONE.to_string(), "1");
    }

    proptest! {
        #[test]
        fn field_laws(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
            let (a, b, c) = (Binary::from(a), Binary::from(b), Binary::from(c));
            prop_assert_eq!(a + a, Binary::ZERO);
            prop_assert_eq!(a - b, a + b);
            prop_assert_eq!((a + b) + c, a + (b + c));
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }
    }
}
