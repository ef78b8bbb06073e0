use core::fmt;
use core::str::FromStr;

use bitvec::vec::BitVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tableau_encoding;
use crate::binary::{Binary, BinaryPhase};
use crate::error::{check_index, QeError, Result};

macro_rules! single_pauli {
    ($(($name:ident, $x:literal, $z:literal, $gate:literal),)*) => {$(
        /// Create the identity on `num_qubits` qubits except for a single
        #[doc = $gate]
        /// at `qubit`, with printed phase +1.
        ///
        /// # Panics
        /// If `qubit >= num_qubits`.
        pub fn $name(num_qubits: usize, qubit: usize) -> Self {
            let mut pauli = Self::new(num_qubits);
            pauli.set_x(qubit, Binary::from($x));
            pauli.set_z(qubit, Binary::from($z));
            pauli.phase = BinaryPhase::new(($x && $z) as i64);
            pauli
        }
    )*};
}

/// An n-qubit Pauli operator i^q X^r Z^s with q in {0, 1, 2, 3} and bit vectors r, s.
///
/// Qubit 0 is the leftmost letter of the string form. Since Y = iXZ, the stored exponent
/// q differs from the phase shown in the string form by the number of Y positions, e.g.,
/// "Y" is stored with q = 1 and "iY" with q = 2.
///
/// # Examples
/// ```
/// # fn main() { #![cfg_attr(coverage_nightly, coverage(off))]
/// # use qe::Pauli;
/// let pauli: Pauli = "-iXYZ".parse().unwrap();
/// assert_eq!(pauli.num_qubits(), 3);
/// assert_eq!(pauli.phase().to_int(), 0);
/// assert_eq!(pauli.to_string(), "-iXYZ");
/// assert_eq!(pauli.to_pauli_string(false), "XYZ");
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pauli {
    x: BitVec,
    z: BitVec,
    phase: BinaryPhase,
}

impl Pauli {
    /// Create the identity on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            x: BitVec::repeat(false, num_qubits),
            z: BitVec::repeat(false, num_qubits),
            phase: BinaryPhase::ONE,
        }
    }

    single_pauli!(
        (single_x, true, false, "X"),
        (single_z, false, true, "Z"),
        (single_y, true, true, "Y"),
    );

    pub fn num_qubits(&self) -> usize {
        self.x.len()
    }

    /// The stored exponent q of i^q X^r Z^s.
    pub fn phase(&self) -> BinaryPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: BinaryPhase) {
        self.phase = phase;
    }

    /// The phase as it appears in the string form, i.e., with the Y positions accounted
    /// for.
    pub fn printed_phase(&self) -> BinaryPhase {
        self.phase - BinaryPhase::new(self.y_count() as i64)
    }

    /// Get the X component at `qubit`.
    ///
    /// # Panics
    /// If `qubit >= self.num_qubits()`.
    pub fn x(&self, qubit: usize) -> Binary {
        check_index(qubit, self.num_qubits());
        Binary::from(self.x[qubit])
    }

    /// Get the Z component at `qubit`.
    ///
    /// # Panics
    /// If `qubit >= self.num_qubits()`.
    pub fn z(&self, qubit: usize) -> Binary {
        check_index(qubit, self.num_qubits());
        Binary::from(self.z[qubit])
    }

    /// Set the X component at `qubit`. The stored phase is left untouched.
    ///
    /// # Panics
    /// If `qubit >= self.num_qubits()`.
    pub fn set_x(&mut self, qubit: usize, value: Binary) {
        check_index(qubit, self.num_qubits());
        self.x.set(qubit, value.into());
    }

    /// Set the Z component at `qubit`. The stored phase is left untouched.
    ///
    /// # Panics
    /// If `qubit >= self.num_qubits()`.
    pub fn set_z(&mut self, qubit: usize, value: Binary) {
        check_index(qubit, self.num_qubits());
        self.z.set(qubit, value.into());
    }

    /// Number of qubits carrying a Y, i.e., both an X and a Z component.
    pub fn y_count(&self) -> usize {
        self.x
            .iter()
            .by_vals()
            .zip(self.z.iter().by_vals())
            .filter(|&(x, z)| x && z)
            .count()
    }

    /// Print the Pauli letters, prefixed with the printed phase if `print_phase`.
    pub fn to_pauli_string(&self, print_phase: bool) -> String {
        let mut string = String::with_capacity(self.num_qubits() + 2);
        if print_phase {
            string.push_str(self.printed_phase().as_str());
        }
        string.extend(
            self.x
                .iter()
                .by_vals()
                .zip(self.z.iter().by_vals())
                .map(|(x, z)| {
                    tableau_encoding::LETTERS[tableau_encoding::encode(x, z) as usize]
                }),
        );
        string
    }

    fn from_pauli_string(pauli_string: &str) -> Result<Self> {
        let malformed = |reason| QeError::MalformedInput {
            input: pauli_string.to_owned(),
            reason,
        };
        if pauli_string.is_empty() {
            return Err(malformed("a Pauli string cannot be empty"));
        }
        let letters_start = pauli_string
            .find(|c: char| matches!(c, 'I' | 'X' | 'Y' | 'Z'))
            .ok_or_else(|| malformed("no Pauli letters"))?;
        let (prefix, letters) = pauli_string.split_at(letters_start);
        let printed_phase =
            BinaryPhase::from_prefix(prefix).ok_or_else(|| malformed("unknown phase prefix"))?;

        let num_qubits = letters.chars().count();
        let mut pauli = Self::new(num_qubits);
        for (qubit, letter) in letters.chars().enumerate() {
            let code = tableau_encoding::from_letter(letter)
                .ok_or_else(|| malformed("unknown Pauli letter"))?;
            let (x, z) = tableau_encoding::decode(code);
            pauli.x.set(qubit, x);
            pauli.z.set(qubit, z);
        }
        pauli.phase = printed_phase + BinaryPhase::new(pauli.y_count() as i64);
        Ok(pauli)
    }
}

impl FromStr for Pauli {
    type Err = QeError;

    /// Parse a string like "XYZ" or "-iXI": an optional phase "", "+", "-", "i" or "-i"
    /// followed by one of "I", "X", "Y", "Z" per qubit.
    fn from_str(pauli_string: &str) -> Result<Self> {
        Self::from_pauli_string(pauli_string)
    }
}

impl TryFrom<&str> for Pauli {
    type Error = QeError;

    fn try_from(pauli_string: &str) -> Result<Self> {
        Self::from_pauli_string(pauli_string)
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pauli_string(true))
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;
    use proptest::prelude::*;

    use super::*;

    fn pauli(s: &str) -> Pauli {
        s.parse().unwrap()
    }

    #[test]
    fn identity() {
        let p = Pauli::new(7);
        assert_eq!(p.num_qubits(), 7);
        for i in 0..p.num_qubits() {
            assert_eq!(p.x(i), Binary::ZERO);
            assert_eq!(p.z(i), Binary::ZERO);
        }
        assert_eq!(p.to_string(), "+IIIIIII");
    }

    #[test]
    fn stored_phase() {
        assert_eq!(pauli("XYZ").phase().to_int(), 1);
        assert_eq!(pauli("iXYZ").phase().to_int(), 2);
        assert_eq!(pauli("-XYZ").phase().to_int(), 3);
        assert_eq!(pauli("-iXYZ").phase().to_int(), 0);
        assert_eq!(pauli("+XZ").phase().to_int(), 0);
        assert_eq!(pauli("-iXYZ").printed_phase(), BinaryPhase::new(3));
    }

    #[test]
    fn set_bits() {
        let mut p = pauli("-XYZ");
        p.set_x(0, Binary::ZERO);
        p.set_z(0, Binary::ONE);
        assert_eq!(p.x(0), Binary::ZERO);
        assert_eq!(p.z(0), Binary::ONE);
        assert_eq!(p.to_pauli_string(false), "ZYZ");
        p.set_phase(BinaryPhase::new(1));
        assert_eq!(p.to_string(), "+ZYZ");
    }

    #[test]
    fn format() {
        for (input, expected) in [
            ("iXYYZ", "iXYYZ"),
            ("X", "+X"),
            ("+X", "+X"),
            ("iX", "iX"),
            ("-iIX", "-iIX"),
            ("-IY", "-IY"),
            ("-IYY", "-IYY"),
        ] {
            assert_eq!(pauli(input).to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn singles() {
        assert_eq!(Pauli::single_x(3, 1).to_string(), "+IXI");
        assert_eq!(Pauli::single_z(3, 1).to_string(), "+IZI");
        assert_eq!(Pauli::single_y(3, 2).to_string(), "+IIY");
        assert_eq!(Pauli::single_x(3, 1).phase(), BinaryPhase::ONE);
        assert_eq!(Pauli::single_y(2, 0), pauli("YI"));
    }

    #[test]
    fn malformed() {
        for input in ["", "-", "-i", "+iX", "XAZ", "xyz", "i X"] {
            assert!(
                matches!(input.parse::<Pauli>(), Err(QeError::MalformedInput { .. })),
                "input: {input}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "index 3 is out of range for a size of 3")]
    fn out_of_range() {
        Pauli::new(3).set_x(3, Binary::ONE);
    }

    proptest! {
        #[test]
        fn round_trip(
            prefix in prop::sample::select(vec!["", "+", "-", "i", "-i"]),
            letters in "[IXYZ]{1,40}",
        ) {
            let parsed = pauli(&format!("{prefix}{letters}"));
            let prefix = if prefix.is_empty() { "+" } else { prefix };
            prop_assert_eq!(parsed.to_string(), format!("{prefix}{letters}"));
            prop_assert_eq!(parsed.num_qubits(), letters.len());
        }
    }
}
