
pub mod pauli;

pub use pauli::Pauli;

/// Two-bit encoding of a single-qubit Pauli, `(x << 1) | z`.
pub mod tableau_encoding {
    /// Code for the identity.
    pub const I: u8 = 0;
    /// Code for the Pauli X gate.
    pub const X: u8 = 2;
    /// Code for the Pauli Y gate.
    pub const Y: u8 = 3;
    /// Code for the Pauli Z gate.
    pub const Z: u8 = 1;

    /// Letters indexed by their code.
    pub const LETTERS: [char; 4] = ['I', 'Z', 'X', 'Y'];

    pub const fn encode(x: bool, z: bool) -> u8 {
        ((x as u8) << 1) | z as u8
    }

    pub const fn decode(code: u8) -> (bool, bool) {
        (code & X != 0, code & Z != 0)
    }

    pub const fn from_letter(letter: char) -> Option<u8> {
        match letter {
            'I' => Some(I),
            'X' => Some(X),
            'Y' => Some(Y),
            'Z' => Some(Z),
            _ => None,
        }
    }
}
