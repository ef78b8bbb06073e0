//! Precondition violations raised by the Pauli and graph algebra.

use thiserror::Error;

/// Shorthand for results carrying a [QeError].
pub type Result<T> = core::result::Result<T, QeError>;

/// Everything that can go wrong when feeding the algebra with bad input.
///
/// Operations validate their input before touching any state, so a returned error
/// means the receiver is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QeError {
    #[error("index {index} is out of range for a size of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("malformed input {input:?}: {reason}")]
    MalformedInput { input: String, reason: &'static str },
    #[error("{required} bits are required but only {capacity} are available")]
    CapacityExceeded { required: usize, capacity: usize },
    #[error("size mismatch: expected {expected}, found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("at least {required} vertices are required, found {found}")]
    TooFewVertices { required: usize, found: usize },
}

/// Panic with an [QeError::IndexOutOfRange] message unless `index < len`.
#[inline]
#[track_caller]
pub(crate) fn check_index(index: usize, len: usize) {
    if index >= len {
        panic!("{}", QeError::IndexOutOfRange { index, len });
    }
}

/// Return [QeError::SizeMismatch] unless both sizes agree.
#[inline]
pub(crate) fn check_size(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(QeError::SizeMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            QeError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 is out of range for a size of 2"
        );
        assert_eq!(
            QeError::CapacityExceeded { required: 66, capacity: 64 }.to_string(),
            "66 bits are required but only 64 are available"
        );
    }

    #[test]
    fn size_check() {
        assert_eq!(check_size(4, 4), Ok(()));
        assert_eq!(
            check_size(4, 5),
            Err(QeError::SizeMismatch { expected: 4, found: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "index 7 is out of range for a size of 7")]
    fn index_check() {
        check_index(7, 7);
    }
}
