use core::fmt;

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::binary::Binary;
use crate::error::{check_index, check_size, Result};

///
/// Square matrix over GF(2), stored row-major in a single bit vector so that each row is
/// a contiguous [BitSlice] of length `dim`
///
/// Entry (row, col) lives at bit `row * dim + col`.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdjacencyMatrix {
    bits: BitVec,
    dim: usize,
}

impl AdjacencyMatrix {
    /// Create the `dim` x `dim` zero matrix.
    pub fn new(dim: usize) -> Self {
        let mut matrix = AdjacencyMatrix {
            bits: BitVec::repeat(false, dim * dim),
            dim,
        };
        matrix.bits.force_align();
        matrix
    }

    /// Build a matrix from its entries in row-major order; nonzero entries are reduced
    /// modulo 2.
    ///
    /// # Examples
    /// ```
    /// # fn main() { #![cfg_attr(coverage_nightly, coverage(off))]
    /// # use qe::graph::AdjacencyMatrix;
    /// # use qe::Binary;
    /// let matrix = AdjacencyMatrix::from_entries(2, &[0, 1, 1, 0]).unwrap();
    /// assert_eq!(matrix.get(0, 1), Binary::ONE);
    /// assert_eq!(matrix.to_string(), "| 0 1 |\n| 1 0 |\n");
    /// # }
    /// ```
    pub fn from_entries(dim: usize, entries: &[u8]) -> Result<Self> {
        check_size(dim * dim, entries.len())?;
        let mut matrix = Self::new(dim);
        for (mut bit, &entry) in matrix.bits.iter_mut().zip(entries) {
            *bit = Binary::new(entry as i64).into();
        }
        Ok(matrix)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        check_index(row, self.dim);
        check_index(col, self.dim);
        row * self.dim + col
    }

    pub fn get(&self, row: usize, col: usize) -> Binary {
        Binary::from(self.bits[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Binary) {
        let offset = self.offset(row, col);
        self.bits.set(offset, value.into());
    }

    /// Flip the entry at (row, col).
    pub fn toggle(&mut self, row: usize, col: usize) {
        let offset = self.offset(row, col);
        let mut entry = Binary::from(self.bits[offset]);
        self.bits.set(offset, (*entry.negate()).into());
    }

    /// View on one row.
    pub fn row(&self, row: usize) -> &BitSlice {
        check_index(row, self.dim);
        &self.bits[row * self.dim..(row + 1) * self.dim]
    }

    /// Copy of one column.
    pub fn col(&self, col: usize) -> BitVec {
        check_index(col, self.dim);
        self.bits
            .iter()
            .by_vals()
            .skip(col)
            .step_by(self.dim)
            .collect()
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: Binary) {
        self.bits.fill(value.into());
    }

    pub fn clear_diagonal(&mut self) {
        for i in 0..self.dim {
            self.bits.set(i * self.dim + i, false);
        }
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        check_index(a, self.dim);
        check_index(b, self.dim);
        for col in 0..self.dim {
            self.bits.swap(a * self.dim + col, b * self.dim + col);
        }
    }

    pub fn swap_cols(&mut self, a: usize, b: usize) {
        check_index(a, self.dim);
        check_index(b, self.dim);
        for row in 0..self.dim {
            self.bits.swap(row * self.dim + a, row * self.dim + b);
        }
    }

    pub fn transpose(&self) -> Self {
        let mut transposed = self.clone();
        for i in 0..self.dim {
            for j in i + 1..self.dim {
                transposed.bits.swap(i * self.dim + j, j * self.dim + i);
            }
        }
        transposed
    }

    /// Apply `op` entrywise to `self` and `other` and store the result in `self`.
    pub fn zip_with<F>(&mut self, other: &Self, op: F) -> Result<()>
    where
        F: Fn(Binary, Binary) -> Binary,
    {
        check_size(self.dim, other.dim)?;
        for (mut bit, rhs) in self.bits.iter_mut().zip(other.bits.iter().by_vals()) {
            *bit = op(Binary::from(*bit), Binary::from(rhs)).into();
        }
        Ok(())
    }

    /// Number of nonzero entries.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }

    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.dim).all(|i| !self.bits[i * self.dim + i])
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            f.write_str("| ")?;
            for entry in self.row(row).iter().by_vals() {
                write!(f, "{} ", Binary::from(entry))?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}
