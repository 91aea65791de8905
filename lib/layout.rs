//! Memory layout of a block chain.
//!
//! A chain of *N* qubits with bond dimension χ is stored as *N* rank-3 blocks
//! laid end to end in one flat buffer of real numbers, with no padding between
//! blocks. Block `k` has axis signature `[ u{k - 1}, s{k}, u{k} ]`, where
//! `s{k}` is the physical index (always of dimension 2) and `u{j}` are bond
//! indices, and each complex element is stored as an adjacent `(re, im)` pair.
//! Endpoint bond dimensions are fixed to 1, so only the two boundary blocks
//! differ in size from the rest.
//!
//! ```text
//!  offset 0        offset 4χ          offset 4χ + 4χ²       ...
//!  |               |                  |
//!  [ 1 × 2 × χ ]   [ χ × 2 × χ ]      [ χ × 2 × χ ]   ...   [ χ × 2 × 1 ]
//! ```
//!
//! Within a block, elements are row-major over `(left, physical, right)`.
//! Every offset into a chain buffer is computed here; nothing else in the crate
//! assumes a fixed block size.

use std::mem;

/// Dimension of the physical index at every site.
pub const PHYS_DIM: usize = 2;

/// Number of real components per stored complex element.
pub const COMPONENTS: usize = 2;

/// Shape of a whole chain: number of qubits and (maximum) bond dimension.
///
/// Both must be at least 1; this is enforced when a chain is created (see
/// [`MPSStateSpace::create_mps`][crate::statespace::MPSStateSpace::create_mps])
/// and only `debug_assert`ed here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChainLayout {
    num_qubits: usize,
    bond_dim: usize,
}

impl ChainLayout {
    /// Create a new layout for `num_qubits` qubits with bond dimension
    /// `bond_dim`.
    pub fn new(num_qubits: usize, bond_dim: usize) -> Self {
        debug_assert!(num_qubits >= 1, "layout must cover at least one qubit");
        debug_assert!(bond_dim >= 1, "bond dimension must be at least 1");
        Self { num_qubits, bond_dim }
    }

    /// Return the number of qubits.
    pub fn num_qubits(&self) -> usize { self.num_qubits }

    /// Return the bond dimension.
    pub fn bond_dim(&self) -> usize { self.bond_dim }

    /// Dimension of the bond index on the left of block `k`.
    pub fn left_dim(&self, k: usize) -> usize {
        if k == 0 { 1 } else { self.bond_dim }
    }

    /// Dimension of the bond index on the right of block `k`.
    pub fn right_dim(&self, k: usize) -> usize {
        if k + 1 >= self.num_qubits { 1 } else { self.bond_dim }
    }

    /// Number of real components stored for block `k`.
    pub fn block_size(&self, k: usize) -> usize {
        self.left_dim(k) * PHYS_DIM * self.right_dim(k) * COMPONENTS
    }

    /// Offset of the first component of block `k`.
    ///
    /// `block_offset(num_qubits)` is the end of the last block, i.e.
    /// [`Self::size`].
    pub fn block_offset(&self, k: usize) -> usize {
        debug_assert!(k <= self.num_qubits);
        if k == 0 { return 0; }
        if k == self.num_qubits { return self.size(); }
        // block 0 is [1, 2, χ]; every block in 1..k is interior, [χ, 2, χ]
        let chi = self.bond_dim;
        PHYS_DIM * COMPONENTS * (chi + (k - 1) * chi * chi)
    }

    /// Total number of real components in the chain buffer, or `None` if it
    /// doesn't fit in a `usize`.
    pub fn checked_size(&self) -> Option<usize> {
        let chi = self.bond_dim;
        let blocks = match self.num_qubits {
            0 => return Some(0),
            1 => 1,
            n => (n - 2).checked_mul(chi)?.checked_mul(chi)?
                .checked_add(chi.checked_mul(2)?)?,
        };
        blocks.checked_mul(PHYS_DIM * COMPONENTS)
    }

    /// Total number of real components in the chain buffer.
    ///
    /// Assumes the size fits in a `usize`, which holds for any layout an
    /// existing chain was allocated with; see [`Self::checked_size`].
    pub fn size(&self) -> usize {
        let chi = self.bond_dim;
        match self.num_qubits {
            0 => 0,
            1 => PHYS_DIM * COMPONENTS,
            n => PHYS_DIM * COMPONENTS * (2 * chi + (n - 2) * chi * chi),
        }
    }

    /// Size of the chain buffer in bytes for element type `T`.
    pub fn raw_size<T>(&self) -> usize { self.size() * mem::size_of::<T>() }

    /// Return the shape and position of block `k`.
    pub fn block(&self, k: usize) -> BlockShape {
        debug_assert!(k < self.num_qubits);
        BlockShape {
            offset: self.block_offset(k),
            left: self.left_dim(k),
            right: self.right_dim(k),
        }
    }

    /// Iterate over the shapes of all blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = BlockShape> + '_ {
        (0..self.num_qubits).map(|k| self.block(k))
    }

    /// Number of real components in a dense state vector for this chain,
    /// i.e. `2 * 2^num_qubits`.
    pub fn wave_function_size(&self) -> usize {
        COMPONENTS << self.num_qubits
    }
}

/// Position and shape of one block in a chain buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockShape {
    /// Offset of the block's first component in the chain buffer.
    pub offset: usize,
    /// Left bond dimension.
    pub left: usize,
    /// Right bond dimension.
    pub right: usize,
}

impl BlockShape {
    /// Number of real components in the block.
    pub fn size(&self) -> usize {
        self.left * PHYS_DIM * self.right * COMPONENTS
    }

    /// Number of complex elements in the block.
    pub fn num_elements(&self) -> usize { self.left * PHYS_DIM * self.right }

    /// Offset in the chain buffer of the real component of element
    /// `(l, s, r)`. The imaginary component follows immediately after.
    #[inline]
    pub fn index(&self, l: usize, s: usize, r: usize) -> usize {
        self.offset + ((l * PHYS_DIM + s) * self.right + r) * COMPONENTS
    }

    /// Range of the block in the chain buffer.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.size()
    }

    /// Tuple `(left, physical, right)` of logical dimensions.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.left, PHYS_DIM, self.right)
    }
}
