//! The block-chain buffer holding one matrix product state.
//!
//! An [`MPS`] is just a flat, contiguous buffer of real numbers tagged with the
//! [`ChainLayout`] it was created for. All structure lives in the layout; see
//! [`layout`][crate::layout] for the exact format.
//!
//! ```text
//!       .-bond 0-.       .-bond 1-.      .-bond n-2-.
//!       V        V       V        V      V          V
//! B[0] ------------ B[1] ------------ ... ------------ B[n-1]
//!  |                 |                                  |
//!  | <- physical     | <- physical                      | <- physical
//!       index 0           index 1                            index n-1
//! ```
//!
//! Chains are created through
//! [`MPSStateSpace::create_mps`][crate::statespace::MPSStateSpace::create_mps],
//! and are read and modified through the state space's operations. Code that
//! updates blocks directly (e.g. gate application) should address the buffer
//! only through [`MPS::layout`] or the per-block array accessors here.

use std::collections::TryReserveError;
use ndarray as nd;
use num_complex::Complex;
use thiserror::Error;
use crate::{
    RealScalar,
    layout::{ ChainLayout, PHYS_DIM },
    packed,
};

#[derive(Debug, Error)]
pub enum MPSError {
    /// Returned when attempting to create a new MPS for a state of less than 1
    /// qubit.
    #[error("error in MPS creation: cannot create for an empty system")]
    EmptySystem,

    /// Returned when attempting to create a new MPS with a bond dimension of
    /// zero.
    #[error("error in MPS creation: bond dimension must be at least 1")]
    ZeroBondDim,

    /// Returned when the buffer size of a new MPS overflows `usize`.
    #[error("error in MPS creation: buffer size overflows for {num_qubits} qubits with bond dimension {bond_dim}")]
    CapacityOverflow { num_qubits: usize, bond_dim: usize },

    /// Returned when memory for a new MPS could not be reserved.
    #[error("error in MPS creation: allocation failed: {0}")]
    AllocFailed(#[from] TryReserveError),

    /// Returned when copying between two chains of different shapes. The
    /// destination is left untouched.
    #[error("error in MPS copy: shape mismatch: source {src:?}, destination {dst:?}")]
    ShapeMismatch { src: ChainLayout, dst: ChainLayout },

    /// Returned when addressing a block past the end of the chain.
    #[error("error in block access: block {0} is out of bounds")]
    BlockOutOfBounds(usize),

    /// Returned when writing a block from an array whose shape doesn't match
    /// the block's.
    #[error("error in block access: expected shape {expected:?}, got {got:?}")]
    BlockIncompatibleShape {
        expected: (usize, usize, usize),
        got: (usize, usize, usize),
    },
}
use MPSError::*;
pub type MPSResult<T> = Result<T, MPSError>;

/// A matrix product state of qubits stored as a packed block chain.
///
/// The shape (`num_qubits`, `bond_dim`) is fixed at creation; the buffer is
/// never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct MPS<T> {
    pub(crate) layout: ChainLayout,
    // length == layout.size()
    pub(crate) data: Vec<T>,
}

impl<T: RealScalar> MPS<T> {
    // assumes num_qubits ≥ 1, bond_dim ≥ 1
    pub(crate) fn alloc(layout: ChainLayout) -> MPSResult<Self> {
        let size
            = layout.checked_size()
            .ok_or(CapacityOverflow {
                num_qubits: layout.num_qubits(),
                bond_dim: layout.bond_dim(),
            })?;
        let mut data: Vec<T> = Vec::new();
        data.try_reserve_exact(size)?;
        data.resize(size, T::zero());
        Ok(Self { layout, data })
    }
}

impl<T> MPS<T> {
    /// Return the number of qubits.
    pub fn num_qubits(&self) -> usize { self.layout.num_qubits() }

    /// Return the bond dimension.
    pub fn bond_dim(&self) -> usize { self.layout.bond_dim() }

    /// Return the layout of the chain.
    pub fn layout(&self) -> ChainLayout { self.layout }

    /// Return the packed buffer.
    pub fn as_slice(&self) -> &[T] { &self.data }

    /// Return the packed buffer mutably.
    ///
    /// Writes must respect the block layout given by [`Self::layout`].
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }
}

impl<T: RealScalar> MPS<T> {
    /// Copy block `k` out into a `(left, 2, right)` array.
    ///
    /// Fails if `k` is out of bounds.
    pub fn block_array(&self, k: usize) -> MPSResult<nd::Array3<Complex<T>>> {
        if k >= self.num_qubits() { return Err(BlockOutOfBounds(k)); }
        let blk = self.layout.block(k);
        let arr: nd::Array3<Complex<T>>
            = nd::Array3::from_shape_fn(
                blk.dims(),
                |(l, s, r)| packed::load(&self.data, blk.index(l, s, r)),
            );
        Ok(arr)
    }

    /// Overwrite block `k` with the contents of `arr`.
    ///
    /// Fails if `k` is out of bounds or `arr` doesn't have exactly the shape
    /// of the block.
    pub fn set_block_array(&mut self, k: usize, arr: &nd::Array3<Complex<T>>)
        -> MPSResult<()>
    {
        if k >= self.num_qubits() { return Err(BlockOutOfBounds(k)); }
        let blk = self.layout.block(k);
        let got = arr.dim();
        if got != blk.dims() {
            return Err(BlockIncompatibleShape { expected: blk.dims(), got });
        }
        for ((l, s, r), z) in arr.indexed_iter() {
            debug_assert!(s < PHYS_DIM);
            packed::store(&mut self.data, blk.index(l, s, r), *z);
        }
        Ok(())
    }
}
