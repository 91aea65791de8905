//! In-memory matrix product states for quantum circuit simulation.
//!
//! A state of *N* qubits is held as a chain of rank-3 tensors ("blocks") with
//! a fixed bond dimension χ, packed into a single contiguous buffer of real
//! numbers (see [`layout`]). [`statespace::MPSStateSpace`] provides the
//! operations a simulator needs on top of that buffer: allocation,
//! initialization to ∣00...0⟩, copying, contraction to a dense state vector,
//! and inner products between chains.
//!
//! ```
//! use mps_statespace::{ par::Threaded, statespace::MPSStateSpace };
//!
//! let ss: MPSStateSpace<Threaded, f64> = MPSStateSpace::new(Threaded::new(2));
//! let mut a = ss.create_mps(6, 4).unwrap();
//! let mut b = ss.create_mps(6, 4).unwrap();
//! ss.set_mps_zero(&mut a);
//! ss.copy_mps(&a, &mut b).unwrap();
//!
//! // move block 1's weight onto physical index 1, i.e. flip qubit 1 to ∣1⟩
//! let blk = a.layout().block(1);
//! let data = a.as_mut_slice();
//! data[blk.index(0, 0, 0)] = 0.0;
//! data[blk.index(0, 1, 0)] = 1.0;
//!
//! let overlap = ss.inner_product(&a, &b);
//! assert!(overlap.norm() < 1e-12);
//!
//! let mut wf = vec![0.0; 2 << 6];
//! ss.to_wave_function(&a, &mut wf);
//! assert_eq!(wf[2 * 0b010000], 1.0);
//! ```

use std::fmt;
use num_traits::Float;

pub mod layout;
pub mod packed;
pub mod par;

pub mod mps;
pub mod statespace;

pub use mps::{ MPS, MPSError, MPSResult };
pub use statespace::MPSStateSpace;

/// Convenience trait to identify real floating-point types that can be used as
/// the element type of a chain buffer.
pub trait RealScalar
where Self: Float + Send + Sync + fmt::Debug + 'static
{ }

impl<T> RealScalar for T
where T: Float + Send + Sync + fmt::Debug + 'static
{ }
