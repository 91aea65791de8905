//! Lifecycle and contraction operations over block chains.
//!
//! [`MPSStateSpace`] holds no chain data itself. It carries an execution
//! provider (see [`par`][crate::par]) and the element type, and every
//! operation derives block shapes and offsets from the chains it is handed.
//!
//! Two contractions are provided. [`MPSStateSpace::to_wave_function`] absorbs
//! blocks left to right into a dense "frontier" and costs *O*(2<sup>*N*</sup>
//! χ<sup>2</sup>); it's meant for verification and small systems.
//! [`MPSStateSpace::inner_product`] sweeps an environment matrix along two
//! chains at once and costs *O*(*N* χ<sup>4</sup>), independent of
//! 2<sup>*N*</sup>.
//!
//! ```text
//!          +---+ +---+ +---+ +---+
//!  bra     | 0 +-+ 1 +-+ 2 +-+ 3 |      (conjugated)
//!          +-+-+ +-+-+ +-+-+ +-+-+
//!            |     |     |     |
//!          +-+-+ +-+-+ +-+-+ +-+-+
//!  ket     | 0 +-+ 1 +-+ 2 +-+ 3 |
//!          +---+ +---+ +---+ +---+
//!            ^-- environment grows this way -->
//! ```

use std::{ marker::PhantomData, mem };
use itertools::Itertools;
use num_complex::Complex;
use num_traits::{ One, Zero };
use tracing::debug;
use crate::{
    RealScalar,
    layout::{ BlockShape, ChainLayout, COMPONENTS, PHYS_DIM },
    mps::{ MPS, MPSError, MPSResult },
    packed,
    par::ParFor,
};

// number of real components handled per task in bulk fills and copies
const BULK_CHUNK: usize = 1 << 14;

/// Layout policy and operations for block chains with element type `T`,
/// dispatching parallel work through `P`.
///
/// # Example
/// ```
/// use mps_statespace::{ par::Sequential, statespace::MPSStateSpace };
///
/// let ss: MPSStateSpace<Sequential, f32> = MPSStateSpace::new(Sequential);
/// let mut mps = ss.create_mps(2, 8).unwrap();
/// ss.set_mps_zero(&mut mps);
///
/// let mut wf = vec![0.0_f32; 8];
/// ss.to_wave_function(&mps, &mut wf);
/// assert_eq!(wf, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
///
/// let norm = ss.inner_product(&mps, &mps);
/// assert!((norm.re - 1.0).abs() < 1e-6 && norm.im.abs() < 1e-6);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct MPSStateSpace<P, T> {
    par: P,
    elem: PhantomData<T>,
}

impl<P, T> MPSStateSpace<P, T>
where
    P: ParFor,
    T: RealScalar,
{
    /// Create a new state space dispatching parallel work through `par`.
    pub fn new(par: P) -> Self { Self { par, elem: PhantomData } }

    /// Return a reference to the execution provider.
    pub fn par(&self) -> &P { &self.par }

    /// Allocate a new chain of `num_qubits` qubits with bond dimension
    /// `bond_dim`.
    ///
    /// The contents of the new chain are unspecified; use
    /// [`Self::set_mps_zero`] or [`Self::copy_mps`] to initialize it.
    ///
    /// Fails if either argument is zero, the buffer size overflows `usize`, or
    /// the buffer can't be allocated.
    pub fn create_mps(&self, num_qubits: usize, bond_dim: usize)
        -> MPSResult<MPS<T>>
    {
        if num_qubits == 0 { return Err(MPSError::EmptySystem); }
        if bond_dim == 0 { return Err(MPSError::ZeroBondDim); }
        let layout = ChainLayout::new(num_qubits, bond_dim);
        let mps = MPS::alloc(layout)?;
        debug!(num_qubits, bond_dim, size = layout.size(), "allocated MPS");
        Ok(mps)
    }

    /// Number of real components in the buffer of `mps`.
    pub fn size(&self, mps: &MPS<T>) -> usize { mps.layout.size() }

    /// Size in bytes of the buffer of `mps`.
    pub fn raw_size(&self, mps: &MPS<T>) -> usize { mps.layout.raw_size::<T>() }

    /// Offset of the first component of block `k` in the buffer of `mps`.
    pub fn block_offset(&self, mps: &MPS<T>, k: usize) -> usize {
        mps.layout.block_offset(k)
    }

    /// Number of real components in block `k` of `mps`.
    pub fn block_size(&self, mps: &MPS<T>, k: usize) -> usize {
        mps.layout.block_size(k)
    }

    /// Set `mps` to the computational basis state ∣00...0⟩.
    ///
    /// Every block ends up with a single nonzero element, `1 + 0i` at
    /// `(left, physical, right) == (0, 0, 0)`.
    pub fn set_mps_zero(&self, mps: &mut MPS<T>) {
        self.par.run(&mut mps.data, BULK_CHUNK, |_, chunk| {
            chunk.fill(T::zero());
        });
        let layout = mps.layout;
        for blk in layout.blocks() {
            packed::store(&mut mps.data, blk.index(0, 0, 0), Complex::one());
        }
    }

    /// Copy the contents of `src` into `dst`.
    ///
    /// Fails without modifying `dst` if the two chains don't have the same
    /// number of qubits and bond dimension.
    pub fn copy_mps(&self, src: &MPS<T>, dst: &mut MPS<T>) -> MPSResult<()> {
        if src.layout != dst.layout {
            debug!(src = ?src.layout, dst = ?dst.layout, "rejected MPS copy");
            return Err(MPSError::ShapeMismatch {
                src: src.layout,
                dst: dst.layout,
            });
        }
        let from = src.as_slice();
        self.par.run(&mut dst.data, BULK_CHUNK, |k, chunk| {
            let start = k * BULK_CHUNK;
            chunk.copy_from_slice(&from[start..start + chunk.len()]);
        });
        Ok(())
    }
}

impl<P, T> MPSStateSpace<P, T>
where
    P: ParFor,
    T: RealScalar,
{
    /// Contract `mps` into a dense state vector, written to `wf` as
    /// interleaved `(re, im)` pairs.
    ///
    /// Amplitudes are in the standard basis order with qubit 0 as the most
    /// significant bit. `wf` must hold at least `2 * 2^N` components, where
    /// *N* is the number of qubits; only the first `2 * 2^N` are written.
    ///
    /// The output is deterministic: every amplitude is accumulated over bond
    /// indices in a fixed order, regardless of the execution provider.
    ///
    /// # Panics
    /// Panics if `wf` is too short.
    pub fn to_wave_function(&self, mps: &MPS<T>, wf: &mut [T]) {
        let layout = mps.layout;
        let n = layout.num_qubits();
        let _span = tracing::debug_span!(
            "to_wave_function", num_qubits = n, bond_dim = layout.bond_dim()
        ).entered();
        let wf = &mut wf[..layout.wave_function_size()];
        let data = mps.as_slice();
        let b0 = layout.block(0);
        if n == 1 {
            wf.copy_from_slice(&data[b0.range()]);
            return;
        }

        // frontier is row-major over (basis state of qubits so far, open bond)
        let max_len = (1_usize << (n - 1)) * layout.bond_dim();
        let mut frontier: Vec<Complex<T>> = Vec::with_capacity(max_len);
        let mut next: Vec<Complex<T>> = Vec::with_capacity(max_len);
        frontier.extend(
            (0..PHYS_DIM).cartesian_product(0..b0.right)
                .map(|(s, r)| packed::load(data, b0.index(0, s, r)))
        );
        let mut rows = PHYS_DIM;
        for k in 1..n - 1 {
            let blk = layout.block(k);
            next.clear();
            next.resize(rows * PHYS_DIM * blk.right, Complex::zero());
            let prev = &frontier;
            self.par.run(&mut next, blk.right, |q, row| {
                let (p, s) = (q / PHYS_DIM, q % PHYS_DIM);
                let lhs = &prev[p * blk.left..(p + 1) * blk.left];
                row.iter_mut()
                    .enumerate()
                    .for_each(|(r, out)| { *out = absorb(data, &blk, lhs, s, r); });
            });
            mem::swap(&mut frontier, &mut next);
            rows *= PHYS_DIM;
        }

        // last block has a unit right bond, so each row collapses to one
        // amplitude
        let blk = layout.block(n - 1);
        let prev = &frontier;
        self.par.run(wf, COMPONENTS, |q, amp| {
            let (p, s) = (q / PHYS_DIM, q % PHYS_DIM);
            let lhs = &prev[p * blk.left..(p + 1) * blk.left];
            packed::store(amp, 0, absorb(data, &blk, lhs, s, 0));
        });
    }

    /// Compute the inner product ⟨`bra`∣`ket`⟩, conjugating the amplitudes of
    /// `bra`.
    ///
    /// Note the argument order: `inner_product(a, b)` is ⟨b∣a⟩, so swapping
    /// the arguments conjugates the result.
    ///
    /// Both chains must have the same number of qubits and bond dimension
    /// (checked only in debug builds).
    pub fn inner_product(&self, ket: &MPS<T>, bra: &MPS<T>) -> Complex<T> {
        debug_assert_eq!(ket.layout, bra.layout, "inner product of mismatched chains");
        let layout = ket.layout;
        let _span = tracing::debug_span!(
            "inner_product",
            num_qubits = layout.num_qubits(),
            bond_dim = layout.bond_dim()
        ).entered();
        let env = self.env_left(ket, bra, layout.num_qubits());
        env[0]
    }

    /// Real part of ⟨`bra`∣`ket`⟩; see [`Self::inner_product`].
    pub fn real_inner_product(&self, ket: &MPS<T>, bra: &MPS<T>) -> T {
        self.inner_product(ket, bra).re
    }

    /// Compute the reduced density matrix of qubit `k`, i.e.
    /// `ρ[s][s'] = Σ ψ(..s..) ψ(..s'..)*` summed over all other qubits.
    ///
    /// The result is not normalized: its trace is ⟨ψ∣ψ⟩.
    ///
    /// # Panics
    /// Panics if `k` is out of bounds.
    pub fn reduce_density_matrix(&self, mps: &MPS<T>, k: usize)
        -> [[Complex<T>; PHYS_DIM]; PHYS_DIM]
    {
        let layout = mps.layout;
        assert!(k < layout.num_qubits(), "qubit index {k} out of bounds");
        let _span = tracing::debug_span!(
            "reduce_density_matrix",
            num_qubits = layout.num_qubits(),
            bond_dim = layout.bond_dim(),
            qubit = k
        ).entered();
        let left = self.env_left(mps, mps, k);
        let right = self.env_right(mps, mps, k + 1);
        let data = mps.as_slice();
        let blk = layout.block(k);
        let (nl, nr) = (blk.left, blk.right);
        let mut rho = [[Complex::zero(); PHYS_DIM]; PHYS_DIM];
        for (s, ss) in (0..PHYS_DIM).cartesian_product(0..PHYS_DIM) {
            rho[s][ss]
                = (0..nl).cartesian_product(0..nl)
                .cartesian_product((0..nr).cartesian_product(0..nr))
                .map(|((la, lb), (ra, rb))| {
                    left[la * nl + lb]
                        * packed::load(data, blk.index(la, s, ra))
                        * packed::load(data, blk.index(lb, ss, rb)).conj()
                        * right[ra * nr + rb]
                })
                .fold(Complex::zero(), |acc, z| acc + z);
        }
        rho
    }

    // environment after absorbing blocks 0..end, row-major over
    // (ket bond, bra bond)
    fn env_left(&self, ket: &MPS<T>, bra: &MPS<T>, end: usize)
        -> Vec<Complex<T>>
    {
        let layout = ket.layout;
        let chi = layout.bond_dim();
        let (k_data, b_data) = (ket.as_slice(), bra.as_slice());
        let mut env: Vec<Complex<T>> = Vec::with_capacity(chi * chi);
        let mut next: Vec<Complex<T>> = Vec::with_capacity(chi * chi);
        env.push(Complex::one());
        for blk in layout.blocks().take(end) {
            next.clear();
            next.resize(blk.right * blk.right, Complex::zero());
            let prev = &env;
            self.par.run(&mut next, blk.right, |ra, row| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(rb, out)| {
                        *out = transfer_left(k_data, b_data, &blk, prev, ra, rb);
                    });
            });
            mem::swap(&mut env, &mut next);
        }
        env
    }

    // environment after absorbing blocks start..N from the right, row-major
    // over (ket bond, bra bond)
    fn env_right(&self, ket: &MPS<T>, bra: &MPS<T>, start: usize)
        -> Vec<Complex<T>>
    {
        let layout = ket.layout;
        let chi = layout.bond_dim();
        let (k_data, b_data) = (ket.as_slice(), bra.as_slice());
        let mut env: Vec<Complex<T>> = Vec::with_capacity(chi * chi);
        let mut next: Vec<Complex<T>> = Vec::with_capacity(chi * chi);
        env.push(Complex::one());
        for k in (start..layout.num_qubits()).rev() {
            let blk = layout.block(k);
            next.clear();
            next.resize(blk.left * blk.left, Complex::zero());
            let prev = &env;
            self.par.run(&mut next, blk.left, |la, row| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(lb, out)| {
                        *out = transfer_right(k_data, b_data, &blk, prev, la, lb);
                    });
            });
            mem::swap(&mut env, &mut next);
        }
        env
    }
}

// one frontier element: Σ_l lhs[l] B[l, s, r]
#[inline]
fn absorb<T>(data: &[T], blk: &BlockShape, lhs: &[Complex<T>], s: usize, r: usize)
    -> Complex<T>
where T: RealScalar
{
    lhs.iter()
        .enumerate()
        .map(|(l, f)| *f * packed::load(data, blk.index(l, s, r)))
        .fold(Complex::zero(), |acc, z| acc + z)
}

// one element of the next left environment:
//   Σ_{la, lb, s} conj(bra[lb, s, rb]) E[la, lb] ket[la, s, ra]
#[inline]
fn transfer_left<T>(
    ket: &[T],
    bra: &[T],
    blk: &BlockShape,
    env: &[Complex<T>],
    ra: usize,
    rb: usize,
) -> Complex<T>
where T: RealScalar
{
    let nl = blk.left;
    (0..nl).cartesian_product(0..nl)
        .cartesian_product(0..PHYS_DIM)
        .map(|((la, lb), s)| {
            packed::load(bra, blk.index(lb, s, rb)).conj()
                * env[la * nl + lb]
                * packed::load(ket, blk.index(la, s, ra))
        })
        .fold(Complex::zero(), |acc, z| acc + z)
}

// one element of the next right environment:
//   Σ_{s, ra, rb} ket[la, s, ra] E[ra, rb] conj(bra[lb, s, rb])
#[inline]
fn transfer_right<T>(
    ket: &[T],
    bra: &[T],
    blk: &BlockShape,
    env: &[Complex<T>],
    la: usize,
    lb: usize,
) -> Complex<T>
where T: RealScalar
{
    let nr = blk.right;
    (0..PHYS_DIM).cartesian_product(0..nr)
        .cartesian_product(0..nr)
        .map(|((s, ra), rb)| {
            packed::load(ket, blk.index(la, s, ra))
                * env[ra * nr + rb]
                * packed::load(bra, blk.index(lb, s, rb)).conj()
        })
        .fold(Complex::zero(), |acc, z| acc + z)
}
