//! Execution providers for data-parallel loops over disjoint buffer chunks.
//!
//! Every parallel step in the state space has the same form: split an output
//! buffer into equal chunks and compute each chunk independently from
//! read-only inputs. [`ParFor`] abstracts over how those chunks are scheduled.
//! All providers return only after every chunk has been processed; no
//! ordering between chunks is guaranteed.

use std::panic;
use rayon::prelude::*;

/// A strategy for running a function over the chunks of a mutable buffer.
pub trait ParFor: Sync {
    /// Number of workers this provider may use.
    fn num_threads(&self) -> usize;

    /// Call `f(k, chunk)` once for every `chunk_len`-sized chunk of `data`,
    /// where `k` is the chunk's position. The final chunk is shorter if
    /// `chunk_len` does not divide `data.len()`.
    ///
    /// Blocks until all calls have returned.
    fn run<A, F>(&self, data: &mut [A], chunk_len: usize, f: F)
    where
        A: Send,
        F: Fn(usize, &mut [A]) + Sync;
}

/// Run everything on the calling thread, in chunk order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

impl ParFor for Sequential {
    fn num_threads(&self) -> usize { 1 }

    fn run<A, F>(&self, data: &mut [A], chunk_len: usize, f: F)
    where
        A: Send,
        F: Fn(usize, &mut [A]) + Sync,
    {
        data.chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(k, chunk)| { f(k, chunk); });
    }
}

/// Split chunks into contiguous groups, one per worker, and run each group on
/// a scoped thread.
///
/// Threads are spawned per call, so this is best suited to large buffers;
/// buffers shorter than [`Self::min_len`] elements are processed on the calling
/// thread.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Threaded {
    nthreads: usize,
    min_len: usize,
}

impl Threaded {
    /// Default for [`Self::min_len`].
    pub const DEFAULT_MIN_LEN: usize = 1 << 12;

    /// Create a new provider using `nthreads` workers (at least 1).
    pub fn new(nthreads: usize) -> Self {
        Self { nthreads: nthreads.max(1), min_len: Self::DEFAULT_MIN_LEN }
    }

    /// Set the smallest buffer length, in elements, for which workers are
    /// spawned.
    pub fn with_min_len(self, min_len: usize) -> Self { Self { min_len, ..self } }

    /// Return the smallest buffer length for which workers are spawned.
    pub fn min_len(&self) -> usize { self.min_len }

    /// Create a new provider with the number of workers equal to the number
    /// of logical CPU cores available in the current system.
    pub fn new_cpus() -> Self { Self::new(num_cpus::get()) }

    /// Create a new provider with the number of workers equal to the number
    /// of physical CPU cores available in the current system.
    pub fn new_physical() -> Self { Self::new(num_cpus::get_physical()) }
}

impl Default for Threaded {
    fn default() -> Self { Self::new_cpus() }
}

impl ParFor for Threaded {
    fn num_threads(&self) -> usize { self.nthreads }

    fn run<A, F>(&self, data: &mut [A], chunk_len: usize, f: F)
    where
        A: Send,
        F: Fn(usize, &mut [A]) + Sync,
    {
        let nchunks = data.len().div_ceil(chunk_len);
        if self.nthreads == 1 || nchunks <= 1 || data.len() < self.min_len {
            Sequential.run(data, chunk_len, f);
            return;
        }
        let per_thread = nchunks.div_ceil(self.nthreads);
        let f = &f;
        let res = crossbeam::thread::scope(|s| {
            for (g, group) in data.chunks_mut(per_thread * chunk_len).enumerate() {
                s.spawn(move |_| {
                    let base = g * per_thread;
                    group.chunks_mut(chunk_len)
                        .enumerate()
                        .for_each(|(k, chunk)| { f(base + k, chunk); });
                });
            }
        });
        if let Err(payload) = res { panic::resume_unwind(payload); }
    }
}

/// Hand chunks to the global `rayon` thread pool.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rayon;

impl ParFor for Rayon {
    fn num_threads(&self) -> usize { rayon::current_num_threads() }

    fn run<A, F>(&self, data: &mut [A], chunk_len: usize, f: F)
    where
        A: Send,
        F: Fn(usize, &mut [A]) + Sync,
    {
        data.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(k, chunk)| { f(k, chunk); });
    }
}
