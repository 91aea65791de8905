//! Reading and writing complex numbers in interleaved `[re, im]` buffers.

use num_complex::Complex;
use num_traits::Float;

/// Read the complex number whose real component sits at `at`.
#[inline]
pub fn load<T: Float>(buf: &[T], at: usize) -> Complex<T> {
    Complex::new(buf[at], buf[at + 1])
}

/// Write `z` so that its real component sits at `at`.
#[inline]
pub fn store<T: Float>(buf: &mut [T], at: usize, z: Complex<T>) {
    buf[at] = z.re;
    buf[at + 1] = z.im;
}
