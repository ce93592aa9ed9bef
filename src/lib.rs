//! # linbuf
//!
//! Small fixed-arity vector and matrix arithmetic that works directly on flat
//! numeric buffers. Operands are addressed by offset, views remap indices
//! without copying, and the offset-addressed ("ex") kernels never allocate.
//! no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use linbuf::{buffer, matrix, view, Layout, Matrix4};
//!
//! // Three xyz points, interleaved with a w component nobody asked for.
//! let mut points = [1.0, 0.0, 0.0, 9.0, 0.0, 1.0, 0.0, 9.0, 0.0, 0.0, 1.0, 9.0];
//!
//! // A translation stored column-major in a shared parameter block.
//! let mut params = [0.0; 16];
//! Matrix4::translation([1.0, 2.0, 3.0]).store(&mut params, 0, Layout::ColumnMajor).unwrap();
//!
//! // Skip the w slots: 3 of every 4 elements.
//! let mut xyz = view::interleave(&mut points, 0, 3, 4, 3).unwrap();
//! for p in 0..3 {
//!     let mut out = [0.0; 3];
//!     matrix::ex::transform_point3_ex::<f64>(&params, 0, &xyz, 3 * p, &mut out, 0, Layout::ColumnMajor).unwrap();
//!     buffer::store(&mut xyz, 3 * p, &out).unwrap();
//! }
//! assert_eq!(points, [2.0, 2.0, 3.0, 9.0, 1.0, 3.0, 3.0, 9.0, 1.0, 2.0, 4.0, 9.0]);
//! ```
//!
//! ## Modules
//!
//! - [`buffer`] — The [`BufferRef`] / [`BufferMut`] contract every kernel reads
//!   and writes through, implemented for slices, arrays, `Vec`, references, and
//!   [`RawBuffer`] (foreign memory).
//!
//! - [`view`] — Index-remapping views over a backing buffer: [`view::Slice`],
//!   [`view::Stride`] (including reversal), and [`view::Interleave`]. Views are
//!   buffers themselves, so they compose and every kernel accepts them.
//!
//! - [`iter`] — [`iter::group`] yields fixed-width `[T; N]` records from a
//!   buffer; [`iter::zip2`] through [`iter::zip4`] walk buffers in lock step.
//!
//! - [`vector`] — Kernels over `[T; N]`: add, sub, neg, scale, dot, cross,
//!   length, normalize, tolerant equality. [`vector::ex`] holds the
//!   offset-addressed forms.
//!
//! - [`matrix`] — Fixed-size `Matrix<T, R, C>` (column-major stack storage)
//!   with operators, transpose, homogeneous transforms and affine builders.
//!   [`matrix::ex`] holds the offset-addressed forms, each taking a [`Layout`].
//!
//! - [`general`] — Runtime-shaped kernels keyed by [`Shape`], plus `Vec`
//!   returning wrappers with `alloc`.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — all elements (`Copy + PartialEq + PartialOrd + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), needed for lengths and rotations
//!
//! ## Errors
//!
//! Every fallible operation returns [`ArrayError`]; [`ArrayError::kind`] sorts
//! it into range, shape, or domain. Nothing is clamped or silently truncated,
//! and a kernel that fails writes nothing. Rejections are reported at `debug`
//! level through the [`log`](https://docs.rs/log) facade.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `to_vec` on buffers and the `Vec`-returning `general` wrappers |
//! | `all`     | no       | All features |
//!
//! Without `std`, float math falls back to the pure-Rust `libm` through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod buffer;
pub mod error;
pub mod general;
pub mod iter;
pub mod layout;
pub mod matrix;
pub mod traits;
pub mod vector;
pub mod view;

pub use buffer::{BufferMut, BufferRef, RawBuffer};
pub use error::{ArrayError, ErrorKind};
pub use general::Shape;
pub use layout::Layout;
pub use matrix::aliases::{Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
