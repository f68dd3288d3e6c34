//! Dimension-polymorphic vector math for 2D, 3D and 4D.
//!
//! This crate provides a single value type, [`Vector`], whose *effective
//! dimension* is carried as an explicit variant tag rather than inferred at
//! runtime:
//!
//! - [`Vector`] - A 2D, 3D or 4D vector with `f64` components
//! - [`Dimension`] - The variant tag (`TwoD`, `ThreeD`, `FourD`)
//! - [`Operand`] - The argument type accepted by component-wise arithmetic
//!
//! # Operations
//!
//! - **Arithmetic**: `set`/`add`/`sub`/`mul`/`div` in place with chaining,
//!   plus `Add`/`Sub`/`Mul<f64>`/`Neg` operators on owned values. A single
//!   scalar broadcasts to every active component; per-component operands
//!   never change the receiver's dimension (`set` is the exception).
//! - **Geometry**: dot and cross products, distances, length manipulation,
//!   normalization, interpolation.
//! - **Rotation**: 2D rotation, heading, and 3D axis-angle rotation via the
//!   quaternion sandwich product.
//! - **Randomness**: uniform direction sampling with an injectable source.
//!
//! # Example
//!
//! ```
//! use vec_types::{Dimension, Vector};
//!
//! let mut v = Vector::two(3.0, 4.0);
//! assert_eq!(v.dimension(), Dimension::TwoD);
//! assert!((v.length() - 5.0).abs() < 1e-12);
//!
//! // Chained in-place arithmetic; a single scalar broadcasts.
//! v.add(1.0).mul(2.0);
//! assert_eq!(v, Vector::two(8.0, 10.0));
//!
//! // Cross product is 3D-only.
//! let n = Vector::three(1.0, 0.0, 0.0).cross(&Vector::three(0.0, 1.0, 0.0));
//! assert_eq!(n, Vector::three(0.0, 0.0, 1.0));
//! ```
//!
//! # Failure tiers
//!
//! No operation panics. Wrong-dimension receivers (e.g. `heading()` on a 3D
//! vector) emit a `tracing` warning and compute best-effort; operations that
//! would divide by zero (`set_length`, `limit` on a zero-length vector) warn
//! and leave the receiver unchanged.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`Vector`] and
//!   [`Dimension`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::float_cmp,
    clippy::suboptimal_flops,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

mod arith;
mod dimension;
mod ops;
mod random;
mod rotate;
mod vector;

pub use arith::Operand;
pub use dimension::Dimension;
pub use vector::Vector;
