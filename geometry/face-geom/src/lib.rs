//! Triangle-face geometry helpers over [`vec_types::Vector`] triples.
//!
//! Stateless operations on triangles given as three vectors of the same
//! dimension:
//!
//! - [`break_into_parts`] - Evenly spaced points along a segment
//! - [`between`] - Centroid of an arbitrary non-empty list of vectors
//! - [`split_face_along_longest_side`] - Bisect the longest edge into 2 faces
//! - [`subdivide_face`] - Classic 1-to-4 midpoint subdivision
//! - [`is_vector_in_face`] - Barycentric point-in-triangle test
//! - [`random_vector_in_face`] - Rejection-free uniform sampling in a face
//!
//! Every operation consumes the `Vector` contract exclusively through its
//! public surface (clone, `sub`, `dot`, `add`, `mul`, `dist`, `midpoint`)
//! and emits fresh vectors; no input is mutated.
//!
//! # Example
//!
//! ```
//! use face_geom::{between, is_vector_in_face, subdivide_face};
//! use vec_types::Vector;
//!
//! let a = Vector::three(0.0, 0.0, 0.0);
//! let b = Vector::three(1.0, 0.0, 0.0);
//! let c = Vector::three(0.0, 1.0, 0.0);
//!
//! // 1-to-4 subdivision appends 4 triangles (12 points).
//! let mut points = Vec::new();
//! subdivide_face(&a, &b, &c, &mut points)?;
//! assert_eq!(points.len(), 12);
//!
//! // The centroid lies inside the face.
//! let centroid = between(&[a, b, c])?;
//! assert!(is_vector_in_face(&a, &b, &c, &centroid));
//! # Ok::<(), face_geom::FaceError>(())
//! ```
//!
//! # Failure model
//!
//! Structurally invalid input (mixed dimensions, an empty centroid list)
//! returns a [`FaceError`]; nothing panics. Callers must check the result
//! before use.

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
    clippy::module_name_repetitions
)]

mod contain;
mod error;
mod sample;
mod segment;
mod split;

pub use contain::is_vector_in_face;
pub use error::{FaceError, FaceResult};
pub use sample::{random_vector_in_face, random_vector_in_face_with};
pub use segment::{between, break_into_parts};
pub use split::{split_face_along_longest_side, subdivide_face};

use vec_types::Vector;

/// Check that `b` and `c` share `a`'s dimension.
fn check_face(a: &Vector, b: &Vector, c: &Vector) -> FaceResult<()> {
    for v in [b, c] {
        if v.dimension() != a.dimension() {
            return Err(FaceError::MixedDimensions {
                expected: a.dimension(),
                found: v.dimension(),
            });
        }
    }
    Ok(())
}
