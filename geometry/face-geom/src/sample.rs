//! Uniform random sampling inside a face.

use rand::Rng;
use vec_types::Vector;

use crate::{check_face, is_vector_in_face, FaceResult};

/// Uniform random point inside the triangle `(a, b, c)`, rejection-free.
///
/// Samples the parallelogram spanned by the edges `ab` and `ac`; a point
/// that lands in the far half is folded back into the triangle by point
/// reflection through the midpoint of `bc` (`p' = b + c - p`). The
/// containment check runs against the `(a, b, c)` triangle itself.
///
/// `rand01` is any source of uniform values in `[0, 1)`.
///
/// # Errors
///
/// Returns [`FaceError::MixedDimensions`](crate::FaceError::MixedDimensions)
/// if the vertices do not share one dimension.
///
/// # Example
///
/// ```
/// use face_geom::{is_vector_in_face, random_vector_in_face_with};
/// use rand::{Rng, SeedableRng};
/// use vec_types::Vector;
///
/// let a = Vector::two(0.0, 0.0);
/// let b = Vector::two(4.0, 0.0);
/// let c = Vector::two(0.0, 4.0);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let p = random_vector_in_face_with(&a, &b, &c, || rng.gen())?;
/// assert!(is_vector_in_face(&a, &b, &c, &p));
/// # Ok::<(), face_geom::FaceError>(())
/// ```
pub fn random_vector_in_face_with(
    a: &Vector,
    b: &Vector,
    c: &Vector,
    mut rand01: impl FnMut() -> f64,
) -> FaceResult<Vector> {
    check_face(a, b, c)?;

    let mut ab = *b;
    ab.sub(a).mul(rand01());
    let mut ac = *c;
    ac.sub(a).mul(rand01());

    let mut p = *a;
    p.add(&ab).add(&ac);

    if !is_vector_in_face(a, b, c, &p) {
        // Fold across the midpoint of bc.
        let mut folded = *b;
        folded.add(c).sub(&p);
        p = folded;
    }
    Ok(p)
}

/// [`random_vector_in_face_with`] using the thread-local generator.
///
/// # Errors
///
/// Returns [`FaceError::MixedDimensions`](crate::FaceError::MixedDimensions)
/// if the vertices do not share one dimension.
pub fn random_vector_in_face(a: &Vector, b: &Vector, c: &Vector) -> FaceResult<Vector> {
    let mut rng = rand::thread_rng();
    random_vector_in_face_with(a, b, c, move || rng.gen())
}
