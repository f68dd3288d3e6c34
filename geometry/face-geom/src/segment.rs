//! Points along a segment and centroids.

use vec_types::Vector;

use crate::{FaceError, FaceResult};

/// Evenly spaced points from `a` to `b`, both endpoints included.
///
/// Splitting into `parts` parts yields `parts + 1` points. A `parts` of zero
/// falls back to 2, the historical default.
///
/// # Errors
///
/// Returns [`FaceError::MixedDimensions`] if the endpoints differ in
/// dimension.
///
/// # Example
///
/// ```
/// use face_geom::break_into_parts;
/// use vec_types::Vector;
///
/// let a = Vector::two(0.0, 0.0);
/// let b = Vector::two(4.0, 0.0);
///
/// let points = break_into_parts(&a, &b, 4)?;
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[2], Vector::two(2.0, 0.0));
/// # Ok::<(), face_geom::FaceError>(())
/// ```
pub fn break_into_parts(a: &Vector, b: &Vector, parts: u32) -> FaceResult<Vec<Vector>> {
    if b.dimension() != a.dimension() {
        return Err(FaceError::MixedDimensions {
            expected: a.dimension(),
            found: b.dimension(),
        });
    }

    let parts = if parts == 0 { 2 } else { parts };
    let mut points = Vec::with_capacity(parts as usize + 1);
    points.push(*a);
    for i in 1..parts {
        let mut p = *a;
        p.lerp(b, f64::from(i) / f64::from(parts));
        points.push(p);
    }
    points.push(*b);
    Ok(points)
}

/// Centroid (arithmetic mean) of a non-empty list of vectors.
///
/// # Errors
///
/// Returns [`FaceError::NoVectors`] for an empty list and
/// [`FaceError::MixedDimensions`] if the vectors differ in dimension.
///
/// # Example
///
/// ```
/// use face_geom::between;
/// use vec_types::Vector;
///
/// let mid = between(&[Vector::two(0.0, 0.0), Vector::two(2.0, 4.0)])?;
/// assert_eq!(mid, Vector::two(1.0, 2.0));
/// # Ok::<(), face_geom::FaceError>(())
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn between(vectors: &[Vector]) -> FaceResult<Vector> {
    let Some((first, rest)) = vectors.split_first() else {
        return Err(FaceError::NoVectors);
    };

    let mut sum = *first;
    for v in rest {
        if v.dimension() != first.dimension() {
            return Err(FaceError::MixedDimensions {
                expected: first.dimension(),
                found: v.dimension(),
            });
        }
        sum.add(v);
    }
    sum.div(vectors.len() as f64);
    Ok(sum)
}
