//! Face splitting and subdivision.

use tracing::debug;
use vec_types::Vector;

use crate::{check_face, FaceResult};

/// Bisect the triangle's longest edge, appending two faces (6 points) to `out`.
///
/// Edge lengths are compared with strict `>` in the fixed order ab, bc, ca,
/// so exact ties favor the earlier-checked edge.
///
/// # Errors
///
/// Returns [`FaceError::MixedDimensions`](crate::FaceError::MixedDimensions)
/// if the vertices do not share one dimension.
///
/// # Example
///
/// ```
/// use face_geom::split_face_along_longest_side;
/// use vec_types::Vector;
///
/// // 3-4-5 right triangle: the hypotenuse bc is split.
/// let a = Vector::two(0.0, 0.0);
/// let b = Vector::two(3.0, 0.0);
/// let c = Vector::two(0.0, 4.0);
///
/// let mut out = Vec::new();
/// split_face_along_longest_side(&a, &b, &c, &mut out)?;
/// assert_eq!(out.len(), 6);
/// # Ok::<(), face_geom::FaceError>(())
/// ```
pub fn split_face_along_longest_side(
    a: &Vector,
    b: &Vector,
    c: &Vector,
    out: &mut Vec<Vector>,
) -> FaceResult<()> {
    check_face(a, b, c)?;

    let ab = a.dist(b);
    let bc = b.dist(c);
    let ca = c.dist(a);

    // Strict > keeps the earlier edge on exact ties.
    let mut longest = ab;
    let mut edge = 0;
    if bc > longest {
        longest = bc;
        edge = 1;
    }
    if ca > longest {
        edge = 2;
    }

    match edge {
        0 => {
            let m = a.midpoint(b);
            out.extend_from_slice(&[*a, m, *c, m, *b, *c]);
        }
        1 => {
            let m = b.midpoint(c);
            out.extend_from_slice(&[*a, *b, m, *a, m, *c]);
        }
        _ => {
            let m = c.midpoint(a);
            out.extend_from_slice(&[*a, *b, m, m, *b, *c]);
        }
    }
    Ok(())
}

/// Classic 1-to-4 midpoint subdivision, appending 4 faces (12 points) to `out`.
///
/// The three corner faces come first, the center face last.
///
/// # Errors
///
/// Returns [`FaceError::MixedDimensions`](crate::FaceError::MixedDimensions)
/// if the vertices do not share one dimension.
///
/// # Example
///
/// ```
/// use face_geom::subdivide_face;
/// use vec_types::Vector;
///
/// let a = Vector::two(0.0, 0.0);
/// let b = Vector::two(2.0, 0.0);
/// let c = Vector::two(0.0, 2.0);
///
/// let mut out = Vec::new();
/// subdivide_face(&a, &b, &c, &mut out)?;
/// assert_eq!(out.len(), 12);
/// # Ok::<(), face_geom::FaceError>(())
/// ```
pub fn subdivide_face(a: &Vector, b: &Vector, c: &Vector, out: &mut Vec<Vector>) -> FaceResult<()> {
    check_face(a, b, c)?;

    let m01 = a.midpoint(b);
    let m12 = b.midpoint(c);
    let m20 = c.midpoint(a);

    // Corner faces, then the center face.
    out.extend_from_slice(&[
        *a, m01, m20, //
        *b, m12, m01, //
        *c, m20, m12, //
        m01, m12, m20,
    ]);
    debug!("subdivide_face: appended 4 faces (12 points)");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FaceError;
    use approx::assert_relative_eq;

    /// Area of the triangle spanned by three vectors, via the cross product.
    fn area(a: &Vector, b: &Vector, c: &Vector) -> f64 {
        let to3 = |v: &Vector| Vector::three(v.x(), v.y(), v.z().unwrap_or(0.0));
        let mut e1 = to3(b);
        e1.sub(&to3(a));
        let mut e2 = to3(c);
        e2.sub(&to3(a));
        e1.cross(&e2).length() * 0.5
    }

    fn total_area(points: &[Vector]) -> f64 {
        points
            .chunks(3)
            .map(|t| area(&t[0], &t[1], &t[2]))
            .sum()
    }

    #[test]
    fn split_emits_two_faces() {
        let a = Vector::two(0.0, 0.0);
        let b = Vector::two(3.0, 0.0);
        let c = Vector::two(0.0, 4.0);
        let mut out = Vec::new();
        split_face_along_longest_side(&a, &b, &c, &mut out).unwrap();
        assert_eq!(out.len(), 6);

        // The hypotenuse midpoint appears in both halves.
        let m = b.midpoint(&c);
        assert!(out.contains(&m));
        assert_relative_eq!(total_area(&out), area(&a, &b, &c), epsilon = 1e-12);
    }

    #[test]
    fn split_appends_to_accumulator() {
        let a = Vector::two(0.0, 0.0);
        let b = Vector::two(1.0, 0.0);
        let c = Vector::two(0.0, 2.0);
        let mut out = vec![Vector::two(9.0, 9.0)];
        split_face_along_longest_side(&a, &b, &c, &mut out).unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], Vector::two(9.0, 9.0));
    }

    #[test]
    fn split_tie_favors_earlier_edge() {
        // Isoceles with ab == ca exactly (both sqrt(10)): ab wins the tie.
        let a = Vector::two(0.0, 3.0);
        let b = Vector::two(-1.0, 0.0);
        let c = Vector::two(1.0, 0.0);
        assert_eq!(a.dist(&b), c.dist(&a));

        let mut out = Vec::new();
        split_face_along_longest_side(&a, &b, &c, &mut out).unwrap();
        let m = a.midpoint(&b);
        assert_eq!(out[1], m);
        assert_eq!(out[3], m);
    }

    #[test]
    fn split_mixed_dimensions_error() {
        let a = Vector::two(0.0, 0.0);
        let b = Vector::two(1.0, 0.0);
        let c = Vector::three(0.0, 1.0, 0.0);
        let mut out = Vec::new();
        assert!(matches!(
            split_face_along_longest_side(&a, &b, &c, &mut out),
            Err(FaceError::MixedDimensions { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn subdivide_emits_four_faces() {
        let a = Vector::three(0.0, 0.0, 0.0);
        let b = Vector::three(2.0, 0.0, 0.0);
        let c = Vector::three(0.0, 2.0, 0.0);
        let mut out = Vec::new();
        subdivide_face(&a, &b, &c, &mut out).unwrap();
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn subdivide_conserves_area() {
        let a = Vector::three(0.1, -0.2, 0.3);
        let b = Vector::three(2.5, 0.4, -1.0);
        let c = Vector::three(-0.7, 2.2, 0.9);
        let mut out = Vec::new();
        subdivide_face(&a, &b, &c, &mut out).unwrap();
        assert_relative_eq!(total_area(&out), area(&a, &b, &c), epsilon = 1e-12);
    }

    #[test]
    fn subdivide_center_face_is_midpoints() {
        let a = Vector::two(0.0, 0.0);
        let b = Vector::two(2.0, 0.0);
        let c = Vector::two(0.0, 2.0);
        let mut out = Vec::new();
        subdivide_face(&a, &b, &c, &mut out).unwrap();
        assert_eq!(&out[9..], &[a.midpoint(&b), b.midpoint(&c), c.midpoint(&a)]);
    }
}
