//! Barycentric point-in-triangle testing.

use vec_types::Vector;

/// Whether `v` lies inside the triangle `(a, b, c)`.
///
/// Solves for the barycentric coordinates of `v` relative to the edge
/// vectors `c - a` and `b - a` and applies half-open inclusion:
/// `u >= 0 && v >= 0 && u + v < 1`. Points on the edge opposite `a` (where
/// `u + v = 1`) are excluded by design; the two edges touching `a` are
/// included. A degenerate triangle contains nothing.
///
/// All four vectors should share one dimension; mismatches fall through to
/// the `dot` diagnostics and generally test as outside.
///
/// # Example
///
/// ```
/// use face_geom::is_vector_in_face;
/// use vec_types::Vector;
///
/// let a = Vector::two(0.0, 0.0);
/// let b = Vector::two(4.0, 0.0);
/// let c = Vector::two(0.0, 4.0);
///
/// assert!(is_vector_in_face(&a, &b, &c, &Vector::two(1.0, 1.0)));
/// assert!(!is_vector_in_face(&a, &b, &c, &Vector::two(3.0, 3.0)));
/// ```
#[must_use]
pub fn is_vector_in_face(a: &Vector, b: &Vector, c: &Vector, v: &Vector) -> bool {
    let mut e0 = *c;
    e0.sub(a);
    let mut e1 = *b;
    e1.sub(a);
    let mut e2 = *v;
    e2.sub(a);

    let dot00 = e0.dot(&e0);
    let dot01 = e0.dot(&e1);
    let dot02 = e0.dot(&e2);
    let dot11 = e1.dot(&e1);
    let dot12 = e1.dot(&e2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 {
        // Degenerate face.
        return false;
    }
    let inv = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv;
    let w = (dot00 * dot12 - dot01 * dot02) * inv;

    u >= 0.0 && w >= 0.0 && u + w < 1.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::between;

    fn unit_face() -> (Vector, Vector, Vector) {
        (
            Vector::two(0.0, 0.0),
            Vector::two(4.0, 0.0),
            Vector::two(0.0, 4.0),
        )
    }

    #[test]
    fn centroid_is_inside() {
        let (a, b, c) = unit_face();
        let centroid = between(&[a, b, c]).unwrap();
        assert!(is_vector_in_face(&a, &b, &c, &centroid));
    }

    #[test]
    fn far_point_is_outside() {
        let (a, b, c) = unit_face();
        assert!(!is_vector_in_face(&a, &b, &c, &Vector::two(100.0, 100.0)));
        assert!(!is_vector_in_face(&a, &b, &c, &Vector::two(-1.0, 1.0)));
    }

    #[test]
    fn vertex_a_is_inside() {
        // u = v = 0 satisfies the half-open bounds.
        let (a, b, c) = unit_face();
        assert!(is_vector_in_face(&a, &b, &c, &a));
    }

    #[test]
    fn opposite_edge_is_excluded() {
        // Midpoint of bc sits on u + v = 1.
        let (a, b, c) = unit_face();
        let m = b.midpoint(&c);
        assert!(!is_vector_in_face(&a, &b, &c, &m));
    }

    #[test]
    fn works_in_3d() {
        let a = Vector::three(0.0, 0.0, 1.0);
        let b = Vector::three(4.0, 0.0, 1.0);
        let c = Vector::three(0.0, 4.0, 1.0);
        assert!(is_vector_in_face(&a, &b, &c, &Vector::three(1.0, 1.0, 1.0)));
        assert!(!is_vector_in_face(&a, &b, &c, &Vector::three(5.0, 5.0, 1.0)));
    }

    #[test]
    fn degenerate_face_contains_nothing() {
        let a = Vector::two(0.0, 0.0);
        let b = Vector::two(1.0, 0.0);
        let c = Vector::two(2.0, 0.0);
        assert!(!is_vector_in_face(&a, &b, &c, &Vector::two(1.0, 0.0)));
    }
}
