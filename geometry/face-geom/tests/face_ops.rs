//! End-to-end coverage of the face geometry helpers.

use approx::assert_relative_eq;
use face_geom::{
    between, break_into_parts, is_vector_in_face, random_vector_in_face_with,
    split_face_along_longest_side, subdivide_face,
};
use rand::{Rng, SeedableRng};
use vec_types::Vector;

fn face() -> (Vector, Vector, Vector) {
    (
        Vector::three(0.0, 0.0, 0.0),
        Vector::three(4.0, 0.0, 0.0),
        Vector::three(0.0, 4.0, 0.0),
    )
}

fn triangle_area(a: &Vector, b: &Vector, c: &Vector) -> f64 {
    let mut e1 = *b;
    e1.sub(a);
    let mut e2 = *c;
    e2.sub(a);
    e1.cross(&e2).length() * 0.5
}

#[test]
fn segment_points_line_up_with_centroid() {
    let (a, b, _) = face();

    let two = break_into_parts(&a, &b, 1).unwrap();
    assert_eq!(two, vec![a, b]);

    let five = break_into_parts(&a, &b, 4).unwrap();
    assert_eq!(five.len(), 5);
    assert_eq!(five[2], between(&[a, b]).unwrap());
}

#[test]
fn subdivision_conserves_area_through_two_levels() {
    let (a, b, c) = face();
    let original = triangle_area(&a, &b, &c);

    let mut level1 = Vec::new();
    subdivide_face(&a, &b, &c, &mut level1).unwrap();
    assert_eq!(level1.len(), 12);

    // Subdivide each of the 4 faces again: 16 faces, 48 points.
    let mut level2 = Vec::new();
    for t in level1.chunks(3) {
        subdivide_face(&t[0], &t[1], &t[2], &mut level2).unwrap();
    }
    assert_eq!(level2.len(), 48);

    let total: f64 = level2
        .chunks(3)
        .map(|t| triangle_area(&t[0], &t[1], &t[2]))
        .sum();
    assert_relative_eq!(total, original, epsilon = 1e-12);
}

#[test]
fn longest_side_split_conserves_area() {
    let (a, b, c) = face();
    let mut out = Vec::new();
    split_face_along_longest_side(&a, &b, &c, &mut out).unwrap();
    assert_eq!(out.len(), 6);

    let total: f64 = out
        .chunks(3)
        .map(|t| triangle_area(&t[0], &t[1], &t[2]))
        .sum();
    assert_relative_eq!(total, triangle_area(&a, &b, &c), epsilon = 1e-12);
}

#[test]
fn centroids_of_subdivided_faces_stay_inside_the_parent() {
    let (a, b, c) = face();
    let mut points = Vec::new();
    subdivide_face(&a, &b, &c, &mut points).unwrap();

    for t in points.chunks(3) {
        let centroid = between(t).unwrap();
        assert!(is_vector_in_face(&a, &b, &c, &centroid));
    }
}

#[test]
fn seeded_samples_are_uniform_enough_and_contained() {
    let (a, b, c) = face();
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
    let mut rand01 = || rng.gen::<f64>();

    // All samples land inside; roughly half land in the near half of the
    // face (split along the longest side).
    let mut near = 0_u32;
    let n = 1000;
    let m = b.midpoint(&c);
    for _ in 0..n {
        let p = random_vector_in_face_with(&a, &b, &c, &mut rand01).unwrap();
        assert!(is_vector_in_face(&a, &b, &c, &p));
        if is_vector_in_face(&a, &m, &c, &p) {
            near += 1;
        }
    }
    // The (a, m, c) half covers half the area; allow a generous margin.
    assert!(near > 350 && near < 650, "near = {near}");
}
