//! Property and scenario tests for the public vector API

use approx::{assert_abs_diff_eq, assert_relative_eq};
use planevec::{Vector, Vector2D, Vector3D, VectorError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use std::f64::consts::PI;

#[rstest]
#[case(Vector3D::new(3.0, 4.0, 12.0))]
#[case(Vector3D::new(1.0, 2.0, 2.0))]
#[case(Vector3D::new(0.0, 0.0, 0.0))]
#[case(Vector3D::new(-6.0, 0.0, 8.0))]
fn magnitude_squared_matches_magnitude(#[case] v: Vector3D) {
    assert_eq!(v.magnitude() * v.magnitude(), v.magnitude_squared());
    assert_eq!(v.magnitude_squared(), v.x * v.x + v.y * v.y + v.z * v.z);
}

#[rstest]
#[case(Vector3D::new(3.0, 4.0, 12.0))]
#[case(Vector3D::new(1e-8, -2e-8, 3e-8))]
#[case(Vector3D::new(1e8, 5.0, -7e7))]
#[case(Vector3D::new(0.0, 0.0, -0.25))]
fn normalize_gives_unit_length(#[case] v: Vector3D) {
    let mut unit = v;
    unit.normalize();
    assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-14);
    // Same direction
    assert_relative_eq!(unit.angle_between(&v), 0.0, epsilon = 1e-7);
}

#[test]
fn planar_operands_ignore_missing_z() {
    let mut v = Vector3D::new(1.0, 2.0, 3.0);
    v.add(Vector2D::new(1.0, 1.0));
    assert_eq!(v, Vector3D::new(2.0, 3.0, 3.0));

    v.subtract(Vector2D::new(2.0, 3.0));
    assert_eq!(v, Vector3D::new(0.0, 0.0, 3.0));

    assert_eq!(Vector3D::new(1.0, 2.0, 3.0).dot(&Vector2D::new(4.0, 3.0)), 10.0);
    assert_eq!(
        Vector3D::new(1.0, 0.0, 0.0).cross(&Vector2D::new(0.0, 1.0)),
        Vector3D::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn cross_with_planar_operand_can_leave_the_plane() {
    let result = Vector3D::new(0.0, 0.0, 1.0).cross(&Vector2D::new(1.0, 0.0));
    assert_eq!(result, Vector3D::new(0.0, 1.0, 0.0));
}

#[test]
fn planar_vector_rejects_3d_operand() {
    let mut v = Vector2D::new(2.0, 3.0);
    let err = v.add(Vector3D::new(4.0, 9.0, 12.0)).unwrap_err();
    assert!(matches!(err, VectorError::DimensionMismatch { operation: "add" }));
    assert_eq!(err.to_string(), "cannot add a 3D vector into a 2D vector");
    assert_eq!(v, Vector2D::new(2.0, 3.0));
}

#[rstest]
#[case(Vector3D::new(3.0, 4.0, 12.0))]
#[case(Vector3D::new(-0.1, 0.2, -0.3))]
#[case(Vector3D::new(f64::MAX, f64::MIN_POSITIVE, 0.0))]
fn array_round_trip_3d(#[case] v: Vector3D) {
    assert_eq!(Vector3D::from_array(v.to_array()), v);
}

#[rstest]
#[case(Vector2D::new(3.0, 4.0))]
#[case(Vector2D::new(-0.1, 0.7))]
fn array_round_trip_2d(#[case] v: Vector2D) {
    assert_eq!(Vector2D::from_array(v.to_array()), v);
}

#[rstest]
#[case(Vector3D::new(3.0, 4.0, 12.0))]
#[case(Vector3D::new(0.1, -2.5, 1e-7))]
fn text_round_trip_3d(#[case] v: Vector3D) {
    assert_eq!(v.to_string().parse::<Vector3D>().unwrap(), v);
}

#[rstest]
#[case(10.0, PI / 4.0)]
#[case(1.0, PI)]
#[case(2.5, -PI / 2.0)]
#[case(0.5, 3.0)]
#[case(7.0, -3.0)]
fn polar_round_trip(#[case] r: f64, #[case] theta: f64) {
    let v = Vector2D::from_polar(r, theta);
    assert_relative_eq!(v.magnitude(), r, epsilon = 1e-12);
    assert_relative_eq!(v.angle(), theta, epsilon = 1e-12);
}

#[test]
fn set_magnitude_preserves_direction() {
    let mut v = Vector3D::new(2.0, 3.0, 4.0);
    let original = v;
    v.set_magnitude(26.0);
    assert_relative_eq!(v.magnitude(), 26.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.angle_between(&original), 0.0, epsilon = 1e-7);
    assert_relative_eq!(v.x / original.x, v.z / original.z, epsilon = 1e-12);
}

#[test]
fn rotate_half_turn() {
    let mut v = Vector2D::new(0.0, 1.0);
    v.rotate(PI);
    assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-15);
    assert_eq!(v.y, -1.0);
}

#[test]
fn concrete_scenarios() {
    assert_eq!(Vector3D::new(3.0, 4.0, 12.0).magnitude(), 13.0);
    assert_eq!(
        Vector3D::new(1.0, 0.0, 0.0).cross(&Vector3D::new(0.0, 1.0, 0.0)),
        Vector3D::new(0.0, 0.0, 1.0)
    );
    assert_eq!(Vector3D::new(3.0, 4.0, 12.0).to_string(), "3,4,12");
    assert_eq!(Vector2D::new(3.0, 4.0).to_string(), "3,4");

    let polar = Vector2D::from_polar(10.0, PI / 4.0);
    assert_relative_eq!(polar.magnitude(), 10.0, epsilon = 1e-12);
    assert_relative_eq!(polar.angle(), PI / 4.0, epsilon = 1e-12);
}

#[test]
fn planar_invariant_survives_every_mutation() {
    let mut v = Vector2D::new(1.0, 2.0);
    v.map(|c| c * 10.0);
    v.scale(0.5);
    v.normalize();
    v.rotate(1.0);
    v.set_angle(-2.0);
    v.set_magnitude(3.0);
    v.add((1.0, 1.0)).unwrap();
    v.subtract(Vector2D::new(0.5, 0.5)).unwrap();
    v.set(Vector2D::new(4.0, 5.0)).unwrap();
    assert_eq!(v.z(), 0.0);
    assert_eq!(v.components()[2], 0.0);
}

#[test]
fn random_vectors_are_reproducible_with_seed() {
    let a = Vector2D::random_with_rng(2.0, &mut StdRng::seed_from_u64(99));
    let b = Vector2D::random_with_rng(2.0, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);

    let c = Vector3D::random_with_rng(4.0, &mut StdRng::seed_from_u64(99));
    assert_relative_eq!(c.magnitude(), 4.0, epsilon = 1e-12);
}

#[test]
fn random_3d_components_come_from_centered_cube() {
    // Before normalization each component is in [-0.5, 0.5); after it every
    // octant should still show up over enough draws.
    let mut rng = StdRng::seed_from_u64(1);
    let mut octants = [0usize; 8];
    for _ in 0..2000 {
        let v = Vector3D::random_unit_with_rng(&mut rng);
        let index = (v.x >= 0.0) as usize
            | ((v.y >= 0.0) as usize) << 1
            | ((v.z >= 0.0) as usize) << 2;
        octants[index] += 1;
    }
    assert!(octants.iter().all(|&count| count > 100), "{:?}", octants);
}

#[test]
fn serde_round_trip() {
    let v = Vector3D::new(1.5, -2.0, 0.25);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0,"z":0.25}"#);
    assert_eq!(serde_json::from_str::<Vector3D>(&json).unwrap(), v);

    let p = Vector2D::new(3.0, 4.0);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"x":3.0,"y":4.0}"#);
    assert_eq!(serde_json::from_str::<Vector2D>(&json).unwrap(), p);
}

#[test]
fn pure_combinators_leave_inputs_alone() {
    let a = Vector2D::new(2.0, 3.0);
    let b = Vector2D::new(1.0, 1.0);
    assert_eq!(Vector2D::sum(&a, &b), Vector2D::new(3.0, 4.0));
    assert_eq!(Vector2D::difference(&a, &b), Vector2D::new(1.0, 2.0));
    assert_eq!(a, Vector2D::new(2.0, 3.0));

    let unit = Vector3D::unit(&Vector3D::new(0.0, 0.0, 5.0));
    assert_eq!(unit, Vector3D::new(0.0, 0.0, 1.0));
}
