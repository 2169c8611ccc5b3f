use std::f64::consts::{FRAC_PI_2, PI};

use sdf::{MathError, Quaternion, Ray, Vec3};

fn assert_vec_close(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_quarter_turn_about_z() {
    let q = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::Z).unwrap();
    // Y rotates to -X under a right-handed quarter turn about Z
    assert_vec_close(q.rotate(Vec3::Y).unwrap(), Vec3::new(-1.0, 0.0, 0.0));
    assert_vec_close(q.rotate(Vec3::X).unwrap(), Vec3::Y);
}

#[test]
fn test_rotation_preserves_length() {
    let q = Quaternion::from_axis_angle(1.234, Vec3::new(1.0, 2.0, -0.5)).unwrap();
    let v = Vec3::new(3.0, -4.0, 12.0);
    let rotated = q.rotate(v).unwrap();
    assert!((rotated.length() - 13.0).abs() < 1e-9);
}

#[test]
fn test_axis_is_fixed_by_its_own_rotation() {
    let axis = Vec3::new(1.0, 1.0, 0.0);
    let q = Quaternion::from_axis_angle(0.7, axis).unwrap();
    assert_vec_close(q.rotate(axis).unwrap(), axis);
}

#[test]
fn test_non_unit_quaternion_still_rotates() {
    let q = Quaternion::from_axis_angle(PI, Vec3::Y).unwrap() * 3.0;
    assert_vec_close(q.rotate(Vec3::X).unwrap(), Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_inverse_undoes_rotation() {
    let q = Quaternion::from_axis_angle(0.9, Vec3::new(0.3, -1.0, 0.2)).unwrap();
    let v = Vec3::new(0.5, 2.0, -1.0);
    let there = q.rotate(v).unwrap();
    let back = q.inverse().unwrap().rotate(there).unwrap();
    assert_vec_close(back, v);
}

#[test]
fn test_zero_quaternion_and_axis_are_rejected() {
    let zero = Quaternion::new(0.0, Vec3::ZERO);
    assert_eq!(zero.inverse(), Err(MathError::DegenerateVector));
    assert!(zero.rotate(Vec3::X).is_err());
    assert!(Quaternion::from_axis_angle(1.0, Vec3::ZERO).is_err());
}

#[test]
fn test_ray_rotation_keeps_direction_unit() {
    let mut ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z).unwrap();
    ray.rotate(Quaternion::from_axis_angle(FRAC_PI_2, Vec3::Y).unwrap())
        .unwrap();
    assert_vec_close(ray.direction(), Vec3::X);
    assert!((ray.direction().length() - 1.0).abs() < 1e-12);
}

#[test]
fn test_product_composes_rotations() {
    let a = Quaternion::from_axis_angle(0.7, Vec3::new(1.0, 2.0, 0.3)).unwrap();
    let b = Quaternion::from_axis_angle(-1.3, Vec3::new(0.0, 1.0, -2.0)).unwrap();
    let c = Quaternion::from_axis_angle(2.1, Vec3::new(-0.4, 0.0, 1.0)).unwrap();
    let v = Vec3::new(0.5, -1.5, 2.0);

    // a * b applies b first
    let composed = (a * b).rotate(v).unwrap();
    let sequential = a.rotate(b.rotate(v).unwrap()).unwrap();
    assert!((composed - sequential).length() < 1e-12, "{composed:?} vs {sequential:?}");

    let left = (a * b) * c;
    let right = a * (b * c);
    assert!((left.w - right.w).abs() < 1e-12);
    assert!((left.v - right.v).length() < 1e-12);

    let swapped = (b * a).rotate(v).unwrap();
    assert!(
        (swapped - composed).length() > 1e-3,
        "rotation order should matter: {swapped:?}"
    );
}
