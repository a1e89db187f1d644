use super::math::{
    LIGHT_SPEED, angle_between_deg, lerp, line_intersects_sphere, near_collinear,
    random_orthogonal, random_point_on_sphere,
};
use super::units::{format_distance, format_velocity};
use super::vec3d::Vec3D;
use itertools::Itertools;
use num::Zero;
use rand::Rng;

fn rand_vec<R: Rng>(rng: &mut R, scale: f64) -> Vec3D<f64> {
    Vec3D::new(
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
    )
}

#[test]
fn test_vec3d_ops() {
    let a = Vec3D::<f64>::new(1.0, 2.0, 3.0);
    let b = Vec3D::<f64>::new(4.0, -5.0, 6.0);
    assert_eq!(a.dot(b), 12.0);
    assert_eq!(a.cross(b), Vec3D::new(27.0, 6.0, -13.0));
    assert_eq!(a * 0.0, Vec3D::zero());
    assert!(Vec3D::<f64>::zero().is_zero());
    assert!((a.normalize().abs() - 1.0).abs() < 1e-12);
    assert_eq!(a.to(&b), b - a);
    assert_eq!(-a, a * -1.0);
}

#[test]
fn test_angle_between() {
    let x = Vec3D::new(1.0, 0.0, 0.0);
    let y = Vec3D::new(0.0, 5.0, 0.0);
    assert!((angle_between_deg(x, y) - 90.0).abs() < 1e-9);
    assert!((angle_between_deg(x, -x) - 180.0).abs() < 1e-9);
    assert!(angle_between_deg(x, x * 3.0).abs() < 1e-9);
    assert_eq!(angle_between_deg(x, Vec3D::zero()), 0.0);
}

#[test]
fn test_near_collinear() {
    let fwd = Vec3D::new(0.0, 1.0, 0.0);
    let slightly_off = Vec3D::new(0.02, 1.0, 0.0);
    let sideways = Vec3D::new(1.0, 0.2, 0.0);
    assert!(near_collinear(fwd, slightly_off, 5.0));
    assert!(!near_collinear(fwd, sideways, 5.0));
    assert!(!near_collinear(fwd, -fwd, 5.0));
}

#[test]
fn test_line_sphere_perpendicular_case() {
    let p1 = Vec3D::new(-10.0, 0.0, 0.0);
    let p2 = Vec3D::new(10.0, 0.0, 0.0);
    let center = Vec3D::new(0.0, 3.0, 0.0);
    assert!(line_intersects_sphere(p1, p2, center, 4.0));
    assert!(!line_intersects_sphere(p1, p2, center, 2.0));
    // Boundary distance equals the radius, counts as a miss
    assert!(!line_intersects_sphere(p1, p2, center, 3.0));
}

#[test]
fn test_line_sphere_endpoint_cases() {
    let p1 = Vec3D::new(0.0, 0.0, 0.0);
    let p2 = Vec3D::new(10.0, 0.0, 0.0);
    // Center past p2: segment distance is to p2, not to the infinite line
    let past = Vec3D::new(15.0, 3.0, 0.0);
    assert!(!line_intersects_sphere(p1, p2, past, 4.0));
    assert!(line_intersects_sphere(p1, p2, past, 6.0));
    // Center before p1
    let before = Vec3D::new(-5.0, 3.0, 0.0);
    assert!(!line_intersects_sphere(p1, p2, before, 4.0));
    assert!(line_intersects_sphere(p1, p2, before, 6.0));
}

#[test]
fn test_line_sphere_symmetry() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let p1 = rand_vec(&mut rng, 100.0);
        let p2 = rand_vec(&mut rng, 100.0);
        let center = rand_vec(&mut rng, 100.0);
        let radius = rng.random_range(0.1..80.0);
        assert_eq!(
            line_intersects_sphere(p1, p2, center, radius),
            line_intersects_sphere(p2, p1, center, radius),
            "asymmetric for p1={p1}, p2={p2}, center={center}, r={radius}"
        );
    }
}

#[test]
fn test_random_orthogonal() {
    let mut rng = rand::rng();
    let inputs = (0..50).map(|_| rand_vec(&mut rng, 10.0)).collect_vec();
    for v in inputs {
        if v.is_zero() {
            continue;
        }
        let ortho = random_orthogonal(&mut rng, v);
        assert!((ortho.abs() - 1.0).abs() < 1e-9);
        assert!(ortho.dot(v.normalize()).abs() < 1e-9);
    }
}

#[test]
fn test_random_point_on_sphere() {
    let mut rng = rand::rng();
    let center = Vec3D::new(100.0, -20.0, 3.0);
    for _ in 0..50 {
        let p = random_point_on_sphere(&mut rng, center, 8_000.0);
        assert!((p.euclid_distance(&center) - 8_000.0).abs() < 1e-6);
    }
}

#[test]
fn test_lerp() {
    assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
    assert_eq!(lerp(5.0, 5.0, 0.7), 5.0);
}

#[test]
fn test_unit_formatting() {
    assert_eq!(format_velocity(30_000.0), "30.0 km/s");
    assert_eq!(format_velocity(2_500_000.0), "2.50 Mm/s");
    assert_eq!(format_velocity(LIGHT_SPEED), "1.00 c");
    assert_eq!(format_distance(-42_000.0), "42.0 km");
    assert_eq!(format_distance(LIGHT_SPEED * 2.0), "2.00 Ls");
}
