use super::vec3d::Vec3D;
use rand::Rng;

/// Speed of light in vacuum, in m/s. One light second of distance is
/// `LIGHT_SPEED` meters.
pub const LIGHT_SPEED: f64 = 299_792_458.0;

/// Upper bound on unit-vector draws in [`random_orthogonal`] before falling
/// back to a deterministic basis axis.
const MAX_ORTHO_DRAWS: usize = 16;

/// Linearly interpolates between `a` and `b`.
///
/// # Arguments
/// - `a`: The start value.
/// - `b`: The end value.
/// - `t`: The interpolation parameter, clamped to `[0.0, 1.0]`.
///
/// # Returns
/// - An `f64` between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Computes the unsigned angle between two vectors in degrees.
///
/// # Arguments
/// - `v1`, `v2`: The vectors to compare. Zero vectors yield an angle of `0.0`.
///
/// # Returns
/// - The angle in degrees, in `[0.0, 180.0]`.
pub fn angle_between_deg(v1: Vec3D<f64>, v2: Vec3D<f64>) -> f64 {
    let mag = v1.abs() * v2.abs();
    if mag == 0.0 {
        return 0.0;
    }
    let cos = (v1.dot(v2) / mag).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Checks whether a direction vector points "close" to another direction
/// vector. Both vectors need to originate from the same point.
///
/// # Arguments
/// - `v1`, `v2`: The direction vectors to compare.
/// - `threshold_deg`: The maximum angle in degrees still counted as aligned.
///
/// # Returns
/// - `true` iff the angle between `v1` and `v2` is below the threshold.
pub fn near_collinear(v1: Vec3D<f64>, v2: Vec3D<f64>, threshold_deg: f64) -> bool {
    angle_between_deg(v1, v2) < threshold_deg
}

/// Checks whether the line segment `p1 -> p2` intersects a sphere.
///
/// If the foot of the perpendicular from the sphere center falls outside the
/// segment, the distance to the nearer endpoint is used, otherwise the
/// perpendicular height over the segment. The result is symmetric under
/// swapping `p1` and `p2`.
///
/// # Arguments
/// - `p1`, `p2`: The segment endpoints.
/// - `center`: The sphere center.
/// - `radius`: The sphere radius.
///
/// # Returns
/// - `true` iff the minimum distance from `center` to the segment is below `radius`.
pub fn line_intersects_sphere(
    p1: Vec3D<f64>,
    p2: Vec3D<f64>,
    center: Vec3D<f64>,
    radius: f64,
) -> bool {
    let sqr_radius = radius * radius;
    let a = p1 - center;
    let b = p2 - center;
    let c = p2 - p1;
    let sqr_height = if angle_between_deg(a, c) <= 90.0 {
        // Foot of the perpendicular lies before p1
        a.sqr_magnitude()
    } else if angle_between_deg(b, c) >= 90.0 {
        // Foot of the perpendicular lies past p2
        b.sqr_magnitude()
    } else {
        a.cross(b).sqr_magnitude() / c.sqr_magnitude()
    };
    sqr_height < sqr_radius
}

/// Draws a uniformly distributed random unit vector via rejection sampling.
/// The loop is bounded; the final draw is accepted as long as it is usable.
fn random_unit_vector<R: Rng>(rng: &mut R) -> Vec3D<f64> {
    for _ in 0..MAX_ORTHO_DRAWS {
        let candidate = Vec3D::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let sqr_mag = candidate.sqr_magnitude();
        if sqr_mag > 1e-4 && sqr_mag <= 1.0 {
            return candidate.normalize();
        }
    }
    Vec3D::new(1.0, 0.0, 0.0)
}

/// Picks a uniformly random point on the sphere of the given radius around
/// `center`.
pub fn random_point_on_sphere<R: Rng>(rng: &mut R, center: Vec3D<f64>, radius: f64) -> Vec3D<f64> {
    center + random_unit_vector(rng) * radius
}

/// Generates a unit vector orthogonal to the input, with a random rotation
/// around it.
///
/// Draws random unit vectors and rejects those parallel to the input, then
/// Gram-Schmidt-orthogonalizes the accepted draw against `v`. The rejection
/// loop is bounded; after [`MAX_ORTHO_DRAWS`] failed draws the least aligned
/// basis axis is orthogonalized instead.
///
/// # Arguments
/// - `rng`: The random source.
/// - `v`: The vector to be orthogonal to. Must be non-zero.
///
/// # Returns
/// - A unit vector orthogonal to `v`.
pub fn random_orthogonal<R: Rng>(rng: &mut R, v: Vec3D<f64>) -> Vec3D<f64> {
    let axis = v.normalize();
    for _ in 0..MAX_ORTHO_DRAWS {
        let draw = random_unit_vector(rng);
        let along = draw.dot(axis);
        if along.abs() > 1.0 - 1e-6 {
            continue;
        }
        return (draw - axis * along).normalize();
    }
    let fallback = least_aligned_axis(axis);
    (fallback - axis * fallback.dot(axis)).normalize()
}

/// Returns the cartesian basis axis with the smallest projection onto `axis`.
fn least_aligned_axis(axis: Vec3D<f64>) -> Vec3D<f64> {
    let candidates = [
        Vec3D::new(1.0, 0.0, 0.0),
        Vec3D::new(0.0, 1.0, 0.0),
        Vec3D::new(0.0, 0.0, 1.0),
    ];
    let mut best = candidates[0];
    let mut best_align = f64::MAX;
    for candidate in candidates {
        let align = candidate.dot(axis).abs();
        if align < best_align {
            best_align = align;
            best = candidate;
        }
    }
    best
}
