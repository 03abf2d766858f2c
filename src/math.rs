use nalgebra::{Unit, UnitQuaternion, Vector3};

/// 3D vector in world space
pub type Vec3 = Vector3<f64>;

/// Orientation in world space
pub type Quat = UnitQuaternion<f64>;

/// Vectors shorter than this are treated as zero when normalizing
pub const NORMALIZE_EPSILON: f64 = 1e-9;

/// World up direction (right-handed, Y up)
pub fn world_up() -> Vec3 {
    Vec3::y()
}

/// Clamps a value into `[0, 1]`, mapping NaN to 0
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Linear interpolation between two points
pub fn lerp(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    a + (b - a) * t
}

/// Euclidean distance between two points
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    (b - a).norm()
}

/// Normalized copy of `v`, or `None` for a (near) zero vector
pub fn try_normalize(v: &Vec3) -> Option<Vec3> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    v.try_normalize(NORMALIZE_EPSILON)
}

/// Rotation whose local +Z axis points along `direction`
///
/// Falls back to +Z as the reference up vector when `direction` is parallel
/// to world up. Returns `None` for a zero direction.
pub fn look_rotation(direction: &Vec3) -> Option<Quat> {
    let dir = try_normalize(direction)?;
    let up = if dir.cross(&world_up()).norm() < 1e-6 {
        Vec3::z()
    } else {
        world_up()
    };
    Some(UnitQuaternion::face_towards(&dir, &up))
}

/// Rotates `orientation` about the world-space `axis` by `degrees`
///
/// The rotation is pre-multiplied so it happens in world space rather than
/// around the object's local axes. A zero axis leaves the orientation alone.
pub fn rotate_about_world_axis(orientation: &Quat, axis: &Vec3, degrees: f64) -> Quat {
    if !degrees.is_finite() {
        return *orientation;
    }
    match try_normalize(axis) {
        Some(axis) => {
            let step = UnitQuaternion::from_axis_angle(&Unit::new_unchecked(axis), degrees.to_radians());
            step * orientation
        }
        None => *orientation,
    }
}
