//! Sphere vs. box proximity test
//!
//! The box corners are carried into world space, re-ordered per axis, and the
//! sphere centre is clamped onto the box to find the nearest point.

use crate::foundation::math::{is_finite_vec3, transform_point, Mat4, Vec3};
use crate::physics::{CollisionError, CollisionResult};

use super::bounding_volume::BoundingVolume;
use super::convention::{CollisionSettings, TransformConvention};

/// True when a sphere touches or intersects a transformed bounding volume
///
/// Touching (`radius == distance`) counts. A centre inside the box is always a
/// hit.
///
/// # Errors
/// `InvalidArgument` for a negative or non-finite radius, a non-finite centre
/// or a non-finite transform.
pub fn sphere_touches(
    radius: f32,
    center: &Vec3,
    volume: &BoundingVolume,
    transform: &Mat4,
    settings: &CollisionSettings,
) -> CollisionResult<bool> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(CollisionError::InvalidArgument(format!(
            "sphere radius must be finite and non-negative, got {radius}"
        )));
    }

    let distance = sphere_box_distance(center, volume, transform, settings)?;
    Ok(radius >= distance)
}

/// Distance from `center` to the nearest point of the transformed box
///
/// Zero when the centre is inside.
///
/// # Errors
/// `InvalidArgument` for a non-finite centre or transform.
pub fn sphere_box_distance(
    center: &Vec3,
    volume: &BoundingVolume,
    transform: &Mat4,
    settings: &CollisionSettings,
) -> CollisionResult<f32> {
    if !is_finite_vec3(center) {
        return Err(CollisionError::InvalidArgument(format!(
            "sphere centre {center:?} is not finite"
        )));
    }
    settings.check_transform(transform, "box")?;

    let (lo, hi) = match settings.convention {
        TransformConvention::RigidTranspose => {
            let a = transform_point(transform, &volume.local_min());
            let b = transform_point(transform, &volume.local_max());
            // a rotation or mirror may have flipped an axis
            (a.inf(&b), a.sup(&b))
        }
        TransformConvention::GeneralInverse => volume.world_bounds(transform),
    };

    let closest = center.sup(&lo).inf(&hi);
    Ok((center - closest).norm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Transform};
    use std::f32::consts::{FRAC_PI_4, PI};

    fn unit_cube() -> BoundingVolume {
        BoundingVolume::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)).unwrap()
    }

    fn touches(radius: f32, center: Vec3, transform: &Mat4) -> bool {
        sphere_touches(radius, &center, &unit_cube(), transform, &CollisionSettings::default()).unwrap()
    }

    #[test]
    fn test_unit_cube_scenario() {
        let identity = Mat4::identity();
        assert!(!touches(0.5, Vec3::new(0.0, 0.0, 2.0), &identity));
        assert!(touches(0.5, Vec3::new(0.0, 0.0, 1.25), &identity));
    }

    #[test]
    fn test_surface_contact_is_inclusive() {
        let identity = Mat4::identity();
        assert!(touches(0.5, Vec3::new(0.0, 0.0, 1.5), &identity));
        assert!(!touches(0.5, Vec3::new(0.0, 0.0, 1.51), &identity));
    }

    #[test]
    fn test_centre_inside_box() {
        assert!(touches(0.0, Vec3::new(0.2, -0.3, 0.9), &Mat4::identity()));
    }

    #[test]
    fn test_corner_distance() {
        let distance = sphere_box_distance(
            &Vec3::new(2.0, 2.0, 1.0),
            &unit_cube(),
            &Mat4::identity(),
            &CollisionSettings::default(),
        )
        .unwrap();
        assert!((distance - 2.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_flipped_axes_are_reordered() {
        // half turn about Y swaps which stored corner is smaller on X and Z
        let half_turn = Transform::identity()
            .with_rotation(Quat::from_axis_angle(&Vec3::y_axis(), PI))
            .to_matrix();
        assert!(touches(0.5, Vec3::new(0.0, 0.0, 1.25), &half_turn));
        assert!(touches(0.5, Vec3::new(-1.25, 0.0, 0.0), &half_turn));
        assert!(!touches(0.5, Vec3::new(0.0, 0.0, -2.0), &half_turn));
    }

    #[test]
    fn test_translated_and_scaled_box() {
        let placed = Transform::from_position(Vec3::new(10.0, 0.0, 0.0))
            .with_uniform_scale(2.0)
            .to_matrix();
        // box spans x in [8, 12]
        assert!(!touches(7.9, Vec3::zeros(), &placed));
        assert!(touches(8.0, Vec3::zeros(), &placed));
    }

    #[test]
    fn test_general_inverse_encloses_rotated_box() {
        let diagonal = Transform::from_rotation_translation_scale(
            Quat::from_axis_angle(&Vec3::y_axis(), FRAC_PI_4),
            Vec3::zeros(),
            Vec3::new(1.0, 1.0, 1.0),
        )
        .to_matrix();
        let center = Vec3::new(0.0, 0.0, 1.6);

        // two corners only: the box collapses to z == 0
        let rigid = CollisionSettings::default();
        assert!(!sphere_touches(0.25, &center, &unit_cube(), &diagonal, &rigid).unwrap());

        // eight corners: z spans ±√2
        let exact = rigid.with_convention(TransformConvention::GeneralInverse);
        assert!(sphere_touches(0.25, &center, &unit_cube(), &diagonal, &exact).unwrap());
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let settings = CollisionSettings::default();
        let cube = unit_cube();
        let identity = Mat4::identity();

        assert!(sphere_touches(-0.1, &Vec3::zeros(), &cube, &identity, &settings).is_err());
        assert!(sphere_touches(f32::INFINITY, &Vec3::zeros(), &cube, &identity, &settings).is_err());
        assert!(sphere_touches(1.0, &Vec3::new(f32::NAN, 0.0, 0.0), &cube, &identity, &settings).is_err());

        let mut broken = Mat4::identity();
        broken[(1, 3)] = f32::NEG_INFINITY;
        assert!(matches!(
            sphere_touches(1.0, &Vec3::zeros(), &cube, &broken, &settings),
            Err(CollisionError::InvalidArgument(_))
        ));
    }
}
