//! Box vs. box overlap test
//!
//! Both boxes are compared in box A's local frame: A's stored corners are
//! used untouched and B's corners are carried over by `inverse(T_A) * T_B`.
//! An axis "meets" when an endpoint of either span lies inside the other
//! span; the boxes overlap only when all three axes meet.

use crate::foundation::math::{transform_point, utils::is_between, Mat4, Vec3};
use crate::physics::CollisionResult;

use super::bounding_volume::BoundingVolume;
use super::convention::{CollisionSettings, TransformConvention};

/// Decide whether two transformed bounding volumes overlap
///
/// `transform_a`/`transform_b` are the current world matrices of the objects
/// owning `a` and `b`. Touching faces count as overlap.
///
/// The result is exact for translation + uniform scale + quarter-turn
/// rotations. Non-uniform scale or shear under the default
/// [`TransformConvention::RigidTranspose`] yields a defined but possibly wrong
/// answer.
///
/// # Errors
/// `InvalidArgument` when either matrix has a non-finite entry or `transform_a`
/// cannot be inverted.
pub fn overlaps(
    a: &BoundingVolume,
    transform_a: &Mat4,
    b: &BoundingVolume,
    transform_b: &Mat4,
    settings: &CollisionSettings,
) -> CollisionResult<bool> {
    settings.check_transform(transform_a, "first")?;
    settings.check_transform(transform_b, "second")?;

    let b_to_a = settings.convention.invert(transform_a)? * transform_b;
    let (b_min, b_max) = match settings.convention {
        TransformConvention::RigidTranspose => (
            transform_point(&b_to_a, &b.local_min()),
            transform_point(&b_to_a, &b.local_max()),
        ),
        TransformConvention::GeneralInverse => b.world_bounds(&b_to_a),
    };

    let meeting = meeting_axes(
        (a.local_min(), a.local_max()),
        (b_min, b_max),
        settings.epsilon,
    );
    log::trace!("Overlap test: {meeting} of 3 axes meet");
    Ok(meeting == 3)
}

/// Count the axes on which the two spans touch or overlap
///
/// Span endpoints may come in either order.
pub fn meeting_axes(a: (Vec3, Vec3), b: (Vec3, Vec3), epsilon: f32) -> usize {
    (0..3)
        .filter(|&axis| {
            axis_meets(
                (a.0[axis], a.1[axis]),
                (b.0[axis], b.1[axis]),
                epsilon,
            )
        })
        .count()
}

fn axis_meets(a: (f32, f32), b: (f32, f32), epsilon: f32) -> bool {
    is_between(a.0, b.0, b.1, epsilon)
        || is_between(a.1, b.0, b.1, epsilon)
        || is_between(b.0, a.0, a.1, epsilon)
        || is_between(b.1, a.0, a.1, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{mat4_from_column_major, Quat, Transform};
    use crate::physics::CollisionError;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn cube() -> BoundingVolume {
        BoundingVolume::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)).unwrap()
    }

    fn slab() -> BoundingVolume {
        BoundingVolume::new(Vec3::new(-2.0, -0.5, -1.0), Vec3::new(2.0, 0.5, 1.0)).unwrap()
    }

    fn placed(position: Vec3) -> Mat4 {
        Mat4::new_translation(&position)
    }

    fn check(a: &BoundingVolume, ta: &Mat4, b: &BoundingVolume, tb: &Mat4) -> bool {
        overlaps(a, ta, b, tb, &CollisionSettings::default()).unwrap()
    }

    #[test]
    fn test_identical_transforms_overlap() {
        let shared = Transform::from_rotation_translation_scale(
            Quat::from_euler_angles(0.4, 0.2, -0.9),
            Vec3::new(3.0, 1.0, -7.0),
            Vec3::new(1.5, 1.5, 1.5),
        )
        .to_matrix();
        assert!(check(&cube(), &shared, &slab(), &shared));
    }

    #[test]
    fn test_far_apart_on_each_axis_do_not_overlap() {
        // half extents: cube 1, slab (2, 0.5, 1)
        let a = cube();
        let b = slab();
        for offset in [
            Vec3::new(3.01, 0.0, 0.0),
            Vec3::new(-3.01, 0.0, 0.0),
            Vec3::new(0.0, 1.51, 0.0),
            Vec3::new(0.0, 0.0, -2.01),
        ] {
            assert!(!check(&a, &Mat4::identity(), &b, &placed(offset)), "offset {offset:?}");
        }
    }

    #[test]
    fn test_partial_overlap() {
        assert!(check(&cube(), &Mat4::identity(), &slab(), &placed(Vec3::new(2.5, 0.2, 0.5))));
    }

    #[test]
    fn test_touching_faces_count_as_overlap() {
        assert!(check(&cube(), &Mat4::identity(), &cube(), &placed(Vec3::new(2.0, 0.0, 0.0))));
    }

    #[test]
    fn test_containment_overlaps() {
        let small = BoundingVolume::new(Vec3::new(-0.1, -0.1, -0.1), Vec3::new(0.1, 0.1, 0.1)).unwrap();
        assert!(check(&cube(), &Mat4::identity(), &small, &Mat4::identity()));
        assert!(check(&small, &Mat4::identity(), &cube(), &Mat4::identity()));
    }

    #[test]
    fn test_zero_extent_axis() {
        let plane = BoundingVolume::new(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 0.0, 5.0)).unwrap();
        assert!(check(&plane, &Mat4::identity(), &cube(), &Mat4::identity()));
        assert!(check(&plane, &Mat4::identity(), &cube(), &placed(Vec3::new(0.0, 1.0, 0.0))));
        assert!(!check(&plane, &Mat4::identity(), &cube(), &placed(Vec3::new(0.0, 1.5, 0.0))));
    }

    #[test]
    fn test_symmetry_for_rigid_uniform_transforms() {
        let a = cube();
        let b = slab();
        let rotations = [
            Quat::identity(),
            Quat::from_axis_angle(&Vec3::y_axis(), FRAC_PI_2),
            Quat::from_axis_angle(&Vec3::z_axis(), PI),
        ];
        let offsets = [
            Vec3::zeros(),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(4.5, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 1.0),
            Vec3::new(1.0, 0.5, -1.2),
        ];

        for rotation in rotations {
            for offset in offsets {
                for scale in [1.0, 2.0] {
                    let ta = Transform::from_rotation_translation_scale(
                        Quat::identity(),
                        Vec3::new(0.3, 0.0, 0.0),
                        Vec3::new(scale, scale, scale),
                    )
                    .to_matrix();
                    let tb = Transform::from_rotation_translation_scale(rotation, offset, Vec3::new(1.0, 1.0, 1.0))
                        .to_matrix();

                    assert_eq!(
                        check(&a, &ta, &b, &tb),
                        check(&b, &tb, &a, &ta),
                        "rotation {rotation:?} offset {offset:?} scale {scale}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_quarter_turn_is_respected() {
        // slab is 4 wide on X; a quarter turn about Z stands it up along Y
        let turned = Transform::from_rotation_translation_scale(
            Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2),
            Vec3::new(0.0, 2.6, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        )
        .to_matrix();
        assert!(check(&cube(), &Mat4::identity(), &slab(), &turned));

        let flat = placed(Vec3::new(0.0, 2.6, 0.0));
        assert!(!check(&cube(), &Mat4::identity(), &slab(), &flat));
    }

    #[test]
    fn test_non_uniform_scale_is_a_known_limitation() {
        // A is stretched 10x along X, B sits 5 units away along Z: they are apart.
        let stretched = Mat4::new_nonuniform_scaling(&Vec3::new(10.0, 1.0, 1.0));
        let away = placed(Vec3::new(0.0, 0.0, 5.0));

        let rigid = CollisionSettings::default();
        let exact = CollisionSettings::default().with_convention(TransformConvention::GeneralInverse);

        // The transpose-based inverse shrinks Z by 1/100 and reports a false hit.
        assert!(overlaps(&cube(), &stretched, &cube(), &away, &rigid).unwrap());
        assert!(!overlaps(&cube(), &stretched, &cube(), &away, &exact).unwrap());
    }

    #[test]
    fn test_general_inverse_agrees_on_rigid_cases() {
        let exact = CollisionSettings::default().with_convention(TransformConvention::GeneralInverse);
        let near = placed(Vec3::new(2.5, 0.0, 0.0));
        let far = placed(Vec3::new(3.5, 0.0, 0.0));
        assert!(overlaps(&cube(), &Mat4::identity(), &slab(), &near, &exact).unwrap());
        assert!(!overlaps(&cube(), &Mat4::identity(), &slab(), &far, &exact).unwrap());
    }

    #[test]
    fn test_non_finite_transform_is_rejected() {
        let mut broken = Mat4::identity();
        broken[(0, 0)] = f32::NAN;
        let result = overlaps(&cube(), &broken, &cube(), &Mat4::identity(), &CollisionSettings::default());
        assert!(matches!(result, Err(CollisionError::InvalidArgument(_))));
    }

    #[test]
    fn test_column_major_input() {
        // uniform scale 2, translated to (5, 0, 0), as a renderer uploads it
        let columns = [
            2.0, 0.0, 0.0, 0.0,
            0.0, 2.0, 0.0, 0.0,
            0.0, 0.0, 2.0, 0.0,
            5.0, 0.0, 0.0, 1.0,
        ];
        let scaled = mat4_from_column_major(&columns);
        // world X span [3, 7]
        assert!(check(&cube(), &scaled, &cube(), &placed(Vec3::new(2.0, 0.0, 0.0))));
        assert!(!check(&cube(), &scaled, &cube(), &placed(Vec3::new(1.5, 0.0, 0.0))));
    }

    #[test]
    fn test_meeting_axes_counts_each_axis() {
        let a = (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let b = (Vec3::new(0.5, 2.0, 0.5), Vec3::new(1.5, 3.0, 1.5));
        assert_eq!(meeting_axes(a, b, f32::EPSILON), 2);
    }
}
