//! Matrix and vector behaviour checked against glam.
//!
//! glam is column-major, so every comparison goes through `to_glam`, which
//! transposes our row-major storage.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use prism_math::{Error, HomogeneousVector, Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

fn assert_mat_close(ours: &Mat4, reference: glam::Mat4, eps: f32) {
    let expected = Mat4::from_glam(reference);
    for i in 0..16 {
        assert_abs_diff_eq!(ours.m[i], expected.m[i], epsilon = eps);
    }
}

fn assert_vec_close(a: Vec3, b: Vec3, eps: f32) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
    assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
    assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
}

#[rustfmt::skip]
fn sample_transforms() -> Vec<Mat4> {
    vec![
        Mat4::IDENTITY,
        Mat4::translation(Vec3::new(1.0, -2.0, 3.5)),
        Mat4::scaling(Vec3::new(2.0, 0.5, 4.0)),
        Mat4::rotation_x(0.3) * Mat4::rotation_y(-1.1) * Mat4::rotation_z(2.0),
        Mat4::translation(Vec3::new(10.0, 0.0, -4.0))
            * Mat4::rotation_y(FRAC_PI_3)
            * Mat4::scaling(Vec3::splat(3.0)),
        Mat4::look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO, Vec3::Y),
        Mat4::new(
            2.0, 0.0, 1.0, 3.0, //
            1.0, 3.0, 0.0, 2.0, //
            0.0, 1.0, 4.0, 1.0, //
            1.0, 0.0, 2.0, 5.0,
        ),
    ]
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn identity_transforms_point_unchanged() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(Mat4::IDENTITY.mul_point(p), p);
    assert_eq!(Mat4::default().mul_point(p), p);
}

#[test]
fn rotations_match_glam() {
    for angle in [0.0, 0.25, FRAC_PI_2, -2.5] {
        let x = glam::Mat4::from_rotation_x(angle);
        let y = glam::Mat4::from_rotation_y(angle);
        let z = glam::Mat4::from_rotation_z(angle);
        assert_mat_close(&Mat4::rotation_x(angle), x, 1e-6);
        assert_mat_close(&Mat4::rotation_y(angle), y, 1e-6);
        assert_mat_close(&Mat4::rotation_z(angle), z, 1e-6);
    }
}

#[test]
fn translation_and_scaling_match_glam() {
    let t = Vec3::new(1.0, 2.0, 3.0);
    assert_mat_close(
        &Mat4::translation(t),
        glam::Mat4::from_translation(t.to_glam()),
        0.0,
    );
    assert_mat_close(&Mat4::scaling(t), glam::Mat4::from_scale(t.to_glam()), 0.0);
}

#[test]
fn look_at_matches_glam_rh() {
    let cases = [
        (Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
        (Vec3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
        (Vec3::new(-2.0, 1.0, 0.5), Vec3::new(1.0, 1.0, -1.0), Vec3::Z),
    ];
    for (eye, target, up) in cases {
        let reference = glam::Mat4::look_at_rh(eye.to_glam(), target.to_glam(), up.to_glam());
        assert_mat_close(&Mat4::look_at(eye, target, up), reference, 1e-5);
    }
}

#[test]
fn look_at_from_positive_z() {
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    assert_eq!(view.row(2).xyz(), Vec3::Z);
    assert_eq!(view.mul_point(Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0));
    assert_eq!(view.mul_point(Vec3::new(0.0, 0.0, 5.0)), Vec3::ZERO);
}

#[test]
fn perspective_is_stored_as_glam_column_major() {
    let (fov, aspect, near, far) = (FRAC_PI_4, 800.0 / 600.0, 0.1, 100.0);
    let ours = Mat4::perspective(fov, aspect, near, far);
    let reference = glam::Mat4::perspective_rh_gl(fov, aspect, near, far).to_cols_array();
    for i in 0..16 {
        assert_relative_eq!(ours.m[i], reference[i], epsilon = 1e-6, max_relative = 1e-5);
    }
}

#[test]
fn perspective_right_angle_fov() {
    let p = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
    assert_abs_diff_eq!(p.m[0], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p.m[5], 1.0, epsilon = 1e-6);
    assert_eq!(p.m[11], -1.0);
    assert_eq!(p.m[15], 0.0);
}

// ============================================================================
// Products and inversion
// ============================================================================

#[test]
fn products_match_glam() {
    let mats = sample_transforms();
    for a in &mats {
        for b in &mats {
            let reference = a.to_glam() * b.to_glam();
            assert_mat_close(&(*a * *b), reference, 1e-3);
        }
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    for m in sample_transforms() {
        let inv = m.invert().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-5), "{m}");
        assert!((inv * m).abs_diff_eq(&Mat4::IDENTITY, 1e-5), "{m}");
    }
}

#[test]
fn inverse_matches_glam() {
    for m in sample_transforms() {
        let reference = m.to_glam().inverse();
        assert_mat_close(&m.invert().unwrap(), reference, 1e-4);
    }
}

#[test]
fn determinant_matches_glam() {
    for m in sample_transforms() {
        assert_relative_eq!(
            m.determinant(),
            m.to_glam().determinant(),
            epsilon = 1e-4,
            max_relative = 1e-5
        );
    }
}

#[test]
fn singular_matrix_is_reported() {
    let flat = Mat4::scaling(Vec3::new(1.0, 0.0, 1.0));
    match flat.invert() {
        Err(Error::SingularMatrix { determinant }) => assert_eq!(determinant, 0.0),
        other => panic!("expected singular matrix error, got {other:?}"),
    }
    assert!(Mat4::ZERO.invert().unwrap_err().is_singular());
}

#[test]
fn rigid_inverse_undoes_transform() {
    let m = Mat4::translation(Vec3::new(5.0, -1.0, 2.0)) * Mat4::rotation_z(0.7);
    let p = Vec3::new(0.3, 0.6, -0.9);
    let back = m.invert().unwrap().mul_point(m.mul_point(p));
    assert_vec_close(back, p, 1e-5);
}

// ============================================================================
// Point vs direction
// ============================================================================

#[test]
fn directions_ignore_translation() {
    let m = Mat4::translation(Vec3::new(100.0, 100.0, 100.0)) * Mat4::rotation_y(FRAC_PI_2);
    let d = m.mul_vec(Vec3::X);
    assert_vec_close(d, Vec3::new(0.0, 0.0, -1.0), 1e-6);
    let g = m.to_glam().transform_vector3(Vec3::X.to_glam());
    assert_vec_close(d, g.into(), 1e-6);
}

#[test]
fn projective_points_are_divided() {
    let proj = Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 10.0).transpose();
    assert!(proj.is_projective());
    assert!(!Mat4::translation(Vec3::ONE).is_projective());

    let p = Vec3::new(2.0, 1.0, -4.0);
    let ndc = proj.mul_point(p);
    let clip = proj * HomogeneousVector::point(p);
    assert_vec_close(ndc, clip.to_cartesian().unwrap(), 1e-6);
    assert_vec_close(ndc, proj.to_glam().project_point3(p.to_glam()).into(), 1e-5);
}

#[test]
fn clip_planes_map_to_ndc_bounds() {
    let (near, far) = (0.5, 50.0);
    let proj = Mat4::perspective(1.0, 1.5, near, far).transpose();
    let near_z = proj.mul_point(Vec3::new(0.0, 0.0, -near)).z;
    let far_z = proj.mul_point(Vec3::new(0.0, 0.0, -far)).z;
    assert_abs_diff_eq!(near_z, -1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(far_z, 1.0, epsilon = 1e-5);
}

// ============================================================================
// Vectors
// ============================================================================

#[test]
fn normalize_gives_unit_length() {
    for v in [
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(-1e-3, 2e-3, 5e-4),
        Vec3::new(1e4, -2e4, 3e4),
    ] {
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn cross_is_anti_commutative() {
    let a = Vec3::new(1.0, -2.0, 0.5);
    let b = Vec3::new(0.25, 4.0, -3.0);
    assert_eq!(a.cross(b), -b.cross(a));
    assert_vec_close(a.cross(b), a.to_glam().cross(b.to_glam()).into(), 1e-6);
    assert_abs_diff_eq!(a.cross(b).dot(a), 0.0, epsilon = 1e-5);
}

#[test]
fn perspective_divide() {
    let mut h = HomogeneousVector::new(2.0, 4.0, 6.0, 2.0);
    h.perspective_divide().unwrap();
    assert_eq!(h.to_array(), [1.0, 2.0, 3.0, 1.0]);

    let mut inf = HomogeneousVector::new(1.0, 1.0, 1.0, 0.0);
    assert_eq!(
        inf.perspective_divide(),
        Err(Error::DegeneratePerspectiveDivide)
    );
}
