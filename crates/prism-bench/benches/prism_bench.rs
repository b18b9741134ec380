//! Benchmarks for prism transform kernel operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use prism_core::Colour;
use prism_math::{Camera, Mat4, Quat, ShadingFrame, Spherical, Vec3, Viewport};

fn sample_points(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            Vec3::new(t * 4.0 - 2.0, (t * 17.0).sin(), -(t * 10.0))
        })
        .collect()
}

/// Benchmark matrix products and inversion against glam.
fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");

    let a = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::rotation_y(0.7);
    let b = Mat4::look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
    let (ga, gb) = (a.to_glam(), b.to_glam());

    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("mul_glam", |bench| {
        bench.iter(|| black_box(ga) * black_box(gb))
    });

    group.bench_function("invert", |bench| bench.iter(|| black_box(b).invert()));
    group.bench_function("invert_glam", |bench| {
        bench.iter(|| black_box(gb).inverse())
    });

    group.bench_function("look_at", |bench| {
        bench.iter(|| {
            Mat4::look_at(
                black_box(Vec3::new(3.0, 4.0, 5.0)),
                black_box(Vec3::ZERO),
                Vec3::Y,
            )
        })
    });

    group.finish();
}

/// Benchmark point transforms over batches.
fn bench_transform_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_points");

    let affine = Mat4::translation(Vec3::new(0.0, 1.0, 0.0)) * Mat4::rotation_z(0.3);
    let camera = Camera::default();
    let clip = camera.clip_from_world();
    let viewport = Viewport::default();

    for size in [1000, 10000, 100000].iter() {
        let points = sample_points(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("affine", size), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(|&p| affine.mul_point(black_box(p)))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("projective", size), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(|&p| clip.mul_point(black_box(p)))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("camera_project", size), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .filter_map(|&p| camera.project(black_box(p), &viewport).ok())
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark quaternion interpolation.
fn bench_quat(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat");

    let a = Quat::from_axis_angle(Vec3::Y, 0.2);
    let b = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 2.0);
    let near = Quat::from_axis_angle(Vec3::Y, 0.2001);

    group.bench_function("slerp", |bench| {
        bench.iter(|| black_box(a).slerp(black_box(b), black_box(0.37)))
    });
    group.bench_function("slerp_near_parallel", |bench| {
        bench.iter(|| black_box(a).slerp(black_box(near), black_box(0.37)))
    });
    group.bench_function("slerp_glam", |bench| {
        let (ga, gb) = (a.to_glam(), b.to_glam());
        bench.iter(|| black_box(ga).slerp(black_box(gb), black_box(0.37)))
    });
    group.bench_function("to_mat4", |bench| bench.iter(|| black_box(b).to_mat4()));

    group.finish();
}

/// Benchmark frame construction and spherical conversion.
fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames");

    let normals = sample_points(10000);
    group.throughput(Throughput::Elements(10000));

    group.bench_function("shading_frame", |b| {
        b.iter(|| {
            normals
                .iter()
                .map(|&n| ShadingFrame::from_normal(black_box(n)).to_world(Vec3::Z))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("spherical_round_trip", |b| {
        b.iter(|| {
            normals
                .iter()
                .map(|&n| Spherical::from_vec3(black_box(n)).to_cartesian())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("colour_lerp", |b| {
        b.iter(|| {
            (0..10000)
                .map(|i| Colour::RED.lerp(Colour::BLUE, black_box(i as f32 / 10000.0)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mat4,
    bench_transform_points,
    bench_quat,
    bench_frames,
);

criterion_main!(benches);
