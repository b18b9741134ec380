//! Invert command - 4x4 matrix inverse.

use anyhow::{Context, Result};
use prism_math::Mat4;
use tracing::{debug, info, trace};

use super::format_mat4;
use crate::InvertArgs;

pub fn run(args: InvertArgs, verbose: u8) -> Result<()> {
    trace!(values = ?args.values, "invert::run");

    let m = matrix_from_values(&args.values)?;
    if verbose > 0 {
        print!("{}", format_mat4("input", &m));
    }

    let det = m.determinant();
    info!(determinant = det, "Inverting matrix");

    let inv = m.invert().context("Matrix has no inverse")?;
    print!("{}", format_mat4("inverse", &inv));

    if args.check {
        let product = m * inv;
        let residual = max_residual(&product);
        debug!(residual, "M * M^-1 residual");
        print!("{}", format_mat4("M * M^-1", &product));
        println!("max |M * M^-1 - I| = {:e}", residual);
    }
    Ok(())
}

fn matrix_from_values(values: &[f32]) -> Result<Mat4> {
    let m: [f32; 16] = values
        .try_into()
        .with_context(|| format!("Expected 16 values, got {}", values.len()))?;
    Ok(Mat4::from_array(m))
}

/// Largest absolute deviation from the identity.
fn max_residual(m: &Mat4) -> f32 {
    m.m.iter()
        .zip(Mat4::IDENTITY.m.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f32::max)
}
