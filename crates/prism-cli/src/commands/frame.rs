//! Frame command - shading frame from a normal.

use anyhow::{Result, bail};
use prism_math::{ShadingFrame, Vec3};
use tracing::{info, trace};

use super::{format_mat4, format_vec3, parse_vec3};
use crate::FrameArgs;

pub fn run(args: FrameArgs, verbose: u8) -> Result<()> {
    trace!(normal = %args.normal, "frame::run");

    let normal = parse_vec3(&args.normal)?;
    let frame = build(normal)?;
    info!(normal = ?frame.w.to_array(), "Built shading frame");

    println!("u {}", format_vec3(frame.u));
    println!("v {}", format_vec3(frame.v));
    println!("w {}", format_vec3(frame.w));

    if let Some(local) = args.local.as_deref() {
        let local = parse_vec3(local)?;
        let world = frame.to_world(local);
        println!("world {}", format_vec3(world));
        if verbose > 0 {
            println!("# back to local {}", format_vec3(frame.to_local(world)));
        }
    }

    if let Some(position) = args.position.as_deref() {
        let position = parse_vec3(position)?;
        let world = frame.to_mat4(position);
        print!("{}", format_mat4("local_to_world", &world));
    }
    Ok(())
}

/// Frame around `normal`, rejecting degenerate input.
pub fn build(normal: Vec3) -> Result<ShadingFrame> {
    if !normal.is_finite() || normal.length_squared() == 0.0 {
        bail!(
            "Normal must be finite and non-zero, got {:?}",
            normal.to_array()
        );
    }
    Ok(ShadingFrame::from_normal(normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_zero() {
        assert!(build(Vec3::ZERO).is_err());
        assert!(build(Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn test_build_normalizes() {
        let f = build(Vec3::new(0.0, 3.0, 0.0)).unwrap();
        assert_eq!(f.w, Vec3::Y);
        assert!(f.u.dot(f.v).abs() < 1e-6);
    }

    #[test]
    fn test_run() {
        let args = FrameArgs {
            normal: "0,1,1".into(),
            position: Some("1,2,3".into()),
            local: Some("0,0,1".into()),
        };
        run(args, 1).unwrap();
    }
}
