//! Slerp command - rotation interpolation.

use anyhow::{Result, bail};
use prism_math::{Quat, SLERP_DOT_THRESHOLD};
use tracing::{debug, info, trace};

use super::{format_mat4, parse_quat};
use crate::SlerpArgs;

/// Past 2^24 intervals consecutive `t` values collapse in `f32`.
pub const MAX_STEPS: usize = 1 << 24;

pub fn run(args: SlerpArgs, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, steps = args.steps, "slerp::run");

    if args.steps > MAX_STEPS {
        bail!("Step count {} exceeds the limit {}", args.steps, MAX_STEPS);
    }

    let from = parse_quat(&args.from)?;
    let to = parse_quat(&args.to)?;
    if from.length() == 0.0 || to.length() == 0.0 {
        bail!("Rotations must be non-zero quaternions");
    }

    let dot = from.normalized().dot(to.normalized());
    info!(dot, steps = args.steps, "Interpolating rotations");
    if dot.abs() > SLERP_DOT_THRESHOLD {
        debug!("Rotations nearly parallel, falling back to normalized lerp");
    }
    if verbose > 0 && dot < 0.0 {
        println!("# negative dot ({:.6}), taking the shorter arc", dot);
    }

    for (t, q) in interpolate(from, to, args.steps) {
        println!("t={:.4}  {:.6} {:.6} {:.6} {:.6}", t, q.x, q.y, q.z, q.w);
        if args.matrix {
            print!("{}", format_mat4("matrix", &q.to_mat4()));
        }
    }
    Ok(())
}

/// `steps + 1` evenly spaced `(t, rotation)` pairs from `from` to `to`,
/// produced lazily.
pub fn interpolate(from: Quat, to: Quat, steps: usize) -> impl Iterator<Item = (f32, Quat)> {
    prism_math::interp::samples(0.0_f32, 1.0, steps)
        .map(move |t| (t, from.slerp(to, t)))
}
