//! Project command - world points to screen coordinates.

use anyhow::{Context, Result};
use prism_math::{Camera, HomogeneousVector, Vec3, Viewport};
use tracing::{debug, info, trace, warn};

use super::{format_vec3, read_points};
use crate::ProjectArgs;
use crate::config::CameraConfig;

pub fn run(args: ProjectArgs, verbose: u8) -> Result<()> {
    trace!(points = %args.points.display(), ndc = args.ndc, "project::run");

    let config = CameraConfig::load_or_default(args.config.as_deref())
        .context("Failed to load camera config")?;
    let points = read_points(&args.points)?;
    info!(count = points.len(), "Projecting points");

    if verbose > 0 {
        println!(
            "# camera at {} looking at {}, {}x{}",
            format_vec3(config.camera.position),
            format_vec3(config.camera.target),
            config.viewport.width,
            config.viewport.height
        );
    }

    for line in project_points(&config.camera, &config.viewport, &points, args.ndc) {
        println!("{}", line);
    }
    Ok(())
}

/// One output line per point. Points in the camera plane have no projection
/// and are reported as a comment line.
pub fn project_points(
    camera: &Camera,
    viewport: &Viewport,
    points: &[Vec3],
    ndc: bool,
) -> Vec<String> {
    let clip_from_world = camera.clip_from_world();

    points
        .iter()
        .map(|&p| {
            let projected = if ndc {
                (clip_from_world * HomogeneousVector::point(p)).to_cartesian()
            } else {
                camera.project(p, viewport)
            };
            match projected {
                Ok(s) => {
                    debug!(point = ?p.to_array(), screen = ?s.to_array(), "projected");
                    format_vec3(s)
                }
                Err(e) => {
                    warn!(point = ?p.to_array(), "{}", e);
                    format!("# {}: {}", format_vec3(p), e)
                }
            }
        })
        .collect()
}
