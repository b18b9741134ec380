//! Camera command - view and projection matrices for a config.

use anyhow::{Context, Result};
use prism_math::Mat4;
use prism_math::gpu::MatrixBlock;
use tracing::{info, trace};

use super::format_mat4;
use crate::CameraArgs;
use crate::config::CameraConfig;

pub fn run(args: CameraArgs, verbose: u8) -> Result<()> {
    trace!(config = ?args.config, upload = args.upload, "camera::run");

    let config = CameraConfig::load_or_default(args.config.as_deref())
        .context("Failed to load camera config")?;
    info!(
        fov_deg = config.camera.fov_y.to_degrees(),
        aspect = config.camera.aspect,
        "Building camera matrices"
    );

    if args.yaml {
        let yaml = serde_yaml::to_string(&config.camera)
            .context("Failed to serialize camera")?;
        print!("{}", yaml);
    }

    print!("{}", describe(&config, args.upload || verbose > 1));
    Ok(())
}

/// View, projection and combined matrices, optionally followed by the
/// constant-buffer floats.
pub fn describe(config: &CameraConfig, upload: bool) -> String {
    let camera = &config.camera;
    let mut out = String::new();
    out.push_str(&format_mat4("view", &camera.view()));
    let proj = camera.projection();
    out.push_str(&format_mat4("projection (transposed)", &proj));
    out.push_str(&format_mat4("clip_from_world", &camera.clip_from_world()));

    if upload {
        let block = MatrixBlock::new(Mat4::IDENTITY, camera);
        let floats: &[f32] = bytemuck::cast_slice(block.as_bytes());
        out.push_str(&format!("upload ({} bytes):\n", block.as_bytes().len()));
        for chunk in floats.chunks(4) {
            let row: Vec<String> = chunk.iter().map(|f| format!("{:.6}", f)).collect();
            out.push_str(&format!("  {}\n", row.join(" ")));
        }
    }
    out
}
