//! CLI command implementations

pub mod camera;
pub mod frame;
pub mod invert;
pub mod project;
pub mod slerp;

use std::path::Path;

use anyhow::{Context, Result, bail};
use prism_math::{Mat4, Quat, Vec3};

/// Parse a comma-separated list of exactly `n` floats, e.g. "0,1,0".
pub fn parse_floats(s: &str, n: usize) -> Result<Vec<f32>> {
    let values = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .with_context(|| format!("Invalid number list: {}", s))?;

    if values.len() != n {
        bail!("Expected {} values, got {} in '{}'", n, values.len(), s);
    }
    Ok(values)
}

/// Parse "x,y,z".
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    let v = parse_floats(s, 3)?;
    Ok(Vec3::new(v[0], v[1], v[2]))
}

/// Parse "x,y,z,w" (vector part first).
pub fn parse_quat(s: &str) -> Result<Quat> {
    let v = parse_floats(s, 4)?;
    Ok(Quat::new(v[0], v[1], v[2], v[3]))
}

/// Read one point per line from a text file.
///
/// Components may be separated by commas or whitespace. Blank lines and
/// lines starting with `#` are skipped.
pub fn read_points(path: &Path) -> Result<Vec<Vec3>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read points: {}", path.display()))?;
    parse_points(&text).with_context(|| format!("In {}", path.display()))
}

/// Parse the point-file format described in [`read_points`].
pub fn parse_points(text: &str) -> Result<Vec<Vec3>> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let joined = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        let p = parse_vec3(&joined).with_context(|| format!("line {}", lineno + 1))?;
        points.push(p);
    }
    Ok(points)
}

/// Format a vector with fixed precision.
pub fn format_vec3(v: Vec3) -> String {
    format!("{:.6} {:.6} {:.6}", v.x, v.y, v.z)
}

/// Format a matrix as four rows with a label line.
pub fn format_mat4(label: &str, m: &Mat4) -> String {
    let mut out = format!("{}:\n", label);
    for row in m.rows() {
        out.push_str(&format!(
            "  {:>12.6} {:>12.6} {:>12.6} {:>12.6}\n",
            row[0], row[1], row[2], row[3]
        ));
    }
    out
}
