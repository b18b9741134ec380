//! prism - command-line front end for the prism transform kernel
//!
//! Projects points through a camera, inverts matrices, interpolates
//! rotations and builds shading frames.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "prism")]
#[command(author, version, about = "Spatial transform and rotation toolkit")]
#[command(long_about = "
Command-line access to the prism transform kernel.

Examples:
  prism project points.txt                       # Project with the default camera
  prism project points.txt -c camera.yaml        # Project with a camera config
  prism camera -c camera.yaml --upload           # Show view/projection matrices
  prism invert 2 0 0 0  0 2 0 0  0 0 2 0  0 0 0 1
  prism slerp --from 0,0,0,1 --to 0,0,0.7071068,0.7071068 -n 4
  prism frame 0,1,1 --position 1,2,3

Set RUST_LOG (e.g. RUST_LOG=prism=trace) to override -v.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Project world-space points to pixel coordinates
    #[command(visible_alias = "p")]
    Project(ProjectArgs),

    /// Print camera view and projection matrices
    #[command(visible_alias = "cam")]
    Camera(CameraArgs),

    /// Invert a 4x4 matrix given as 16 row-major values
    #[command(visible_alias = "inv")]
    Invert(InvertArgs),

    /// Spherically interpolate between two rotations
    Slerp(SlerpArgs),

    /// Build an orthonormal shading frame from a normal
    Frame(FrameArgs),
}

/// Arguments for the `project` command.
#[derive(Args)]
struct ProjectArgs {
    /// Point file: one "x y z" or "x,y,z" per line, '#' comments
    points: PathBuf,

    /// Camera config (YAML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print normalized device coordinates instead of pixels
    #[arg(long)]
    ndc: bool,
}

/// Arguments for the `camera` command.
#[derive(Args)]
struct CameraArgs {
    /// Camera config (YAML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the constant-buffer floats in upload order
    #[arg(long)]
    upload: bool,

    /// Print the resolved camera as YAML
    #[arg(long)]
    yaml: bool,
}

/// Arguments for the `invert` command.
#[derive(Args)]
struct InvertArgs {
    /// 16 matrix elements in row-major order
    #[arg(num_args = 16, required = true, allow_negative_numbers = true)]
    values: Vec<f32>,

    /// Also print M * M^-1 as a check
    #[arg(long)]
    check: bool,
}

/// Arguments for the `slerp` command.
#[derive(Args)]
struct SlerpArgs {
    /// Start rotation "x,y,z,w"
    #[arg(long, allow_hyphen_values = true)]
    from: String,

    /// End rotation "x,y,z,w"
    #[arg(long, allow_hyphen_values = true)]
    to: String,

    /// Number of intervals, at most 2^24; steps + 1 rotations are printed
    #[arg(short = 'n', long, default_value = "4")]
    steps: usize,

    /// Print each rotation as a matrix
    #[arg(short, long)]
    matrix: bool,
}

/// Arguments for the `frame` command.
#[derive(Args)]
struct FrameArgs {
    /// Normal "x,y,z" (normalized internally)
    #[arg(allow_hyphen_values = true)]
    normal: String,

    /// Frame origin "x,y,z" for the local-to-world matrix
    #[arg(short, long, allow_hyphen_values = true)]
    position: Option<String>,

    /// Local direction "x,y,z" to convert to world space
    #[arg(short, long, allow_hyphen_values = true)]
    local: Option<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Project(args) => commands::project::run(args, cli.verbose),
        Commands::Camera(args) => commands::camera::run(args, cli.verbose),
        Commands::Invert(args) => commands::invert::run(args, cli.verbose),
        Commands::Slerp(args) => commands::slerp::run(args, cli.verbose),
        Commands::Frame(args) => commands::frame::run(args, cli.verbose),
    }
}
