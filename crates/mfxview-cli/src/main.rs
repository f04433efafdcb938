//! mfxview CLI: generate, inspect and build meshes.

use clap::{Parser, Subcommand};
use mfxview_io::ViewerConfig;

mod commands;

#[derive(Parser)]
#[command(name = "mfxview")]
#[command(version, about = "mfxview: mesh attribute inspector and flat-shaded triangulator")]
struct Cli {
    /// Viewer config (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cook the box generator and print its summary.
    Box {
        /// Box width (overrides config).
        #[arg(long)]
        width: Option<f32>,

        /// Box height (overrides config).
        #[arg(long)]
        height: Option<f32>,

        /// Box depth (overrides config).
        #[arg(long)]
        depth: Option<f32>,

        /// Add a per-face normal attribute.
        #[arg(long)]
        normals: bool,

        /// Write the mesh as a JSON document.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the attribute tables of a mesh.
    Inspect {
        /// Path to mesh document (.json) or Wavefront file (.obj).
        path: String,

        /// Only print this attachment (point, corner, face, mesh).
        #[arg(short, long)]
        attachment: Option<String>,

        /// Rows per table (overrides config).
        #[arg(long)]
        max_rows: Option<usize>,

        /// Print tables as JSON snapshots.
        #[arg(long)]
        json: bool,
    },

    /// Build render geometry from a mesh.
    Build {
        /// Path to mesh document (.json) or Wavefront file (.obj).
        path: String,

        /// Output frame file (JSON).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a mesh or config file.
    Validate {
        /// Path to mesh (.json, .obj) or config (.toml) file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match ViewerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => ViewerConfig::default(),
    };

    // `RUST_LOG` wins over the config file.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    let result = match cli.command {
        Commands::Box {
            width,
            height,
            depth,
            normals,
            output,
        } => {
            let mut params = config.box_params;
            params.width = width.unwrap_or(params.width);
            params.height = height.unwrap_or(params.height);
            params.depth = depth.unwrap_or(params.depth);
            commands::cook_box(&config, params, normals, output.as_deref())
        }
        Commands::Inspect {
            path,
            attachment,
            max_rows,
            json,
        } => commands::inspect(
            &path,
            attachment.as_deref(),
            max_rows.unwrap_or(config.max_rows),
            json,
        ),
        Commands::Build { path, output } => commands::build(&config, &path, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
