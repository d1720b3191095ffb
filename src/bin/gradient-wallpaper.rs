use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gradient_wallpaper::{GRADIENT_GROUPS, Orientation, Rgb8, WallpaperConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gradient-wallpaper", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wallpaper as a PNG.
    Render(RenderArgs),
    /// List the available gradient groups.
    Groups,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Config JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Run the gradient top to bottom instead of left to right.
    #[arg(long)]
    vertical: bool,

    /// Gradient group used when no explicit colors are given.
    #[arg(long)]
    group: Option<String>,

    /// Seed for the gradient group; omitted means a new gradient every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated stops, e.g. `#112233,#445566`.
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Comma-separated segment weights summing to 1.0, e.g. `0.3,0.7`.
    #[arg(long, value_delimiter = ',')]
    slip: Option<Vec<f64>>,

    /// Font file path, file name or family; `builtin` selects the bitmap font.
    #[arg(long)]
    font: Option<String>,

    /// Font size in pixels.
    #[arg(long)]
    font_size: Option<f32>,

    /// Extra directory searched for `--font` (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Fill canvas rows on a rayon pool.
    #[arg(long)]
    parallel: bool,
}

const DEFAULT_WIDTH: u32 = 1920;
const DEFAULT_HEIGHT: u32 = 1080;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Groups => {
            for name in GRADIENT_GROUPS {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn build_config(args: &RenderArgs) -> anyhow::Result<WallpaperConfig> {
    let mut cfg = match &args.config {
        Some(path) => WallpaperConfig::from_json_file(path)?,
        None => WallpaperConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
    };

    if let Some(width) = args.width {
        cfg.width = width;
    }
    if let Some(height) = args.height {
        cfg.height = height;
    }
    if args.vertical {
        cfg.orientation = Orientation::Vertical;
    }
    if let Some(group) = &args.group {
        cfg.group = group.clone();
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(colors) = &args.colors {
        let stops = colors
            .iter()
            .map(|c| c.parse::<Rgb8>())
            .collect::<Result<Vec<_>, _>>()
            .context("parse --colors")?;
        cfg.colors = Some(stops);
    }
    if let Some(slip) = &args.slip {
        cfg.slip = Some(slip.clone());
    }
    if let Some(font) = &args.font {
        cfg.font = font.clone();
    }
    if let Some(size) = args.font_size {
        cfg.font_size = size;
    }
    cfg.font_dirs.extend(args.font_dirs.iter().cloned());
    if args.parallel {
        cfg.threading.parallel = true;
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args)?;
    let canvas = cfg.render()?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
