use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glassio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overlay one pair of glasses onto a face photo.
    Overlay(OverlayArgs),
    /// Render one overlay per catalog candidate for a face shape.
    Batch(BatchArgs),
    /// Print the candidate glasses for a face shape.
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct Common {
    /// Input face photo.
    #[arg(long)]
    image: PathBuf,

    /// Landmark JSON (array of normalized [x, y] pairs). Eye positions are approximated when
    /// omitted.
    #[arg(long)]
    landmarks: Option<PathBuf>,

    /// Config JSON (fit constants, assets root, catalog).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    #[command(flatten)]
    common: Common,

    /// Glasses PNG with an alpha channel.
    #[arg(long, conflicts_with_all = ["face_shape", "style"])]
    glasses: Option<PathBuf>,

    /// Face-shape label used to pick glasses from the catalog.
    #[arg(long, requires = "style")]
    face_shape: Option<String>,

    /// 1-based style index within the face shape's catalog entry.
    #[arg(long, requires = "face_shape")]
    style: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    #[command(flatten)]
    common: Common,

    /// Face-shape label (case-insensitive; unknown labels use the default list).
    #[arg(long)]
    face_shape: String,

    /// Directory for `overlay_<n>.png` outputs.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Face-shape label.
    #[arg(long)]
    face_shape: String,

    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Overlay(args) => cmd_overlay(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Catalog(args) => cmd_catalog(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<glassio::OverlayConfig> {
    match path {
        Some(p) => Ok(glassio::OverlayConfig::from_path(p)?),
        None => Ok(glassio::OverlayConfig::default()),
    }
}

fn resolve_eyes(
    landmarks: Option<&Path>,
    width: u32,
    height: u32,
) -> anyhow::Result<glassio::EyePair> {
    let Some(path) = landmarks else {
        return Ok(glassio::EyePair::approximate(width, height));
    };
    let set = glassio::LandmarkSet::from_path(path)?;
    let named = glassio::EyeLandmarks::from_landmarks(&set, width, height)
        .with_context(|| format!("landmarks '{}'", path.display()))?;
    Ok(named.eyes())
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.common.config.as_deref())?;
    let mut face = glassio::load_target(&args.common.image)?;
    let eyes = resolve_eyes(args.common.landmarks.as_deref(), face.width(), face.height())?;

    let glasses = match (args.glasses, args.face_shape, args.style) {
        (Some(path), _, _) => path,
        (None, Some(label), Some(style)) => {
            let catalog = cfg.catalog()?;
            catalog
                .style_path(glassio::FaceShape::from_label(&label), style)?
                .to_path_buf()
        }
        _ => anyhow::bail!("pass either --glasses or --face-shape with --style"),
    };

    let report = glassio::overlay_path_in_place(&mut face, eyes, &glasses, &cfg.fit)?;
    if !report.placed {
        eprintln!("eyes too close to place glasses; writing input unchanged");
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &face,
        face.width(),
        face.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.common.config.as_deref())?;
    let catalog = cfg.catalog()?;
    let face = glassio::load_target(&args.common.image)?;
    let eyes = resolve_eyes(args.common.landmarks.as_deref(), face.width(), face.height())?;

    let report =
        glassio::render_for_face_shape(&face, eyes, &args.face_shape, &catalog, &cfg.fit);

    for (path, reason) in report.skipped() {
        eprintln!("skipped {}: {reason}", path.display());
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0usize;
    for (n, png) in report.encoded().enumerate() {
        let out = args.out_dir.join(format!("overlay_{}.png", n + 1));
        std::fs::write(&out, png).with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
        written += 1;
    }

    if report.is_empty() {
        eprintln!("no candidates for face shape '{}'", args.face_shape);
    } else if written == 0 {
        eprintln!("all {} candidates were skipped", report.outcomes.len());
    }
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let catalog = cfg.catalog()?;
    let shape = glassio::FaceShape::from_label(&args.face_shape);
    println!("{shape}");
    for path in catalog.candidates(shape) {
        println!("  {}", path.display());
    }
    Ok(())
}
