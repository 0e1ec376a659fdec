//! Offline jewelry try-on driver: composites jewelry onto a photo using a
//! recorded landmark fixture, then exports the snapshot.

use anyhow::{bail, Context, Result};
use clap::Parser;
use jewelry_tryon::anchors::JewelryKind;
use jewelry_tryon::app::TryOnApp;
use jewelry_tryon::assets::Tier;
use jewelry_tryon::config::Config;
use jewelry_tryon::tracking::{ScriptedFaceTracker, ScriptedHandTracker, TrackedScene};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input photo to composite onto
    #[arg(short, long)]
    photo: PathBuf,

    /// Landmark fixture (YAML) with the tracker output for the photo
    #[arg(short, long)]
    landmarks: PathBuf,

    /// Jewelry category (earrings, necklaces, bracelet, ring)
    #[arg(short = 'j', long)]
    category: String,

    /// Tier for face-worn categories (gold, diamond)
    #[arg(short, long)]
    tier: Option<String>,

    /// Variant index within the category (1-based)
    #[arg(short, long, default_value = "1")]
    index: u32,

    /// Number of frames to feed through the smoother before exporting
    #[arg(short, long, default_value = "24")]
    frames: usize,

    /// Directory the snapshot is exported into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Jewelry Try-On - offline driver");

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let Some(kind) = JewelryKind::from_name(&args.category) else {
        bail!("Unknown jewelry category: {}", args.category);
    };
    let tier = match &args.tier {
        Some(name) => match Tier::from_name(name) {
            Some(tier) => Some(tier),
            None => bail!("Unknown tier: {name}"),
        },
        None => None,
    };

    let photo = image::open(&args.photo)
        .with_context(|| format!("Failed to open photo {}", args.photo.display()))?
        .to_rgba8();
    let scene = TrackedScene::from_file(&args.landmarks)
        .with_context(|| format!("Failed to load landmark fixture {}", args.landmarks.display()))?;

    let frames = args.frames.max(1);
    let mut app = TryOnApp::new(
        config,
        Box::new(ScriptedFaceTracker::repeating(scene.face, frames)),
        Box::new(ScriptedHandTracker::repeating(scene.hands, frames)),
    )?;

    let variants = app.select_category(kind, tier);
    info!("Category {kind}: {} selectable variants", variants.len());

    app.select_jewelry(kind, tier, args.index);
    if app.session().active(kind).is_none() {
        warn!("No asset active for {kind}; the snapshot will carry no overlay");
    }

    // Feed the same scene repeatedly so the smoothed state settles
    for _ in 0..frames {
        app.process_frame(&photo)?;
    }

    let path = app.export_snapshot(&photo, &args.output)?;
    info!("Saved {}", path.display());

    Ok(())
}
