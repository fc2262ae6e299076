//! Stage Layout CLI - arrange OBJ models on a spiral and report the layout.

use anyhow::{bail, Result};
use clap::Parser;
use log::warn;
use std::path::PathBuf;

use stage_layout::config::{ArrangeConfig, SceneConfig, DEFAULT_CELL_GAP};
use stage_layout::gfx::scene::Scene;
use stage_layout::LayoutError;

#[derive(Parser)]
#[command(name = "stage-layout")]
#[command(author, version, about = "Arrange 3D models without overlap on a square spiral")]
struct Cli {
    /// OBJ files to load, placed in the order given
    #[arg(required = true)]
    models: Vec<PathBuf>,

    /// Keep every model at its loaded size instead of scaling up to the largest
    #[arg(long)]
    keep_scale: bool,

    /// Spacing between spiral cells as a multiple of the unit size
    #[arg(long, default_value_t = DEFAULT_CELL_GAP)]
    gap: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if !(cli.gap.is_finite() && cli.gap > 0.0) {
        bail!("--gap must be a positive number, got {}", cli.gap);
    }

    let arrange = ArrangeConfig::new()
        .with_cell_gap(cli.gap)
        .with_keep_original_scale(cli.keep_scale);
    let mut scene = Scene::new(SceneConfig::default().with_arrange(arrange));

    for path in &cli.models {
        match scene.add_object(path) {
            Ok(_) => {}
            Err(err @ LayoutError::NoGeometry { .. }) => {
                warn!("skipping {}: {}", path.display(), err)
            }
            Err(err) => return Err(err.into()),
        }
    }

    let arrangement = scene.arrange()?.clone();
    for warning in &arrangement.warnings {
        warn!("{}", warning);
    }

    println!("unit size:    {:.4}", arrangement.unit_size);
    println!("overall size: {:.4}", arrangement.overall_size);
    println!("next cell:    ({}, {})", arrangement.cell.x, arrangement.cell.y);
    println!();
    println!(
        "{:<24} {:>8} {:>8} {:>10} {:>10} {:>10}",
        "object", "cell x", "cell y", "center x", "center z", "scale"
    );

    for (object, placement) in scene.objects.iter().zip(&arrangement.placements) {
        println!(
            "{:<24} {:>8} {:>8} {:>10.3} {:>10.3} {:>10.3}",
            object.name,
            placement.cell.x,
            placement.cell.y,
            placement.volume.center.x,
            placement.volume.center.z,
            placement.factor
        );
    }

    Ok(())
}
