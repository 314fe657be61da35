use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mirrortrace::config::RenderConfig;
use mirrortrace::render;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => {
            info!("no scene file given, using built-in scene");
            RenderConfig::default()
        }
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }

    let settings = config.settings()?;
    let cam = config.camera()?;
    let scene = config.scene()?;

    let img = render::render(&settings, &scene, &cam);

    let is_ppm = args
        .output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));
    let written = if is_ppm {
        img.to_ppm(&args.output)
    } else {
        img.to_png(&args.output).map_err(Into::into)
    };
    written.with_context(|| format!("writing {}", args.output.display()))?;

    info!("wrote {}", args.output.display());
    Ok(())
}
