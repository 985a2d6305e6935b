mod mirror;
mod options;
mod tiles;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use mirror::MirrorFetcher;
use options::Cli;
use relief::{ElevationBuilder, ElevationConfig, RasterCache};
use tiles::JsonTiles;

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config: Option<ElevationConfig> = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Some(
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?,
            )
        }
        None => None,
    };

    let tile_dir = cli
        .tile_dir
        .clone()
        .or_else(|| config.as_ref().map(|config| config.tile_dir.clone()))
        .ok_or_else(|| anyhow!("no tile directory; pass --tile-dir or --config"))?;
    let elevation_dir = cli
        .elevation_dir
        .clone()
        .or_else(|| config.as_ref().map(|config| config.elevation_dir.clone()))
        .ok_or_else(|| anyhow!("no elevation directory; pass --elevation-dir or --config"))?;

    let cache = RasterCache::new(elevation_dir)?;
    let fetcher = MirrorFetcher::new(cli.mirror.clone(), cache.dir().to_path_buf());
    let fetch = |name: &str| {
        if let Some(config) = &config {
            debug!("{name} resolves to {}", config.render_url(name));
        }
        fetcher.fetch(name)
    };

    let mut builder = ElevationBuilder::new(&cache, fetch).interval(cli.interval);
    if let Some(jobs) = cli.jobs {
        builder = builder.parallelism(jobs);
    }

    // One bad tile or raster never stops the batch.
    let store = JsonTiles::new(tile_dir);
    let (mut complete, mut partial, mut failed) = (0_u32, 0_u32, 0_u32);
    for tile in store.tile_names()? {
        match builder.load_tile_elevations(&store, &tile) {
            Ok(summary) if summary.is_complete() => {
                info!("{tile}: {} rasters present", summary.required.len());
                complete += 1;
            }
            Ok(summary) => {
                warn!(
                    "{tile}: enabled with {} of {} rasters, missing {}",
                    summary.required.len() - summary.missing.len(),
                    summary.required.len(),
                    summary.missing.join(", ")
                );
                partial += 1;
            }
            Err(e) => {
                error!("{tile}: {e}");
                failed += 1;
            }
        }
    }

    if complete + partial + failed == 0 {
        warn!("no tile descriptions found");
    }
    println!("{complete} complete, {partial} partial, {failed} failed");
    Ok(())
}
