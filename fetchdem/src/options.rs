use clap::Parser;
use std::path::PathBuf;

/// Fetch the SRTM rasters referenced by routing graph tiles.
///
/// Walks every tile description in the tile directory, resolves the
/// rasters its edges depend on, and copies any missing ones from the
/// mirror into the local elevation cache. Tiles with unresolvable
/// rasters are reported as partial, not failed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the elevation-fetch settings; --tile-dir and
    /// --elevation-dir override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of graph-tile descriptions (.json).
    #[arg(short, long)]
    pub tile_dir: Option<PathBuf>,

    /// Local raster cache directory.
    #[arg(short, long)]
    pub elevation_dir: Option<PathBuf>,

    /// Local mirror directory to copy rasters from, standing in for a
    /// remote elevation host.
    #[arg(short, long)]
    pub mirror: PathBuf,

    /// Fetch worker count; defaults to available hardware
    /// concurrency.
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Posting interval in meters.
    #[arg(short, long, default_value_t = relief::POSTING_INTERVAL)]
    pub interval: f64,
}
