//! Per-tile elevation resolution driver.

use crate::{
    cache::RasterCache,
    dedup::ShapeDedup,
    fetch::{self, FetchError},
    resample::{self, Edge},
    ReliefError,
};
use log::{debug, info};
use std::collections::HashSet;

/// Tile-storage collaborator.
///
/// The binary tile layout and its mutation live behind this seam;
/// this crate only enumerates edges and flips the elevation flag.
pub trait TileSource {
    /// Enumerates the directed edges of `tile`.
    fn edges(&self, tile: &str) -> Result<Vec<Edge>, ReliefError>;

    /// Marks `tile` as elevation-enabled.
    fn set_has_elevation(&self, tile: &str) -> Result<(), ReliefError>;
}

/// Outcome of one tile pass.
///
/// A non-empty `missing` means some rasters could not be fetched. The
/// tile is still elevation-enabled; routing degrades to flat
/// elevation where data is absent.
#[derive(Debug, Clone)]
pub struct TileSummary {
    pub tile: String,

    /// Every raster file the tile's sampled shapes depend on.
    pub required: HashSet<String>,

    /// Required rasters still absent after the fetch round, sorted.
    pub missing: Vec<String>,
}

impl TileSummary {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Drives one tile through enumeration, sampling, fetch, and the
/// final elevation-enabled mark.
///
/// The fetch collaborator is injected: anything that can place the
/// named raster into the cache directory and report the result works,
/// an HTTP client as well as a local mirror.
pub struct ElevationBuilder<'a, F> {
    cache: &'a RasterCache,
    fetch: F,
    interval: f64,
    parallelism: usize,
}

impl<'a, F> ElevationBuilder<'a, F>
where
    F: Fn(&str) -> Result<(), FetchError> + Sync,
{
    pub fn new(cache: &'a RasterCache, fetch: F) -> Self {
        Self {
            cache,
            fetch,
            interval: resample::POSTING_INTERVAL,
            parallelism: fetch::default_parallelism(),
        }
    }

    /// Overrides the posting interval (meters).
    pub fn interval(mut self, meters: f64) -> Self {
        self.interval = meters;
        self
    }

    /// Overrides the fetch worker count.
    pub fn parallelism(mut self, workers: usize) -> Self {
        self.parallelism = workers;
        self
    }

    /// Resolves and fetches every raster `tile`'s edges depend on,
    /// then marks the tile elevation-enabled.
    ///
    /// Shapes shared between directed edges are sampled once. Only a
    /// tile that cannot be read at all fails; rasters that fail to
    /// fetch are reported in the summary.
    pub fn load_tile_elevations<S>(&self, store: &S, tile: &str) -> Result<TileSummary, ReliefError>
    where
        S: TileSource,
    {
        let edges = store.edges(tile)?;
        if edges.is_empty() {
            return Err(ReliefError::NoEdges(tile.to_string()));
        }

        let mut dedup = ShapeDedup::new();
        let mut required = HashSet::new();
        for edge in &edges {
            if !dedup.should_process(edge.info_offset) {
                continue;
            }
            for coord in resample::resample(edge, self.interval) {
                required.insert(hgtile::coord_file_name(coord)?);
            }
        }
        debug!(
            "{tile}: {} directed edges depend on {} rasters",
            edges.len(),
            required.len()
        );

        let backlog = self.cache.missing(&required);
        let (cache, fetch) = (self.cache, &self.fetch);
        fetch::drain(
            backlog,
            |name| fetch(name).map(|()| cache.mark_present(name)),
            self.parallelism,
        );

        store.set_has_elevation(tile)?;

        let mut missing = self.cache.missing(&required);
        missing.sort_unstable();
        info!(
            "{tile}: elevation enabled, {} of {} rasters present",
            required.len() - missing.len(),
            required.len()
        );
        Ok(TileSummary {
            tile: tile.to_string(),
            required,
            missing,
        })
    }
}
