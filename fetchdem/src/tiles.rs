//! JSON graph-tile descriptions.
//!
//! Stands in for the real binary tile store behind the [`TileSource`]
//! seam: one `.json` file per tile listing its directed edges. A
//! `<tile>.elevation` sidecar marks the tile elevation-enabled.

use geo::geometry::Coord;
use relief::{Edge, ReliefError, TileSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct JsonEdge {
    info_offset: u32,
    /// `[lon, lat]` pairs.
    shape: Vec<[f64; 2]>,
    length_m: f64,
    #[serde(default)]
    tunnel: bool,
    #[serde(default)]
    ferry: bool,
    #[serde(default)]
    bridge: bool,
}

#[derive(Debug, Deserialize)]
struct JsonTile {
    edges: Vec<JsonEdge>,
}

impl From<JsonEdge> for Edge {
    fn from(edge: JsonEdge) -> Self {
        Edge {
            info_offset: edge.info_offset,
            shape: edge
                .shape
                .into_iter()
                .map(|[x, y]| Coord { x, y })
                .collect(),
            length_m: edge.length_m,
            tunnel: edge.tunnel,
            ferry: edge.ferry,
            bridge: edge.bridge,
        }
    }
}

pub struct JsonTiles {
    dir: PathBuf,
}

impl JsonTiles {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the tile names (file stems) found in the tile
    /// directory, sorted for a stable batch order.
    pub fn tile_names(&self) -> Result<Vec<String>, ReliefError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort_unstable();
        Ok(names)
    }

    fn tile_path(&self, tile: &str) -> PathBuf {
        [&self.dir, Path::new(&format!("{tile}.json"))].iter().collect()
    }
}

impl TileSource for JsonTiles {
    fn edges(&self, tile: &str) -> Result<Vec<Edge>, ReliefError> {
        let raw = std::fs::read_to_string(self.tile_path(tile))?;
        let parsed: JsonTile = serde_json::from_str(&raw)
            .map_err(|e| ReliefError::Tile(tile.to_string(), e.to_string()))?;
        Ok(parsed.edges.into_iter().map(Edge::from).collect())
    }

    fn set_has_elevation(&self, tile: &str) -> Result<(), ReliefError> {
        let marker = [&self.dir, Path::new(&format!("{tile}.elevation"))]
            .iter()
            .collect::<PathBuf>();
        std::fs::write(marker, b"")?;
        Ok(())
    }
}
