//! Values consumed from the host application's configuration.
//!
//! Loading and validating the configuration is the host's concern;
//! this is only the shape of the elevation-fetch section.

use serde::Deserialize;
use std::path::PathBuf;

/// Elevation-fetch settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ElevationConfig {
    /// Download URL template. `{DataPath}` is replaced with the
    /// raster file name, `%version` and `%token` with the fields
    /// below.
    pub elevation_url: String,

    /// Request gzip-compressed transfer. Carried for the transport;
    /// not interpreted here.
    #[serde(default)]
    pub elevation_url_gz: bool,

    /// Local raster cache directory.
    pub elevation_dir: PathBuf,

    /// Directory holding graph tiles.
    pub tile_dir: PathBuf,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub access_token: String,
}

impl ElevationConfig {
    /// Renders the download URL for one raster file.
    pub fn render_url(&self, name: &str) -> String {
        self.elevation_url
            .replace("{DataPath}", name)
            .replace("%version", &self.version)
            .replace("%token", &self.access_token)
    }
}
