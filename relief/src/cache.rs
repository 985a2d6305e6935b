//! Local raster file cache.

use crate::ReliefError;
use dashmap::DashMap;
use log::debug;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Records which raster files are present in the local elevation
/// directory.
///
/// Rasters are immutable copies of external data, so entries are only
/// ever added, never evicted. Lookups and insertions are safe from
/// multiple threads; the map lives for the process lifetime while the
/// files persist across runs.
pub struct RasterCache {
    dir: PathBuf,
    present: DashMap<String, ()>,
}

impl RasterCache {
    /// Opens the cache over `dir`, creating the directory if needed
    /// and indexing any rasters already on disk.
    pub fn new(dir: PathBuf) -> Result<Self, ReliefError> {
        std::fs::create_dir_all(&dir)?;
        let present = DashMap::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() {
                if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                    present.insert(name.to_string(), ());
                }
            }
        }
        debug!("raster cache at {dir:?} holds {} files", present.len());
        Ok(Self { dir, present })
    }

    /// Directory the cached rasters live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the subset of `candidates` not present locally.
    pub fn missing(&self, candidates: &HashSet<String>) -> Vec<String> {
        candidates
            .iter()
            .filter(|name| !self.present.contains_key(*name))
            .cloned()
            .collect()
    }

    /// Records a successfully fetched raster. Idempotent.
    pub fn mark_present(&self, name: &str) {
        self.present.insert(name.to_string(), ());
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RasterCache;
    use std::collections::HashSet;

    fn scratch_dir(test: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("relief-cache-{}-{test}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn names(names: &[&str]) -> HashSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_indexes_existing_files() {
        let dir = scratch_dir("scan");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("N44W072.hgt"), b"").unwrap();
        std::fs::write(dir.join("S01E000.hgt"), b"").unwrap();

        let cache = RasterCache::new(dir.clone()).unwrap();
        assert_eq!(cache.len(), 2);
        let missing = cache.missing(&names(&["N44W072.hgt", "S01E000.hgt", "N00E000.hgt"]));
        assert_eq!(missing, vec!["N00E000.hgt".to_string()]);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_mark_present_is_idempotent() {
        let dir = scratch_dir("mark");
        let cache = RasterCache::new(dir.clone()).unwrap();
        assert!(cache.is_empty());

        cache.mark_present("N44W072.hgt");
        cache.mark_present("N44W072.hgt");
        assert_eq!(cache.len(), 1);
        assert!(cache.missing(&names(&["N44W072.hgt"])).is_empty());

        let _ = std::fs::remove_dir_all(dir);
    }
}
