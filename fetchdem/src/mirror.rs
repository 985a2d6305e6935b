//! Local-mirror fetch collaborator.
//!
//! Copies rasters from a pre-populated directory into the cache,
//! standing in for the HTTP transport behind the same injected-fetch
//! seam.

use relief::FetchError;
use std::path::PathBuf;

pub struct MirrorFetcher {
    src: PathBuf,
    dst: PathBuf,
}

impl MirrorFetcher {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    /// Copies `name` from the mirror into the cache directory.
    pub fn fetch(&self, name: &str) -> Result<(), FetchError> {
        let from = self.src.join(name);
        if !from.is_file() {
            return Err(FetchError::NotFound(name.to_string()));
        }
        std::fs::copy(&from, self.dst.join(name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MirrorFetcher;
    use relief::FetchError;

    fn scratch_dir(test: &str) -> std::path::PathBuf {
        let dir =
            std::env::temp_dir().join(format!("fetchdem-mirror-{}-{test}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_copies_present_rasters() {
        let src = scratch_dir("src");
        let dst = scratch_dir("dst");
        std::fs::write(src.join("N44W072.hgt"), b"N44W072.hgt").unwrap();

        let fetcher = MirrorFetcher::new(src.clone(), dst.clone());
        fetcher.fetch("N44W072.hgt").unwrap();
        assert!(dst.join("N44W072.hgt").is_file());

        assert!(matches!(
            fetcher.fetch("S01E000.hgt"),
            Err(FetchError::NotFound(_))
        ));

        let _ = std::fs::remove_dir_all(src);
        let _ = std::fs::remove_dir_all(dst);
    }
}
