//! SRTM-style unit-degree raster cell indexing.
//!
//! Elevation rasters are cut into 1°×1° cells named after their
//! southwest corner (`N44W072.hgt`). Third-party datasets resolve the
//! same coordinate to the same name, so the mapping here has to agree
//! with that convention bit for bit.
//!
//! # References
//!
//! 1. [30-Meter SRTM Tile Downloader](https://dwtkns.com/srtm30m)
//! 1. [SRTM Collection User Guide](https://lpdaac.usgs.gov/documents/179/SRTM_User_Guide_V3.pdf)

mod error;

pub use crate::error::HgtError;
use geo::geometry::Coord;

/// Packed unit-degree cell index.
///
/// Rows are whole degrees of latitude starting at 90°S, columns whole
/// degrees of longitude starting at 180°W, packed row-major over 360
/// columns.
pub type CellIndex = u16;

/// One past the largest valid [`CellIndex`].
pub const NUM_CELLS: CellIndex = 180 * 360;

const FILE_EXTENSION: &str = "hgt";

/// Returns the packed cell index for `coord`.
///
/// Two coordinates in the same unit-degree cell map to the same
/// index.
///
/// # Errors
///
/// `HgtError::OutOfDomain` for latitudes outside `[-90, 90)` or
/// longitudes outside `[-180, 180)`. Out-of-range input is never
/// clamped.
pub fn cell_index(coord: Coord<f64>) -> Result<CellIndex, HgtError> {
    let Coord { x: lon, y: lat } = coord;
    if !(-90.0..90.0).contains(&lat) || !(-180.0..180.0).contains(&lon) {
        return Err(HgtError::OutOfDomain(lat, lon));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (row, col) = ((lat.floor() + 90.0) as u16, (lon.floor() + 180.0) as u16);
    Ok(row * 360 + col)
}

/// Returns the southwest corner of the cell at `index`, in whole
/// degrees.
pub fn sw_corner(index: CellIndex) -> Coord<i32> {
    debug_assert!(index < NUM_CELLS);
    Coord {
        x: i32::from(index % 360) - 180,
        y: i32::from(index / 360) - 90,
    }
}

/// Returns the canonical file name for the cell at `index`.
pub fn file_name(index: CellIndex) -> String {
    let Coord { x, y } = sw_corner(index);
    let (n_s, lat) = {
        let lat = y.abs();
        let n_s = if y.is_negative() { 'S' } else { 'N' };
        (n_s, lat)
    };
    let (e_w, lon) = {
        let lon = x.abs();
        let e_w = if x.is_negative() { 'W' } else { 'E' };
        (e_w, lon)
    };
    format!("{n_s}{lat:02}{e_w}{lon:03}.{FILE_EXTENSION}")
}

/// Returns the canonical file name for the cell containing `coord`.
///
/// # Errors
///
/// `HgtError::OutOfDomain` as for [`cell_index`].
pub fn coord_file_name(coord: Coord<f64>) -> Result<String, HgtError> {
    Ok(file_name(cell_index(coord)?))
}
