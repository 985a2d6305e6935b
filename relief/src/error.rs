use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReliefError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("tile {0} has no directed edges")]
    NoEdges(String),

    #[error("malformed tile {0}: {1}")]
    Tile(String, String),

    #[error("{0}")]
    Cell(#[from] hgtile::HgtError),
}
