mod builder;
mod cache;
mod config;
mod dedup;
mod error;
mod fetch;
mod resample;

pub use crate::{
    builder::{ElevationBuilder, TileSource, TileSummary},
    cache::RasterCache,
    config::ElevationConfig,
    dedup::ShapeDedup,
    error::ReliefError,
    fetch::{default_parallelism, drain, FetchError},
    resample::{resample, Edge, POSTING_INTERVAL},
};
