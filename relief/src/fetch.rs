//! Concurrent raster fetch pool.

use log::warn;
use std::{
    num::NonZeroUsize,
    sync::{Mutex, PoisonError},
    thread,
};
use thiserror::Error;

/// Failure fetching a single raster. Recovered per item; one bad
/// raster never fails the batch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("no source for {0}")]
    NotFound(String),

    #[error("{0}")]
    Transport(String),
}

/// Returns the default worker count: available hardware concurrency,
/// at least 1.
pub fn default_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Drains `backlog`, invoking `fetch` exactly once per entry across up
/// to `parallelism` workers.
///
/// The backlog lock covers pops only; `fetch` runs outside it, so one
/// slow fetch stalls one worker rather than serializing the pool. A
/// failed fetch is logged and dropped, never retried. Callers detect
/// incomplete results by re-querying [`crate::RasterCache::missing`].
/// Returns once every worker has observed an empty backlog and
/// exited.
pub fn drain<F>(backlog: Vec<String>, fetch: F, parallelism: usize)
where
    F: Fn(&str) -> Result<(), FetchError> + Sync,
{
    if backlog.is_empty() {
        return;
    }
    let workers = parallelism.clamp(1, backlog.len());
    let backlog = Mutex::new(backlog);
    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let name = {
                    let mut backlog = backlog.lock().unwrap_or_else(PoisonError::into_inner);
                    match backlog.pop() {
                        Some(name) => name,
                        None => return,
                    }
                };
                if let Err(e) = fetch(&name) {
                    warn!("failed to fetch {name}: {e}");
                }
            });
        }
    });
}
