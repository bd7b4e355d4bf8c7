//! Running CPU-bound engine work from async callers.

use std::time::Duration;

use tokio::task::spawn_blocking;
use tokio::time::timeout;

use crate::{Error, Result};

/// Run `f` on tokio's blocking pool, optionally bounded by `limit`.
///
/// On timeout the caller gets `Error::Timeout` right away; the blocking
/// closure keeps running until it returns on its own, so callers pair this
/// with a stop flag the closure checks.
pub async fn run_blocking<F, T>(limit: Option<Duration>, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let task = spawn_blocking(f);
    let joined = match limit {
        Some(duration) => timeout(duration, task)
            .await
            .map_err(|_| Error::Timeout(duration))?,
        None => task.await,
    };
    joined.map_err(|e| Error::TaskJoin(e.to_string()))?
}
