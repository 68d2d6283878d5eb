use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::{self, JoinHandle};
use tokio::time::sleep;
use tracing::debug;

use crate::cache::CacheEntry;
use crate::error::FlushIntervalError;

/// Mutable flush configuration owned by a cache instance.
///
/// Invariant: `timer` holds a handle if and only if `interval` is set, and
/// there is never more than one live timer per cache.
#[derive(Default)]
pub(crate) struct FlushState {
    pub(crate) interval: Option<Duration>,
    timer: Option<JoinHandle<()>>,
}

impl FlushState {
    /// Aborts the live flush timer, if any. Safe to call with none outstanding.
    pub(crate) fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            debug!("flush timer cancelled");
        }
    }
}

/// (Re)configures the periodic flush of `map`.
///
/// `requested` is an interval in milliseconds; `None` resets the cache to
/// "no periodic flush" and cancels any running timer. The whole
/// cancel-arm-store sequence runs under the state lock, so concurrent calls
/// cannot leak a timer.
pub(crate) fn configure<K, V>(
    map: &Arc<Mutex<HashMap<K, CacheEntry<V>>>>,
    flush: &Mutex<FlushState>,
    requested: Option<f64>,
) -> Result<(), FlushIntervalError>
where
    K: Send + 'static,
    V: Send + 'static,
{
    let mut state = flush.lock().unwrap();

    let Some(millis) = requested else {
        state.interval = None;
        state.cancel();
        return Ok(());
    };

    if !millis.is_finite() {
        return Err(FlushIntervalError::NotANumber(millis));
    }
    if millis <= 0.0 {
        return Err(FlushIntervalError::NotPositive(millis));
    }

    let interval = Duration::try_from_secs_f64(millis / 1000.0)
        .map_err(|_| FlushIntervalError::TooLarge(millis))?;
    if state.interval == Some(interval) {
        // Same interval as already configured, leave the running timer alone.
        return Ok(());
    }

    state.interval = Some(interval);
    state.cancel();

    // The timer task only captures the entry map, nothing of the scheduler.
    let map = Arc::clone(map);
    state.timer = Some(task::spawn(async move {
        loop {
            sleep(interval).await;
            map.lock().unwrap().clear();
            debug!(interval_ms = millis, "cache flushed");
        }
    }));
    debug!(interval_ms = millis, "flush timer armed");

    Ok(())
}
