//! Indicator for the most recently copied item.
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::{
    task::JoinHandle,
    time::{sleep, Duration},
};

/// Delay before the indicator shows a copied item.
pub const COPY_INDICATOR_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Default)]
struct IndicatorState {
    generation: u64,
    copied: Option<String>,
}

/// Shows which item was copied last.
///
/// Copying clears the indicator immediately and sets it to the
/// copied key after a short delay so a repeated copy of the same
/// item is observed as a fresh transition. When another copy
/// happens before the delay elapses the earlier timer is stale
/// and never overwrites the newer key.
///
/// Copying spawns a task so it must be called from within
/// a tokio runtime.
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    state: Arc<Mutex<IndicatorState>>,
    delay: Duration,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPY_INDICATOR_DELAY)
    }
}

impl CopyIndicator {
    /// Create an indicator with a delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(Default::default())),
            delay,
        }
    }

    /// Record a copy of the item with the given key.
    pub fn copy(&self, key: impl Into<String>) -> JoinHandle<()> {
        let key = key.into();
        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.copied = None;
            state.generation
        };

        let state = Arc::clone(&self.state);
        let delay = self.delay;
        tokio::task::spawn(async move {
            sleep(delay).await;
            let mut state = state.lock();
            if state.generation == generation {
                tracing::debug!(key = %key, "copy_indicator::set");
                state.copied = Some(key);
            } else {
                tracing::warn!(
                    key = %key,
                    generation,
                    current = state.generation,
                    "copy_indicator::superseded",
                );
            }
        })
    }

    /// Clear the indicator and cancel any pending timer.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.copied = None;
    }

    /// Key of the item that was copied last.
    pub fn copied(&self) -> Option<String> {
        self.state.lock().copied.clone()
    }

    /// Determine if the item with a key is shown as copied.
    pub fn is_copied(&self, key: &str) -> bool {
        self.state.lock().copied.as_deref() == Some(key)
    }
}
