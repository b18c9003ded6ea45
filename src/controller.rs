use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Data-load state of a page controller.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// The load ended without data, e.g. because it panicked.
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading | LoadState::Failed => None,
        }
    }
}

struct Shared<T> {
    generation: AtomicU64,
    state: watch::Sender<LoadState<T>>,
}

/// Owns the load lifecycle of one mounted page.
///
/// Loads are handed a [`Resolver`] bound to the generation current at the time
/// they start. Unmounting (explicitly or by dropping the controller) advances
/// the generation, so results arriving afterwards are discarded instead of
/// being applied to a page that no longer exists.
pub struct Controller<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Controller<T> {
    /// Mount a controller in the `Loading` state.
    pub fn mount() -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        Self {
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Hand out a resolver for a load started now.
    pub fn resolver(&self) -> Resolver<T> {
        Resolver {
            shared: Arc::clone(&self.shared),
            generation: self.generation(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Tear the controller down; outstanding resolvers become stale.
    pub fn unmount(&self) {
        self.shared.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub fn state(&self) -> watch::Ref<'_, LoadState<T>> {
        self.shared.state.borrow()
    }

    /// Wait until a load has been applied.
    pub async fn loaded(&self) -> watch::Ref<'_, LoadState<T>> {
        let mut rx = self.shared.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|state| !state.is_loading()).await;
        self.state()
    }
}

impl<T> Drop for Controller<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Applies the result of a single load to its controller.
pub struct Resolver<T> {
    shared: Arc<Shared<T>>,
    generation: u64,
}

impl<T> Resolver<T> {
    /// Whether the controller that issued this resolver is still mounted.
    pub fn is_current(&self) -> bool {
        self.shared.generation.load(Ordering::Acquire) == self.generation
    }

    /// Apply `data`, unless the controller has been torn down since the load
    /// began. Returns whether the data was applied.
    pub fn resolve(self, data: T) -> bool {
        self.apply(LoadState::Ready(data))
    }

    /// Mark the load as failed. Same staleness rule as [`Resolver::resolve`].
    pub fn fail(self) -> bool {
        self.apply(LoadState::Failed)
    }

    fn apply(self, state: LoadState<T>) -> bool {
        if !self.is_current() {
            debug!(
                generation = self.generation,
                "discarding load result for unmounted controller"
            );
            return false;
        }
        self.shared.state.send_replace(state);
        true
    }
}
