use crate::ports::ProgressStore;

/// Application context holding dependencies for command execution.
///
/// Constructed explicitly and passed to commands, so multiple onboarding
/// sessions (for example in tests) can coexist.
pub struct AppContext<S: ProgressStore> {
    store: S,
}

impl<S: ProgressStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the progress store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
