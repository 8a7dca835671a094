use crate::domain::{AppError, Progress};

/// Port for loading and persisting wizard progress.
pub trait ProgressStore {
    /// Load the persisted state, or the default state if none exists.
    fn load(&self) -> Result<Progress, AppError>;

    /// Persist the current state.
    fn save(&self, progress: &Progress) -> Result<(), AppError>;
}
