use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Progress, Step};
use crate::ports::ProgressStore;

/// On-disk progress format, mirroring the original wizard's persisted shape:
/// a list of completed step numbers, plus the current step so a new process
/// can resume where the last one left off.
#[derive(Debug, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default = "first_step")]
    current: u8,
    #[serde(default)]
    done: Vec<u8>,
}

fn first_step() -> u8 {
    Step::FIRST.number()
}

/// JSON-file-backed progress store.
#[derive(Debug, Clone)]
pub struct FilesystemProgressStore {
    path: PathBuf,
}

impl FilesystemProgressStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default location.
    ///
    /// Honors `PN_ONBOARD_CONFIG_DIR`, falling back to
    /// `$HOME/.config/pn-onboard`.
    pub fn default_location() -> Result<Self, AppError> {
        let dir = match std::env::var("PN_ONBOARD_CONFIG_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = std::env::var("HOME")
                    .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
                PathBuf::from(home).join(".config").join("pn-onboard")
            }
        };
        Ok(Self::new(dir.join("progress.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ProgressStore for FilesystemProgressStore {
    fn load(&self) -> Result<Progress, AppError> {
        if !self.path.exists() {
            return Ok(Progress::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Progress::default());
        }

        let file: ProgressFile = serde_json::from_str(&content)
            .map_err(|e| AppError::ProgressParse(e.to_string()))?;
        Ok(Progress::from_parts(file.current, &file.done))
    }

    fn save(&self, progress: &Progress) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = ProgressFile {
            current: progress.current().number(),
            done: progress.completed_numbers(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| AppError::config_error(format!("Could not serialize progress: {e}")))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> FilesystemProgressStore {
        FilesystemProgressStore::new(dir.join("progress.json"))
    }

    #[test]
    fn missing_file_loads_default_state() {
        let temp = tempdir().unwrap();
        let progress = store_in(temp.path()).load().unwrap();

        assert!(progress.is_current(1));
        assert_eq!(progress.progress_count(), 0);
    }

    #[test]
    fn empty_file_loads_default_state() {
        let temp = tempdir().unwrap();
        let store = store_in(temp.path());
        fs::write(store.path(), "").unwrap();

        let progress = store.load().unwrap();
        assert_eq!(progress.progress_count(), 0);
    }

    #[test]
    fn saved_state_round_trips() {
        let temp = tempdir().unwrap();
        let store = store_in(temp.path());

        let mut progress = Progress::default();
        progress.go_to(3);
        progress.mark_done(1);
        progress.mark_done(2);
        store.save(&progress).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.is_current(3));
        assert_eq!(loaded.completed_numbers(), vec![1, 2]);
    }

    #[test]
    fn done_list_alone_is_accepted() {
        // Older persisted files carried only the done list.
        let temp = tempdir().unwrap();
        let store = store_in(temp.path());
        fs::write(store.path(), r#"{"done": [2, 4]}"#).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.is_current(1));
        assert_eq!(loaded.completed_numbers(), vec![2, 4]);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let store = store_in(temp.path());
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(AppError::ProgressParse(_))));
    }
}
