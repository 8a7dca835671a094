pub mod error;
pub mod progress;
pub mod script;
pub mod step;

pub use error::AppError;
pub use progress::{Progress, ProgressSnapshot};
pub use script::ScriptComposer;
pub use step::{Step, TOTAL_STEPS};
