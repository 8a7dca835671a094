mod clipboard_writer;
mod progress_store;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use progress_store::ProgressStore;
