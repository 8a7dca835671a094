mod clipboard_arboard;
mod progress_filesystem;

pub use clipboard_arboard::ArboardClipboard;
pub use progress_filesystem::FilesystemProgressStore;
