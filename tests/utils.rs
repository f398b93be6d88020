use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Returns a unique, not-yet-existing path inside `temp`, named after `test`.
pub fn test_file_path(temp: &TempDir, test: &str) -> String {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    temp.path()
        .join(format!("{test}_{id}"))
        .to_str()
        .expect("temp dir path is valid Unicode")
        .to_string()
}
