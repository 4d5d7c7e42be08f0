use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens `path` for appending. Later calls are ignored once a file is open.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(logger) = guard.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_noop() {
        log("nobody is listening");
    }

    #[test]
    fn test_logger_writes_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.log");
        init(&path);
        log("Test log message");

        // Another test may have opened the global logger first.
        if let Ok(content) = std::fs::read_to_string(&path) {
            assert!(content.contains("] Test log message"));
            assert!(content.starts_with('['));
        }
    }
}
