//! Log file location and rotation.
//!
//! Logs live in the platform cache directory: XDG on Linux, standard
//! locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "transferboard";
const APPLICATION: &str = "transferboard";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Cache directory, or None if the home directory cannot be determined.
///
/// - Linux: `$XDG_CACHE_HOME/transferboard` or `~/.cache/transferboard`
/// - macOS: `~/Library/Caches/dev.transferboard.transferboard`
/// - Windows: `C:\Users\<User>\AppData\Local\transferboard\transferboard\cache`
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file written by the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archives the previous run's log under a timestamp and prunes old archives.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

fn rotate_in(dir: &Path, timestamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{timestamp}.log")));
    }
    prune_archives(dir, MAX_OLD_LOGS);
}

/// Removes the oldest archived logs beyond `keep`.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; archive names sort chronologically.
    archives.sort_by_key(|e| e.file_name());

    let excess = archives.len().saturating_sub(keep);
    for entry in archives.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("transferboard-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("rotate");
        fs::write(dir.join(LATEST_LOG), "previous run").unwrap();

        rotate_in(&dir, "20261015_120000");

        assert!(!dir.join(LATEST_LOG).exists());
        assert_eq!(
            fs::read_to_string(dir.join("20261015_120000.log")).unwrap(),
            "previous run"
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = scratch_dir("prune");
        for day in 10..15 {
            fs::write(dir.join(format!("202610{day}_000000.log")), "").unwrap();
        }
        fs::write(dir.join(LATEST_LOG), "").unwrap();

        prune_archives(&dir, 2);

        let mut left: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, vec!["20261013_000000.log", "20261014_000000.log", LATEST_LOG]);
        fs::remove_dir_all(&dir).unwrap();
    }
}
