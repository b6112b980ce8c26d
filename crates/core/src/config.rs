//! Default locations of the dictionary and phrase directories.

use std::path::{Path, PathBuf};

pub const SYSTEM_DICT_DIR: &str = "/usr/local/share/pfp/dicts";
pub const SYSTEM_PHRASE_DIR: &str = "/usr/local/share/pfp/phrases";
pub const LOCAL_DICT_DIR: &str = "./dicts";
pub const LOCAL_PHRASE_DIR: &str = "./phrases";

/// `env_var` if set, else `system` if it exists, else `local`.
fn resolve_dir(env_var: &str, system: &str, local: &str) -> PathBuf {
    if let Ok(dir) = std::env::var(env_var) {
        return PathBuf::from(dir);
    }
    pick_existing(Path::new(system), Path::new(local))
}

/// `preferred` if it is a directory, otherwise `fallback`.
pub fn pick_existing(preferred: &Path, fallback: &Path) -> PathBuf {
    if preferred.is_dir() {
        preferred.to_path_buf()
    } else {
        log::debug!(
            "{} is not a directory, using {}",
            preferred.display(),
            fallback.display()
        );
        fallback.to_path_buf()
    }
}

/// Dictionary directory.
///
/// Uses `PUNFINDER_DICT_DIR` if set, otherwise the system share directory,
/// falling back to `./dicts`.
pub fn dict_dir() -> PathBuf {
    resolve_dir("PUNFINDER_DICT_DIR", SYSTEM_DICT_DIR, LOCAL_DICT_DIR)
}

/// Phrase directory.
///
/// Uses `PUNFINDER_PHRASE_DIR` if set, otherwise the system share directory,
/// falling back to `./phrases`.
pub fn phrase_dir() -> PathBuf {
    resolve_dir("PUNFINDER_PHRASE_DIR", SYSTEM_PHRASE_DIR, LOCAL_PHRASE_DIR)
}
