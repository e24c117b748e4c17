//! File and directory names

/// Config file looked up in the current directory
pub const CONFIG_FILE: &str = "doorknock.toml";

/// Prefix of the per-client run directory (`output_<slug>`)
pub const OUTPUT_DIR_PREFIX: &str = "output_";

/// Landing page file name inside a run directory
pub const SITE_FILE: &str = "index.html";

/// Task artifact name for a 1-based index
pub fn task_file_name(index: usize) -> String {
    format!("task_{}.json", index)
}
