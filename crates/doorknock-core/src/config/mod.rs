pub mod consts;
pub mod model;

pub use consts::{task_file_name, CONFIG_FILE, OUTPUT_DIR_PREFIX, SITE_FILE};
pub use model::{Config, OutputConfig, SiteConfig};
