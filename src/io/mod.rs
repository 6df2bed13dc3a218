//! File helpers around the codec

mod fs;
mod json;
mod text;
mod tsv;
mod version;

pub use fs::{CONFIG_DIR_ENV, config_dir, ensure_dir_exists};
pub use json::{load_json, load_json_with, save_json, save_json_with};
pub use text::{dedent, read_text, write_text};
pub use tsv::{CLUSTER_ID_COLUMN, ClusterTable, read_tsv, write_tsv};
pub use version::{crate_git_version, git_version};
