mod key_values;
mod reader;
mod status;

pub use key_values::{KeyValues, parse_key_values};
pub use reader::{
    ManifestReader, classify, display_name, fallback_name, manifest_path, read_key_values,
};
pub use status::{DownloadStatus, classify_fields};
