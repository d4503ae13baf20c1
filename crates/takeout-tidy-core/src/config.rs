use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_ALBUM_CONTAINER_NAME: &str = "ALBUMS";
pub const DEFAULT_METADATA_FILE_NAME: &str = "metadata.json";
pub const DEFAULT_DESCRIPTOR_FILE_NAME: &str = "album.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder all albums are moved into once they only hold a descriptor.
    pub album_container_name: String,
    /// Folders that are never treated as albums nor moved.
    pub special_folders: Vec<String>,
    pub metadata_file_name: String,
    pub descriptor_file_name: String,
    pub keep_untitled_albums: bool,
    pub relocate_albums: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            album_container_name: DEFAULT_ALBUM_CONTAINER_NAME.to_string(),
            special_folders: vec![
                "Bin".to_string(),
                "Archive".to_string(),
                "Failed Videos".to_string(),
            ],
            metadata_file_name: DEFAULT_METADATA_FILE_NAME.to_string(),
            descriptor_file_name: DEFAULT_DESCRIPTOR_FILE_NAME.to_string(),
            keep_untitled_albums: false,
            relocate_albums: true,
        }
    }
}

impl AppConfig {
    /// The container folder always counts as special, whatever the configured list says.
    pub fn is_special_folder(&self, name: &str) -> bool {
        name == self.album_container_name || self.special_folders.iter().any(|s| s == name)
    }

    /// Cluster keys that are kept out of `photo_files`.
    pub fn is_album_metadata(&self, key: &str) -> bool {
        key == self.metadata_file_name || key == self.descriptor_file_name
    }
}

/// Loads `Config.{toml,yaml,json}` from the working directory if present,
/// then applies `TAKEOUT_*` environment overrides.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("TAKEOUT")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("special_folders"),
        )
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
