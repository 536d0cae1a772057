//! Garden configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable config file:
//!
//! ```ron
//! (
//!     floor: ["assets/floor/grass.png", "assets/floor/stone.png"],
//!     plants: [(model: "assets/plants/fern.glb", thumbnail: "assets/plants/fern.png")],
//!     furniture: [(model: "assets/furniture/bench.glb", thumbnail: "assets/furniture/bench.png")],
//!     snapshot_dir: None,
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::garden::{Catalog, CatalogEntry};

/// Default config location, relative to the working directory
pub const CONFIG_PATH: &str = "assets/garden.ron";

/// Validation limits
pub mod limits {
    /// Maximum entries per catalog (the menu bar has to fit them)
    pub const MAX_CATALOG_ENTRIES: usize = 64;
    /// Maximum length for an asset path
    pub const MAX_PATH_LEN: usize = 256;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything read from `garden.ron`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenConfig {
    /// Floor texture paths; entry 0 is the default tile
    pub floor: Vec<String>,
    pub plants: Vec<CatalogEntry>,
    pub furniture: Vec<CatalogEntry>,
    /// Where snapshots go; None = the user's pictures directory
    #[serde(default)]
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for GardenConfig {
    /// Built-in catalog used when no config file is available
    fn default() -> Self {
        let item = |dir: &str, name: &str| {
            CatalogEntry::new(
                &format!("assets/{}/{}.glb", dir, name),
                &format!("assets/{}/{}.png", dir, name),
            )
        };
        Self {
            floor: ["grass", "stone", "wood", "gravel", "tiles"]
                .iter()
                .map(|name| format!("assets/floor/{}.png", name))
                .collect(),
            plants: ["fern", "bush", "flowers", "tree", "cactus"]
                .iter()
                .map(|name| item("plants", name))
                .collect(),
            furniture: ["bench", "table", "chair", "lamp"]
                .iter()
                .map(|name| item("furniture", name))
                .collect(),
            snapshot_dir: None,
        }
    }
}

impl GardenConfig {
    pub fn catalog(&self) -> Catalog {
        Catalog {
            floor: self.floor.clone(),
            plants: self.plants.clone(),
            furniture: self.furniture.clone(),
        }
    }
}

fn validate_path(path: &str, context: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err(format!("{}: empty asset path", context));
    }
    if path.len() > limits::MAX_PATH_LEN {
        return Err(format!("{}: asset path too long ({} > {})",
            context, path.len(), limits::MAX_PATH_LEN));
    }
    Ok(())
}

fn validate_entries(entries: &[CatalogEntry], context: &str) -> Result<(), String> {
    if entries.len() > limits::MAX_CATALOG_ENTRIES {
        return Err(format!("{}: too many entries ({} > {})",
            context, entries.len(), limits::MAX_CATALOG_ENTRIES));
    }
    for (i, entry) in entries.iter().enumerate() {
        validate_path(&entry.model, &format!("{}[{}].model", context, i))?;
        validate_path(&entry.thumbnail, &format!("{}[{}].thumbnail", context, i))?;
    }
    Ok(())
}

/// Check a config before it is handed to the grid
pub fn validate_config(config: &GardenConfig) -> Result<(), String> {
    if config.floor.is_empty() {
        return Err("floor: at least one floor texture is required".to_string());
    }
    if config.floor.len() > limits::MAX_CATALOG_ENTRIES {
        return Err(format!("floor: too many entries ({} > {})",
            config.floor.len(), limits::MAX_CATALOG_ENTRIES));
    }
    for (i, path) in config.floor.iter().enumerate() {
        validate_path(path, &format!("floor[{}]", i))?;
    }
    validate_entries(&config.plants, "plants")?;
    validate_entries(&config.furniture, "furniture")?;
    Ok(())
}

/// Parse and validate config text
pub fn parse_config(text: &str) -> Result<GardenConfig, ConfigError> {
    let config: GardenConfig = ron::from_str(text)?;
    validate_config(&config).map_err(ConfigError::ValidationError)?;
    Ok(config)
}

/// Serialize a config to pretty RON
pub fn serialize_config(config: &GardenConfig) -> Result<String, ConfigError> {
    let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
    Ok(ron::ser::to_string_pretty(config, pretty)?)
}

pub fn save_config<P: AsRef<Path>>(config: &GardenConfig, path: P) -> Result<(), ConfigError> {
    fs::write(path, serialize_config(config)?)?;
    Ok(())
}

/// Parse config text, falling back to the built-in catalog on any error
pub fn config_or_default(text: Option<&str>) -> GardenConfig {
    let Some(text) = text else {
        println!("No {} found, using built-in catalog", CONFIG_PATH);
        return GardenConfig::default();
    };
    match parse_config(text) {
        Ok(config) => {
            println!(
                "Loaded catalog: {} floors, {} plants, {} furniture",
                config.floor.len(),
                config.plants.len(),
                config.furniture.len()
            );
            config
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, using built-in catalog", CONFIG_PATH, e);
            GardenConfig::default()
        }
    }
}

/// Read the config at `path`; when there is none yet, write the built-in one there
pub fn load_or_seed<P: AsRef<Path>>(path: P) -> GardenConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => config_or_default(Some(&text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = GardenConfig::default();
            match save_config(&config, path) {
                Ok(()) => println!("Wrote built-in catalog to {}", path.display()),
                Err(e) => eprintln!("Could not write {}: {}", path.display(), e),
            }
            config
        }
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            config_or_default(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GardenConfig::default()).is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.ron");
        let mut config = GardenConfig::default();
        config.snapshot_dir = Some(PathBuf::from("/tmp/shots"));

        save_config(&config, &path).unwrap();
        let loaded = parse_config(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(load_or_seed(&path), config);
    }

    #[test]
    fn test_parse_minimal() {
        let config = parse_config(r#"(floor: ["a.png"], plants: [], furniture: [])"#).unwrap();
        assert_eq!(config.catalog().floor, vec!["a.png".to_string()]);
        assert_eq!(config.snapshot_dir, None);
    }

    #[test]
    fn test_rejects_empty_floor_catalog() {
        let err = parse_config("(floor: [], plants: [], furniture: [])").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_blank_thumbnail() {
        let text = r#"(floor: ["a.png"], plants: [(model: "fern.glb", thumbnail: " ")], furniture: [])"#;
        match parse_config(text) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("plants[0].thumbnail"), "{}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(parse_config("(floor: "), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.ron");
        assert_eq!(load_or_seed(&path), GardenConfig::default());
        assert!(path.exists());
        let seeded = parse_config(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(seeded, GardenConfig::default());
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(config_or_default(None), GardenConfig::default());
        assert_eq!(config_or_default(Some("not ron")), GardenConfig::default());
    }
}
