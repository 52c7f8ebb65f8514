// image-ripper/src/core/config.rs
//! Effective run configuration.
//!
//! Built once at startup from the stock density buckets plus the command
//! line file list, then optionally overridden by a JSON document:
//!
//! ```json
//! {
//!   "default_size": "mdpi",
//!   "output": "app/src/main/res/drawable-{size}",
//!   "files": ["icons/launcher.png"],
//!   "sizes": { "mdpi": 1, "hdpi": 1.5 }
//! }
//! ```
//!
//! Every key is optional. A key present in the document replaces the
//! default value wholesale (`sizes` included), absent keys keep it.

use super::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Suffix that marks a command line argument as the config file.
pub const CONFIG_SUFFIX: &str = ".config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Size bucket whose scale is treated as 1.0.
    pub default_size: String,
    /// Output directory template with optional `{size}` and `{file}` tokens.
    pub output: String,
    pub files: Vec<String>,
    pub sizes: BTreeMap<String, f32>,
}

/// Partial document read from a config file.
#[derive(Debug, Deserialize)]
struct ConfigOverride {
    default_size: Option<String>,
    output: Option<String>,
    files: Option<Vec<String>>,
    sizes: Option<BTreeMap<String, f32>>,
}

impl Configuration {
    /// Stock Android density buckets, processing `files`.
    pub fn defaults(files: &[String]) -> Self {
        let sizes = [
            ("mdpi", 1.0),
            ("hdpi", 1.5),
            ("xhdpi", 2.0),
            ("xxhdpi", 3.0),
            ("xxxhdpi", 4.0),
        ]
        .into_iter()
        .map(|(name, scale)| (name.to_string(), scale))
        .collect();

        Self {
            default_size: "xxxhdpi".to_string(),
            output: Path::new("res").join("drawable").to_string_lossy().into_owned(),
            files: files.to_vec(),
            sizes,
        }
    }

    /// Builds the configuration for a run. A config file that cannot be
    /// read or parsed is reported and the defaults are kept.
    pub fn resolve(args: &[String], override_path: Option<&Path>) -> Self {
        let mut config = Self::defaults(args);

        if let Some(path) = override_path {
            match load_override(path) {
                Ok(overrides) => {
                    config.apply(overrides);
                    log::info!("Used config {}", path.display());
                }
                Err(e) => {
                    println!("Unable to parse config {}: {}", path.display(), e);
                }
            }
        }

        config
    }

    /// Names of size buckets mapped to a zero scale.
    pub fn zero_scale_sizes(&self) -> Vec<&str> {
        self.sizes
            .iter()
            .filter(|(_, scale)| **scale == 0.0)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn apply(&mut self, overrides: ConfigOverride) {
        if let Some(default_size) = overrides.default_size {
            self.default_size = default_size;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(files) = overrides.files {
            self.files = files;
        }
        if let Some(sizes) = overrides.sizes {
            self.sizes = sizes;
        }
    }
}

fn load_override(path: &Path) -> Result<ConfigOverride> {
    let bytes = std::fs::read(path)?;
    let overrides = serde_json::from_slice(&bytes)?;
    Ok(overrides)
}

/// Returns the first argument that names a config file.
pub fn find_config_path(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| arg.ends_with(CONFIG_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_use_android_buckets() {
        let config = Configuration::defaults(&args(&["a.png", "b.jpg"]));

        assert_eq!(config.default_size, "xxxhdpi");
        assert_eq!(config.output, Path::new("res").join("drawable").to_string_lossy());
        assert_eq!(config.files, args(&["a.png", "b.jpg"]));
        assert_eq!(config.sizes.len(), 5);
        assert_eq!(config.sizes["mdpi"], 1.0);
        assert_eq!(config.sizes["hdpi"], 1.5);
        assert_eq!(config.sizes["xxxhdpi"], 4.0);
    }

    #[test]
    fn finds_first_config_argument() {
        let list = args(&["a.png", "one.config", "two.config"]);
        assert_eq!(find_config_path(&list), Some("one.config"));
        assert_eq!(find_config_path(&args(&["a.png", "config.json"])), None);
    }

    #[test]
    fn resolve_without_override_returns_defaults() {
        let list = args(&["a.png"]);
        assert_eq!(Configuration::resolve(&list, None), Configuration::defaults(&list));
    }

    #[test]
    fn full_override_replaces_every_field() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.config");
        fs::write(
            &path,
            r#"{
                "default_size": "mdpi",
                "output": "out/{size}",
                "files": ["photo.png"],
                "sizes": {"mdpi": 1, "hdpi": 1.5}
            }"#,
        )
        .unwrap();

        let config = Configuration::resolve(&args(&["app.config"]), Some(path.as_path()));

        assert_eq!(config.default_size, "mdpi");
        assert_eq!(config.output, "out/{size}");
        assert_eq!(config.files, args(&["photo.png"]));
        assert_eq!(config.sizes.len(), 2);
        assert_eq!(config.sizes["hdpi"], 1.5);
    }

    #[test]
    fn partial_override_keeps_missing_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.config");
        fs::write(&path, r#"{"output": "build/{size}", "unknown": true}"#).unwrap();

        let list = args(&["a.png", "app.config"]);
        let config = Configuration::resolve(&list, Some(path.as_path()));

        assert_eq!(config.output, "build/{size}");
        assert_eq!(config.default_size, "xxxhdpi");
        assert_eq!(config.files, list);
        assert_eq!(config.sizes.len(), 5);
    }

    #[test]
    fn invalid_json_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.config");
        fs::write(&path, "{ not json").unwrap();

        let list = args(&["a.png"]);
        assert_eq!(
            Configuration::resolve(&list, Some(path.as_path())),
            Configuration::defaults(&list)
        );
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.config");

        let list = args(&["a.png"]);
        assert_eq!(
            Configuration::resolve(&list, Some(path.as_path())),
            Configuration::defaults(&list)
        );
    }

    #[test]
    fn lists_zero_scale_sizes() {
        let mut config = Configuration::defaults(&[]);
        assert!(config.zero_scale_sizes().is_empty());

        config.sizes.insert("ldpi".to_string(), 0.0);
        config.sizes.insert("tvdpi".to_string(), 0.0);
        assert_eq!(config.zero_scale_sizes(), vec!["ldpi", "tvdpi"]);
    }
}
