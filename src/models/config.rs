use crate::models::{CanvasSpec, Viewport};
use region_expr::CompressMode;
use serde::Deserialize;
use std::num::NonZeroU8;
use std::path::Path;
use std::str::FromStr;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Size the source image is fitted into
    #[serde(default)]
    pub size: CanvasSpec,

    /// Color quantization step; unset or 0 disables quantization
    #[serde(default)]
    pub precision: Option<u8>,

    /// Rectangle compression strategy
    #[serde(default)]
    pub mode: Compression,

    /// Visible region of the saved graph
    #[serde(default)]
    pub viewport: Viewport,

    /// Calculator service settings
    #[serde(default)]
    pub publish: PublishConfig,
}

/// Compression strategy as written in config files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Overlapping greedy scan, output-compatible with older documents
    #[default]
    Legacy,
    /// Non-overlapping, pixel-perfect cover
    Exact,
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Compression::Legacy),
            "exact" => Ok(Compression::Exact),
            other => Err(format!("unknown compression '{other}' (expected legacy or exact)")),
        }
    }
}

impl From<Compression> for CompressMode {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Legacy => CompressMode::Legacy,
            Compression::Exact => CompressMode::Exact,
        }
    }
}

/// Calculator service settings
#[derive(Debug, Deserialize, Clone)]
pub struct PublishConfig {
    /// Save endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Base URL that saved graph hashes are appended to
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,

    /// Interface language sent with the save request
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://www.desmos.com/api/v1/calculator/save".to_string()
}

fn default_graph_base_url() -> String {
    "https://www.desmos.com/calculator".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            graph_base_url: default_graph_base_url(),
            lang: default_lang(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        width = config.size.width,
                        height = config.size.height,
                        mode = ?config.mode,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Quantization step, `None` when disabled
    pub fn precision(&self) -> Option<NonZeroU8> {
        self.precision.and_then(NonZeroU8::new)
    }

    pub fn compress_mode(&self) -> CompressMode {
        self.mode.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.size, CanvasSpec::DEFAULT);
        assert_eq!(config.precision(), None);
        assert_eq!(config.compress_mode(), CompressMode::Legacy);
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(
            config.publish.endpoint,
            "https://www.desmos.com/api/v1/calculator/save"
        );
        assert_eq!(config.publish.lang, "en");
        assert_eq!(config.publish.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
size:
  width: 64
  height: 48
precision: 8
mode: exact
viewport:
  xmin: 0
  ymin: 0
  xmax: 10
  ymax: 10
publish:
  endpoint: http://localhost:9999/save
  lang: de
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.size.width, 64);
        assert_eq!(config.size.height, 48);
        assert_eq!(config.precision(), NonZeroU8::new(8));
        assert_eq!(config.compress_mode(), CompressMode::Exact);
        assert_eq!(config.viewport.xmax, 10.0);
        assert_eq!(config.publish.endpoint, "http://localhost:9999/save");
        assert_eq!(config.publish.lang, "de");
        // Unset publish fields keep their defaults
        assert_eq!(config.publish.timeout_secs, 30);
        assert_eq!(config.publish.graph_base_url, "https://www.desmos.com/calculator");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("precision: 4\n").unwrap();
        assert_eq!(config.size, CanvasSpec::DEFAULT);
        assert_eq!(config.mode, Compression::Legacy);
        assert_eq!(config.precision(), NonZeroU8::new(4));
    }

    #[test]
    fn test_zero_precision_disables_quantization() {
        let config: AppConfig = serde_yaml::from_str("precision: 0\n").unwrap();
        assert_eq!(config.precision(), None);
    }

    #[test]
    fn test_compression_from_str() {
        assert_eq!("legacy".parse::<Compression>(), Ok(Compression::Legacy));
        assert_eq!("EXACT".parse::<Compression>(), Ok(Compression::Exact));
        assert!("skyline".parse::<Compression>().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/pixgraph.yaml")));
        assert_eq!(config.size, CanvasSpec::DEFAULT);
    }

    #[test]
    fn test_load_invalid_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size: [not, a, map").unwrap();
        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.mode, Compression::Legacy);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: exact").unwrap();
        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.mode, Compression::Exact);
    }
}
