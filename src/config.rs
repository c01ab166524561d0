use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use crate::core::normalize::{ContinuousAttribute, NormalizationTable};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Scoring tables read once at start-up
///
/// `weights` maps category name → factor name → weight. Categories left out
/// keep their built-in scorer.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_threshold: f64,
    #[serde(default = "default_placeholder_score")]
    pub placeholder_score: f64,
    #[serde(default = "default_weights")]
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub normalization: NormalizationSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            recommendation_threshold: default_recommendation_threshold(),
            placeholder_score: default_placeholder_score(),
            weights: default_weights(),
            normalization: NormalizationSettings::default(),
        }
    }
}

fn default_recommendation_threshold() -> f64 { 0.7 }
fn default_placeholder_score() -> f64 { 0.5 }

fn default_weights() -> BTreeMap<String, BTreeMap<String, f64>> {
    let table = |pairs: &[(&str, f64)]| {
        pairs
            .iter()
            .map(|(factor, weight)| (factor.to_string(), *weight))
            .collect::<BTreeMap<_, _>>()
    };

    BTreeMap::from([
        (
            "cardiovascular".to_string(),
            table(&[
                ("bmi", 0.2),
                ("blood_pressure", 0.3),
                ("cholesterol", 0.2),
                ("smoking", 0.2),
                ("exercise", 0.1),
            ]),
        ),
        (
            "diabetes".to_string(),
            table(&[
                ("bmi", 0.3),
                ("blood_sugar", 0.3),
                ("age", 0.2),
                ("exercise", 0.2),
            ]),
        ),
    ])
}

/// Default and reference band for one continuous attribute
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BandSettings {
    pub default: f64,
    pub low: f64,
    pub high: f64,
}

impl From<ContinuousAttribute> for BandSettings {
    fn from(attr: ContinuousAttribute) -> Self {
        Self {
            default: attr.default,
            low: attr.band.low,
            high: attr.band.high,
        }
    }
}

impl From<BandSettings> for ContinuousAttribute {
    fn from(band: BandSettings) -> Self {
        ContinuousAttribute::new(band.default, band.low, band.high)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizationSettings {
    pub bmi: BandSettings,
    pub systolic_bp: BandSettings,
    pub cholesterol: BandSettings,
    pub blood_sugar: BandSettings,
    pub age: BandSettings,
    pub diastolic_bp_default: f64,
}

impl Default for NormalizationSettings {
    fn default() -> Self {
        let table = NormalizationTable::default();
        Self {
            bmi: table.bmi.into(),
            systolic_bp: table.systolic_bp.into(),
            cholesterol: table.cholesterol.into(),
            blood_sugar: table.blood_sugar.into(),
            age: table.age.into(),
            diastolic_bp_default: table.diastolic_bp_default,
        }
    }
}

impl From<&NormalizationSettings> for NormalizationTable {
    fn from(settings: &NormalizationSettings) -> Self {
        NormalizationTable {
            bmi: settings.bmi.into(),
            systolic_bp: settings.systolic_bp.into(),
            cholesterol: settings.cholesterol.into(),
            blood_sugar: settings.blood_sugar.into(),
            age: settings.age.into(),
            diastolic_bp_default: settings.diastolic_bp_default,
            ..NormalizationTable::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RISK__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RISK__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("RISK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
