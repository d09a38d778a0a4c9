use dailyboard_core::{TrainTarget, WeatherTarget};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Runtime settings, environment-driven with local defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub out_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db_path = env::var("DAILYBOARD_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/board.db"));
        let out_dir = env::var("DAILYBOARD_OUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self { db_path, out_dir }
    }
}

/// Scrape targets as declared in the TOML target file.
#[derive(Debug, Default, Deserialize)]
pub struct TargetsFile {
    #[serde(default)]
    pub weather: Vec<WeatherTarget>,
    #[serde(default)]
    pub train: Vec<TrainTarget>,
    #[serde(default)]
    pub english: EnglishSources,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnglishSources {
    #[serde(default)]
    pub urls: Vec<String>,
}

pub fn load_targets(path: &Path) -> anyhow::Result<TargetsFile> {
    let raw = std::fs::read_to_string(path)?;
    let targets: TargetsFile = toml::from_str(&raw)?;
    Ok(targets)
}
