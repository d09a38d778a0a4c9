use crate::common::error::Result;
use askama::Template;
use dailyboard_core::{
    PlaceForecast, RouteStatus, ScrapeOutcome, TrainTarget, VocabularyPair, WeatherTarget,
};
use std::path::Path;
use tracing::info;

#[derive(Template)]
#[template(path = "weather.html")]
pub struct WeatherPage {
    pub outcome: ScrapeOutcome<Vec<PlaceForecast>>,
}

#[derive(Template)]
#[template(path = "train.html")]
pub struct TrainPage {
    pub outcome: ScrapeOutcome<Vec<RouteStatus>>,
}

#[derive(Template)]
#[template(path = "english.html")]
pub struct EnglishPage {
    pub outcome: ScrapeOutcome<Vec<VocabularyPair>>,
}

#[derive(Template)]
#[template(path = "debug.html")]
pub struct DebugPage {
    pub weather: ScrapeOutcome<Vec<WeatherTarget>>,
    pub train: ScrapeOutcome<Vec<TrainTarget>>,
    pub vocabulary: ScrapeOutcome<Vec<VocabularyPair>>,
    pub generated_at: String,
}

/// Renders and writes all four documents into `out_dir`.
pub fn write_site(
    out_dir: &Path,
    weather: &WeatherPage,
    train: &TrainPage,
    english: &EnglishPage,
    debug: &DebugPage,
) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;
    write_page(out_dir, "weather.html", &weather.render()?)?;
    write_page(out_dir, "train.html", &train.render()?)?;
    write_page(out_dir, "english.html", &english.render()?)?;
    write_page(out_dir, "debug.html", &debug.render()?)?;
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, html: &str) -> Result<()> {
    let path = out_dir.join(name);
    std::fs::write(&path, html)?;
    info!("write_page: {}", path.display());
    Ok(())
}
