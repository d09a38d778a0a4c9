use crate::config::{AppConfig, TargetsFile};
use crate::extract::{transit, vocabulary, weather};
use crate::fetch::{PageDocument, PageFetcher, PageSession};
use crate::render::{self, DebugPage, EnglishPage, TrainPage, WeatherPage};
use dailyboard_core::storage::{TrainTargets, VocabularyPairs, WeatherTargets};
use dailyboard_core::{
    PlaceForecast, RouteStatus, ScrapeOutcome, TrainTarget, VocabularyPair, WeatherTarget,
};
use tracing::{error, info, warn};

/// Rows of the english page, selected at random per run.
const VOCABULARY_SAMPLE_SIZE: usize = 3;

/// Scrapes every registered place. One fetch or region failure for any place
/// aborts the whole collection; a partial forecast is never returned.
pub async fn collect_weather(
    fetcher: &dyn PageFetcher,
    targets: &[WeatherTarget],
) -> ScrapeOutcome<Vec<PlaceForecast>> {
    let mut forecasts = Vec::with_capacity(targets.len());
    for target in targets {
        let body = match fetcher.fetch_text(&target.url).await {
            Ok(body) => body,
            Err(err) => {
                error!("collect_weather: fetch failed for {}: {}", target.place, err);
                return ScrapeOutcome::NotFound;
            }
        };
        let doc = PageDocument::parse(&body);
        let regions = match weather::weather_regions(&doc) {
            Ok(regions) => regions,
            Err(err) => {
                error!("collect_weather: {}: {}", target.place, err);
                return ScrapeOutcome::NotFound;
            }
        };
        forecasts.push(PlaceForecast {
            place: target.place.clone(),
            slots: weather::parse_forecast(&regions),
        });
    }
    ScrapeOutcome::Success(forecasts)
}

/// Scrapes every registered route, all-or-nothing like the weather pass.
pub async fn collect_transit(
    fetcher: &dyn PageFetcher,
    targets: &[TrainTarget],
) -> ScrapeOutcome<Vec<RouteStatus>> {
    let mut statuses = Vec::with_capacity(targets.len());
    for target in targets {
        let body = match fetcher.fetch_text(&target.url).await {
            Ok(body) => body,
            Err(err) => {
                error!("collect_transit: fetch failed for {}: {}", target.route, err);
                return ScrapeOutcome::NotFound;
            }
        };
        let doc = PageDocument::parse(&body);
        let raw = match doc.region_text("#mdServiceStatus") {
            Ok(raw) => raw,
            Err(err) => {
                error!("collect_transit: {}: {}", target.route, err);
                return ScrapeOutcome::NotFound;
            }
        };
        let status = match transit::parse_service_status(&raw) {
            Ok(status) => status,
            Err(err) => {
                error!("collect_transit: {}: {}", target.route, err);
                return ScrapeOutcome::NotFound;
            }
        };
        statuses.push(RouteStatus {
            route: target.route.clone(),
            status,
        });
    }
    ScrapeOutcome::Success(statuses)
}

/// Scrapes the vocabulary source pages. Unlike weather and transit, a fetch
/// failure for one URL only drops that URL's contribution; a page that
/// fetched but has no word regions still fails the whole collection.
pub async fn collect_vocabulary(
    fetcher: &dyn PageFetcher,
    urls: &[String],
) -> ScrapeOutcome<Vec<VocabularyPair>> {
    let mut english = Vec::new();
    let mut japanese = Vec::new();
    for url in urls {
        let body = match fetcher.fetch_text(url).await {
            Ok(body) => body,
            Err(err) => {
                warn!("collect_vocabulary: skipping {}: {}", url, err);
                continue;
            }
        };
        let doc = PageDocument::parse(&body);
        match vocabulary::word_lists(&doc) {
            Ok((eng, jap)) => {
                english.extend(eng);
                japanese.extend(jap);
            }
            Err(err) => {
                error!("collect_vocabulary: {}: {}", url, err);
                return ScrapeOutcome::NotFound;
            }
        }
    }
    ScrapeOutcome::Success(vocabulary::zip_pairs(english, japanese))
}

fn weather_registry(config: &AppConfig) -> ScrapeOutcome<Vec<WeatherTarget>> {
    let repo = match WeatherTargets::open(&config.db_path) {
        Ok(repo) => repo,
        Err(err) => {
            error!("weather_registry: {}", err);
            return ScrapeOutcome::AccessFailure;
        }
    };
    match repo.select_all() {
        Ok(targets) if targets.is_empty() => {
            error!("weather_registry: no targets registered");
            ScrapeOutcome::NotFound
        }
        Ok(targets) => ScrapeOutcome::Success(targets),
        Err(err) => {
            error!("weather_registry: {}", err);
            ScrapeOutcome::AccessFailure
        }
    }
}

fn train_registry(config: &AppConfig) -> ScrapeOutcome<Vec<TrainTarget>> {
    let repo = match TrainTargets::open(&config.db_path) {
        Ok(repo) => repo,
        Err(err) => {
            error!("train_registry: {}", err);
            return ScrapeOutcome::AccessFailure;
        }
    };
    match repo.select_all() {
        Ok(targets) if targets.is_empty() => {
            error!("train_registry: no targets registered");
            ScrapeOutcome::NotFound
        }
        Ok(targets) => ScrapeOutcome::Success(targets),
        Err(err) => {
            error!("train_registry: {}", err);
            ScrapeOutcome::AccessFailure
        }
    }
}

/// Registry lookup plus collection; the two failure kinds stay apart.
pub async fn weather_outcome(
    config: &AppConfig,
    fetcher: &dyn PageFetcher,
) -> ScrapeOutcome<Vec<PlaceForecast>> {
    match weather_registry(config) {
        ScrapeOutcome::Success(targets) => collect_weather(fetcher, &targets).await,
        ScrapeOutcome::NotFound => ScrapeOutcome::NotFound,
        ScrapeOutcome::AccessFailure => ScrapeOutcome::AccessFailure,
    }
}

pub async fn transit_outcome(
    config: &AppConfig,
    fetcher: &dyn PageFetcher,
) -> ScrapeOutcome<Vec<RouteStatus>> {
    match train_registry(config) {
        ScrapeOutcome::Success(targets) => collect_transit(fetcher, &targets).await,
        ScrapeOutcome::NotFound => ScrapeOutcome::NotFound,
        ScrapeOutcome::AccessFailure => ScrapeOutcome::AccessFailure,
    }
}

/// Draws the english page rows from the persisted pairs. An empty collection
/// is the not-found case, not an empty page.
pub fn vocabulary_sample(config: &AppConfig) -> ScrapeOutcome<Vec<VocabularyPair>> {
    let repo = match VocabularyPairs::open(&config.db_path) {
        Ok(repo) => repo,
        Err(err) => {
            error!("vocabulary_sample: {}", err);
            return ScrapeOutcome::AccessFailure;
        }
    };
    match repo.select_random_sample(VOCABULARY_SAMPLE_SIZE) {
        Ok(pairs) if pairs.is_empty() => {
            error!("vocabulary_sample: collection is empty");
            ScrapeOutcome::NotFound
        }
        Ok(pairs) => ScrapeOutcome::Success(pairs),
        Err(err) => {
            error!("vocabulary_sample: {}", err);
            ScrapeOutcome::AccessFailure
        }
    }
}

/// Everything currently persisted, one outcome per collection. The debug
/// page shows empty tables as-is instead of a placeholder.
pub fn debug_rows(
    config: &AppConfig,
) -> (
    ScrapeOutcome<Vec<WeatherTarget>>,
    ScrapeOutcome<Vec<TrainTarget>>,
    ScrapeOutcome<Vec<VocabularyPair>>,
) {
    let weather = match WeatherTargets::open(&config.db_path).and_then(|r| r.select_all()) {
        Ok(rows) => ScrapeOutcome::Success(rows),
        Err(err) => {
            error!("debug_rows: weather: {}", err);
            ScrapeOutcome::AccessFailure
        }
    };
    let train = match TrainTargets::open(&config.db_path).and_then(|r| r.select_all()) {
        Ok(rows) => ScrapeOutcome::Success(rows),
        Err(err) => {
            error!("debug_rows: train: {}", err);
            ScrapeOutcome::AccessFailure
        }
    };
    let vocabulary = match VocabularyPairs::open(&config.db_path).and_then(|r| r.select_all()) {
        Ok(rows) => ScrapeOutcome::Success(rows),
        Err(err) => {
            error!("debug_rows: vocabulary: {}", err);
            ScrapeOutcome::AccessFailure
        }
    };
    (weather, train, vocabulary)
}

/// One full run: scrape both live categories over a single page session,
/// sample the vocabulary store, and write all four documents. Category
/// failures degrade to placeholder markup; only I/O against the output
/// directory fails the run.
pub async fn run_all(config: &AppConfig) -> anyhow::Result<()> {
    let session = PageSession::new();
    let weather = weather_outcome(config, &session).await;
    let train = transit_outcome(config, &session).await;
    session.close();

    let english = vocabulary_sample(config);
    let (debug_weather, debug_train, debug_vocabulary) = debug_rows(config);
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    render::write_site(
        &config.out_dir,
        &WeatherPage { outcome: weather },
        &TrainPage { outcome: train },
        &EnglishPage { outcome: english },
        &DebugPage {
            weather: debug_weather,
            train: debug_train,
            vocabulary: debug_vocabulary,
            generated_at,
        },
    )?;
    info!("run_all: wrote site to {}", config.out_dir.display());
    Ok(())
}

/// Registers weather and train targets, one insert transaction per
/// collection.
pub fn seed_targets(config: &AppConfig, targets: &TargetsFile) -> anyhow::Result<()> {
    let mut weather = WeatherTargets::open(&config.db_path)?;
    let registered = weather.insert_all(&targets.weather)?;
    info!("seed_targets: registered {} weather targets", registered);

    let mut train = TrainTargets::open(&config.db_path)?;
    let registered = train.insert_all(&targets.train)?;
    info!("seed_targets: registered {} train targets", registered);
    Ok(())
}

pub async fn ingest_vocabulary(config: &AppConfig, urls: &[String]) -> anyhow::Result<()> {
    let session = PageSession::new();
    let outcome = collect_vocabulary(&session, urls).await;
    session.close();

    match outcome {
        ScrapeOutcome::Success(pairs) => {
            let mut repo = VocabularyPairs::open(&config.db_path)?;
            let stored = repo.insert_all(&pairs)?;
            info!("ingest_vocabulary: stored {} pairs", stored);
            Ok(())
        }
        ScrapeOutcome::NotFound => anyhow::bail!("vocabulary collection failed"),
        ScrapeOutcome::AccessFailure => anyhow::bail!("vocabulary store unavailable"),
    }
}

pub fn remove_weather_target(config: &AppConfig, place: &str) -> anyhow::Result<()> {
    let repo = WeatherTargets::open(&config.db_path)?;
    let removed = repo.delete_by_place(place)?;
    info!("remove_weather_target: removed {} rows for {}", removed, place);
    Ok(())
}

pub fn remove_train_target(config: &AppConfig, route: &str) -> anyhow::Result<()> {
    let repo = TrainTargets::open(&config.db_path)?;
    let removed = repo.delete_by_route(route)?;
    info!("remove_train_target: removed {} rows for {}", removed, route);
    Ok(())
}
