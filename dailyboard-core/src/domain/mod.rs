use serde::{Deserialize, Serialize};

/// A weather scrape target: one forecast page per place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherTarget {
    pub place: String,
    pub url: String,
}

/// A transit scrape target: one service-status page per route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainTarget {
    pub route: String,
    pub url: String,
}

/// One hourly entry of a place forecast, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotForecast {
    pub display_time: String,
    pub condition: String,
    pub temperature: String,
    pub is_current: bool,
}

impl TimeSlotForecast {
    pub fn icon(&self) -> ForecastIcon {
        ForecastIcon::classify(&self.condition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceForecast {
    pub place: String,
    pub slots: Vec<TimeSlotForecast>,
}

impl PlaceForecast {
    /// The slot marked current, if any hour qualified.
    pub fn current_slot(&self) -> Option<&TimeSlotForecast> {
        self.slots.iter().find(|slot| slot.is_current)
    }
}

/// Weather icon category, decided by keyword priority. A condition can
/// mention several keywords; the first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastIcon {
    Sun,
    Cloud,
    Rain,
    Snow,
    Unknown,
}

impl ForecastIcon {
    pub fn classify(condition: &str) -> Self {
        if condition.contains('晴') {
            ForecastIcon::Sun
        } else if condition.contains('曇') {
            ForecastIcon::Cloud
        } else if condition.contains('雨') {
            ForecastIcon::Rain
        } else if condition.contains('雪') || condition.contains("みぞれ") {
            ForecastIcon::Snow
        } else {
            ForecastIcon::Unknown
        }
    }

    pub fn asset(&self) -> &'static str {
        match self {
            ForecastIcon::Sun => "static/img/sun.png",
            ForecastIcon::Cloud => "static/img/cloud.png",
            ForecastIcon::Rain => "static/img/rain.png",
            ForecastIcon::Snow => "static/img/snow.png",
            ForecastIcon::Unknown => "static/img/unknown.png",
        }
    }
}

/// Operational state of a route, classified from the status heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    Normal,
    Delayed,
    Unknown,
}

impl ServiceState {
    pub fn classify(heading: &str) -> Self {
        match heading {
            "平常運転" => ServiceState::Normal,
            "列車遅延" => ServiceState::Delayed,
            _ => ServiceState::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceState::Normal => "static/img/circle.png",
            ServiceState::Delayed | ServiceState::Unknown => "static/img/alert.png",
        }
    }
}

/// Heading/comment pair parsed from a route's status block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub heading: String,
    pub comment: String,
    pub state: ServiceState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStatus {
    pub route: String,
    pub status: ServiceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPair {
    pub english: String,
    pub japanese: String,
}

/// Three-way outcome of one category collection. The two failure kinds stay
/// distinguishable all the way to the rendered page: `NotFound` means the
/// expected content was absent (or the registry was empty), `AccessFailure`
/// means the backing store could not be reached. Neither is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome<T> {
    Success(T),
    NotFound,
    AccessFailure,
}

impl<T> ScrapeOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success(_))
    }
}
