use crate::common::error::Result;
use crate::fetch::PageDocument;
use dailyboard_core::TimeSlotForecast;

/// Raw text regions a forecast page must provide. `not_current` holds the
/// raw hour labels the page marks as past.
#[derive(Debug, Clone)]
pub struct WeatherRegions {
    pub hours: String,
    pub not_current: Vec<String>,
    pub conditions: String,
    pub temperatures: String,
}

/// Gathers the four forecast regions from a fetched page. Any missing
/// element is a region failure; the caller decides the aggregation policy.
pub fn weather_regions(doc: &PageDocument) -> Result<WeatherRegions> {
    Ok(WeatherRegions {
        hours: doc.region_text(".hour")?,
        not_current: doc.nested_texts(".hour", ".past")?,
        conditions: doc.region_text(".weather")?,
        temperatures: doc.region_text(".temperature")?,
    })
}

/// Builds the ordered slot sequence for one place.
///
/// The three whitespace-delimited sequences are consumed pairwise by
/// position and truncate to the shortest. The first token of the condition
/// region is a column header, not data. Display time strips leading zeros
/// from the raw hour label and appends 時. The first hour absent from the
/// not-current set is the current slot; at most one slot is marked.
pub fn parse_forecast(regions: &WeatherRegions) -> Vec<TimeSlotForecast> {
    let hours = regions.hours.split_whitespace();
    let conditions = regions.conditions.split_whitespace().skip(1);
    let temperatures = regions.temperatures.split_whitespace();

    let mut slots = Vec::new();
    let mut current_seen = false;
    for ((hour, condition), temperature) in hours.zip(conditions).zip(temperatures) {
        let is_current = !current_seen && !regions.not_current.iter().any(|past| past == hour);
        if is_current {
            current_seen = true;
        }
        slots.push(TimeSlotForecast {
            display_time: format!("{}時", hour.trim_start_matches('0')),
            condition: condition.to_string(),
            temperature: temperature.to_string(),
            is_current,
        });
    }
    slots
}
